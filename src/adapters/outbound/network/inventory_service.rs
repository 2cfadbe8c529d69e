use super::ApiGateway;
use crate::billing::domain::Product;
use crate::ports::outbound::InventoryApi;
use crate::shared::error::ApiError;
use async_trait::async_trait;

/// InventoryService adapter for the product REST API
#[derive(Clone, Debug)]
pub struct InventoryService {
    gateway: ApiGateway,
}

impl InventoryService {
    const PRODUCTS_PATH: &'static str = "/api/products";

    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Validates a product id before it is placed in a URL path
    fn validate_product_id(id: &str) -> Result<(), ApiError> {
        let reject = |reason: &str| ApiError::InvalidIdentifier {
            value: id.to_string(),
            reason: reason.to_string(),
        };

        if id.trim().is_empty() {
            return Err(reject("product id is empty"));
        }

        // Security: Prevent path traversal into other API resources
        if id.contains('/') || id.contains('\\') {
            return Err(reject("contains path separators"));
        }

        if id.contains("..") {
            return Err(reject("contains '..'"));
        }

        Ok(())
    }

    fn product_path(id: &str) -> Result<String, ApiError> {
        Self::validate_product_id(id)?;
        Ok(format!(
            "{}/{}",
            Self::PRODUCTS_PATH,
            urlencoding::encode(id)
        ))
    }
}

#[async_trait]
impl InventoryApi for InventoryService {
    async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        self.gateway.get_json(Self::PRODUCTS_PATH).await
    }

    async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let path = Self::product_path(id)?;
        self.gateway.get_json(&path).await
    }
}
