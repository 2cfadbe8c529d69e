use crate::billing::domain::Product;
use crate::shared::error::ApiError;
use async_trait::async_trait;

/// InventoryApi port for reading products from the inventory service
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Lists all products (`GET /api/products`)
    ///
    /// # Errors
    /// Returns an error if the request fails, the service answers with a
    /// non-2xx status, or the body is not a JSON array of products.
    async fn get_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Fetches one product by its string id (`GET /api/products/{id}`)
    ///
    /// # Errors
    /// Besides the transport and decode errors of `get_products`, returns
    /// `ApiError::InvalidIdentifier` without issuing a request when the id
    /// is not safe to place in a URL path.
    async fn get_product(&self, id: &str) -> Result<Product, ApiError>;
}
