use super::ApiGateway;
use crate::billing::domain::{Customer, CustomerId};
use crate::ports::outbound::CustomerApi;
use crate::shared::error::ApiError;
use async_trait::async_trait;

/// CustomerService adapter for the customer REST API
///
/// Implements the CustomerApi port on top of a shared `ApiGateway`.
#[derive(Clone, Debug)]
pub struct CustomerService {
    gateway: ApiGateway,
}

impl CustomerService {
    const CUSTOMERS_PATH: &'static str = "/api/customers";

    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    fn customer_path(id: CustomerId) -> String {
        format!("{}/{}", Self::CUSTOMERS_PATH, id)
    }
}

#[async_trait]
impl CustomerApi for CustomerService {
    async fn get_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.gateway.get_json(Self::CUSTOMERS_PATH).await
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Customer, ApiError> {
        self.gateway.get_json(&Self::customer_path(id)).await
    }
}
