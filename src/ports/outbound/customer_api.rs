use crate::billing::domain::{Customer, CustomerId};
use crate::shared::error::ApiError;
use async_trait::async_trait;

/// CustomerApi port for reading customers from the customer service
///
/// Every method issues exactly one request when the returned future is
/// awaited, and none before. Implementations hold no mutable state and
/// must be `Send + Sync` so a single instance can be shared by views.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// Lists all customers (`GET /api/customers`)
    ///
    /// # Errors
    /// Returns an error if the request fails, the service answers with a
    /// non-2xx status, or the body is not a JSON array of customers.
    async fn get_customers(&self) -> Result<Vec<Customer>, ApiError>;

    /// Fetches one customer (`GET /api/customers/{id}`)
    async fn get_customer(&self, id: CustomerId) -> Result<Customer, ApiError>;
}
