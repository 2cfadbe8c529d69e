use crate::billing::domain::{Bill, BillId, CustomerId};
use crate::shared::error::ApiError;
use async_trait::async_trait;

/// BillingApi port for reading bills from the billing service
#[async_trait]
pub trait BillingApi: Send + Sync {
    /// Fetches one bill with its customer and product names filled in
    /// (`GET /api/bills/fullBill/{id}`)
    async fn get_bill(&self, id: BillId) -> Result<Bill, ApiError>;

    /// Lists the bills of one customer (`GET /api/bills/byCustomer/{customerId}`)
    async fn get_bills_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Bill>, ApiError>;
}
