use super::ApiGateway;
use crate::billing::domain::{Bill, BillId, CustomerId};
use crate::ports::outbound::BillingApi;
use crate::shared::error::ApiError;
use async_trait::async_trait;

/// BillingService adapter for the billing REST API
#[derive(Clone, Debug)]
pub struct BillingService {
    gateway: ApiGateway,
}

impl BillingService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    fn full_bill_path(id: BillId) -> String {
        format!("/api/bills/fullBill/{}", id)
    }

    fn by_customer_path(customer_id: CustomerId) -> String {
        format!("/api/bills/byCustomer/{}", customer_id)
    }
}

#[async_trait]
impl BillingApi for BillingService {
    async fn get_bill(&self, id: BillId) -> Result<Bill, ApiError> {
        self.gateway.get_json(&Self::full_bill_path(id)).await
    }

    async fn get_bills_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Bill>, ApiError> {
        self.gateway
            .get_json(&Self::by_customer_path(customer_id))
            .await
    }
}
