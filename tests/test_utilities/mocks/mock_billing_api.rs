use super::mock_response::wait_for;
use super::MockResponse;
use async_trait::async_trait;
use billing_desk::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock BillingApi serving bills grouped by customer
///
/// Records the customer ids it was asked for, in order.
pub struct MockBillingApi {
    bills: HashMap<CustomerId, Vec<Bill>>,
    failure: Option<MockResponse<()>>,
    requested: Mutex<Vec<CustomerId>>,
    gate: Option<Arc<Notify>>,
}

impl MockBillingApi {
    pub fn new() -> Self {
        Self {
            bills: HashMap::new(),
            failure: None,
            requested: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn with_bills(mut self, customer_id: u64, bills: Vec<Bill>) -> Self {
        self.bills.insert(CustomerId::new(customer_id), bills);
        self
    }

    /// Every call fails the way `failure` describes
    pub fn failing(mut self, failure: MockResponse<()>) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn requested_customers(&self) -> Vec<CustomerId> {
        self.requested.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    fn check_failure(&self, url: &str) -> std::result::Result<(), ApiError> {
        match &self.failure {
            Some(failure) => failure.resolve(url),
            None => Ok(()),
        }
    }
}

impl Default for MockBillingApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillingApi for MockBillingApi {
    async fn get_bill(&self, id: BillId) -> std::result::Result<Bill, ApiError> {
        wait_for(&self.gate).await;
        let url = format!("mock://api/bills/fullBill/{}", id);
        self.check_failure(&url)?;
        self.bills
            .values()
            .flatten()
            .find(|bill| bill.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                url,
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }

    async fn get_bills_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> std::result::Result<Vec<Bill>, ApiError> {
        self.requested.lock().unwrap().push(customer_id);
        wait_for(&self.gate).await;
        let url = format!("mock://api/bills/byCustomer/{}", customer_id);
        self.check_failure(&url)?;
        Ok(self.bills.get(&customer_id).cloned().unwrap_or_default())
    }
}
