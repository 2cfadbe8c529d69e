use super::mock_response::wait_for;
use super::MockResponse;
use async_trait::async_trait;
use billing_desk::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Mock CustomerApi that counts calls and can be held open
pub struct MockCustomerApi {
    customers: MockResponse<Vec<Customer>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockCustomerApi {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self::with_response(MockResponse::Data(customers))
    }

    pub fn with_response(customers: MockResponse<Vec<Customer>>) -> Self {
        Self {
            customers,
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Every call waits for `gate` to be notified before answering
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustomerApi for MockCustomerApi {
    async fn get_customers(&self) -> std::result::Result<Vec<Customer>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        wait_for(&self.gate).await;
        self.customers.resolve("mock://api/customers")
    }

    async fn get_customer(&self, id: CustomerId) -> std::result::Result<Customer, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        wait_for(&self.gate).await;
        let url = format!("mock://api/customers/{}", id);
        let customers = self.customers.resolve(&url)?;
        customers
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(ApiError::Status {
                url,
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}
