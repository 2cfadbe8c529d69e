use super::mock_response::wait_for;
use super::MockResponse;
use async_trait::async_trait;
use billing_desk::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Mock InventoryApi that counts calls and can be held open
pub struct MockInventoryApi {
    products: MockResponse<Vec<Product>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockInventoryApi {
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_response(MockResponse::Data(products))
    }

    pub fn with_response(products: MockResponse<Vec<Product>>) -> Self {
        Self {
            products,
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InventoryApi for MockInventoryApi {
    async fn get_products(&self) -> std::result::Result<Vec<Product>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        wait_for(&self.gate).await;
        self.products.resolve("mock://api/products")
    }

    async fn get_product(&self, id: &str) -> std::result::Result<Product, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        wait_for(&self.gate).await;
        let url = format!("mock://api/products/{}", id);
        let products = self.products.resolve(&url)?;
        products
            .into_iter()
            .find(|p| p.id.as_deref() == Some(id))
            .ok_or(ApiError::Status {
                url,
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}
