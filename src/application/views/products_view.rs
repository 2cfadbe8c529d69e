use super::{LoadState, Loader};
use crate::billing::domain::Product;
use crate::ports::outbound::InventoryApi;
use std::sync::Arc;

/// Routed view for `/products`
pub struct ProductsView<I: InventoryApi> {
    api: Arc<I>,
    products: Loader<Vec<Product>>,
}

impl<I: InventoryApi + 'static> ProductsView<I> {
    pub fn new(api: Arc<I>) -> Self {
        Self {
            api,
            products: Loader::new("products"),
        }
    }

    pub fn activate(&mut self) {
        let api = Arc::clone(&self.api);
        self.products
            .start(Box::pin(async move { api.get_products().await }));
    }

    pub fn deactivate(&mut self) {
        self.products.cancel();
    }

    pub fn products(&self) -> Option<Vec<Product>> {
        self.products.data()
    }

    pub fn state(&self) -> LoadState<Vec<Product>> {
        self.products.state()
    }

    pub async fn settled(&mut self) {
        self.products.settled().await;
    }
}
