use super::{LoadState, Loader};
use crate::billing::domain::Customer;
use crate::ports::outbound::{CustomerApi, Navigator};
use std::sync::Arc;

/// Routed view for `/customers`
///
/// Loads the customer list on activation and offers navigation to a
/// customer's bills.
pub struct CustomersView<C: CustomerApi> {
    api: Arc<C>,
    navigator: Arc<dyn Navigator>,
    customers: Loader<Vec<Customer>>,
}

impl<C: CustomerApi + 'static> CustomersView<C> {
    pub fn new(api: Arc<C>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            navigator,
            customers: Loader::new("customers"),
        }
    }

    /// Starts the single customer-list request of this activation
    pub fn activate(&mut self) {
        let api = Arc::clone(&self.api);
        self.customers
            .start(Box::pin(async move { api.get_customers().await }));
    }

    pub fn deactivate(&mut self) {
        self.customers.cancel();
    }

    /// Navigates to the bills of the selected customer
    pub fn get_orders(&self, customer: &Customer) {
        self.navigator
            .navigate_by_url(&format!("/bills/{}", customer.id));
    }

    pub fn customers(&self) -> Option<Vec<Customer>> {
        self.customers.data()
    }

    pub fn state(&self) -> LoadState<Vec<Customer>> {
        self.customers.state()
    }

    pub async fn settled(&mut self) {
        self.customers.settled().await;
    }
}
