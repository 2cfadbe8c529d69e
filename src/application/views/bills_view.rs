use super::{LoadFailure, LoadState, Loader};
use crate::billing::domain::{Bill, CustomerId};
use crate::ports::outbound::BillingApi;
use std::sync::Arc;

/// Routed view for `/bills/:customerId`
///
/// The route parameter is validated before any request is made: a missing,
/// non-numeric or zero id fails the activation with `InvalidParameter`.
pub struct BillsView<B: BillingApi> {
    api: Arc<B>,
    customer_id: Option<CustomerId>,
    bills: Loader<Vec<Bill>>,
}

impl<B: BillingApi + 'static> BillsView<B> {
    pub fn new(api: Arc<B>) -> Self {
        Self {
            api,
            customer_id: None,
            bills: Loader::new("bills"),
        }
    }

    /// Resolves `customerId` from the raw route parameter, then loads that
    /// customer's bills
    pub fn activate(&mut self, customer_id_param: Option<&str>) {
        let customer_id = match CustomerId::parse(customer_id_param.unwrap_or_default()) {
            Ok(id) => id,
            Err(e) => {
                self.customer_id = None;
                self.bills.fail(LoadFailure::invalid_parameter(e.to_string()));
                return;
            }
        };

        self.customer_id = Some(customer_id);
        let api = Arc::clone(&self.api);
        self.bills.start(Box::pin(async move {
            api.get_bills_by_customer(customer_id).await
        }));
    }

    pub fn deactivate(&mut self) {
        self.bills.cancel();
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn bills(&self) -> Option<Vec<Bill>> {
        self.bills.data()
    }

    pub fn state(&self) -> LoadState<Vec<Bill>> {
        self.bills.state()
    }

    pub async fn settled(&mut self) {
        self.bills.settled().await;
    }
}
