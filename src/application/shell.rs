use crate::application::dto::{ViewContent, ViewSnapshot};
use crate::application::routing::{ChannelNavigator, Route, RouteTable};
use crate::application::views::{BillsView, CustomersView, LoadState, ProductsView};
use crate::billing::domain::BillId;
use crate::ports::outbound::{BillingApi, CustomerApi, InventoryApi, Navigator};
use crate::shared::error::RouteError;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// The view currently attached to the shell
pub enum ActiveView<C: CustomerApi, I: InventoryApi, B: BillingApi> {
    Customers(CustomersView<C>),
    Products(ProductsView<I>),
    Bills(BillsView<B>),
}

/// AppShell - the routing outlet
///
/// Owns one instance of each API wrapper (passed in explicitly) and at most
/// one active view. Navigating deactivates the current view, which cancels
/// its in-flight load, before the next view is activated.
///
/// # Type Parameters
/// * `C` - CustomerApi implementation
/// * `I` - InventoryApi implementation
/// * `B` - BillingApi implementation
pub struct AppShell<C: CustomerApi, I: InventoryApi, B: BillingApi> {
    customer_api: Arc<C>,
    inventory_api: Arc<I>,
    billing_api: Arc<B>,
    routes: RouteTable,
    navigator: Arc<dyn Navigator>,
    navigation_requests: UnboundedReceiver<String>,
    current: Option<ActiveView<C, I, B>>,
    current_path: Option<String>,
}

impl<C, I, B> AppShell<C, I, B>
where
    C: CustomerApi + 'static,
    I: InventoryApi + 'static,
    B: BillingApi + 'static,
{
    pub fn new(customer_api: Arc<C>, inventory_api: Arc<I>, billing_api: Arc<B>) -> Self {
        let (navigator, navigation_requests) = ChannelNavigator::channel();
        Self {
            customer_api,
            inventory_api,
            billing_api,
            routes: RouteTable::new(),
            navigator: Arc::new(navigator),
            navigation_requests,
            current: None,
            current_path: None,
        }
    }

    /// Navigates to `url` and activates the matching view
    ///
    /// Returns the effective path, which differs from `url` after a redirect
    /// or normalisation.
    ///
    /// # Errors
    /// Returns a `RouteError` when no route matches; the current view is
    /// left attached in that case.
    pub fn navigate(&mut self, url: &str) -> Result<String, RouteError> {
        let matched = self.routes.resolve(url)?;
        self.deactivate();

        tracing::info!(url, path = %matched.path, "Activating view");

        let view = match matched.route {
            Route::Customers => {
                let mut view =
                    CustomersView::new(Arc::clone(&self.customer_api), Arc::clone(&self.navigator));
                view.activate();
                ActiveView::Customers(view)
            }
            Route::Products => {
                let mut view = ProductsView::new(Arc::clone(&self.inventory_api));
                view.activate();
                ActiveView::Products(view)
            }
            Route::Bills { customer_id } => {
                let mut view = BillsView::new(Arc::clone(&self.billing_api));
                view.activate(Some(&customer_id));
                ActiveView::Bills(view)
            }
        };

        self.current = Some(view);
        self.current_path = Some(matched.path.clone());
        Ok(matched.path)
    }

    /// Acts on navigation requests raised by views since the last call
    ///
    /// Requests are coalesced: only the most recent one is followed.
    /// Returns the new effective path, or `None` when nothing was pending.
    pub fn process_navigation(&mut self) -> Result<Option<String>, RouteError> {
        let mut latest = None;
        while let Ok(url) = self.navigation_requests.try_recv() {
            latest = Some(url);
        }

        match latest {
            Some(url) => self.navigate(&url).map(Some),
            None => Ok(None),
        }
    }

    /// Detaches the current view, cancelling its load
    pub fn deactivate(&mut self) {
        if let Some(mut view) = self.current.take() {
            match &mut view {
                ActiveView::Customers(v) => v.deactivate(),
                ActiveView::Products(v) => v.deactivate(),
                ActiveView::Bills(v) => v.deactivate(),
            }
        }
        self.current_path = None;
    }

    /// Waits for the current view's load to settle
    pub async fn settle(&mut self) {
        match self.current.as_mut() {
            Some(ActiveView::Customers(v)) => v.settled().await,
            Some(ActiveView::Products(v)) => v.settled().await,
            Some(ActiveView::Bills(v)) => v.settled().await,
            None => {}
        }
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    pub fn current_view(&self) -> Option<&ActiveView<C, I, B>> {
        self.current.as_ref()
    }

    pub fn customers_view(&self) -> Option<&CustomersView<C>> {
        match self.current.as_ref() {
            Some(ActiveView::Customers(v)) => Some(v),
            _ => None,
        }
    }

    pub fn products_view(&self) -> Option<&ProductsView<I>> {
        match self.current.as_ref() {
            Some(ActiveView::Products(v)) => Some(v),
            _ => None,
        }
    }

    pub fn bills_view(&self) -> Option<&BillsView<B>> {
        match self.current.as_ref() {
            Some(ActiveView::Bills(v)) => Some(v),
            _ => None,
        }
    }

    /// Snapshot of the current view for the rendering surface
    pub fn snapshot(&self) -> Option<ViewSnapshot> {
        let path = self.current_path.clone()?;
        let content = match self.current.as_ref()? {
            ActiveView::Customers(v) => ViewContent::Customers { state: v.state() },
            ActiveView::Products(v) => ViewContent::Products { state: v.state() },
            ActiveView::Bills(v) => ViewContent::Bills {
                customer_id: v.customer_id(),
                state: v.state(),
            },
        };
        Some(ViewSnapshot::new(path, content))
    }

    /// Fetches one full bill outside the routed views
    ///
    /// Failures are logged and reported in the snapshot, never returned.
    pub async fn full_bill(&self, id: BillId) -> ViewSnapshot {
        let result = self.billing_api.get_bill(id).await;
        if let Err(e) = &result {
            tracing::error!(bill = %id, error = %e, "Error fetching bill");
        }

        ViewSnapshot::new(
            format!("/api/bills/fullBill/{}", id),
            ViewContent::FullBill {
                bill_id: id,
                state: LoadState::from_result(result),
            },
        )
    }
}
