/// Routed view components
///
/// Each view triggers exactly one API call per activation and exposes the
/// outcome as a `LoadState`.
mod bills_view;
mod customers_view;
mod load_state;
mod loader;
mod products_view;

pub use bills_view::BillsView;
pub use customers_view::CustomersView;
pub use load_state::{LoadFailure, LoadState};
pub use loader::{LoadFuture, Loader};
pub use products_view::ProductsView;
