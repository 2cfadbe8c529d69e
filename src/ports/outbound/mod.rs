/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (HTTP APIs, navigation, console, output).
pub mod billing_api;
pub mod customer_api;
pub mod inventory_api;
pub mod navigator;
pub mod output_presenter;
pub mod progress_reporter;
pub mod view_renderer;

pub use billing_api::BillingApi;
pub use customer_api::CustomerApi;
pub use inventory_api::InventoryApi;
pub use navigator::Navigator;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use view_renderer::ViewRenderer;
