//! billing-desk - a thin client for a billing back end
//!
//! This library wraps the back end's HTTP API (customers, products, bills)
//! and drives routed views that each trigger a single load on activation,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`billing`): Typed response records and identifiers
//! - **Application Layer** (`application`): Route table, views and the app shell
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP clients, renderers and presenters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use billing_desk::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters (one instance of each wrapper per process)
//! let gateway = ApiGateway::new(ApiGateway::DEFAULT_HOST)?;
//! let mut shell = AppShell::new(
//!     Arc::new(CustomerService::new(gateway.clone())),
//!     Arc::new(InventoryService::new(gateway.clone())),
//!     Arc::new(BillingService::new(gateway)),
//! );
//!
//! // Navigate and wait for the view's load
//! shell.navigate("/bills/42")?;
//! shell.settle().await;
//!
//! if let Some(snapshot) = shell.snapshot() {
//!     println!("{}", MarkdownRenderer::new().render(&snapshot)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod billing;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::{
        ApiGateway, BillingService, CustomerService, InventoryService,
    };
    pub use crate::adapters::outbound::renderers::{JsonRenderer, MarkdownRenderer};
    pub use crate::application::dto::{OutputFormat, ViewContent, ViewSnapshot};
    pub use crate::application::factories::{PresenterFactory, PresenterType, RendererFactory};
    pub use crate::application::routing::{Route, RouteMatch, RouteTable};
    pub use crate::application::shell::{ActiveView, AppShell};
    pub use crate::application::views::{
        BillsView, CustomersView, LoadFailure, LoadState, ProductsView,
    };
    pub use crate::billing::domain::{
        Bill, BillId, Customer, CustomerId, Nullable, Product, ProductItem,
    };
    pub use crate::ports::outbound::{
        BillingApi, CustomerApi, InventoryApi, Navigator, OutputPresenter, ProgressReporter,
        ViewRenderer,
    };
    pub use crate::shared::error::{ApiError, DeskError, ExitCode, FailureKind, RouteError};
    pub use crate::shared::Result;
}
