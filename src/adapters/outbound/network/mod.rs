/// Network adapters for the customer, inventory and billing APIs
mod billing_service;
mod customer_service;
mod gateway;
mod inventory_service;

pub use billing_service::BillingService;
pub use customer_service::CustomerService;
pub use gateway::ApiGateway;
pub use inventory_service::InventoryService;
