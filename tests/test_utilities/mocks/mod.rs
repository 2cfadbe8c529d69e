/// Mock implementations for testing
mod mock_billing_api;
mod mock_customer_api;
mod mock_inventory_api;
mod mock_navigator;
mod mock_response;

pub use mock_billing_api::MockBillingApi;
pub use mock_customer_api::MockCustomerApi;
pub use mock_inventory_api::MockInventoryApi;
#[allow(unused_imports)]
pub use mock_navigator::RecordingNavigator;
pub use mock_response::MockResponse;
