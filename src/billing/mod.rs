/// Billing domain - typed records returned by the customer, inventory and billing APIs
pub mod domain;
