pub mod bill;
pub mod customer;
pub mod ids;
pub mod nullable;
pub mod product;

pub use bill::{Bill, ProductItem};
pub use customer::Customer;
pub use ids::{BillId, CustomerId};
pub use nullable::Nullable;
pub use product::Product;

/// Fields the API returned that the typed record does not model.
///
/// They are kept so that a decoded record serialises back to the same document.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;
