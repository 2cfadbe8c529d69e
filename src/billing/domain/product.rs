use super::{ExtraFields, Nullable};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A product as returned by `GET /api/products`
///
/// The inventory service keys products by UUID strings, so the id is kept as text.
/// Numbers keep the form the API sent them in (`30` stays `30`, `1299.0` stays `1299.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub price: Nullable<Number>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub quantity: Nullable<Number>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
