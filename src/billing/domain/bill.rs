use super::{BillId, Customer, CustomerId, ExtraFields, Nullable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A bill as returned by the billing API
///
/// `GET /api/bills/fullBill/{id}` fills in `customer` and the product names on
/// each item; `GET /api/bills/byCustomer/{customerId}` may leave them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: BillId,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub customer_id: Nullable<CustomerId>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub product_items: Nullable<Vec<ProductItem>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub total: Nullable<Number>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub date: Nullable<NaiveDate>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub customer: Nullable<Customer>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Bill {
    pub fn items(&self) -> &[ProductItem] {
        self.product_items.get().map(Vec::as_slice).unwrap_or_default()
    }
}

/// One line of a bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub product_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub product_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub quantity: Nullable<Number>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub price: Nullable<Number>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub total: Nullable<Number>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
