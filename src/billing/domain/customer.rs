use super::{CustomerId, ExtraFields, Nullable};
use serde::{Deserialize, Serialize};

/// A customer as returned by `GET /api/customers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub email: Nullable<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Customer {
    pub fn new(id: impl Into<CustomerId>) -> Self {
        Self {
            id: id.into(),
            name: Nullable::Absent,
            email: Nullable::Absent,
            extra: ExtraFields::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string().into();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string().into();
        self
    }
}
