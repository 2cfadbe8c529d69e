use crate::application::views::LoadState;
use crate::billing::domain::{Bill, BillId, Customer, CustomerId, Product};
use serde::Serialize;

/// What the rendering surface sees of the active view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    /// Effective in-app path (after redirects)
    pub path: String,
    #[serde(flatten)]
    pub content: ViewContent,
}

/// Per-view content of a snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewContent {
    Customers {
        state: LoadState<Vec<Customer>>,
    },
    Products {
        state: LoadState<Vec<Product>>,
    },
    Bills {
        customer_id: Option<CustomerId>,
        state: LoadState<Vec<Bill>>,
    },
    FullBill {
        bill_id: BillId,
        state: LoadState<Bill>,
    },
}

impl ViewSnapshot {
    pub fn new(path: impl Into<String>, content: ViewContent) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    /// True when the view's load ended in `Failed`
    pub fn is_failed(&self) -> bool {
        match &self.content {
            ViewContent::Customers { state } => state.is_failed(),
            ViewContent::Products { state } => state.is_failed(),
            ViewContent::Bills { state, .. } => state.is_failed(),
            ViewContent::FullBill { state, .. } => state.is_failed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::views::LoadFailure;
    use serde_json::json;

    #[test]
    fn test_snapshot_serializes_flat() {
        let snapshot = ViewSnapshot::new(
            "/bills/42",
            ViewContent::Bills {
                customer_id: Some(CustomerId::new(42)),
                state: LoadState::Loaded(vec![]),
            },
        );

        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({
                "path": "/bills/42",
                "view": "bills",
                "customer_id": 42,
                "state": {"status": "loaded", "data": []}
            })
        );
    }

    #[test]
    fn test_snapshot_is_failed() {
        let failed = ViewSnapshot::new(
            "/products",
            ViewContent::Products {
                state: LoadState::Failed(LoadFailure::invalid_parameter("x")),
            },
        );
        assert!(failed.is_failed());

        let loading = ViewSnapshot::new(
            "/customers",
            ViewContent::Customers {
                state: LoadState::Loading,
            },
        );
        assert!(!loading.is_failed());
    }
}
