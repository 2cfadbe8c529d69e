use billing_desk::prelude::*;
use std::sync::Arc;
use tokio::sync::Notify;

/// Canned outcome of a mocked API call
///
/// `ApiError` is not `Clone`, so failures are described here and turned
/// into a fresh error on every call.
#[derive(Clone, Debug)]
pub enum MockResponse<T> {
    Data(T),
    /// A non-2xx answer with the given status code
    Status(u16),
    /// A body that does not decode
    Malformed,
}

impl<T: Clone> MockResponse<T> {
    pub fn resolve(&self, url: &str) -> std::result::Result<T, ApiError> {
        match self {
            MockResponse::Data(data) => Ok(data.clone()),
            MockResponse::Status(code) => Err(ApiError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::from_u16(*code).unwrap(),
            }),
            MockResponse::Malformed => Err(ApiError::Decode {
                url: url.to_string(),
                source: serde_json::from_str::<serde_json::Value>("{not json").unwrap_err(),
            }),
        }
    }
}

/// Holds a mocked call until the test releases it
pub async fn wait_for(gate: &Option<Arc<Notify>>) {
    if let Some(gate) = gate {
        gate.notified().await;
    }
}
