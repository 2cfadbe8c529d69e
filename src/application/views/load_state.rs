use crate::shared::error::{ApiError, FailureKind};
use serde::Serialize;

/// Load state of one view activation
///
/// `Idle → Loading → Loaded | Failed`. A view only returns to `Loading`
/// through a new activation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(LoadFailure),
}

impl<T> LoadState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// Converts a finished call into a terminal state
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(e) => LoadState::Failed(LoadFailure::from(&e)),
        }
    }
}

/// Why a load failed, in a form the rendering surface can show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl LoadFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(FailureKind::InvalidParameter, message)
    }
}

impl From<&ApiError> for LoadFailure {
    fn from(error: &ApiError) -> Self {
        Self::new(error.kind(), error.to_string())
    }
}
