use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a view that failed to load from
/// a usage error or an application error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The view loaded and was rendered
    Success = 0,
    /// The view was rendered but its load failed
    LoadFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, unknown route, output error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LoadFailed => write!(f, "Load Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Coarse classification of a failed load, as exposed to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Connection failure or non-2xx response
    Transport,
    /// Response body did not decode into the expected shape
    Decode,
    /// A route parameter or identifier was rejected before any request was made
    InvalidParameter,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Decode => write!(f, "decode"),
            FailureKind::InvalidParameter => write!(f, "invalid parameter"),
        }
    }
}

/// Errors raised by the API client wrappers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },
}

impl ApiError {
    /// Collapses the error into the kind reported to views
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Transport { .. } | ApiError::Status { .. } => FailureKind::Transport,
            ApiError::Decode { .. } => FailureKind::Decode,
            ApiError::InvalidIdentifier { .. } => FailureKind::InvalidParameter,
        }
    }
}

/// Errors raised while resolving a navigation URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route matches '{url}'\n\n💡 Hint: Known routes are /customers, /products and /bills/<customerId>")]
    NotFound { url: String },

    #[error("Route parameter in '{url}' is not valid UTF-8 after decoding")]
    MalformedParameter { url: String },
}

/// Application-specific errors for the CLI and its adapters.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the hint-style messages in one place.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Invalid API host: {host}\nReason: {reason}\n\n💡 Hint: Use an absolute URL such as http://localhost:8888")]
    InvalidHost { host: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to render view: {details}")]
    RenderError { details: String },
}
