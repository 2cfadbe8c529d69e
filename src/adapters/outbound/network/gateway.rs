use crate::shared::error::{ApiError, DeskError};
use crate::shared::Result;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Shared HTTP plumbing for the API client wrappers
///
/// Holds the base host and one `reqwest::Client`. Cloning is cheap and
/// shares the underlying connection pool, so the three services can be
/// built from one gateway. Nothing here is mutated after construction.
#[derive(Clone, Debug)]
pub struct ApiGateway {
    client: reqwest::Client,
    host: Arc<str>,
}

impl ApiGateway {
    /// Host used when neither the config file nor the CLI names one
    pub const DEFAULT_HOST: &'static str = "http://localhost:8888";

    /// Creates a gateway for the given base host
    ///
    /// The host must be an absolute `http` or `https` URL. Trailing slashes
    /// are dropped so paths can be appended verbatim.
    pub fn new(host: &str) -> Result<Self> {
        let host = Self::validate_host(host)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("billing-desk/{}", version);
        // No timeout: a request runs until the server answers or the view is deactivated
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            host: host.into(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn validate_host(host: &str) -> Result<String> {
        let trimmed = host.trim().trim_end_matches('/');

        let url = Url::parse(trimmed).map_err(|e| DeskError::InvalidHost {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(DeskError::InvalidHost {
                host: host.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(DeskError::InvalidHost {
                host: host.to_string(),
                reason: "missing host name".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(DeskError::InvalidHost {
                host: host.to_string(),
                reason: "query strings and fragments are not allowed".to_string(),
            }
            .into());
        }

        Ok(trimmed.to_string())
    }

    /// Joins the host and an absolute API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    /// Issues one GET and decodes the JSON body
    ///
    /// Transport errors and non-2xx statuses are reported before the body is
    /// read; decode errors are kept apart so callers can tell them from
    /// network trouble.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> std::result::Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }
}
