//! Gateways for loading user pages from the remote provider.
//!
//! The trait-based design keeps the fetch an injected capability: the TUI and
//! CLI depend on [`UserGateway`], while [`HttpUserGateway`] handles real HTTP
//! requests and tests substitute doubles.

use async_trait::async_trait;
use url::Url;

use super::error::FetchError;
use super::models::{ApiEnvelope, UserPage};

/// Maximum page size the provider accepts.
const MAX_PER_PAGE: u8 = 100;

/// Gateway that can load one page of user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Fetches the given 1-based page with `per_page` records per page.
    async fn fetch_page(&self, page: u32, per_page: u8) -> Result<UserPage, FetchError>;
}

/// Reqwest-backed gateway for the public random-users endpoint.
pub struct HttpUserGateway {
    client: reqwest::Client,
    api_base: Url,
}

impl HttpUserGateway {
    /// Creates a gateway for the given API base URL.
    ///
    /// The base should point at the provider's public API root, e.g.
    /// `https://api.freeapi.app/api/v1/public`; the `randomusers` path is
    /// appended per request.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidApiBase`] when the base URL cannot be
    /// parsed.
    pub fn new(api_base: &str) -> Result<Self, FetchError> {
        let parsed = Url::parse(api_base)
            .map_err(|error| FetchError::InvalidApiBase(error.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_base: parsed,
        })
    }

    /// Builds the request URL for the given page parameters.
    fn listing_url(&self, page: u32, per_page: u8) -> Result<Url, FetchError> {
        // Url::join would treat a base without a trailing slash as a file
        // and drop its last segment, so extend the path directly.
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidApiBase("API base cannot be a base URL".to_owned()))?
            .pop_if_empty()
            .push("randomusers");
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &per_page.to_string());
        Ok(url)
    }
}

#[async_trait]
impl UserGateway for HttpUserGateway {
    async fn fetch_page(&self, page: u32, per_page: u8) -> Result<UserPage, FetchError> {
        validate_page_params(page, per_page)?;
        let url = self.listing_url(page, per_page)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| FetchError::from_reqwest("list users", &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: extract_provider_message(&body).unwrap_or_else(|| status.to_string()),
            });
        }

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|error| FetchError::from_reqwest("decode users", &error))?;

        Ok(envelope.into_user_page(page, per_page))
    }
}

/// Validates pagination parameters before issuing a request.
fn validate_page_params(page: u32, per_page: u8) -> Result<(), FetchError> {
    if page == 0 {
        return Err(FetchError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if per_page == 0 {
        return Err(FetchError::InvalidPagination {
            message: "limit must be at least 1".to_owned(),
        });
    }

    if per_page > MAX_PER_PAGE {
        return Err(FetchError::InvalidPagination {
            message: format!("limit must not exceed {MAX_PER_PAGE}"),
        });
    }

    Ok(())
}

/// Extracts the human-readable `message` field from a provider error body.
fn extract_provider_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
