#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Client for the GIPHY search API.

pub mod config;
pub mod error;
pub mod query;
pub mod request_builder;
pub mod response;

// Re-export main types
pub use config::{Rating, SearchConfiguration};
pub use error::GiphyRequestError;
pub use query::build_search_url;
pub use response::{GifObject, ImageId, ImageResult, ImageVariant, Pagination, SearchResponse};

use bon::Builder;
use core::fmt;

use crate::request_builder::{Endpoint, RequestBuilder, RequestConfig};

pub const API_KEY_ENV: &str = "GIPHY_API_KEY";

#[derive(Clone, Builder)]
pub struct Giphy {
    pub(crate) config: SearchConfiguration,
    #[builder(default)]
    pub(crate) client: reqwest::Client,
    #[builder(default)]
    pub(crate) variant: ImageVariant,
    #[builder(into)]
    pub(crate) user_agent: Option<String>,
}

impl Giphy {
    /// Create a new client for the given configuration.
    pub fn new(config: SearchConfiguration) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            variant: ImageVariant::default(),
            user_agent: None,
        }
    }

    /// Default configuration with the key taken from `GIPHY_API_KEY`.
    pub fn load_from_env() -> Result<Self, std::env::VarError> {
        let api_key = std::env::var(API_KEY_ENV)?;
        Ok(Self::new(SearchConfiguration::new(api_key)))
    }

    pub fn config(&self) -> &SearchConfiguration {
        &self.config
    }

    pub fn variant(&self) -> ImageVariant {
        self.variant
    }

    /// The exact URL [`Giphy::search`] will request for `term`.
    pub fn search_url(&self, term: &str) -> String {
        build_search_url(term, &self.config)
    }

    fn request_builder(&self) -> RequestBuilder {
        let mut config =
            RequestConfig::new(&self.config.api_base).with_header("accept", "application/json");
        if let Some(ref user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        RequestBuilder::new(self.client.clone(), config)
    }

    fn search_endpoint(&self, term: &str) -> Endpoint {
        Endpoint::new(&self.config.endpoint)
            .with_query_params(query::search_params(term, &self.config))
    }
}

impl Giphy {
    /// Run one search and return the raw response body.
    pub async fn search(&self, term: &str) -> Result<SearchResponse, GiphyRequestError> {
        tracing::debug!(
            url = %query::redacted_search_url(term, &self.config),
            "sending search request"
        );

        self.request_builder()
            .get_json(&self.search_endpoint(term))
            .await
    }

    /// Run one search and resolve the display URL of every result.
    pub async fn search_images(&self, term: &str) -> Result<Vec<ImageResult>, GiphyRequestError> {
        let response = self.search(term).await?;
        if let Some(pagination) = response.pagination {
            tracing::debug!(
                count = pagination.count,
                total = pagination.total_count,
                offset = pagination.offset,
                "search response received"
            );
        }
        response.into_results(self.variant)
    }
}

impl fmt::Debug for Giphy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Giphy")
            .field("config", &self.config)
            .field("client", &self.client)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}
