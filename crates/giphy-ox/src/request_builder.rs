use reqwest::{RequestBuilder as ReqwestRequestBuilder, Response};
use serde::Deserialize;
use std::collections::HashMap;

use crate::{
    error::{self, GiphyRequestError},
    query::{encode_query, join_url},
};

/// Represents an API endpoint with its configuration
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub path: String,
    pub query_params: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query_params: Vec::new(),
        }
    }

    pub fn with_query_params(mut self, params: Vec<(&'static str, String)>) -> Self {
        self.query_params = params;
        self
    }
}

/// Configuration for request building
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub base_url: String,
    pub default_headers: HashMap<String, String>,
    pub user_agent: Option<String>,
}

impl RequestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: HashMap::new(),
            user_agent: None,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Thin layer over `reqwest` that owns URL assembly and response decoding
pub struct RequestBuilder {
    client: reqwest::Client,
    config: RequestConfig,
}

impl RequestBuilder {
    pub fn new(client: reqwest::Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    /// Absolute URL for the endpoint, query string included
    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        let url = join_url(&self.config.base_url, &endpoint.path);
        if endpoint.query_params.is_empty() {
            url
        } else {
            format!("{url}?{}", encode_query(&endpoint.query_params))
        }
    }

    /// Build a GET request for the given endpoint
    pub fn build_request(&self, endpoint: &Endpoint) -> ReqwestRequestBuilder {
        // Query is encoded by hand so the URL matches `url_for` byte for byte.
        let mut req = self.client.get(self.url_for(endpoint));

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        if let Some(ref user_agent) = self.config.user_agent {
            req = req.header("user-agent", user_agent);
        }

        req
    }

    /// Execute a GET request and return the deserialized JSON body
    pub async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, GiphyRequestError> {
        let res = self.build_request(endpoint).send().await?;
        self.handle_response(res).await
    }

    /// Handle response and parse errors
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
    ) -> Result<T, GiphyRequestError> {
        let status = res.status();
        let bytes = res.bytes().await?;

        if status.is_success() {
            serde_json::from_slice::<T>(&bytes).map_err(|source| GiphyRequestError::InvalidJson {
                source,
                body: String::from_utf8_lossy(&bytes).to_string(),
            })
        } else {
            Err(error::parse_error_response(status, &bytes))
        }
    }
}
