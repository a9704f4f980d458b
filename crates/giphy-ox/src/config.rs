use bon::Builder;
use core::fmt;
use strum::{AsRefStr, Display, EnumString};

pub const DEFAULT_API_BASE: &str = "https://api.giphy.com/v1/gifs";
pub const DEFAULT_ENDPOINT: &str = "/search";
pub const DEFAULT_LIMIT: u32 = 25;
pub const DEFAULT_LANG: &str = "en";

/// Content rating filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Rating {
    #[default]
    #[strum(to_string = "G")]
    G,
    #[strum(to_string = "PG")]
    Pg,
    #[strum(to_string = "PG-13")]
    Pg13,
    #[strum(to_string = "R")]
    R,
}

/// Everything the query builder needs besides the search term.
///
/// Built once at startup and never mutated afterwards. The API key is part of
/// the configuration rather than read from the environment on every request.
#[derive(Clone, PartialEq, Eq, Builder)]
pub struct SearchConfiguration {
    #[builder(default = DEFAULT_API_BASE.to_string(), into)]
    pub api_base: String,
    #[builder(default = DEFAULT_ENDPOINT.to_string(), into)]
    pub endpoint: String,
    #[builder(into)]
    pub api_key: String,
    #[builder(default = DEFAULT_LIMIT)]
    pub limit: u32,
    #[builder(default)]
    pub offset: u32,
    #[builder(default)]
    pub rating: Rating,
    #[builder(default = DEFAULT_LANG.to_string(), into)]
    pub lang: String,
}

impl SearchConfiguration {
    /// Configuration with every default except the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }
}

impl fmt::Debug for SearchConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfiguration")
            .field("api_base", &self.api_base)
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("rating", &self.rating)
            .field("lang", &self.lang)
            .finish()
    }
}
