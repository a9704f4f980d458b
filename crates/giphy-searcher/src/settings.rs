use clap::Parser;
use giphy_ox::{
    API_KEY_ENV, Giphy, ImageVariant, Rating, SearchConfiguration,
    config::{DEFAULT_API_BASE, DEFAULT_ENDPOINT, DEFAULT_LANG, DEFAULT_LIMIT},
};
use std::path::PathBuf;

use crate::controller::{ControllerOptions, InputReset};

/// Search GIPHY from the terminal. Each line typed on stdin is a search.
#[derive(Debug, Clone, Parser)]
#[command(name = "giphy-searcher", version, about)]
pub struct Settings {
    /// API key sent with every request
    #[arg(long, env = API_KEY_ENV, default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "GIPHY_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, env = "GIPHY_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Results per search
    #[arg(long, env = "GIPHY_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    #[arg(long, env = "GIPHY_OFFSET", default_value_t = 0)]
    pub offset: u32,

    /// Content rating filter: G, PG, PG-13 or R
    #[arg(long, env = "GIPHY_RATING", default_value = "G")]
    pub rating: Rating,

    #[arg(long, env = "GIPHY_LANG", default_value = DEFAULT_LANG)]
    pub lang: String,

    /// Rendition the grid displays, e.g. downsized_large, original, fixed_height
    #[arg(long, env = "GIPHY_VARIANT", default_value = "downsized_large")]
    pub variant: ImageVariant,

    /// Term searched once at startup
    #[arg(long, env = "GIPHY_INITIAL_TERM", default_value = "")]
    pub initial_term: String,

    /// Clear the input after every successful search
    #[arg(long)]
    pub clear_input: bool,

    /// Write the rendered HTML page here after every search
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Exit after the initial search
    #[arg(long)]
    pub once: bool,
}

impl Settings {
    pub fn search_configuration(&self) -> SearchConfiguration {
        SearchConfiguration::builder()
            .api_base(&self.api_base)
            .endpoint(&self.endpoint)
            .api_key(&self.api_key)
            .limit(self.limit)
            .offset(self.offset)
            .rating(self.rating)
            .lang(&self.lang)
            .build()
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            initial_term: self.initial_term.clone(),
            input_reset: if self.clear_input {
                InputReset::Clear
            } else {
                InputReset::Keep
            },
        }
    }

    pub fn client(&self) -> Giphy {
        Giphy::builder()
            .config(self.search_configuration())
            .variant(self.variant)
            .user_agent(concat!("giphy-searcher/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}
