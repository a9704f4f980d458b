#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::pedantic, clippy::unwrap_used)]

//! Terminal front-end for GIPHY search: a controller that owns search state
//! and handlebars components that render it.

pub mod components;
pub mod controller;
pub mod logging;
pub mod settings;

pub use components::{FormEvent, Renderer, text_summary};
pub use controller::{
    ControllerOptions, InputReset, PendingSearch, SearchBackend, SearchController,
    SearchOutcome, SearchState,
};
pub use settings::Settings;
