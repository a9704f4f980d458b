use serde::Serialize;

use super::Component;

pub const TITLE: &str = "Giphy Searcher";

/// Static title plus the last successfully searched term.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchHeader<'a> {
    pub title: &'a str,
    pub last_search: &'a str,
}

impl<'a> SearchHeader<'a> {
    pub fn new(last_search: &'a str) -> Self {
        Self {
            title: TITLE,
            last_search,
        }
    }
}

impl Component for SearchHeader<'_> {
    const NAME: &'static str = "search_header";
    const TEMPLATE: &'static str = r#"<header>
  <h1>{{title}}</h1>
  <p class="muted">Showing results for <strong>{{last_search}}</strong></p>
</header>"#;
}
