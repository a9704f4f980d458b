//! Presentation-only views over a [`SearchState`].
//!
//! Every component is a borrowed props struct rendered through a handlebars
//! template. Values are HTML-escaped by the template engine.

mod form;
mod header;
mod results;

pub use form::{FormEvent, SearchForm};
pub use header::{SearchHeader, TITLE};
pub use results::{NO_RESULTS, SearchResults};

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

use crate::controller::SearchState;

/// A view with a registered template.
pub trait Component: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

const PAGE_NAME: &str = "page";
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>{{title}}</title>
</head>
<body>
<div class="App">
{{{header}}}
{{{form}}}
{{{results}}}
</div>
</body>
</html>
"#;

#[derive(Serialize)]
struct Page<'a> {
    title: &'a str,
    header: String,
    form: String,
    results: String,
}

pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(SearchForm::NAME, SearchForm::TEMPLATE)?;
        registry.register_template_string(SearchHeader::NAME, SearchHeader::TEMPLATE)?;
        registry.register_template_string(SearchResults::NAME, SearchResults::TEMPLATE)?;
        registry.register_template_string(PAGE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { registry })
    }

    pub fn render<C: Component>(&self, component: &C) -> Result<String, RenderError> {
        self.registry.render(C::NAME, component)
    }

    /// Full HTML document: header, form and results grid.
    pub fn render_page(&self, state: &SearchState) -> Result<String, RenderError> {
        let page = Page {
            title: TITLE,
            header: self.render(&SearchHeader::new(state.last_search()))?,
            form: self.render(&SearchForm {
                value: state.input(),
            })?,
            results: self.render(&SearchResults {
                images: state.results(),
            })?,
        };
        self.registry.render(PAGE_NAME, &page)
    }
}

/// Plain-text rendering of the same state for a terminal.
pub fn text_summary(state: &SearchState) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        format!("Showing results for \"{}\"", state.last_search()),
    ];

    if state.results().is_empty() {
        lines.push(NO_RESULTS.to_string());
    } else {
        lines.extend(
            state
                .results()
                .iter()
                .enumerate()
                .map(|(index, image)| format!("{:>3}. [{}] {}", index + 1, image.id, image.url)),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{
        ControllerOptions, SearchController,
        tests::{ScriptedBackend, images},
    };

    async fn state_with(ids: &[&str], term: &str) -> SearchState {
        let backend = ScriptedBackend::with([Ok(images(ids))]);
        let mut controller = SearchController::new(backend, ControllerOptions::default());
        controller.update_search_text(term);
        controller.submit_search().await;
        controller.state().clone()
    }

    #[tokio::test]
    async fn page_composes_all_components() {
        let state = state_with(&["1", "2"], "cats").await;
        let html = Renderer::new().unwrap().render_page(&state).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Giphy Searcher</title>"));
        assert!(html.contains("Showing results for <strong>cats</strong>"));
        assert!(html.contains(r#"value="cats""#));
        assert_eq!(html.matches("<img ").count(), 2);
    }

    #[test]
    fn page_for_fresh_state_shows_empty_message() {
        let html = Renderer::new()
            .unwrap()
            .render_page(&SearchState::default())
            .unwrap();
        assert!(html.contains("<h2>No Images Found!</h2>"));
        assert!(!html.contains("<img"));
    }

    #[tokio::test]
    async fn text_summary_lists_results() {
        let state = state_with(&["a", "b"], "dogs").await;
        let text = text_summary(&state);
        assert!(text.contains("Showing results for \"dogs\""));
        assert!(text.contains("  1. [a] http://x/a.gif"));
        assert!(text.contains("  2. [b] http://x/b.gif"));
    }

    #[test]
    fn text_summary_empty() {
        let text = text_summary(&SearchState::default());
        assert_eq!(
            text,
            "Giphy Searcher\nShowing results for \"\"\nNo Images Found!\n"
        );
    }

    #[tokio::test]
    async fn text_summary_is_line_per_result() {
        let state = state_with(&["x"], "owls").await;
        assert_eq!(
            text_summary(&state),
            "Giphy Searcher\nShowing results for \"owls\"\n  1. [x] http://x/x.gif\n"
        );
    }
}
