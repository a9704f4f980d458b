use serde::Serialize;

use super::Component;
use crate::controller::{SearchBackend, SearchController, SearchOutcome};

/// Text input bound to the controller's current input, plus a submit button.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchForm<'a> {
    pub value: &'a str,
}

impl Component for SearchForm<'_> {
    const NAME: &'static str = "search_form";
    const TEMPLATE: &'static str = r#"<form class="form-horizontal" onsubmit="return false;">
  <input placeholder="Search" type="text" name="searchString" value="{{value}}" required />
  <button type="submit">Search</button>
</form>"#;
}

/// Input the form forwards to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Change(String),
    Submit,
}

impl FormEvent {
    /// Events for one line of terminal input.
    ///
    /// Only the line terminator is stripped. An empty line submits whatever
    /// the input already holds.
    pub fn from_line(line: &str) -> Vec<Self> {
        let text = line.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            vec![Self::Submit]
        } else {
            vec![Self::Change(text.to_string()), Self::Submit]
        }
    }

    /// Apply the event. Only `Submit` produces an outcome.
    pub async fn dispatch<B: SearchBackend>(
        self,
        controller: &mut SearchController<B>,
    ) -> Option<SearchOutcome> {
        match self {
            Self::Change(text) => {
                controller.update_search_text(text);
                None
            }
            Self::Submit => Some(controller.submit_search().await),
        }
    }
}
