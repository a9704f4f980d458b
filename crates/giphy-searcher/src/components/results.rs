use giphy_ox::ImageResult;
use serde::Serialize;

use super::Component;

pub const NO_RESULTS: &str = "No Images Found!";

/// Grid of thumbnails, one per result, keyed by result id.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchResults<'a> {
    pub images: &'a [ImageResult],
}

impl Component for SearchResults<'_> {
    const NAME: &'static str = "search_results";
    const TEMPLATE: &'static str = r#"{{#if images}}<div class="gallery">
{{#each images}}  <div class="gif" data-key="{{id}}"><img src="{{url}}" alt="gif" /></div>
{{/each}}</div>{{else}}<h2>No Images Found!</h2>{{/if}}"#;
}
