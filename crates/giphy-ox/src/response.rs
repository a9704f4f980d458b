use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::error::GiphyRequestError;

/// Body of a search response. Only the fields the client reads are modeled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<GifObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifObject {
    pub id: ImageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub images: HashMap<String, Rendition>,
}

/// One entry of the `images` map. Some renditions only carry video URLs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rendition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub offset: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub response_id: String,
}

/// Key of the `images` map the display URL is taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ImageVariant {
    #[default]
    DownsizedLarge,
    Downsized,
    Original,
    FixedHeight,
    FixedWidth,
    PreviewGif,
}

/// Result identifier. GIPHY sends strings, but numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Into, Serialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl<'de> Deserialize<'de> for ImageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Number(id) => Self(id.to_string()),
        })
    }
}

/// A single grid entry: identifier plus the URL to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    pub id: ImageId,
    pub url: String,
}

impl GifObject {
    pub fn image_url(&self, variant: ImageVariant) -> Option<&str> {
        self.images
            .get(variant.as_ref())
            .and_then(|rendition| rendition.url.as_deref())
    }
}

impl SearchResponse {
    /// Resolve every entry of `data` into an [`ImageResult`], keeping API order.
    ///
    /// Fails when `data` is absent or any entry lacks the requested rendition.
    pub fn into_results(self, variant: ImageVariant) -> Result<Vec<ImageResult>, GiphyRequestError> {
        let data = self
            .data
            .ok_or_else(|| GiphyRequestError::MissingField("data".to_string()))?;

        data.into_iter()
            .enumerate()
            .map(|(index, gif)| {
                let url = gif.image_url(variant).map(str::to_string).ok_or_else(|| {
                    GiphyRequestError::MissingField(format!("data[{index}].images.{variant}.url"))
                })?;
                Ok(ImageResult { id: gif.id, url })
            })
            .collect()
    }
}
