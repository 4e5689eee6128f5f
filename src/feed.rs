// Feed client for the daily astronomy dataset: fetch, decode, normalize.
// Public API:
//   - ApodRecord: raw wire record as served by the endpoint
//   - fetch_gallery() -> Result<Vec<MediaItem>, FeedError>
//   - fetch_image(url) -> RGBA8 bytes + size for thumbnail textures
//
// Endpoint sample:
// https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json

use lazy_static::lazy_static;
use serde::Deserialize;
use std::fmt;

use crate::media::MediaItem;

pub const FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Number of records taken from the head of the feed.
pub const GALLERY_WINDOW: usize = 9;

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!("space-gallery/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap();
}

/// One entry as served by the endpoint. `media_type` is kept as raw text;
/// classification happens during normalization into `MediaItem`.
#[derive(Debug, Deserialize, Clone)]
pub struct ApodRecord {
    pub title: String,
    pub date: String,
    pub explanation: String,
    pub url: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

#[derive(Debug)]
pub enum FeedError {
    Reqwest(reqwest::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Reqwest(e) => write!(f, "Request error: {}", e),
            FeedError::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Reqwest(e) => Some(e),
            FeedError::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::Reqwest(e)
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Decode(e)
    }
}

/// Decode a feed body and normalize the head of the list.
pub fn decode_gallery(body: &str) -> Result<Vec<MediaItem>, FeedError> {
    let records: Vec<ApodRecord> = serde_json::from_str(body)?;
    Ok(normalize_window(records))
}

/// Take the first `GALLERY_WINDOW` records in feed order and normalize them.
pub fn normalize_window(records: Vec<ApodRecord>) -> Vec<MediaItem> {
    records
        .into_iter()
        .take(GALLERY_WINDOW)
        .map(MediaItem::from)
        .collect()
}

/// Fetch the gallery window from the fixed endpoint.
pub async fn fetch_gallery() -> Result<Vec<MediaItem>, FeedError> {
    log::debug!("fetch_gallery: GET {}", FEED_URL);
    let resp = CLIENT.get(FEED_URL).send().await?.error_for_status()?;
    let body = resp.text().await?;
    decode_gallery(&body)
}

/// Download an image (card thumbnail or detail media) and return RGBA8 bytes + size.
pub async fn fetch_image(url: &str) -> Result<(usize, usize, Vec<u8>), String> {
    log::debug!("fetch_image: GET {}", url);

    let resp = match CLIENT
        .get(url)
        .header("Accept", "image/jpeg,image/png,image/gif,image/webp")
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            log::warn!("fetch_image: request error for {}: {}", url, e);
            return Err(format!("request error for {}: {}", url, e));
        }
    };

    let status = resp.status();
    if !status.is_success() {
        log::warn!("fetch_image: http status {} for {}", status.as_u16(), url);
        return Err(format!("http status {} for {}", status.as_u16(), url));
    }

    let bytes = match resp.bytes().await {
        Ok(b) => b,
        Err(e) => {
            log::warn!("fetch_image: body read error for {}: {}", url, e);
            return Err(format!("body read error for {}: {}", url, e));
        }
    };

    let img = match image::load_from_memory(&bytes) {
        Ok(i) => i,
        Err(e) => {
            let msg = format!("decode error for {}: {}", url, e);
            log::warn!("fetch_image: {}", msg);
            return Err(msg);
        }
    };
    let rgba8 = img.to_rgba8();
    let (w, h) = rgba8.dimensions();
    Ok((w as usize, h as usize, rgba8.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaType;

    fn record_json(title: &str, url: &str, extra: &str) -> String {
        format!(
            r#"{{"title":"{}","date":"2024-01-01","explanation":"x","url":"{}"{}}}"#,
            title, url, extra
        )
    }

    #[test]
    fn decodes_image_and_video_records() {
        let body = format!(
            "[{},{}]",
            record_json("A", "img1.jpg", r#","media_type":"image","copyright":"J. Doe""#),
            record_json(
                "B",
                "v.mp4",
                r#","media_type":"video","thumbnail_url":"t.jpg""#
            ),
        );
        let items = decode_gallery(&body).unwrap();
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].title, "A");
        assert_eq!(items[0].url, "img1.jpg");
        assert_eq!(items[0].media_type, MediaType::Image);
        assert_eq!(items[0].copyright.as_deref(), Some("J. Doe"));

        assert_eq!(items[1].media_type, MediaType::Video);
        assert_eq!(items[1].url, "v.mp4");
        assert_eq!(items[1].thumbnail_url.as_deref(), Some("t.jpg"));
        assert!(items[1].copyright.is_none());
    }

    #[test]
    fn window_takes_first_nine_in_order() {
        let body = format!(
            "[{}]",
            (0..12)
                .map(|i| record_json(&format!("item-{}", i), "img.jpg", ""))
                .collect::<Vec<_>>()
                .join(",")
        );
        let items = decode_gallery(&body).unwrap();
        assert_eq!(items.len(), GALLERY_WINDOW);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.title, format!("item-{}", i));
        }
    }

    #[test]
    fn short_feed_keeps_all_records() {
        let body = format!("[{}]", record_json("only", "img.jpg", ""));
        assert_eq!(decode_gallery(&body).unwrap().len(), 1);
        assert_eq!(decode_gallery("[]").unwrap().len(), 0);
    }

    #[test]
    fn missing_media_type_defaults_to_image() {
        let body = format!("[{}]", record_json("plain", "img.jpg", ""));
        let items = decode_gallery(&body).unwrap();
        assert_eq!(items[0].media_type, MediaType::Image);
        assert!(items[0].thumbnail_url.is_none());
        assert!(items[0].copyright.is_none());
    }

    #[test]
    fn non_array_payload_is_a_decode_error() {
        let err = decode_gallery(r#"{"oops":true}"#).unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));

        let err = decode_gallery("not json at all").unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }
}
