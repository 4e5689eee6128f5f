// Domain model: one gallery entry normalized from a raw feed record.

use crate::feed::ApodRecord;

/// Classification of a gallery entry, driving thumbnail choice and playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// Normalized gallery entry. Immutable once built; the whole vector is
/// replaced on the next fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub title: String,
    pub date: String,
    pub explanation: String,
    pub url: String,
    pub media_type: MediaType,
    pub thumbnail_url: Option<String>,
    pub copyright: Option<String>,
}

impl MediaItem {
    /// Source used for the gallery tile. Video entries prefer their thumbnail
    /// and fall back to the embed URL; images always use `url`.
    pub fn thumbnail_source(&self) -> &str {
        match self.media_type {
            MediaType::Video => self.thumbnail_url.as_deref().unwrap_or(&self.url),
            MediaType::Image => &self.url,
        }
    }

    /// Copyright line shown under the tile and in the detail view.
    /// None when the record carried no attribution, so nothing is rendered.
    pub fn copyright_line(&self) -> Option<String> {
        self.copyright.as_ref().map(|c| format!("© {}", c))
    }

    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }
}

impl From<ApodRecord> for MediaItem {
    fn from(r: ApodRecord) -> Self {
        // Only an explicit "video" marker selects Video; anything else,
        // including absence, is treated as a plain image.
        let media_type = match r.media_type.as_deref() {
            Some("video") => MediaType::Video,
            _ => MediaType::Image,
        };
        Self {
            title: r.title,
            date: r.date,
            explanation: r.explanation,
            url: r.url,
            media_type,
            thumbnail_url: r.thumbnail_url,
            copyright: r.copyright,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(media_type: MediaType) -> MediaItem {
        MediaItem {
            title: "t".into(),
            date: "2024-01-01".into(),
            explanation: "e".into(),
            url: "img1.jpg".into(),
            media_type,
            thumbnail_url: None,
            copyright: None,
        }
    }

    #[test]
    fn image_thumbnail_always_uses_url() {
        let mut it = item(MediaType::Image);
        it.thumbnail_url = Some("t.jpg".into());
        assert_eq!(it.thumbnail_source(), "img1.jpg");
    }

    #[test]
    fn video_thumbnail_prefers_thumbnail_url() {
        let mut it = item(MediaType::Video);
        it.url = "v.mp4".into();
        it.thumbnail_url = Some("t.jpg".into());
        assert_eq!(it.thumbnail_source(), "t.jpg");
    }

    #[test]
    fn video_without_thumbnail_falls_back_to_url() {
        let mut it = item(MediaType::Video);
        it.url = "v.mp4".into();
        assert_eq!(it.thumbnail_source(), "v.mp4");
    }

    #[test]
    fn copyright_line_is_prefixed_or_absent() {
        let mut it = item(MediaType::Image);
        assert_eq!(it.copyright_line(), None);
        it.copyright = Some("J. Doe".into());
        assert_eq!(it.copyright_line().as_deref(), Some("© J. Doe"));
    }

    #[test]
    fn unknown_media_type_maps_to_image() {
        let record = ApodRecord {
            title: "t".into(),
            date: "d".into(),
            explanation: "e".into(),
            url: "u".into(),
            media_type: Some("hologram".into()),
            thumbnail_url: None,
            copyright: None,
        };
        assert_eq!(MediaItem::from(record).media_type, MediaType::Image);
    }

    #[test]
    fn media_type_displays_lowercase() {
        assert_eq!(MediaType::Image.to_string(), "image");
        assert_eq!(MediaType::Video.to_string(), "video");
    }
}
