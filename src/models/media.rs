use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Media kind stored alongside each attachment row.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "media_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    #[sqlx(rename = "IMAGE")]
    Image,
    #[sqlx(rename = "VIDEO")]
    Video,
}

impl MediaType {
    /// Classify a MIME string: anything in the `image/*` family is an
    /// image, everything else is treated as video.
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image") {
            MediaType::Image
        } else {
            MediaType::Video
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Media {
    pub id: Uuid,
    pub url: String,
    #[sqlx(rename = "type")]
    pub media_type: MediaType,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_mime_types_classify_as_image() {
        assert_eq!(MediaType::from_mime("image/jpeg"), MediaType::Image);
        assert_eq!(MediaType::from_mime("image/png"), MediaType::Image);
        assert_eq!(MediaType::from_mime("image/heic"), MediaType::Image);
    }

    #[test]
    fn non_image_mime_types_classify_as_video() {
        assert_eq!(MediaType::from_mime("video/mp4"), MediaType::Video);
        assert_eq!(MediaType::from_mime("video/quicktime"), MediaType::Video);
        // The transport only admits images and videos, so anything that
        // isn't an image lands in the video bucket.
        assert_eq!(MediaType::from_mime("application/mp4"), MediaType::Video);
    }
}
