use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Per-route upload constraints. Enforcement happens on the transport's
// side; this is the declarative surface it consumes.
const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

pub const MAX_AVATAR_SIZE: u64 = 512 * KB;
pub const MAX_ATTACHMENT_IMAGE_SIZE: u64 = 4 * MB;
pub const MAX_ATTACHMENT_VIDEO_SIZE: u64 = 64 * MB;
pub const MAX_ATTACHMENT_FILE_COUNT: u32 = 5;

/// Size/count limits for one accepted MIME category on a route.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeLimits {
    pub max_file_size: u64,
    pub max_file_count: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AvatarRouteConfig {
    pub image: FileTypeLimits,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AttachmentRouteConfig {
    pub image: FileTypeLimits,
    pub video: FileTypeLimits,
}

/// The two named upload routes and their accepted categories.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FileRouterConfig {
    pub avatar: AvatarRouteConfig,
    pub attachment: AttachmentRouteConfig,
}

impl FileRouterConfig {
    pub fn new() -> Self {
        Self {
            avatar: AvatarRouteConfig {
                image: FileTypeLimits {
                    max_file_size: MAX_AVATAR_SIZE,
                    max_file_count: 1,
                },
            },
            attachment: AttachmentRouteConfig {
                image: FileTypeLimits {
                    max_file_size: MAX_ATTACHMENT_IMAGE_SIZE,
                    max_file_count: MAX_ATTACHMENT_FILE_COUNT,
                },
                video: FileTypeLimits {
                    max_file_size: MAX_ATTACHMENT_VIDEO_SIZE,
                    max_file_count: MAX_ATTACHMENT_FILE_COUNT,
                },
            },
        }
    }
}

impl Default for FileRouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Completed-file descriptor delivered by the upload transport. The URL
/// is the raw storage URL (`.../f/<key>` form), not the public one.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompletedFile {
    pub url: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvatarUploadCompleteRequest {
    pub file: CompletedFile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvatarUploadCompleteResponse {
    pub avatar_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttachmentUploadCompleteRequest {
    pub files: Vec<CompletedFile>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttachmentUploadCompleteResponse {
    pub media_ids: Vec<Uuid>,
}
