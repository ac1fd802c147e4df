//! Wire contract of `POST /generate`.
//!
//! The browser sends `multipart/form-data` using the names in [`fields`]; the
//! gateway turns it into a [`GenerationRequest`] for the content pipeline.

use serde::{Deserialize, Serialize};

/// Path of the generation endpoint.
pub const GENERATE_PATH: &str = "/generate";

/// Client-side wait before a request is aborted.
pub const DEFAULT_TIMEOUT_MS: u32 = 120_000;

/// Multipart field names shared by the form and the gateway.
pub mod fields {
    pub const PLATFORM: &str = "platform";
    pub const INTENT: &str = "intent";
    pub const CONTENT_IDEA: &str = "content_idea";
    pub const DESCRIPTION: &str = "description";
    pub const REFERENCE_TEXT: &str = "reference_text";
    pub const USER_MEDIA_CHOICE: &str = "user_media_choice";
    pub const REFERENCE_IMAGE: &str = "reference_image";
    pub const VIDEO_INIT_IMAGE: &str = "video_init_image";

    /// Text fields the gateway refuses to run without.
    pub const REQUIRED: [&str; 4] = [PLATFORM, INTENT, CONTENT_IDEA, DESCRIPTION];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInputs {
    pub content_idea: String,
    pub description: String,
    /// Empty string when the form left it blank.
    pub reference_text: String,
}

/// Uploaded files as `data:` URIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadedFiles {
    pub reference_image: Option<String>,
    pub video_init_image: Option<String>,
}

/// Initial state handed to the content pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub platform: String,
    pub intent: String,
    pub user_inputs: UserInputs,
    pub uploaded_files: UploadedFiles,
    pub user_media_choice: Option<String>,
    pub errors: Vec<String>,
}
