//! Reads the `multipart/form-data` body of `/generate`.
//!
//! Text parts are collected by name; file parts are buffered in memory and
//! later turned into `data:` URIs. A file input left empty in the browser still
//! sends a part with an empty filename and no bytes; such parts are dropped.

use std::collections::HashMap;

use actix_multipart::Multipart;
use base64::{engine::general_purpose, Engine as _};
use common::requests::{fields, GenerationRequest, UploadedFiles, UserInputs};
use futures_util::StreamExt;

use super::error::GatewayError;

const OCTET_STREAM: &str = "application/octet-stream";

/// Maximum number of body bytes accepted per request.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Declared MIME type, else a guess from the file name, else
    /// `application/octet-stream`.
    pub fn media_type(&self) -> String {
        match self.content_type.as_deref() {
            Some(declared) if declared != OCTET_STREAM => declared.to_string(),
            _ => mime_guess::from_path(&self.filename)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        }
    }

    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type(),
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

#[derive(Debug, Default)]
pub struct GenerateForm {
    text: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl GenerateForm {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.text.get(name).map(String::as_str)
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }

    fn required(&self, name: &'static str) -> Result<String, GatewayError> {
        self.text(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or(GatewayError::MissingField(name))
    }

    /// Builds the pipeline's initial state. Required fields are checked in
    /// [`fields::REQUIRED`] order.
    pub fn into_request(self) -> Result<GenerationRequest, GatewayError> {
        Ok(GenerationRequest {
            platform: self.required(fields::PLATFORM)?,
            intent: self.required(fields::INTENT)?,
            user_inputs: UserInputs {
                content_idea: self.required(fields::CONTENT_IDEA)?,
                description: self.required(fields::DESCRIPTION)?,
                reference_text: self.text(fields::REFERENCE_TEXT).unwrap_or_default().to_string(),
            },
            uploaded_files: UploadedFiles {
                reference_image: self.file(fields::REFERENCE_IMAGE).map(UploadedFile::to_data_uri),
                video_init_image: self.file(fields::VIDEO_INIT_IMAGE).map(UploadedFile::to_data_uri),
            },
            user_media_choice: self
                .text(fields::USER_MEDIA_CHOICE)
                .map(str::trim)
                .filter(|choice| !choice.is_empty())
                .map(str::to_string),
            errors: Vec::new(),
        })
    }
}

/// Drains `payload`, rejecting bodies larger than `limit` bytes in total.
pub async fn read_form(mut payload: Multipart, limit: UploadLimit) -> Result<GenerateForm, GatewayError> {
    let mut form = GenerateForm::default();
    let mut received = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(|n| n.to_string()),
                cd.get_filename().map(|f| f.to_string()),
            ),
            None => (None, None),
        };
        let content_type = field.content_type().map(|mime| mime.essence_str().to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            received += chunk.len();
            if received > limit.0 {
                return Err(GatewayError::PayloadTooLarge(limit.0));
            }
            bytes.extend_from_slice(&chunk);
        }

        let Some(name) = name else { continue };
        match filename {
            Some(filename) => {
                if filename.is_empty() || bytes.is_empty() {
                    continue;
                }
                form.files.insert(
                    name,
                    UploadedFile {
                        filename,
                        content_type,
                        bytes,
                    },
                );
            }
            None => {
                let value = String::from_utf8(bytes)
                    .map_err(|_| GatewayError::Multipart(format!("field {name} is not valid UTF-8")))?;
                form.text.insert(name, value);
            }
        }
    }

    Ok(form)
}
