//! The generation endpoint.
//!
//! `POST /generate` accepts the studio form as `multipart/form-data`, encodes
//! uploaded images as `data:` URIs, runs the configured [`ContentWorkflow`] and
//! answers with its final text and media.
//!
//! [`ContentWorkflow`]: crate::workflow::ContentWorkflow

use actix_web::web::{post, resource};
use actix_web::Resource;
use common::requests::GENERATE_PATH;

mod error;
mod form;
mod process;

pub use form::UploadLimit;

/// Configures and returns the Actix resource for the generation route.
pub fn configure_routes() -> Resource {
    resource(GENERATE_PATH).route(post().to(process::process))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use actix_web::http::header;
    use actix_web::{test, web, App};
    use async_trait::async_trait;
    use common::model::generation::{GeneratedMedia, GenerationResult};
    use common::requests::{fields, GenerationRequest};
    use serde_json::{json, Value};

    use super::*;
    use crate::workflow::{ContentWorkflow, UnconfiguredWorkflow, WorkflowError};

    const BOUNDARY: &str = "studio-test-boundary";

    #[derive(Default)]
    struct RecordingWorkflow {
        seen: Mutex<Vec<GenerationRequest>>,
        reply: GenerationResult,
    }

    #[async_trait]
    impl ContentWorkflow for RecordingWorkflow {
        async fn invoke(&self, request: GenerationRequest) -> Result<GenerationResult, WorkflowError> {
            self.seen.lock().unwrap().push(request);
            Ok(self.reply.clone())
        }
    }

    enum Part<'a> {
        Text(&'a str, &'a str),
        File {
            name: &'a str,
            filename: &'a str,
            content_type: &'a str,
            bytes: &'a [u8],
        },
    }

    fn multipart_body(parts: &[Part]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                            .as_bytes(),
                    );
                }
                Part::File {
                    name,
                    filename,
                    content_type,
                    bytes,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                    body.extend_from_slice(b"\r\n");
                }
            }
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn required_parts<'a>() -> Vec<Part<'a>> {
        vec![
            Part::Text(fields::PLATFORM, "X"),
            Part::Text(fields::INTENT, "PAID_AD"),
            Part::Text(fields::CONTENT_IDEA, "AI-powered content generation"),
            Part::Text(fields::DESCRIPTION, "A tool for freelance marketers."),
        ]
    }

    async fn post_form(workflow: Arc<dyn ContentWorkflow>, parts: &[Part<'_>]) -> (u16, Value) {
        post_form_with_limit(workflow, UploadLimit(1024 * 1024), parts).await
    }

    async fn post_form_with_limit(
        workflow: Arc<dyn ContentWorkflow>,
        limit: UploadLimit,
        parts: &[Part<'_>],
    ) -> (u16, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(workflow))
                .app_data(web::Data::new(limit))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(GENERATE_PATH)
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_body(parts))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn forwards_form_and_wraps_reply() {
        let workflow = Arc::new(RecordingWorkflow {
            reply: GenerationResult {
                generated_text: Some("Ship faster.".to_string()),
                generated_media_url: Some(GeneratedMedia::Carousel(vec!["u1".into(), "u2".into()])),
                ..Default::default()
            },
            ..Default::default()
        });

        let mut parts = required_parts();
        parts.push(Part::Text(fields::USER_MEDIA_CHOICE, "photo_carousel"));
        parts.push(Part::File {
            name: fields::REFERENCE_IMAGE,
            filename: "ref.png",
            content_type: "image/png",
            bytes: &[1, 2, 3],
        });
        let (status, body) = post_form(workflow.clone(), &parts).await;

        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!({
                "status": "success",
                "generated_text": "Ship faster.",
                "generated_media_url": ["u1", "u2"],
                "errors": []
            })
        );

        let seen = workflow.seen.lock().unwrap();
        let request = &seen[0];
        assert_eq!(request.platform, "X");
        assert_eq!(request.user_media_choice.as_deref(), Some("photo_carousel"));
        assert_eq!(request.user_inputs.reference_text, "");
        assert_eq!(
            request.uploaded_files.reference_image.as_deref(),
            Some("data:image/png;base64,AQID")
        );
        assert!(request.uploaded_files.video_init_image.is_none());
    }

    #[actix_web::test]
    async fn empty_file_input_is_treated_as_absent() {
        let workflow = Arc::new(RecordingWorkflow::default());
        let mut parts = required_parts();
        parts.push(Part::File {
            name: fields::VIDEO_INIT_IMAGE,
            filename: "",
            content_type: "application/octet-stream",
            bytes: &[],
        });

        let (status, _) = post_form(workflow.clone(), &parts).await;

        assert_eq!(status, 200);
        assert!(workflow.seen.lock().unwrap()[0]
            .uploaded_files
            .video_init_image
            .is_none());
    }

    #[actix_web::test]
    async fn pipeline_errors_are_passed_through() {
        let workflow = Arc::new(RecordingWorkflow {
            reply: GenerationResult {
                errors: Some(vec!["Media Producer failed: quota exceeded".to_string()]),
                ..Default::default()
            },
            ..Default::default()
        });

        let (status, body) = post_form(workflow, &required_parts()).await;

        assert_eq!(status, 200);
        assert_eq!(body["errors"], json!(["Media Producer failed: quota exceeded"]));
        assert_eq!(body["generated_text"], Value::Null);
    }

    #[actix_web::test]
    async fn missing_required_field_is_unprocessable() {
        let workflow = Arc::new(RecordingWorkflow::default());
        let parts = vec![Part::Text(fields::PLATFORM, "X")];

        let (status, body) = post_form(workflow.clone(), &parts).await;

        assert_eq!(status, 422);
        assert_eq!(body["detail"], "missing required field: intent");
        assert!(workflow.seen.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn oversized_upload_is_rejected() {
        let workflow = Arc::new(RecordingWorkflow::default());
        let image = [7u8; 256];
        let mut parts = required_parts();
        parts.push(Part::File {
            name: fields::REFERENCE_IMAGE,
            filename: "large.png",
            content_type: "image/png",
            bytes: &image,
        });

        let (status, body) = post_form_with_limit(workflow.clone(), UploadLimit(128), &parts).await;

        assert_eq!(status, 413);
        assert_eq!(body["detail"], "upload exceeds the limit of 128 bytes");
        assert!(workflow.seen.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unconfigured_workflow_is_server_error() {
        let (status, body) = post_form(Arc::new(UnconfiguredWorkflow), &required_parts()).await;

        assert_eq!(status, 500);
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Workflow app not initialized"));
    }
}
