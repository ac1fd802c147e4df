use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::generation::GenerationResult;
use log::{error, info, warn};
use uuid::Uuid;

use crate::workflow::ContentWorkflow;

use super::error::GatewayError;
use super::form::{read_form, UploadLimit};

/// HTTP handler for `POST /generate`.
///
/// - On success: `200 OK` with `{ "status": "success", generated_text,
///   generated_media_url, errors }`; `errors` is always a list.
/// - On failure: the status of the matching [`GatewayError`] with a `detail`.
pub async fn process(
    payload: Multipart,
    workflow: web::Data<dyn ContentWorkflow>,
    limit: web::Data<UploadLimit>,
) -> Result<HttpResponse, GatewayError> {
    let request_id = Uuid::new_v4();

    let form = read_form(payload, **limit).await.inspect_err(|e| {
        warn!("generate[{}]: rejected payload: {}", request_id, e);
    })?;
    let request = form.into_request().inspect_err(|e| {
        warn!("generate[{}]: {}", request_id, e);
    })?;

    info!(
        "generate[{}]: platform={} intent={} media_choice={} reference_image={} video_init_image={}",
        request_id,
        request.platform,
        request.intent,
        request.user_media_choice.as_deref().unwrap_or("-"),
        request.uploaded_files.reference_image.is_some(),
        request.uploaded_files.video_init_image.is_some(),
    );

    let output = workflow.invoke(request).await.inspect_err(|e| {
        error!("generate[{}]: workflow failed: {}", request_id, e);
    })?;

    if output.has_errors() {
        warn!(
            "generate[{}]: pipeline reported {} error(s)",
            request_id,
            output.reported_errors().len()
        );
    } else {
        info!("generate[{}]: completed", request_id);
    }

    Ok(HttpResponse::Ok().json(GenerationResult {
        status: Some("success".to_string()),
        errors: Some(output.errors.unwrap_or_default()),
        ..output
    }))
}
