//! HTTP surface for the upload pipeline. Thin wrappers only; the business
//! logic lives in the service layer.

use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::upload::ProcessResponse;
use crate::forms::upload::UploadForm;
use crate::publisher::youtube::YoutubePublisher;
use crate::services::upload::process_upload;

#[post("/v1/process")]
pub async fn process_video(
    form: MultipartForm<UploadForm>,
    publisher: web::Data<YoutubePublisher>,
) -> impl Responder {
    // The form owns the uploaded temp file; it must outlive the publish call.
    let form = form.into_inner();

    let (payload, media) = match form.parse() {
        Ok(parsed) => parsed,
        Err(e) => return HttpResponse::BadRequest().json(ProcessResponse::error(e.to_string())),
    };

    match process_upload(payload, media, publisher.get_ref()).await {
        Ok(summary) => HttpResponse::Ok().json(ProcessResponse::ok(summary)),
        Err(e) if e.is_validation() => {
            HttpResponse::BadRequest().json(ProcessResponse::error(e.to_string()))
        }
        Err(e) => {
            log::error!("Upload processing failed: {e}");
            HttpResponse::InternalServerError().json(ProcessResponse::error(e.to_string()))
        }
    }
}
