use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::media::MediaType;
use crate::models::upload::{AttachmentUploadCompleteRequest, AttachmentUploadCompleteResponse};
use crate::services::UploadTransportService;
use crate::utils::file_url;

/// Handle the transport's upload-complete callback for the attachment
/// route. Each completed file becomes exactly one media row.
#[tracing::instrument(
    name = "Attachment upload complete",
    skip(body, claims, pool, transport),
    fields(username = %claims.username, file_count = body.files.len())
)]
pub async fn attachment_upload_complete(
    body: web::Json<AttachmentUploadCompleteRequest>,
    claims: web::ReqData<Claims>,
    pool: web::Data<PgPool>,
    transport: web::Data<UploadTransportService>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        tracing::error!("Invalid user ID in claims");
        return HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Unauthorized"));
    };

    // The gate only needs an existing user here; no context is carried
    // into the completion handling.
    match db::users::get_user_by_id(pool.get_ref(), user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::warn!("No user record for authenticated session {}", user_id);
            return HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Unauthorized"));
        }
        Err(e) => {
            tracing::error!("Failed to load user {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(
                ApiResponse::<()>::error("Failed to load user")
            );
        }
    }

    if body.files.is_empty() {
        return HttpResponse::BadRequest().json(
            ApiResponse::<()>::error("No completed files in callback")
        );
    }

    let mut media_ids = Vec::with_capacity(body.files.len());
    for file in &body.files {
        let url = file_url::public_url(&file.url, transport.app_id());
        let media_type = MediaType::from_mime(&file.mime_type);

        match db::media::insert_media(pool.get_ref(), &url, media_type).await {
            Ok(media) => {
                tracing::info!("Stored {:?} attachment {} at {}", media_type, media.id, url);
                media_ids.push(media.id);
            }
            Err(e) => {
                tracing::error!("Failed to store attachment {}: {}", url, e);
                return HttpResponse::InternalServerError().json(
                    ApiResponse::<()>::error("Failed to store attachment")
                );
            }
        }
    }

    HttpResponse::Ok().json(ApiResponse::success(
        "Attachments stored successfully",
        AttachmentUploadCompleteResponse { media_ids },
    ))
}
