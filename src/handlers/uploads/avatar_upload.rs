use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::upload::{AvatarUploadCompleteRequest, AvatarUploadCompleteResponse};
use crate::services::{ChatService, UploadTransportService};
use crate::utils::file_url;

/// Handle the transport's upload-complete callback for the avatar route.
///
/// The previous avatar file (if any) is deleted best-effort; the new
/// public URL is then written to the user row and mirrored into the
/// chat backend. Both writes are issued together and both must succeed.
#[tracing::instrument(
    name = "Avatar upload complete",
    skip(body, claims, pool, transport, chat),
    fields(username = %claims.username)
)]
pub async fn avatar_upload_complete(
    body: web::Json<AvatarUploadCompleteRequest>,
    claims: web::ReqData<Claims>,
    pool: web::Data<PgPool>,
    transport: web::Data<UploadTransportService>,
    chat: web::Data<ChatService>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        tracing::error!("Invalid user ID in claims");
        return HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Unauthorized"));
    };

    // Completion context: the authenticated user row, carrying the
    // previous avatar URL.
    let user = match db::users::get_user_by_id(pool.get_ref(), user_id).await {
        Ok(Some(user)) => user,
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
    };

    // Remove the stale remote file. Best effort: a failed deletion is
    // logged and otherwise ignored.
    if let Some(old_avatar_url) = user.avatar_url.as_deref() {
        match file_url::deletion_key(old_avatar_url, transport.app_id()) {
            Some(key) => {
                if let Err(e) = transport.delete_file(key).await {
                    tracing::warn!("Failed to delete previous avatar file {}: {}", key, e);
                }
            }
            None => {
                tracing::warn!("Previous avatar URL carries no deletion key: {}", old_avatar_url);
            }
        }
    }

    let new_avatar_url = file_url::public_url(&body.file.url, transport.app_id());

    // Update the user row and the chat profile together; the response
    // is only produced after both writes settle.
    let (db_result, chat_result) = tokio::join!(
        db::users::update_avatar_url(pool.get_ref(), user_id, &new_avatar_url),
        chat.partial_update_user_image(user_id, &new_avatar_url),
    );

    if let Err(e) = db_result {
        tracing::error!("Failed to update avatar URL for user {}: {}", user_id, e);
        return HttpResponse::InternalServerError().json(
            ApiResponse::<()>::error("Failed to update avatar")
        );
    }
    if let Err(e) = chat_result {
        tracing::error!("Failed to update chat profile image for user {}: {}", user_id, e);
        return HttpResponse::InternalServerError().json(
            ApiResponse::<()>::error("Failed to update chat profile")
        );
    }

    tracing::info!("Avatar updated for user {}: {}", user_id, new_avatar_url);

    HttpResponse::Ok().json(ApiResponse::success(
        "Avatar updated successfully",
        AvatarUploadCompleteResponse {
            avatar_url: new_avatar_url,
        },
    ))
}
