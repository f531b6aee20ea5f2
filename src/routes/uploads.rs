use actix_web::{web, HttpResponse};

use crate::handlers::uploads::{attachment_upload, avatar_upload, router_config};
use crate::middleware::auth::Claims;
use crate::models::upload::{AttachmentUploadCompleteRequest, AvatarUploadCompleteRequest};
use crate::services::{ChatService, UploadTransportService};

pub async fn router_config_route(
    transport: web::Data<UploadTransportService>,
) -> HttpResponse {
    router_config::get_file_router_config(transport).await
}

async fn avatar_complete(
    body: web::Json<AvatarUploadCompleteRequest>,
    claims: web::ReqData<Claims>,
    pool: web::Data<sqlx::PgPool>,
    transport: web::Data<UploadTransportService>,
    chat: web::Data<ChatService>,
) -> HttpResponse {
    avatar_upload::avatar_upload_complete(body, claims, pool, transport, chat).await
}

async fn attachment_complete(
    body: web::Json<AttachmentUploadCompleteRequest>,
    claims: web::ReqData<Claims>,
    pool: web::Data<sqlx::PgPool>,
    transport: web::Data<UploadTransportService>,
) -> HttpResponse {
    attachment_upload::attachment_upload_complete(body, claims, pool, transport).await
}

pub fn init_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/avatar/complete")
            .route(web::post().to(avatar_complete))
    );
    cfg.service(
        web::resource("/attachment/complete")
            .route(web::post().to(attachment_complete))
    );
}
