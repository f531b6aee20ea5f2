use actix_web::{web, HttpResponse};

use crate::services::UploadTransportService;

/// Serve the declarative per-route upload constraints. The upload
/// transport reads this when registering the routes; enforcement of the
/// limits is entirely on its side.
pub async fn get_file_router_config(
    transport: web::Data<UploadTransportService>,
) -> HttpResponse {
    HttpResponse::Ok().json(transport.file_router())
}
