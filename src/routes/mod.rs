use actix_web::web;

pub mod backend_health;
pub mod uploads;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Consumed by the upload transport when registering routes
    cfg.service(
        web::resource("/uploads/router-config")
            .route(web::get().to(uploads::router_config_route))
    );

    // Upload-complete callbacks (require authentication)
    cfg.service(
        web::scope("/uploads")
            .wrap(AuthMiddleware)
            .configure(uploads::init_upload_routes)
    );
}
