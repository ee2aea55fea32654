use actix_web::web;

use crate::handlers;
use crate::openapi;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api-docs/openapi.json", web::get().to(openapi::openapi_json))
        .service(
            web::scope("/users")
                // Must be before /{id} to avoid conflict
                .route("/health", web::get().to(handlers::health_check))
                .route("", web::get().to(handlers::get_users))
                .route("", web::post().to(handlers::create_user))
                .route("/{id}", web::get().to(handlers::get_user))
                .route("/{id}", web::put().to(handlers::update_user))
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}
