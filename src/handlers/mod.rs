pub mod api_v1;
pub mod dashboard;
pub mod feedback_handlers;

use actix_web::{web, HttpResponse};

use crate::models::feedback::FeedbackStore;

const NOT_FOUND_PAGE: &str = include_str!("../../templates/errors/404.html");

/// Register every route against the given store type.
pub fn configure<S: FeedbackStore>(cfg: &mut web::ServiceConfig) {
    cfg
        // Public feedback form
        .route("/", web::get().to(feedback_handlers::form_page))
        .route("/feedback", web::post().to(feedback_handlers::submit::<S>))
        .route("/feedback/thanks", web::get().to(feedback_handlers::thanks))
        // Admin dashboard
        .route("/admin", web::get().to(dashboard::index::<S>))
        .route("/health", web::get().to(health))
        // JSON API
        .service(web::scope("/api/v1").configure(api_v1::configure::<S>));
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}

/// Default 404 handler (register last).
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_PAGE)
}
