pub mod feedback;

use actix_web::{
    web, Error, HttpRequest, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError},
    middleware::Next,
};

use crate::models::feedback::FeedbackStore;
use crate::templates_structs::ApiErrorResponse;

/// CSRF protection for REST API mutation endpoints.
///
/// Rejects POST/PUT/DELETE requests that don't have Content-Type: application/json.
/// Browsers cannot send cross-origin JSON with cookies via a simple form POST,
/// so the Content-Type check guards against CSRF without tokens.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == actix_web::http::Method::POST
        || method == actix_web::http::Method::PUT
        || method == actix_web::http::Method::DELETE
    {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = ApiErrorResponse::new(
                "Content-Type must be application/json for mutation requests",
            );
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Malformed JSON bodies get the same error shape as every other API failure.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let body = ApiErrorResponse::new("Malformed request body").with_details(err.to_string());
    let response = HttpResponse::BadRequest().json(body);
    InternalError::from_response(err, response).into()
}

/// Configure API v1 routes.
pub fn configure<S: FeedbackStore>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/feedback")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::post().to(feedback::create::<S>))
            .route("/stats", web::get().to(feedback::stats::<S>))
    );
}
