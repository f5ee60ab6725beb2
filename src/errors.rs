use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

/// Failures a page handler can't turn into a rendered page itself.
/// Validation and storage problems are shown on the form, not raised here.
#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Csrf,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Csrf => write!(f, "Invalid or missing CSRF token"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Csrf => HttpResponse::Forbidden().body("Invalid or missing CSRF token"),
            AppError::Template(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into an HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn csrf_maps_to_forbidden() {
        assert_eq!(AppError::Csrf.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn template_failure_maps_to_500() {
        let err = AppError::Template(askama::Error::Fmt);
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
