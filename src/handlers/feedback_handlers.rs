use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::SiteSettings;
use crate::errors::{AppError, render};
use crate::models::feedback::{self, FeedbackForm, FeedbackStore, SubmitError};
use crate::session::{csrf, flash};
use crate::templates_structs::{FeedbackFormTemplate, PageContext, ThanksTemplate};

/// GET /
/// Renders the empty feedback form.
pub async fn form_page(
    session: Session,
    site: web::Data<SiteSettings>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &site, "/");
    render(FeedbackFormTemplate::new(ctx, FeedbackForm::default()))
}

/// POST /feedback
/// Validates and stores a submission. Invalid input or a failed insert
/// re-renders the form with everything the passenger entered.
pub async fn submit<S: FeedbackStore>(
    store: web::Data<S>,
    session: Session,
    site: web::Data<SiteSettings>,
    form: web::Form<FeedbackForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let form = form.into_inner();
    let submission = form.to_submission();

    match feedback::submit_feedback(store.get_ref(), &submission).await {
        Ok(record) => {
            log::info!(
                "Stored feedback {} (category={}, rating={}, anonymous={})",
                record.id,
                record.category,
                record.rating,
                record.is_anonymous
            );
            flash::set_flash(&session, "Thank you for helping us improve our services.");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/feedback/thanks"))
                .finish())
        }
        Err(SubmitError::Validation(errors)) => {
            log::debug!("Rejected feedback submission: {errors}");
            let ctx = PageContext::build(&session, &site, "/");
            render(FeedbackFormTemplate::new(ctx, form).with_errors(errors))
        }
        Err(SubmitError::Storage(e)) => {
            log::error!("Error submitting feedback: {e}");
            let ctx = PageContext::build(&session, &site, "/");
            let notice = format!("Error submitting feedback: {e}");
            render(FeedbackFormTemplate::new(ctx, form).with_notice(notice))
        }
    }
}

/// GET /feedback/thanks
pub async fn thanks(
    session: Session,
    site: web::Data<SiteSettings>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &site, "/feedback/thanks");
    render(ThanksTemplate { ctx })
}
