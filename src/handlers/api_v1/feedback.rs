use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::errors::AppError;
use crate::handlers::dashboard::load_stats;
use crate::models::dashboard::DashboardInsights;
use crate::models::feedback::{self, FeedbackStore, FeedbackSubmission, SubmitError};
use crate::templates_structs::{ApiErrorResponse, StatsResponse};

/// POST /api/v1/feedback - Validate and store a submission
pub async fn create<S: FeedbackStore>(
    store: web::Data<S>,
    body: web::Json<FeedbackSubmission>,
) -> Result<HttpResponse, AppError> {
    match feedback::submit_feedback(store.get_ref(), &body).await {
        Ok(record) => {
            log::info!("Stored feedback {} via API", record.id);
            Ok(HttpResponse::Created().json(record))
        }
        Err(SubmitError::Validation(errors)) => {
            let body = ApiErrorResponse::new("Validation failed").with_fields(errors.fields);
            Ok(HttpResponse::UnprocessableEntity().json(body))
        }
        Err(SubmitError::Storage(e)) => {
            log::error!("Error submitting feedback via API: {e}");
            let body = ApiErrorResponse::new("Error submitting feedback").with_details(e.message());
            Ok(HttpResponse::BadGateway().json(body))
        }
    }
}

/// GET /api/v1/feedback/stats - Aggregate stats plus dashboard insights
pub async fn stats<S: FeedbackStore>(store: web::Data<S>) -> Result<HttpResponse, AppError> {
    let (records, stats) = load_stats(store.get_ref()).await;
    let insights = DashboardInsights::build(&records, &stats, Utc::now());
    Ok(HttpResponse::Ok().json(StatsResponse { stats, insights }))
}
