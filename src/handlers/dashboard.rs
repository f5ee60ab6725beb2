use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::config::SiteSettings;
use crate::errors::{AppError, render};
use crate::models::dashboard::{self, AggregateStats, DashboardInsights};
use crate::models::feedback::{FeedbackRecord, FeedbackStore};
use crate::templates_structs::{DashboardTab, DashboardTemplate, PageContext};

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
}

/// Fetch every record and summarize it. A failed fetch degrades to zero
/// stats with a logged diagnostic instead of failing the page.
pub async fn load_stats<S: FeedbackStore>(store: &S) -> (Vec<FeedbackRecord>, AggregateStats) {
    match store.list_all().await {
        Ok(records) => {
            let stats = dashboard::aggregate(&records);
            (records, stats)
        }
        Err(e) => {
            log::error!("Error fetching feedback stats: {e}");
            (Vec::new(), AggregateStats::default())
        }
    }
}

/// GET /admin?tab=overview|feedback|analytics
pub async fn index<S: FeedbackStore>(
    store: web::Data<S>,
    session: Session,
    site: web::Data<SiteSettings>,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let (records, stats) = load_stats(store.get_ref()).await;
    let insights = DashboardInsights::build(&records, &stats, Utc::now());

    let ctx = PageContext::build(&session, &site, "/admin");
    let tab = DashboardTab::from_query(query.tab.as_deref());
    render(DashboardTemplate::new(ctx, tab, &stats, insights))
}
