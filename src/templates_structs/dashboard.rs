use askama::Template;

use crate::models::dashboard::{AggregateStats, DashboardInsights, RatingTone};
use crate::models::feedback::{FeedbackRecord, Rating};

use super::PageContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Feedback,
    Analytics,
}

impl DashboardTab {
    /// Unknown or missing values fall back to the overview.
    pub fn from_query(tab: Option<&str>) -> Self {
        match tab {
            Some("feedback") => DashboardTab::Feedback,
            Some("analytics") => DashboardTab::Analytics,
            _ => DashboardTab::Overview,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Feedback => "feedback",
            DashboardTab::Analytics => "analytics",
        }
    }
}

/// Five-character star strip, filled up to `filled`.
fn star_strip(filled: u8) -> String {
    (1..=Rating::MAX)
        .map(|i| if i <= filled { '★' } else { '☆' })
        .collect()
}

/// One entry of the "Recent Feedback" tab, preformatted for display.
pub struct RecentFeedbackView {
    pub title: String,
    pub display_name: String,
    pub category_label: &'static str,
    pub created_on: String,
    pub rating: u8,
    pub stars: String,
    pub tone_class: &'static str,
    pub flight_number: Option<String>,
    pub comment: String,
}

impl From<&FeedbackRecord> for RecentFeedbackView {
    fn from(r: &FeedbackRecord) -> Self {
        RecentFeedbackView {
            title: r.title.clone(),
            display_name: r.display_name().to_string(),
            category_label: r.category.label(),
            created_on: r.created_at.format("%b %d, %Y").to_string(),
            rating: r.rating.value(),
            stars: star_strip(r.rating.value()),
            tone_class: RatingTone::for_rating(r.rating).css_class(),
            flight_number: r.flight_number.clone(),
            comment: r.comment.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub tab: DashboardTab,
    pub total: usize,
    pub average_display: String,
    pub average_stars: String,
    pub this_month: usize,
    pub satisfaction_display: String,
    pub insights: DashboardInsights,
    pub top_category_label: String,
    pub recent: Vec<RecentFeedbackView>,
}

impl DashboardTemplate {
    pub fn new(
        ctx: PageContext,
        tab: DashboardTab,
        stats: &AggregateStats,
        insights: DashboardInsights,
    ) -> Self {
        let rounded = stats.average_rating.round().clamp(0.0, f64::from(Rating::MAX)) as u8;
        let top_category_label = insights
            .top_category
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| "No data".to_string());
        Self {
            ctx,
            tab,
            total: stats.total,
            average_display: format!("{:.1}", stats.average_rating),
            average_stars: star_strip(rounded),
            this_month: insights.this_month,
            satisfaction_display: format!("{:.1}%", insights.satisfaction_rate),
            top_category_label,
            recent: stats.recent_feedback.iter().map(RecentFeedbackView::from).collect(),
            insights,
        }
    }
}
