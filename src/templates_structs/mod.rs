// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::config::SiteSettings;
use crate::session::{csrf, flash};

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, site: &SiteSettings, current_path: &str) -> Self {
        Self {
            app_name: site.app_name.clone(),
            flash: flash::take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        }
    }

    /// Nav link state for the header.
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}

mod api;
mod dashboard;
mod feedback;

pub use self::api::{ApiErrorResponse, StatsResponse};
pub use self::dashboard::{DashboardTab, DashboardTemplate, RecentFeedbackView};
pub use self::feedback::{CategoryChoice, FeedbackFormTemplate, RatingChoice, ThanksTemplate};
