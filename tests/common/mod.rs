//! Shared test infrastructure.
//!
//! Every test runs against `MemoryFeedbackStore`, so no database is needed.
//!
//! # Helpers
//! - `valid_submission()` - a submission that passes every rule
//! - `record()` - a stored record with a chosen category, rating and age
//! - `session_middleware()` / `site_data()` - pieces for `test::init_service`

#![allow(dead_code)]

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::web;
use chrono::{Duration, Utc};
use uuid::Uuid;

use airport_feedback::config::SiteSettings;
use airport_feedback::models::feedback::{
    Category, FeedbackRecord, FeedbackSubmission, Rating, RatingInput,
};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TEST_NAME: &str = "Grace Namutebi";
pub const TEST_EMAIL: &str = "grace@example.com";
pub const TEST_APP_NAME: &str = "Test Airport Feedback";

// ============================================================================
// FIXTURES
// ============================================================================

/// A submission that satisfies every field rule.
pub fn valid_submission() -> FeedbackSubmission {
    FeedbackSubmission {
        passenger_name: TEST_NAME.to_string(),
        passenger_email: TEST_EMAIL.to_string(),
        flight_number: Some("UR 430".to_string()),
        departure_date: Some("2025-03-14".to_string()),
        category: "baggage".to_string(),
        rating: RatingInput::Whole(4),
        title: "Smooth baggage claim".to_string(),
        comment: "Bags arrived within fifteen minutes of landing.".to_string(),
        is_anonymous: false,
    }
}

/// A stored record created `minutes_ago` minutes before now.
pub fn record(category: Category, rating: i64, minutes_ago: i64) -> FeedbackRecord {
    let created_at = Utc::now() - Duration::minutes(minutes_ago);
    FeedbackRecord {
        id: Uuid::new_v4(),
        passenger_name: TEST_NAME.to_string(),
        passenger_email: TEST_EMAIL.to_string(),
        flight_number: None,
        departure_date: None,
        category,
        rating: Rating::new(rating).expect("test rating in range"),
        title: format!("{} feedback", category.label()),
        comment: "Comment long enough to be valid.".to_string(),
        is_anonymous: false,
        created_at,
        updated_at: created_at,
    }
}

/// Records ordered newest first, as the store hands them out.
pub fn records_newest_first(entries: &[(Category, i64)]) -> Vec<FeedbackRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (category, rating))| record(*category, *rating, i as i64))
        .collect()
}

// ============================================================================
// APP SETUP
// ============================================================================

pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_secure(false)
        .build()
}

pub fn site_data() -> web::Data<SiteSettings> {
    web::Data::new(SiteSettings { app_name: TEST_APP_NAME.to_string() })
}
