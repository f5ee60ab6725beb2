use std::fmt;

use serde::Serialize;

use crate::validate::{normalize_optional, validate_email, validate_min_len};
use super::category::Category;
use super::store::{FeedbackStore, StorageError};
use super::types::{
    ANONYMOUS_NAME, FeedbackRecord, FeedbackSubmission, NewFeedback, Rating, RatingInput,
};

pub const NAME_MIN_LEN: usize = 2;
pub const TITLE_MIN_LEN: usize = 5;
pub const COMMENT_MIN_LEN: usize = 10;

/// One violated field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Every field rule a submission violated, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.iter().any(|e| e.field == field)
    }

    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// First message for a field, for inline display next to the input.
    pub fn first_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields.iter().map(|e| e.message.as_str()).collect();
        write!(f, "Invalid feedback: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Validate a candidate submission, reporting all violations at once.
///
/// On success the name is replaced with "Anonymous" when requested and blank
/// optional fields become `None`.
pub fn validate_submission(sub: &FeedbackSubmission) -> Result<NewFeedback, ValidationError> {
    let mut errors = Vec::new();

    if let Some(msg) = validate_min_len(&sub.passenger_name, "Name", NAME_MIN_LEN) {
        errors.push(FieldError::new("passenger_name", msg));
    }
    if let Some(msg) = validate_email(&sub.passenger_email) {
        errors.push(FieldError::new("passenger_email", msg));
    }

    let category = Category::from_code(sub.category.trim());
    if category.is_none() {
        errors.push(FieldError::new("category", "Please select a valid category"));
    }

    let rating = match sub.rating {
        RatingInput::Missing => {
            errors.push(FieldError::new("rating", "Please provide a rating"));
            None
        }
        RatingInput::Invalid => {
            errors.push(FieldError::new("rating", "Rating must be a whole number between 1 and 5"));
            None
        }
        RatingInput::Whole(value) => {
            let rating = Rating::new(value);
            if rating.is_none() {
                errors.push(FieldError::new("rating", "Rating must be between 1 and 5"));
            }
            rating
        }
    };

    if let Some(msg) = validate_min_len(&sub.title, "Title", TITLE_MIN_LEN) {
        errors.push(FieldError::new("title", msg));
    }
    if let Some(msg) = validate_min_len(&sub.comment, "Comment", COMMENT_MIN_LEN) {
        errors.push(FieldError::new("comment", msg));
    }

    match (category, rating) {
        (Some(category), Some(rating)) if errors.is_empty() => {
            let passenger_name = if sub.is_anonymous {
                ANONYMOUS_NAME.to_string()
            } else {
                sub.passenger_name.trim().to_string()
            };
            Ok(NewFeedback {
                passenger_name,
                passenger_email: sub.passenger_email.trim().to_string(),
                flight_number: normalize_optional(sub.flight_number.as_deref()),
                departure_date: normalize_optional(sub.departure_date.as_deref()),
                category,
                rating,
                title: sub.title.trim().to_string(),
                comment: sub.comment.trim().to_string(),
                is_anonymous: sub.is_anonymous,
            })
        }
        _ => Err(ValidationError { fields: errors }),
    }
}

/// Why a submission did not end up in storage.
#[derive(Debug)]
pub enum SubmitError {
    Validation(ValidationError),
    Storage(StorageError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(e) => write!(f, "{e}"),
            SubmitError::Storage(e) => write!(f, "Storage error: {e}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ValidationError> for SubmitError {
    fn from(e: ValidationError) -> Self {
        SubmitError::Validation(e)
    }
}

impl From<StorageError> for SubmitError {
    fn from(e: StorageError) -> Self {
        SubmitError::Storage(e)
    }
}

/// Validate and persist a submission. Invalid input never reaches the store;
/// a failed insert is returned as-is, without retrying.
pub async fn submit_feedback<S: FeedbackStore>(
    store: &S,
    submission: &FeedbackSubmission,
) -> Result<FeedbackRecord, SubmitError> {
    let new = validate_submission(submission)?;
    let record = store.insert(&new).await?;
    Ok(record)
}
