use askama::Template;

use crate::models::feedback::{Category, FeedbackForm, Rating, ValidationError};

use super::PageContext;

/// A `<option>` in the category select.
pub struct CategoryChoice {
    pub code: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// A star radio button.
pub struct RatingChoice {
    pub value: u8,
    pub checked: bool,
}

#[derive(Template)]
#[template(path = "feedback/form.html")]
pub struct FeedbackFormTemplate {
    pub ctx: PageContext,
    pub values: FeedbackForm,
    pub errors: ValidationError,
    /// Submission-level failure (storage), shown above the form.
    pub notice: Option<String>,
    pub categories: Vec<CategoryChoice>,
    pub ratings: Vec<RatingChoice>,
}

impl FeedbackFormTemplate {
    pub fn new(ctx: PageContext, values: FeedbackForm) -> Self {
        let selected_category = values.category.trim().to_string();
        let selected_rating = values.rating.trim().to_string();
        let categories = Category::ALL
            .into_iter()
            .map(|c| CategoryChoice {
                code: c.code(),
                label: c.label(),
                selected: c.code() == selected_category,
            })
            .collect();
        let ratings = (Rating::MIN..=Rating::MAX)
            .map(|value| RatingChoice {
                value,
                checked: value.to_string() == selected_rating,
            })
            .collect();
        Self {
            ctx,
            values,
            errors: ValidationError::default(),
            notice: None,
            categories,
            ratings,
        }
    }

    pub fn with_errors(mut self, errors: ValidationError) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_notice(mut self, notice: String) -> Self {
        self.notice = Some(notice);
        self
    }
}

#[derive(Template)]
#[template(path = "feedback/thanks.html")]
pub struct ThanksTemplate {
    pub ctx: PageContext,
}
