use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::category::Category;

/// Placeholder stored in place of the passenger's name for anonymous feedback.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Passenger satisfaction score, 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Rating(value as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("Rating {value} is outside 1..=5"))
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> u8 {
        r.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored passenger submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub passenger_name: String,
    pub passenger_email: String,
    pub flight_number: Option<String>,
    pub departure_date: Option<String>,
    pub category: Category,
    pub rating: Rating,
    pub title: String,
    pub comment: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Name to show on the dashboard; anonymous records never expose a name.
    pub fn display_name(&self) -> &str {
        if self.is_anonymous {
            ANONYMOUS_NAME
        } else {
            &self.passenger_name
        }
    }
}

/// A validated submission ready for insertion. Only the validator builds these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFeedback {
    pub(crate) passenger_name: String,
    pub(crate) passenger_email: String,
    pub(crate) flight_number: Option<String>,
    pub(crate) departure_date: Option<String>,
    pub(crate) category: Category,
    pub(crate) rating: Rating,
    pub(crate) title: String,
    pub(crate) comment: String,
    pub(crate) is_anonymous: bool,
}

impl NewFeedback {
    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    pub fn passenger_email(&self) -> &str {
        &self.passenger_email
    }

    pub fn flight_number(&self) -> Option<&str> {
        self.flight_number.as_deref()
    }

    pub fn departure_date(&self) -> Option<&str> {
        self.departure_date.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    /// Attach storage-assigned identity and timestamps.
    pub fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> FeedbackRecord {
        FeedbackRecord {
            id,
            passenger_name: self.passenger_name,
            passenger_email: self.passenger_email,
            flight_number: self.flight_number,
            departure_date: self.departure_date,
            category: self.category,
            rating: self.rating,
            title: self.title,
            comment: self.comment,
            is_anonymous: self.is_anonymous,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Rating exactly as submitted, before range checking.
///
/// JSON clients may send a number, a numeric string or nothing at all; the
/// validator decides which message applies instead of the body parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatingInput {
    #[default]
    Missing,
    Whole(i64),
    /// Present but not a whole number (`4.5`, `"four"`, `true`).
    Invalid,
}

impl RatingInput {
    /// Interpret free text the way the HTML form sends it.
    pub fn from_text(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return RatingInput::Missing;
        }
        raw.parse().map(RatingInput::Whole).unwrap_or(RatingInput::Invalid)
    }

    fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => RatingInput::Missing,
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(whole), _) => RatingInput::Whole(whole),
                (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    RatingInput::Whole(f as i64)
                }
                _ => RatingInput::Invalid,
            },
            Value::String(text) => RatingInput::from_text(&text),
            _ => RatingInput::Invalid,
        }
    }
}

impl From<i64> for RatingInput {
    fn from(value: i64) -> Self {
        RatingInput::Whole(value)
    }
}

impl<'de> Deserialize<'de> for RatingInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(RatingInput::from_json)
    }
}

/// `null` reads as an empty value so the field goes through validation.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Candidate feedback as entered, before validation (JSON API body).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackSubmission {
    #[serde(default, deserialize_with = "null_as_default")]
    pub passenger_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub passenger_email: String,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub rating: RatingInput,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_anonymous: bool,
}

/// Form input for the public feedback page. Every field arrives as text so the
/// page can be re-rendered with exactly what the passenger typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub passenger_name: String,
    #[serde(default)]
    pub passenger_email: String,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub departure_date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    /// Checkbox: present when ticked.
    #[serde(default)]
    pub is_anonymous: Option<String>,
    #[serde(default)]
    pub csrf_token: String,
}

impl FeedbackForm {
    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
            .as_deref()
            .is_some_and(|v| !v.is_empty() && v != "false" && v != "off")
    }

    pub fn to_submission(&self) -> FeedbackSubmission {
        FeedbackSubmission {
            passenger_name: self.passenger_name.clone(),
            passenger_email: self.passenger_email.clone(),
            flight_number: Some(self.flight_number.clone()),
            departure_date: Some(self.departure_date.clone()),
            category: self.category.clone(),
            rating: RatingInput::from_text(&self.rating),
            title: self.title.clone(),
            comment: self.comment.clone(),
            is_anonymous: self.is_anonymous(),
        }
    }
}
