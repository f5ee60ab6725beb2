//! Submission validator tests: field rules, error enumeration, anonymization
//! and optional-field normalization.

mod common;

use airport_feedback::models::feedback::{
    ANONYMOUS_NAME, Category, FeedbackForm, FeedbackSubmission, RatingInput, validate_submission,
};
use common::{TEST_EMAIL, TEST_NAME, valid_submission};

#[test]
fn test_valid_submission_passes() {
    let new = validate_submission(&valid_submission()).expect("valid submission");

    assert_eq!(new.passenger_name(), TEST_NAME);
    assert_eq!(new.passenger_email(), TEST_EMAIL);
    assert_eq!(new.category(), Category::Baggage);
    assert_eq!(new.rating().value(), 4);
    assert_eq!(new.flight_number(), Some("UR 430"));
    assert_eq!(new.departure_date(), Some("2025-03-14"));
    assert!(!new.is_anonymous());
}

#[test]
fn test_anonymous_submission_replaces_name() {
    let mut sub = valid_submission();
    sub.is_anonymous = true;

    let new = validate_submission(&sub).expect("valid submission");
    assert_eq!(new.passenger_name(), ANONYMOUS_NAME);
    assert!(new.is_anonymous());
    // Email is still kept for follow-up
    assert_eq!(new.passenger_email(), TEST_EMAIL);
}

#[test]
fn test_name_is_anonymous_iff_flag_set() {
    for (name, anonymous) in [("Jo", false), ("Jo", true), ("Grace", false), ("Peter", true)] {
        let mut sub = valid_submission();
        sub.passenger_name = name.to_string();
        sub.is_anonymous = anonymous;

        let new = validate_submission(&sub).expect("valid submission");
        if anonymous {
            assert_eq!(new.passenger_name(), ANONYMOUS_NAME);
        } else {
            assert_eq!(new.passenger_name(), name);
        }
    }
}

#[test]
fn test_anonymous_still_requires_valid_name() {
    let mut sub = valid_submission();
    sub.passenger_name = "J".to_string();
    sub.is_anonymous = true;

    let err = validate_submission(&sub).unwrap_err();
    assert!(err.has("passenger_name"));
}

#[test]
fn test_rating_out_of_range_rejected() {
    for rating in [-1, 0, 6, 10, i64::MAX] {
        let mut sub = valid_submission();
        sub.rating = rating.into();

        let err = validate_submission(&sub).unwrap_err();
        assert_eq!(err.len(), 1, "rating {rating}");
        assert_eq!(err.messages_for("rating"), vec!["Rating must be between 1 and 5"]);
    }
}

#[test]
fn test_rating_bounds_accepted() {
    for rating in 1..=5 {
        let mut sub = valid_submission();
        sub.rating = rating.into();
        let new = validate_submission(&sub).expect("rating in range");
        assert_eq!(i64::from(new.rating().value()), rating);
    }
}

#[test]
fn test_missing_rating_rejected() {
    let mut sub = valid_submission();
    sub.rating = RatingInput::Missing;

    let err = validate_submission(&sub).unwrap_err();
    assert_eq!(err.messages_for("rating"), vec!["Please provide a rating"]);
}

#[test]
fn test_unknown_category_rejected() {
    let mut sub = valid_submission();
    sub.category = "lounge".to_string();

    let err = validate_submission(&sub).unwrap_err();
    assert_eq!(err.len(), 1);
    assert!(err.has("category"));
}

#[test]
fn test_every_violation_reported_at_once() {
    let sub = FeedbackSubmission {
        passenger_name: "Jo".to_string(),
        passenger_email: "not-an-email".to_string(),
        category: "security".to_string(),
        rating: RatingInput::Whole(6),
        title: "Hi".to_string(),
        comment: "short".to_string(),
        ..Default::default()
    };

    let err = validate_submission(&sub).unwrap_err();
    assert_eq!(err.len(), 4, "got: {err}");
    assert!(err.has("passenger_email"));
    assert!(err.has("rating"));
    assert!(err.has("title"));
    assert!(err.has("comment"));
    assert!(!err.has("passenger_name"));
    assert_eq!(err.first_for("title"), Some("Title must be at least 5 characters"));
    assert_eq!(err.first_for("comment"), Some("Comment must be at least 10 characters"));
}

#[test]
fn test_empty_submission_reports_all_required_fields() {
    let err = validate_submission(&FeedbackSubmission::default()).unwrap_err();

    let fields: Vec<&str> = err.fields.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["passenger_name", "passenger_email", "category", "rating", "title", "comment"]
    );
}

#[test]
fn test_blank_optional_fields_become_none() {
    let mut sub = valid_submission();
    sub.flight_number = Some("   ".to_string());
    sub.departure_date = None;

    let new = validate_submission(&sub).expect("valid submission");
    assert_eq!(new.flight_number(), None);
    assert_eq!(new.departure_date(), None);
}

#[test]
fn test_text_fields_are_trimmed() {
    let mut sub = valid_submission();
    sub.passenger_name = "  Grace  ".to_string();
    sub.title = "  Smooth baggage claim ".to_string();
    sub.category = " baggage ".to_string();

    let new = validate_submission(&sub).expect("valid submission");
    assert_eq!(new.passenger_name(), "Grace");
    assert_eq!(new.title(), "Smooth baggage claim");
}

#[test]
fn test_length_rules_ignore_surrounding_whitespace() {
    let mut sub = valid_submission();
    sub.title = "  abc   ".to_string();

    let err = validate_submission(&sub).unwrap_err();
    assert!(err.has("title"));
}

#[test]
fn test_json_submission_defaults_is_anonymous_to_false() {
    let json = r#"{
        "passenger_name": "Peter",
        "passenger_email": "peter@example.com",
        "category": "dining",
        "rating": 5,
        "title": "Great coffee",
        "comment": "The coffee at gate 3 was excellent."
    }"#;
    let sub: FeedbackSubmission = serde_json::from_str(json).expect("parse");
    assert!(!sub.is_anonymous);
    assert_eq!(sub.flight_number, None);

    let new = validate_submission(&sub).expect("valid submission");
    assert_eq!(new.passenger_name(), "Peter");
}

#[test]
fn test_non_whole_rating_gets_its_own_message() {
    let mut sub = valid_submission();
    sub.rating = RatingInput::Invalid;

    let err = validate_submission(&sub).unwrap_err();
    assert_eq!(err.messages_for("rating"), vec!["Rating must be a whole number between 1 and 5"]);
}

#[test]
fn test_json_rating_shapes() {
    let parse = |rating: &str| -> RatingInput {
        let json = format!(r#"{{"rating": {rating}}}"#);
        serde_json::from_str::<FeedbackSubmission>(&json).expect("parse").rating
    };

    assert_eq!(parse("4"), RatingInput::Whole(4));
    assert_eq!(parse("4.0"), RatingInput::Whole(4));
    assert_eq!(parse(r#""5""#), RatingInput::Whole(5));
    assert_eq!(parse("9"), RatingInput::Whole(9));
    assert_eq!(parse("null"), RatingInput::Missing);
    assert_eq!(parse(r#""""#), RatingInput::Missing);
    assert_eq!(parse("4.5"), RatingInput::Invalid);
    assert_eq!(parse(r#""four""#), RatingInput::Invalid);
    assert_eq!(parse("true"), RatingInput::Invalid);

    let sub: FeedbackSubmission = serde_json::from_str("{}").expect("parse");
    assert_eq!(sub.rating, RatingInput::Missing);
}

#[test]
fn test_json_null_text_fields_reach_the_validator() {
    let json = r#"{
        "passenger_name": null,
        "passenger_email": null,
        "category": null,
        "rating": null,
        "title": null,
        "comment": null,
        "is_anonymous": null
    }"#;
    let sub: FeedbackSubmission = serde_json::from_str(json).expect("parse");
    assert_eq!(sub.passenger_name, "");
    assert!(!sub.is_anonymous);

    let err = validate_submission(&sub).unwrap_err();
    assert_eq!(err.len(), 6);
}

#[test]
fn test_form_rating_text() {
    let form = |rating: &str| FeedbackForm { rating: rating.to_string(), ..Default::default() };

    assert_eq!(form(" 3 ").to_submission().rating, RatingInput::Whole(3));
    assert_eq!(form("").to_submission().rating, RatingInput::Missing);
    assert_eq!(form("abc").to_submission().rating, RatingInput::Invalid);
}
