pub mod category;
pub mod queries;
pub mod store;
pub mod types;
pub mod validate;

pub use category::Category;
pub use queries::PgFeedbackStore;
pub use store::{FeedbackStore, MemoryFeedbackStore, StorageError};
pub use types::*;
pub use validate::{
    FieldError, SubmitError, ValidationError, submit_feedback, validate_submission,
};
