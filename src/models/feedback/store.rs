use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use super::types::{FeedbackRecord, NewFeedback};

/// The backing store failed to insert or list feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::new(e.to_string())
    }
}

/// Where feedback lives. The application only ever inserts and lists.
pub trait FeedbackStore: Send + Sync + 'static {
    /// Persist a validated record, returning it with id and timestamps filled in.
    fn insert(
        &self,
        record: &NewFeedback,
    ) -> impl Future<Output = Result<FeedbackRecord, StorageError>> + Send;

    /// Every record, newest `created_at` first.
    fn list_all(&self) -> impl Future<Output = Result<Vec<FeedbackRecord>, StorageError>> + Send;
}

#[derive(Debug, Default)]
struct MemoryState {
    records: Vec<FeedbackRecord>,
    failure: Option<String>,
}

/// Process-local store used by tests and when no database is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeedbackStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing records (any order; listing sorts them).
    pub fn with_records(records: Vec<FeedbackRecord>) -> Self {
        let store = Self::new();
        store.lock().records = records;
        store
    }

    /// Make every subsequent call fail with `message` until `recover` is called.
    pub fn fail_with(&self, message: &str) {
        self.lock().failure = Some(message.to_string());
    }

    pub fn recover(&self) {
        self.lock().failure = None;
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_failure(state: &MemoryState) -> Result<(), StorageError> {
        match &state.failure {
            Some(msg) => Err(StorageError::new(msg.clone())),
            None => Ok(()),
        }
    }
}

impl FeedbackStore for MemoryFeedbackStore {
    async fn insert(&self, record: &NewFeedback) -> Result<FeedbackRecord, StorageError> {
        let mut state = self.lock();
        Self::check_failure(&state)?;
        let stored = record.clone().into_record(Uuid::new_v4(), Utc::now());
        state.records.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        let state = self.lock();
        Self::check_failure(&state)?;
        // Newest insert first among equal timestamps.
        let mut records: Vec<FeedbackRecord> = state.records.iter().rev().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
