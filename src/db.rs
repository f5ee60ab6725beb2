use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::models::feedback::{FeedbackStore, FeedbackSubmission, validate_submission};

const DEMO_SEED: &str = include_str!("../data/seed/feedback.json");

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Insert the bundled demo feedback when the store is empty.
/// Returns the number of records created.
pub async fn seed_demo<S: FeedbackStore>(store: &S) -> usize {
    match store.list_all().await {
        Ok(existing) if !existing.is_empty() => {
            log::info!("Store already has {} feedback records, skipping demo seed", existing.len());
            return 0;
        }
        Ok(_) => {}
        Err(e) => {
            log::error!("Demo seed skipped, could not list feedback: {e}");
            return 0;
        }
    }

    let submissions: Vec<FeedbackSubmission> = match serde_json::from_str(DEMO_SEED) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Bad demo seed JSON: {e}");
            return 0;
        }
    };

    let mut created = 0;
    for submission in &submissions {
        let new = match validate_submission(submission) {
            Ok(new) => new,
            Err(e) => {
                log::warn!("Demo seed: skipping '{}': {e}", submission.title);
                continue;
            }
        };
        match store.insert(&new).await {
            Ok(_) => created += 1,
            Err(e) => log::warn!("Demo seed: insert failed for '{}': {e}", submission.title),
        }
    }
    log::info!("Demo seed: created={}, skipped={}", created, submissions.len() - created);
    created
}
