use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::models::feedback::{Category, FeedbackRecord, Rating};

/// How many records the "Recent Feedback" list keeps.
pub const RECENT_LIMIT: usize = 10;

/// Window for the "This Month" card: the last 30 days.
pub const THIS_MONTH_WINDOW_SECS: i64 = 30 * 24 * 3600;

// ---------- Types ----------

/// Summary figures for the admin dashboard, recomputed on every load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total: usize,
    pub average_rating: f64,
    /// Categories with no feedback are absent.
    pub category_breakdown: BTreeMap<Category, usize>,
    /// Keyed by rating value 1..=5; ratings with no feedback are absent.
    pub rating_breakdown: BTreeMap<u8, usize>,
    pub recent_feedback: Vec<FeedbackRecord>,
}

impl AggregateStats {
    /// Count for a rating value, 0 when nobody gave it.
    pub fn rating_count(&self, rating: u8) -> usize {
        self.rating_breakdown.get(&rating).copied().unwrap_or(0)
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.category_breakdown.get(&category).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SatisfactionLevel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl SatisfactionLevel {
    pub fn from_average(average: f64) -> Self {
        if average >= 4.0 {
            SatisfactionLevel::Excellent
        } else if average >= 3.0 {
            SatisfactionLevel::Good
        } else {
            SatisfactionLevel::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SatisfactionLevel::Excellent => "Excellent",
            SatisfactionLevel::Good => "Good",
            SatisfactionLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Badge colouring for a single rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTone {
    Positive,
    Neutral,
    Negative,
}

impl RatingTone {
    pub fn for_rating(rating: Rating) -> Self {
        match rating.value() {
            4..=5 => RatingTone::Positive,
            3 => RatingTone::Neutral,
            _ => RatingTone::Negative,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RatingTone::Positive => "rating-positive",
            RatingTone::Neutral => "rating-neutral",
            RatingTone::Negative => "rating-negative",
        }
    }
}

/// One line of the "Feedback by Category" panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
}

/// One bar of the rating distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRow {
    pub rating: u8,
    pub count: usize,
    pub percent: f64,
}

/// Display-only figures layered on top of [`AggregateStats`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardInsights {
    pub this_month: usize,
    pub satisfaction_rate: f64,
    pub satisfaction_level: SatisfactionLevel,
    pub top_category: Option<Category>,
    pub low_rating_count: usize,
    pub categories: Vec<CategoryRow>,
    pub ratings: Vec<RatingRow>,
}

impl DashboardInsights {
    pub fn build(records: &[FeedbackRecord], stats: &AggregateStats, now: DateTime<Utc>) -> Self {
        Self {
            this_month: this_month_count(records, now),
            satisfaction_rate: satisfaction_rate(stats),
            satisfaction_level: SatisfactionLevel::from_average(stats.average_rating),
            top_category: top_category(stats),
            low_rating_count: low_rating_count(stats),
            categories: categories_by_count(stats),
            ratings: rating_distribution(stats),
        }
    }
}

// ---------- Aggregation ----------

/// Summarize records already ordered newest first.
pub fn aggregate(records: &[FeedbackRecord]) -> AggregateStats {
    let total = records.len();

    let mut rating_sum: u64 = 0;
    let mut category_breakdown = BTreeMap::new();
    let mut rating_breakdown = BTreeMap::new();
    for record in records {
        rating_sum += u64::from(record.rating.value());
        *category_breakdown.entry(record.category).or_insert(0) += 1;
        *rating_breakdown.entry(record.rating.value()).or_insert(0) += 1;
    }

    let average_rating = if total == 0 {
        0.0
    } else {
        rating_sum as f64 / total as f64
    };

    AggregateStats {
        total,
        average_rating,
        category_breakdown,
        rating_breakdown,
        recent_feedback: records.iter().take(RECENT_LIMIT).cloned().collect(),
    }
}

/// Records created within the last 30 days of `now`.
pub fn this_month_count(records: &[FeedbackRecord], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::seconds(THIS_MONTH_WINDOW_SECS);
    records.iter().filter(|r| r.created_at > cutoff).count()
}

/// Percentage of ratings that are 4 or 5 stars; 0 with no feedback.
pub fn satisfaction_rate(stats: &AggregateStats) -> f64 {
    if stats.total == 0 {
        return 0.0;
    }
    let satisfied: usize = stats
        .rating_breakdown
        .iter()
        .filter(|(rating, _)| **rating >= 4)
        .map(|(_, count)| *count)
        .sum();
    satisfied as f64 / stats.total as f64 * 100.0
}

/// Category with the most feedback. Equal counts go to the smallest code.
pub fn top_category(stats: &AggregateStats) -> Option<Category> {
    stats
        .category_breakdown
        .iter()
        .filter(|(_, count)| **count > 0)
        .max_by(|(a, a_count), (b, b_count)| {
            a_count.cmp(b_count).then_with(|| b.code().cmp(a.code()))
        })
        .map(|(category, _)| *category)
}

/// Ratings of 1 or 2 stars.
pub fn low_rating_count(stats: &AggregateStats) -> usize {
    stats
        .rating_breakdown
        .iter()
        .filter(|(rating, _)| **rating <= 2)
        .map(|(_, count)| *count)
        .sum()
}

/// Category rows sorted by count descending, then code.
pub fn categories_by_count(stats: &AggregateStats) -> Vec<CategoryRow> {
    let mut rows: Vec<CategoryRow> = stats
        .category_breakdown
        .iter()
        .map(|(category, count)| CategoryRow {
            category: *category,
            label: category.label(),
            count: *count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.code().cmp(b.category.code())));
    rows
}

/// Rows for 5 down to 1 stars, with each rating's share of all feedback.
pub fn rating_distribution(stats: &AggregateStats) -> Vec<RatingRow> {
    (Rating::MIN..=Rating::MAX)
        .rev()
        .map(|rating| {
            let count = stats.rating_count(rating);
            let percent = if stats.total == 0 {
                0.0
            } else {
                count as f64 / stats.total as f64 * 100.0
            };
            RatingRow { rating, count, percent }
        })
        .collect()
}
