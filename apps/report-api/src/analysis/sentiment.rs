use crate::models::feedback::FeedbackEntry;

/// Inclusive lower bounds, evaluated high to low.
const PREDOMINANTLY_POSITIVE_FROM: f64 = 4.0;
const MODERATELY_POSITIVE_FROM: f64 = 3.0;
const MIXED_FROM: f64 = 2.0;

pub const PREDOMINANTLY_POSITIVE: &str = "predominantly positive";
pub const MODERATELY_POSITIVE: &str = "moderately positive";
pub const MIXED: &str = "mixed";
pub const CHALLENGING: &str = "challenging";
/// Used when no entry carries a rating.
pub const UNRATED: &str = "mixed experiences";

/// Mean of the 1–5 ratings present in the batch.
pub fn average_rating(entries: &[FeedbackEntry]) -> Option<f64> {
    let ratings: Vec<f64> = entries
        .iter()
        .filter_map(|e| e.effective_rating())
        .map(f64::from)
        .collect();

    if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }
}

pub fn sentiment_label(average: Option<f64>) -> &'static str {
    match average {
        None => UNRATED,
        Some(avg) if avg >= PREDOMINANTLY_POSITIVE_FROM => PREDOMINANTLY_POSITIVE,
        Some(avg) if avg >= MODERATELY_POSITIVE_FROM => MODERATELY_POSITIVE,
        Some(avg) if avg >= MIXED_FROM => MIXED,
        Some(_) => CHALLENGING,
    }
}

pub fn overall_sentiment(entries: &[FeedbackEntry]) -> &'static str {
    sentiment_label(average_rating(entries))
}
