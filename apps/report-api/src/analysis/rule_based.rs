//! Rule-based analyzer: pure function of the feedback batch.
//!
//! Algorithm:
//! 1. Sentiment from the mean rating (see `sentiment`).
//! 2. Every round: normalize type, difficulty and mode; tally frequencies,
//!    average difficulty per type, count modes globally.
//! 3. Per catalogue phrase, count the entries whose text triggers it (once per entry);
//!    keep phrases seen in at least `MIN_PHRASE_FREQUENCY` entries, most frequent first.
//! 4. Harvest recommended resources into one extra preparation insight.

use std::collections::{BTreeMap, HashSet};

use crate::analysis::catalogue::{Phrase, CHALLENGES, POSITIVE_ASPECTS, PREPARATION_INSIGHTS};
use crate::analysis::normalize::{
    difficulty_label, difficulty_ordinal, normalize_mode, normalize_round_type, Mode,
};
use crate::analysis::sentiment::overall_sentiment;
use crate::analysis::{Analysis, InterviewProcess, ModeDistribution, RoundFrequency};
use crate::models::feedback::{present, FeedbackEntry};
use crate::text::join_natural;

/// A phrase must be detected in at least this many distinct entries to be reported.
pub const MIN_PHRASE_FREQUENCY: usize = 2;
const MAX_LISTED_RESOURCES: usize = 3;
/// Resource tokens shorter than this (in characters) are noise like "yt" or "-".
const MIN_RESOURCE_LEN: usize = 3;

pub fn analyze(entries: &[FeedbackEntry], company_name: &str) -> Analysis {
    if entries.is_empty() {
        return Analysis::empty(company_name);
    }

    let mut preparation_insights = rank_phrases(entries, PREPARATION_INSIGHTS, preparation_text);
    if let Some(insight) = resource_insight(entries) {
        if !preparation_insights.contains(&insight) {
            preparation_insights.push(insight);
        }
    }

    Analysis {
        company_name: company_name.to_string(),
        total_feedback_count: entries.len(),
        overall_sentiment: overall_sentiment(entries).to_string(),
        interview_process: interview_process(entries),
        positive_aspects: rank_phrases(entries, POSITIVE_ASPECTS, narrative_text),
        challenges: rank_phrases(entries, CHALLENGES, narrative_text),
        preparation_insights,
        ai_generated: false,
    }
}

/// Round-type frequencies, per-type difficulty trends and global mode counts.
pub fn interview_process(entries: &[FeedbackEntry]) -> InterviewProcess {
    let mut common_rounds: Vec<RoundFrequency> = Vec::new();
    let mut difficulty: BTreeMap<String, (u32, u32)> = BTreeMap::new();
    let mut modes = ModeDistribution::default();

    for round in entries.iter().flat_map(|e| e.rounds.iter()) {
        match present(&round.mode).and_then(normalize_mode) {
            Some(Mode::Online) => modes.online += 1,
            Some(Mode::Offline) => modes.offline += 1,
            None => {}
        }

        let Some(raw_type) = present(&round.round_type) else {
            continue;
        };
        let round_type = normalize_round_type(raw_type);

        if let Some(raw_difficulty) = present(&round.difficulty) {
            let (sum, count) = difficulty.entry(round_type.clone()).or_insert((0, 0));
            *sum += u32::from(difficulty_ordinal(raw_difficulty));
            *count += 1;
        }

        match common_rounds
            .iter_mut()
            .find(|r| r.round_type == round_type)
        {
            Some(existing) => existing.frequency += 1,
            None => common_rounds.push(RoundFrequency {
                round_type,
                frequency: 1,
            }),
        }
    }

    // Stable: ties keep first-reported order
    common_rounds.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    let difficulty_trends = difficulty
        .into_iter()
        .map(|(round_type, (sum, count))| {
            let average = f64::from(sum) / f64::from(count);
            (round_type, difficulty_label(average).to_string())
        })
        .collect();

    InterviewProcess {
        common_rounds,
        difficulty_trends,
        mode_distribution: modes,
    }
}

/// Counts per-entry detections of each catalogue phrase and returns the
/// frequent ones, most frequent first (ties in catalogue order).
fn rank_phrases(
    entries: &[FeedbackEntry],
    catalogue: &'static [Phrase],
    text_of: fn(&FeedbackEntry) -> String,
) -> Vec<String> {
    let mut counts = vec![0usize; catalogue.len()];

    for entry in entries {
        let text = text_of(entry);
        if text.is_empty() {
            continue;
        }
        for (count, phrase) in counts.iter_mut().zip(catalogue) {
            if phrase.matches(&text) {
                *count += 1;
            }
        }
    }

    let mut ranked: Vec<(usize, &Phrase)> = counts
        .into_iter()
        .zip(catalogue)
        .filter(|(count, _)| *count >= MIN_PHRASE_FREQUENCY)
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    let mut seen = HashSet::new();
    ranked
        .into_iter()
        .map(|(_, phrase)| phrase.text.to_string())
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

/// Lowercased overall experience + tips.
fn narrative_text(entry: &FeedbackEntry) -> String {
    [
        present(&entry.overall_experience),
        present(&entry.tips_for_juniors),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

/// Narrative text plus every round's questions and resources.
fn preparation_text(entry: &FeedbackEntry) -> String {
    let mut parts: Vec<&str> = [
        present(&entry.overall_experience),
        present(&entry.tips_for_juniors),
    ]
    .into_iter()
    .flatten()
    .collect();

    for round in &entry.rounds {
        parts.extend(present(&round.questions));
        parts.extend(present(&round.resources));
    }

    parts.join(" ").to_lowercase()
}

/// Distinct comma-separated resources across all rounds, in first-seen order.
fn harvest_resources(entries: &[FeedbackEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut resources = Vec::new();

    for round in entries.iter().flat_map(|e| e.rounds.iter()) {
        let Some(text) = present(&round.resources) else {
            continue;
        };
        for token in text.split(',').map(str::trim) {
            if token.chars().count() < MIN_RESOURCE_LEN {
                continue;
            }
            if seen.insert(token.to_lowercase()) {
                resources.push(token.to_string());
            }
        }
    }

    resources
}

fn resource_insight(entries: &[FeedbackEntry]) -> Option<String> {
    let resources = harvest_resources(entries);
    if resources.is_empty() {
        return None;
    }
    let listed = &resources[..resources.len().min(MAX_LISTED_RESOURCES)];
    Some(format!(
        "Commonly recommended resources include {}",
        join_natural(listed)
    ))
}
