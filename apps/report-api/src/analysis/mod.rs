//! Feedback Analysis: turns a batch of feedback entries for one company into an `Analysis`.
//!
//! Two backends implement `FeedbackAnalyzer`:
//! - `RuleBasedAnalyzer`: keyword catalogue + frequency statistics, deterministic.
//! - `AiAnalyzer`: delegates to the LLM, falls back to statistics on any failure.
//!
//! The report service picks one per request.

pub mod ai;
pub mod catalogue;
pub mod normalize;
pub mod prompts;
pub mod rule_based;
pub mod sentiment;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::feedback::FeedbackEntry;

pub use ai::AiAnalyzer;

/// Sentiment label of an analysis built from zero entries.
pub const NO_FEEDBACK_SENTIMENT: &str = "No feedback data available";

/// How often a normalized round type was reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundFrequency {
    #[serde(rename = "type")]
    pub round_type: String,
    pub frequency: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeDistribution {
    pub online: usize,
    pub offline: usize,
}

impl ModeDistribution {
    pub fn total(&self) -> usize {
        self.online + self.offline
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewProcess {
    /// Most frequent first; ties keep first-reported order.
    pub common_rounds: Vec<RoundFrequency>,
    /// Round type → "Easy to Moderate" | "Moderate" | "Moderate to Difficult".
    pub difficulty_trends: BTreeMap<String, String>,
    pub mode_distribution: ModeDistribution,
}

/// Structured summary of one company's feedback. Built per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub company_name: String,
    pub total_feedback_count: usize,
    pub overall_sentiment: String,
    pub interview_process: InterviewProcess,
    pub positive_aspects: Vec<String>,
    pub challenges: Vec<String>,
    pub preparation_insights: Vec<String>,
    pub ai_generated: bool,
}

impl Analysis {
    /// The well-formed analysis of an empty batch.
    pub fn empty(company_name: &str) -> Self {
        Analysis {
            company_name: company_name.to_string(),
            total_feedback_count: 0,
            overall_sentiment: NO_FEEDBACK_SENTIMENT.to_string(),
            interview_process: InterviewProcess::default(),
            positive_aspects: vec![],
            challenges: vec![],
            preparation_insights: vec![],
            ai_generated: false,
        }
    }

    /// Whether any reported round normalized to `round_type` (case-insensitive).
    pub fn has_round(&self, round_type: &str) -> bool {
        self.interview_process
            .common_rounds
            .iter()
            .any(|r| r.round_type.eq_ignore_ascii_case(round_type))
    }
}

/// Implement this to add an analysis backend without touching the report service.
#[async_trait]
pub trait FeedbackAnalyzer: Send + Sync {
    /// Never fails: backends degrade to a statistical result instead.
    async fn analyze(&self, entries: &[FeedbackEntry], company_name: &str) -> Analysis;
}

/// Deterministic keyword/statistics analyzer. No I/O.
pub struct RuleBasedAnalyzer;

#[async_trait]
impl FeedbackAnalyzer for RuleBasedAnalyzer {
    async fn analyze(&self, entries: &[FeedbackEntry], company_name: &str) -> Analysis {
        rule_based::analyze(entries, company_name)
    }
}
