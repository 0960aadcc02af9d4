//! AI analyzer: asks the LLM for the `Analysis` fields and validates the answer.
//!
//! Any failure (transport, status, timeout, malformed JSON, failed validation)
//! degrades to `fallback_analysis`; the caller always receives an Analysis.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::normalize::{
    EASY_TO_MODERATE_LABEL, MODERATE_LABEL, MODERATE_TO_DIFFICULT_LABEL,
};
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::analysis::sentiment::overall_sentiment;
use crate::analysis::{rule_based, Analysis, FeedbackAnalyzer, InterviewProcess};
use crate::llm_client::prompts::{
    mentions_automation, ANONYMITY_INSTRUCTION, NO_AUTOMATION_INSTRUCTION,
};
use crate::llm_client::{complete_json, CompletionModel, LlmError};
use crate::models::feedback::{present, FeedbackEntry, Round};

const FALLBACK_POSITIVE_ASPECTS: &[&str] = &[
    "The recruitment process was conducted in a professional manner",
    "Students gained valuable exposure to industry interview practices",
];

const FALLBACK_CHALLENGES: &[&str] = &[
    "Some rounds required strong problem-solving skills under time constraints",
    "Candidates needed to be well prepared across multiple subject areas",
];

const FALLBACK_PREPARATION_INSIGHTS: &[&str] = &[
    "Strengthen fundamentals in core technical subjects",
    "Practise problem-solving and aptitude questions regularly",
    "Be prepared to discuss your projects and experiences in detail",
];

/// A feedback entry as sent to the model. Carries no student identifiers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymizedFeedback<'a> {
    pub id: String,
    pub role: Option<&'a str>,
    pub rounds: &'a [Round],
    pub overall_experience: Option<&'a str>,
    pub rating: Option<u8>,
    pub tips_for_juniors: Option<&'a str>,
}

/// Drops student identifiers and re-keys entries as F1, F2, …
pub fn anonymize(entries: &[FeedbackEntry]) -> Vec<AnonymizedFeedback<'_>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| AnonymizedFeedback {
            id: format!("F{}", i + 1),
            role: present(&entry.role),
            rounds: &entry.rounds,
            overall_experience: present(&entry.overall_experience),
            rating: entry.effective_rating(),
            tips_for_juniors: present(&entry.tips_for_juniors),
        })
        .collect()
}

/// Expected shape of the model's answer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisPayload {
    overall_sentiment: String,
    interview_process: InterviewProcess,
    positive_aspects: Vec<String>,
    challenges: Vec<String>,
    preparation_insights: Vec<String>,
}

impl AnalysisPayload {
    /// Checks the payload against the schema rules and builds the Analysis.
    fn into_analysis(self, company_name: &str, total: usize) -> Result<Analysis, LlmError> {
        let overall_sentiment = self.overall_sentiment.trim().to_string();
        if overall_sentiment.is_empty() {
            return Err(LlmError::Invalid("overallSentiment is empty".to_string()));
        }

        let process = self.interview_process;
        if process
            .common_rounds
            .iter()
            .any(|r| r.round_type.trim().is_empty() || r.frequency == 0)
        {
            return Err(LlmError::Invalid(
                "commonRounds contains a blank type or zero frequency".to_string(),
            ));
        }
        let allowed = [
            EASY_TO_MODERATE_LABEL,
            MODERATE_LABEL,
            MODERATE_TO_DIFFICULT_LABEL,
        ];
        if let Some((round, label)) = process
            .difficulty_trends
            .iter()
            .find(|(_, label)| !allowed.contains(&label.as_str()))
        {
            return Err(LlmError::Invalid(format!(
                "difficultyTrends[{round}] has unknown label '{label}'"
            )));
        }

        let positive_aspects = clean_list("positiveAspects", self.positive_aspects)?;
        let challenges = clean_list("challenges", self.challenges)?;
        let preparation_insights = clean_list("preparationInsights", self.preparation_insights)?;

        if mentions_automation(&overall_sentiment) {
            return Err(LlmError::Invalid("overallSentiment mentions automation".to_string()));
        }

        Ok(Analysis {
            company_name: company_name.to_string(),
            total_feedback_count: total,
            overall_sentiment,
            interview_process: process,
            positive_aspects,
            challenges,
            preparation_insights,
            ai_generated: true,
        })
    }
}

/// Trims items, drops blanks and duplicates, rejects automation mentions.
fn clean_list(field: &str, items: Vec<String>) -> Result<Vec<String>, LlmError> {
    let mut cleaned: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if item.is_empty() || cleaned.iter().any(|c| c.eq_ignore_ascii_case(item)) {
            continue;
        }
        if mentions_automation(item) {
            return Err(LlmError::Invalid(format!("{field} mentions automation")));
        }
        cleaned.push(item.to_string());
    }
    Ok(cleaned)
}

/// Statistical result used when the model path fails: rating-based sentiment,
/// rule-derived round statistics and generic canned lists.
pub fn fallback_analysis(entries: &[FeedbackEntry], company_name: &str) -> Analysis {
    if entries.is_empty() {
        return Analysis::empty(company_name);
    }

    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    Analysis {
        company_name: company_name.to_string(),
        total_feedback_count: entries.len(),
        overall_sentiment: overall_sentiment(entries).to_string(),
        interview_process: rule_based::interview_process(entries),
        positive_aspects: owned(FALLBACK_POSITIVE_ASPECTS),
        challenges: owned(FALLBACK_CHALLENGES),
        preparation_insights: owned(FALLBACK_PREPARATION_INSIGHTS),
        ai_generated: false,
    }
}

/// LLM-backed analyzer with statistical fallback.
pub struct AiAnalyzer {
    model: Arc<dyn CompletionModel>,
    timeout: Duration,
}

impl AiAnalyzer {
    pub fn new(model: Arc<dyn CompletionModel>, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    async fn request_analysis(
        &self,
        entries: &[FeedbackEntry],
        company_name: &str,
    ) -> Result<Analysis, LlmError> {
        let prompt = build_analysis_prompt(entries, company_name)?;
        let payload: AnalysisPayload =
            complete_json(self.model.as_ref(), &prompt, ANALYSIS_SYSTEM, self.timeout).await?;
        payload.into_analysis(company_name, entries.len())
    }
}

#[async_trait]
impl FeedbackAnalyzer for AiAnalyzer {
    async fn analyze(&self, entries: &[FeedbackEntry], company_name: &str) -> Analysis {
        if entries.is_empty() {
            return Analysis::empty(company_name);
        }

        match self.request_analysis(entries, company_name).await {
            Ok(analysis) => {
                info!(
                    "AI analysis completed for {} ({} entries)",
                    company_name,
                    entries.len()
                );
                analysis
            }
            Err(e) => {
                warn!("AI analysis failed for {company_name}, using statistical fallback: {e}");
                fallback_analysis(entries, company_name)
            }
        }
    }
}

fn build_analysis_prompt(
    entries: &[FeedbackEntry],
    company_name: &str,
) -> Result<String, LlmError> {
    let feedback_json = serde_json::to_string_pretty(&anonymize(entries))?;

    Ok(ANALYSIS_PROMPT_TEMPLATE
        .replace("{no_automation_instruction}", NO_AUTOMATION_INSTRUCTION)
        .replace("{anonymity_instruction}", ANONYMITY_INSTRUCTION)
        .replace("{company_name}", company_name)
        .replace("{feedback_count}", &entries.len().to_string())
        .replace("{feedback_json}", &feedback_json))
}
