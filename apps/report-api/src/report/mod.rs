//! Report Generation: renders an `Analysis` into the six-section Placement Cell report.
//!
//! `RuleBasedGenerator` uses fixed templates; `AiReportGenerator` asks the LLM for
//! the prose and falls back to the templates on any failure.

pub mod ai;
pub mod plain_text;
pub mod prompts;
pub mod rule_based;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;

pub use ai::AiReportGenerator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSections {
    pub overview: String,
    pub interview_process_insights: String,
    pub positive_observations: Vec<String>,
    pub challenges_and_improvements: Vec<String>,
    pub preparation_insights: Vec<String>,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub title: String,
    pub generated_date: String,
    pub sections: ReportSections,
    pub ai_generated: bool,
}

pub fn report_title(company_name: &str) -> String {
    format!("Placement Feedback Report: {company_name}")
}

/// Long US-English date, e.g. `October 16, 2026`.
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Never fails: backends degrade to templated prose instead.
    async fn generate(&self, analysis: &Analysis) -> Report;
}

/// Template-based generator. No I/O.
pub struct RuleBasedGenerator;

#[async_trait]
impl ReportGenerator for RuleBasedGenerator {
    async fn generate(&self, analysis: &Analysis) -> Report {
        rule_based::generate_report(analysis)
    }
}
