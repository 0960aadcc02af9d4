//! Report Service: fetch → analyze → generate for one company.
//!
//! The AI path runs only when the caller asks for it and a completion model is
//! configured. Otherwise the rule-based analyzer and generator are used.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{AiAnalyzer, FeedbackAnalyzer, RuleBasedAnalyzer};
use crate::errors::AppError;
use crate::llm_client::CompletionModel;
use crate::report::{AiReportGenerator, Report, ReportGenerator, RuleBasedGenerator};
use crate::store::FeedbackStore;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub feedback_count: usize,
    pub generated_at: DateTime<Utc>,
    /// Whether the AI path was selected, not whether it succeeded.
    pub ai_powered: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub report: Report,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCount {
    pub company_name: String,
    pub feedback_count: u64,
}

#[derive(Clone)]
pub struct ReportService {
    store: Arc<dyn FeedbackStore>,
    model: Option<Arc<dyn CompletionModel>>,
    model_timeout: Duration,
}

impl ReportService {
    pub fn new(
        store: Arc<dyn FeedbackStore>,
        model: Option<Arc<dyn CompletionModel>>,
        model_timeout: Duration,
    ) -> Self {
        Self {
            store,
            model,
            model_timeout,
        }
    }

    pub async fn generate(
        &self,
        company_name: &str,
        use_ai: bool,
    ) -> Result<GeneratedReport, AppError> {
        let company_name = required_company(company_name)?;

        let entries = self.store.feedback_for_company(company_name).await?;
        info!(
            "Loaded {} approved feedback entries for {company_name}",
            entries.len()
        );

        let ai_model = match (use_ai, &self.model) {
            (true, Some(model)) => Some(model.clone()),
            (true, None) => {
                warn!(
                    "AI report requested for {company_name} without an LLM credential, \
                    using rule-based path"
                );
                None
            }
            (false, _) => None,
        };

        let analyzer: Box<dyn FeedbackAnalyzer> = match &ai_model {
            Some(model) => Box::new(AiAnalyzer::new(model.clone(), self.model_timeout)),
            None => Box::new(RuleBasedAnalyzer),
        };
        let generator: Box<dyn ReportGenerator> = match &ai_model {
            Some(model) => Box::new(AiReportGenerator::new(model.clone(), self.model_timeout)),
            None => Box::new(RuleBasedGenerator),
        };

        let analysis = analyzer.analyze(&entries, company_name).await;
        let report = generator.generate(&analysis).await;
        info!(
            "Report generated for {company_name}: analysis_ai={}, report_ai={}",
            analysis.ai_generated, report.ai_generated
        );

        Ok(GeneratedReport {
            report,
            metadata: ReportMetadata {
                feedback_count: entries.len(),
                generated_at: Utc::now(),
                ai_powered: ai_model.is_some(),
            },
        })
    }

    pub async fn list_companies(&self) -> Result<Vec<String>, AppError> {
        Ok(self.store.list_companies().await?)
    }

    pub async fn feedback_count(&self, company_name: &str) -> Result<FeedbackCount, AppError> {
        let company_name = required_company(company_name)?;
        let feedback_count = self.store.count_for_company(company_name).await?;
        Ok(FeedbackCount {
            company_name: company_name.to_string(),
            feedback_count,
        })
    }
}

fn required_company(company_name: &str) -> Result<&str, AppError> {
    let trimmed = company_name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Company name is required".to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::models::feedback::{FeedbackEntry, Round};
    use crate::report::rule_based::NO_DATA_OVERVIEW;
    use crate::store::memory::InMemoryStore;

    fn entry(rating: u8, experience: &str) -> FeedbackEntry {
        FeedbackEntry {
            student_name: Some("Asha".to_string()),
            role: Some("SDE".to_string()),
            rounds: vec![Round {
                round_type: Some("Coding Test".to_string()),
                difficulty: Some("Hard".to_string()),
                mode: Some("Online".to_string()),
                ..Round::default()
            }],
            overall_experience: Some(experience.to_string()),
            rating: Some(rating),
            ..FeedbackEntry::default()
        }
    }

    fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::with(vec![
            ("Acme", entry(4, "Well organized process")),
            ("acme", entry(5, "Very organized and friendly panel")),
            ("Zeta", entry(2, "Lengthy rounds")),
        ]))
    }

    fn service(model: Option<Arc<ScriptedModel>>) -> ReportService {
        let model = model.map(|m| m as Arc<dyn CompletionModel>);
        ReportService::new(store(), model, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_rule_based_report_counts_matching_entries() {
        let generated = service(None).generate("ACME", false).await.unwrap();
        assert_eq!(generated.metadata.feedback_count, 2);
        assert!(!generated.metadata.ai_powered);
        assert!(!generated.report.ai_generated);
        assert_eq!(generated.report.title, "Placement Feedback Report: ACME");
    }

    #[tokio::test]
    async fn test_blank_company_is_validation_error() {
        let err = service(None).generate("   ", true).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_blank_company_never_touches_store() {
        let service = ReportService::new(
            Arc::new(InMemoryStore::unavailable()),
            None,
            Duration::from_secs(5),
        );
        let err = service.generate("", false).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_store_error() {
        let service = ReportService::new(
            Arc::new(InMemoryStore::unavailable()),
            None,
            Duration::from_secs(5),
        );
        let err = service.generate("Acme", false).await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }

    #[tokio::test]
    async fn test_ai_requested_without_credential_downgrades() {
        let generated = service(None).generate("Acme", true).await.unwrap();
        assert!(!generated.metadata.ai_powered);
        assert!(!generated.report.ai_generated);
    }

    #[tokio::test]
    async fn test_ai_failure_still_returns_complete_report() {
        let model = Arc::new(ScriptedModel::failing());
        let generated = service(Some(model.clone()))
            .generate("Acme", true)
            .await
            .unwrap();
        assert!(generated.metadata.ai_powered);
        assert!(!generated.report.ai_generated);
        assert!(!generated.report.sections.overview.is_empty());
        assert!(!generated.report.sections.positive_observations.is_empty());
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn test_use_ai_false_never_calls_model() {
        let model = Arc::new(ScriptedModel::failing());
        service(Some(model.clone()))
            .generate("Acme", false)
            .await
            .unwrap();
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_company_gets_no_data_report() {
        let generated = service(None).generate("Globex", false).await.unwrap();
        assert_eq!(generated.metadata.feedback_count, 0);
        assert_eq!(generated.report.sections.overview, NO_DATA_OVERVIEW);
    }

    #[tokio::test]
    async fn test_feedback_count_matches_case_insensitive_exact() {
        let service = ReportService::new(
            Arc::new(InMemoryStore::with(vec![
                ("Acme", FeedbackEntry::default()),
                ("ACME", FeedbackEntry::default()),
                ("Acme Labs", FeedbackEntry::default()),
            ])),
            None,
            Duration::from_secs(5),
        );
        let count = service.feedback_count(" acme ").await.unwrap();
        assert_eq!(count.company_name, "acme");
        assert_eq!(count.feedback_count, 2);
    }

    #[tokio::test]
    async fn test_companies_listed_once_per_name_ignoring_case() {
        let service = ReportService::new(
            Arc::new(InMemoryStore::with(vec![
                ("zeta", FeedbackEntry::default()),
                ("acme", FeedbackEntry::default()),
                ("Beta", FeedbackEntry::default()),
                ("Acme", FeedbackEntry::default()),
            ])),
            None,
            Duration::from_secs(5),
        );
        assert_eq!(
            service.list_companies().await.unwrap(),
            vec!["Acme", "Beta", "zeta"]
        );
    }

    #[tokio::test]
    async fn test_list_companies_store_failure() {
        let service = ReportService::new(
            Arc::new(InMemoryStore::unavailable()),
            None,
            Duration::from_secs(5),
        );
        let err = service.list_companies().await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }
}
