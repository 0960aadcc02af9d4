//! AI report generator: asks the LLM for the six section texts.
//!
//! The model's JSON is deserialized straight into `ReportSections` and validated.
//! On any failure the templated sections for the same Analysis are used instead.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::analysis::Analysis;
use crate::llm_client::prompts::{mentions_automation, NO_AUTOMATION_INSTRUCTION};
use crate::llm_client::{complete_json, CompletionModel, LlmError};
use crate::report::prompts::{REPORT_PROMPT_TEMPLATE, REPORT_SYSTEM};
use crate::report::{
    format_report_date, report_title, rule_based, today, Report, ReportGenerator,
    ReportSections,
};

pub struct AiReportGenerator {
    model: Arc<dyn CompletionModel>,
    timeout: Duration,
}

impl AiReportGenerator {
    pub fn new(model: Arc<dyn CompletionModel>, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    async fn request_sections(&self, analysis: &Analysis) -> Result<ReportSections, LlmError> {
        let prompt = build_report_prompt(analysis)?;
        let sections: ReportSections =
            complete_json(self.model.as_ref(), &prompt, REPORT_SYSTEM, self.timeout).await?;
        validate_sections(sections)
    }
}

#[async_trait]
impl ReportGenerator for AiReportGenerator {
    async fn generate(&self, analysis: &Analysis) -> Report {
        if analysis.total_feedback_count == 0 {
            return rule_based::generate_report(analysis);
        }

        match self.request_sections(analysis).await {
            Ok(sections) => {
                info!("AI report sections generated for {}", analysis.company_name);
                Report {
                    title: report_title(&analysis.company_name),
                    generated_date: format_report_date(today()),
                    sections,
                    ai_generated: true,
                }
            }
            Err(e) => {
                warn!(
                    "AI report generation failed for {}, using templated report: {e}",
                    analysis.company_name
                );
                rule_based::generate_report(analysis)
            }
        }
    }
}

fn build_report_prompt(analysis: &Analysis) -> Result<String, LlmError> {
    let analysis_json = serde_json::to_string_pretty(&serde_json::json!({
        "companyName": analysis.company_name,
        "totalFeedbackCount": analysis.total_feedback_count,
        "overallSentiment": analysis.overall_sentiment,
        "interviewProcess": analysis.interview_process,
        "positiveAspects": analysis.positive_aspects,
        "challenges": analysis.challenges,
        "preparationInsights": analysis.preparation_insights,
    }))?;

    Ok(REPORT_PROMPT_TEMPLATE
        .replace("{no_automation_instruction}", NO_AUTOMATION_INSTRUCTION)
        .replace("{company_name}", &analysis.company_name)
        .replace("{analysis_json}", &analysis_json))
}

/// Trims every text, rejects blanks, empty lists and any mention of automation.
fn validate_sections(sections: ReportSections) -> Result<ReportSections, LlmError> {
    let paragraph = |field: &str, text: String| -> Result<String, LlmError> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(LlmError::Invalid(format!("{field} is empty")));
        }
        if mentions_automation(&text) {
            return Err(LlmError::Invalid(format!("{field} mentions automation")));
        }
        Ok(text)
    };

    let list = |field: &str, items: Vec<String>| -> Result<Vec<String>, LlmError> {
        let items: Vec<String> = items
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        if items.is_empty() {
            return Err(LlmError::Invalid(format!("{field} has no items")));
        }
        if items.iter().any(|i| mentions_automation(i)) {
            return Err(LlmError::Invalid(format!("{field} mentions automation")));
        }
        Ok(items)
    };

    Ok(ReportSections {
        overview: paragraph("overview", sections.overview)?,
        interview_process_insights: paragraph(
            "interviewProcessInsights",
            sections.interview_process_insights,
        )?,
        positive_observations: list("positiveObservations", sections.positive_observations)?,
        challenges_and_improvements: list(
            "challengesAndImprovements",
            sections.challenges_and_improvements,
        )?,
        preparation_insights: list("preparationInsights", sections.preparation_insights)?,
        conclusion: paragraph("conclusion", sections.conclusion)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ModeDistribution, RoundFrequency};
    use crate::llm_client::testing::ScriptedModel;
    use crate::report::rule_based::{no_data_sections, templated_sections};

    const VALID_REPLY: &str = r#"{
        "overview": "  Four students shared their experiences of the Acme drive. ",
        "interviewProcessInsights": "The process comprised coding and HR rounds.",
        "positiveObservations": ["The panel was approachable.", ""],
        "challengesAndImprovements": ["Time limits were tight."],
        "preparationInsights": ["Practise graph problems."],
        "conclusion": "The Placement Cell wishes all candidates success."
    }"#;

    fn analysis() -> Analysis {
        let mut analysis = Analysis::empty("Acme");
        analysis.total_feedback_count = 4;
        analysis.overall_sentiment = "mixed".to_string();
        analysis.interview_process.common_rounds = vec![RoundFrequency {
            round_type: "Coding".to_string(),
            frequency: 4,
        }];
        analysis.interview_process.mode_distribution = ModeDistribution {
            online: 4,
            offline: 0,
        };
        analysis.positive_aspects = vec!["approachable panel".to_string()];
        analysis.ai_generated = true;
        analysis
    }

    fn generator(model: ScriptedModel) -> (Arc<ScriptedModel>, AiReportGenerator) {
        let model = Arc::new(model);
        let generator = AiReportGenerator::new(model.clone(), Duration::from_secs(5));
        (model, generator)
    }

    #[tokio::test]
    async fn test_successful_call_is_ai_generated() {
        let (_, generator) = generator(ScriptedModel::replying(VALID_REPLY));
        let report = generator.generate(&analysis()).await;
        assert!(report.ai_generated);
        assert_eq!(report.title, "Placement Feedback Report: Acme");
        assert_eq!(
            report.sections.overview,
            "Four students shared their experiences of the Acme drive."
        );
        assert_eq!(
            report.sections.positive_observations,
            vec!["The panel was approachable."]
        );
    }

    #[tokio::test]
    async fn test_call_failure_falls_back_to_templates() {
        let (_, generator) = generator(ScriptedModel::failing());
        let analysis = analysis();
        let report = generator.generate(&analysis).await;
        assert!(!report.ai_generated);
        assert_eq!(report.sections, templated_sections(&analysis));
        assert!(!report.sections.overview.is_empty());
        assert!(!report.sections.interview_process_insights.is_empty());
        assert!(!report.sections.positive_observations.is_empty());
        assert!(!report.sections.challenges_and_improvements.is_empty());
        assert!(!report.sections.preparation_insights.is_empty());
        assert!(!report.sections.conclusion.is_empty());
    }

    #[tokio::test]
    async fn test_empty_list_falls_back() {
        let reply = VALID_REPLY.replace(r#"["Time limits were tight."]"#, "[]");
        let (_, generator) = generator(ScriptedModel::replying(reply));
        assert!(!generator.generate(&analysis()).await.ai_generated);
    }

    #[tokio::test]
    async fn test_automation_mention_falls_back() {
        let reply = VALID_REPLY.replace(
            "The Placement Cell wishes all candidates success.",
            "This report was automatically generated.",
        );
        let (_, generator) = generator(ScriptedModel::replying(reply));
        assert!(!generator.generate(&analysis()).await.ai_generated);
    }

    #[tokio::test]
    async fn test_zero_feedback_skips_model_call() {
        let (model, generator) = generator(ScriptedModel::replying(VALID_REPLY));
        let report = generator.generate(&Analysis::empty("Acme")).await;
        assert_eq!(report.sections, no_data_sections());
        assert!(!report.ai_generated);
        assert_eq!(model.call_count(), 0);
    }

    #[test]
    fn test_prompt_embeds_analysis() {
        let prompt = build_report_prompt(&analysis()).unwrap();
        assert!(prompt.contains("\"companyName\": \"Acme\""));
        assert!(prompt.contains("approachable panel"));
        assert!(prompt.contains(NO_AUTOMATION_INSTRUCTION));
    }
}
