//! Template-based report generation.
//!
//! The zero-feedback report is a fixed boilerplate branch; every other report is
//! assembled from the Analysis with the templates below.

use chrono::NaiveDate;

use crate::analysis::normalize::{APTITUDE, CODING};
use crate::analysis::{Analysis, InterviewProcess, ModeDistribution};
use crate::report::{format_report_date, report_title, today, Report, ReportSections};
use crate::text::{capitalize_first, count_noun, join_natural};

pub const NO_DATA_OVERVIEW: &str = "No feedback has been recorded for this company yet. \
    This report will be updated once students share their interview experiences.";
pub const NO_DATA_PROCESS: &str = "Interview process details are not available at this time.";
pub const NO_DATA_POSITIVE: &str = "No observations are available yet.";
pub const NO_DATA_CHALLENGES: &str = "No challenges have been reported yet.";
pub const NO_DATA_CONCLUSION: &str = "The Placement Cell will publish a detailed report once \
    sufficient feedback has been collected for this company.";

pub const NO_PROCESS_DETAILS: &str =
    "Students did not provide detailed information about the interview process.";
pub const NO_POSITIVE_OBSERVATIONS: &str =
    "Students did not highlight specific positive aspects in their feedback.";
pub const NO_CHALLENGES: &str =
    "No significant challenges were consistently reported by students.";

pub const CODING_PRACTICE_INSIGHT: &str =
    "Practise coding problems regularly, with emphasis on data structures and algorithms";
pub const APTITUDE_PREP_INSIGHT: &str =
    "Prepare for aptitude tests covering quantitative ability, logical reasoning, \
    and verbal skills";

pub const GENERIC_PREPARATION_INSIGHTS: [&str; 3] = [
    "Strengthen your fundamentals in core technical subjects",
    "Practise problem-solving and aptitude questions regularly",
    "Be prepared to discuss your projects and experiences in detail",
];

pub fn generate_report(analysis: &Analysis) -> Report {
    generate_report_on(analysis, today())
}

pub fn generate_report_on(analysis: &Analysis, date: NaiveDate) -> Report {
    Report {
        title: report_title(&analysis.company_name),
        generated_date: format_report_date(date),
        sections: if analysis.total_feedback_count == 0 {
            no_data_sections()
        } else {
            templated_sections(analysis)
        },
        ai_generated: false,
    }
}

pub fn no_data_sections() -> ReportSections {
    ReportSections {
        overview: NO_DATA_OVERVIEW.to_string(),
        interview_process_insights: NO_DATA_PROCESS.to_string(),
        positive_observations: vec![NO_DATA_POSITIVE.to_string()],
        challenges_and_improvements: vec![NO_DATA_CHALLENGES.to_string()],
        preparation_insights: GENERIC_PREPARATION_INSIGHTS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        conclusion: NO_DATA_CONCLUSION.to_string(),
    }
}

/// The six sections rendered from the Analysis by template.
pub fn templated_sections(analysis: &Analysis) -> ReportSections {
    ReportSections {
        overview: overview(analysis),
        interview_process_insights: process_insights(&analysis.interview_process),
        positive_observations: capitalized_or(&analysis.positive_aspects, NO_POSITIVE_OBSERVATIONS),
        challenges_and_improvements: capitalized_or(&analysis.challenges, NO_CHALLENGES),
        preparation_insights: preparation_insights(analysis),
        conclusion: conclusion(analysis),
    }
}

fn overview(analysis: &Analysis) -> String {
    let process = &analysis.interview_process;
    let mut text = format!(
        "This report summarizes {} from students who took part in the {} recruitment process. \
        The overall sentiment of the feedback can be characterized as {}.",
        count_noun(
            analysis.total_feedback_count,
            "feedback submission",
            "feedback submissions"
        ),
        analysis.company_name,
        analysis.overall_sentiment
    );

    let round_types: Vec<&str> = process
        .common_rounds
        .iter()
        .map(|r| r.round_type.as_str())
        .collect();
    let mode = mode_summary(&process.mode_distribution);

    match (round_types.is_empty(), mode) {
        (false, Some(mode)) => text.push_str(&format!(
            " The selection process typically included {} rounds, {mode}.",
            join_natural(&round_types)
        )),
        (false, None) => text.push_str(&format!(
            " The selection process typically included {} rounds.",
            join_natural(&round_types)
        )),
        (true, Some(mode)) => text.push_str(&format!(" The rounds were {mode}.")),
        (true, None) => {}
    }

    text
}

/// `None` when no round reported a mode.
fn mode_summary(modes: &ModeDistribution) -> Option<String> {
    match (modes.online, modes.offline) {
        (0, 0) => None,
        (_, 0) => Some("conducted entirely online".to_string()),
        (0, _) => Some("conducted entirely offline".to_string()),
        (online, _) => {
            let percent = (online as f64 / modes.total() as f64 * 100.0).round() as u32;
            Some(format!(
                "conducted in a hybrid format with about {percent}% of rounds held online"
            ))
        }
    }
}

fn process_insights(process: &InterviewProcess) -> String {
    let mut parts = Vec::new();

    if !process.common_rounds.is_empty() {
        let rounds: Vec<String> = process
            .common_rounds
            .iter()
            .map(|r| format!("{} ({})", r.round_type, r.frequency))
            .collect();
        parts.push(format!(
            "Students reported the following rounds, with the number of mentions in brackets: {}.",
            join_natural(&rounds)
        ));
    }

    for (round_type, label) in &process.difficulty_trends {
        parts.push(format!(
            "The {round_type} round was generally rated {}.",
            label.to_lowercase()
        ));
    }

    let modes = &process.mode_distribution;
    if modes.total() > 0 {
        parts.push(format!(
            "Of the rounds with a reported mode, {} {} conducted online and {} offline.",
            modes.online,
            if modes.online == 1 { "was" } else { "were" },
            modes.offline
        ));
    }

    if parts.is_empty() {
        NO_PROCESS_DETAILS.to_string()
    } else {
        parts.join(" ")
    }
}

fn capitalized_or(items: &[String], fallback: &str) -> Vec<String> {
    if items.is_empty() {
        vec![fallback.to_string()]
    } else {
        items.iter().map(|s| capitalize_first(s)).collect()
    }
}

fn preparation_insights(analysis: &Analysis) -> Vec<String> {
    let mut insights: Vec<String> = analysis
        .preparation_insights
        .iter()
        .map(|s| capitalize_first(s))
        .collect();

    if analysis.has_round(CODING) {
        insights.push(CODING_PRACTICE_INSIGHT.to_string());
    }
    if analysis.has_round(APTITUDE) {
        insights.push(APTITUDE_PREP_INSIGHT.to_string());
    }

    if insights.is_empty() {
        GENERIC_PREPARATION_INSIGHTS
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        insights
    }
}

fn conclusion(analysis: &Analysis) -> String {
    format!(
        "Based on the experiences shared by {}, the {} recruitment process is best described \
        as {}. Students preparing for upcoming drives are encouraged to review the insights \
        above and prepare accordingly. The Placement Cell wishes all aspiring candidates \
        the very best.",
        count_noun(analysis.total_feedback_count, "student", "students"),
        analysis.company_name,
        analysis.overall_sentiment
    )
}
