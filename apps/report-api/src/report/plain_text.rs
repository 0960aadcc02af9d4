//! Plain-text export. The layout is the published download format; keep it byte-stable.

use crate::report::Report;

pub const BULLET: &str = "•";
const RULE: &str = "============================================================";
const SIGNATURE: &str = "Prepared by the Placement Cell";

/// JSON section key → numbered heading, in export order.
pub const SECTION_HEADINGS: [(&str, &str); 6] = [
    ("overview", "OVERVIEW"),
    ("interviewProcessInsights", "INTERVIEW PROCESS INSIGHTS"),
    ("positiveObservations", "POSITIVE OBSERVATIONS"),
    ("challengesAndImprovements", "CHALLENGES AND AREAS FOR IMPROVEMENT"),
    ("preparationInsights", "PREPARATION INSIGHTS"),
    ("conclusion", "CONCLUSION"),
];

enum Body<'a> {
    Paragraph(&'a str),
    Bullets(&'a [String]),
}

pub fn generate_plain_text_report(report: &Report) -> String {
    let sections = &report.sections;
    let bodies = [
        Body::Paragraph(&sections.overview),
        Body::Paragraph(&sections.interview_process_insights),
        Body::Bullets(&sections.positive_observations),
        Body::Bullets(&sections.challenges_and_improvements),
        Body::Bullets(&sections.preparation_insights),
        Body::Paragraph(&sections.conclusion),
    ];

    let mut out = String::new();
    out.push_str(&report.title);
    out.push('\n');
    out.push_str(&format!("Generated on: {}\n", report.generated_date));
    out.push_str(RULE);
    out.push('\n');

    for (number, ((_, heading), body)) in SECTION_HEADINGS.iter().zip(bodies.iter()).enumerate() {
        out.push('\n');
        out.push_str(&format!("{}. {heading}\n", number + 1));
        match body {
            Body::Paragraph(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Body::Bullets(items) => {
                for item in items.iter() {
                    out.push_str(&format!("{BULLET} {item}\n"));
                }
            }
        }
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(SIGNATURE);
    out.push('\n');
    out
}
