//! Normalization of the free-text round fields students fill in.
//!
//! Keywords are matched case-insensitively as substrings. Two-letter keywords
//! ("hr", "gd") must match a whole word so that e.g. "Round three" stays unmapped.

pub const APTITUDE: &str = "Aptitude";
pub const CODING: &str = "Coding";
pub const TECHNICAL: &str = "Technical";
pub const HR: &str = "HR";
pub const GROUP_DISCUSSION: &str = "Group Discussion";

/// Checked in order; the first matching type wins.
const ROUND_TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    (APTITUDE, &["aptitude", "quant", "reasoning", "logical", "verbal"]),
    (CODING, &["coding", "programming", "dsa", "hackerrank", "leetcode"]),
    (TECHNICAL, &["technical", "system design"]),
    (HR, &["hr", "human resource", "behavioral", "behavioural"]),
    (GROUP_DISCUSSION, &["group discussion", "gd"]),
];

pub const EASY: u8 = 1;
pub const MODERATE: u8 = 2;
pub const HARD: u8 = 3;

const EASY_TO_MODERATE_UP_TO: f64 = 1.5;
const MODERATE_UP_TO: f64 = 2.5;

pub const EASY_TO_MODERATE_LABEL: &str = "Easy to Moderate";
pub const MODERATE_LABEL: &str = "Moderate";
pub const MODERATE_TO_DIFFICULT_LABEL: &str = "Moderate to Difficult";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Online,
    Offline,
}

/// Maps a round's type text to a canonical type, or returns the trimmed original.
pub fn normalize_round_type(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();
    ROUND_TYPE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| keyword_matches(&lower, k)))
        .map(|(canonical, _)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

fn keyword_matches(lower: &str, keyword: &str) -> bool {
    if keyword.len() > 2 {
        lower.contains(keyword)
    } else {
        lower
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == keyword)
    }
}

/// Easy=1, Medium/Moderate=2, Hard/Difficult=3; anything else counts as 2.
pub fn difficulty_ordinal(raw: &str) -> u8 {
    let lower = raw.to_lowercase();
    if lower.contains("easy") {
        EASY
    } else if lower.contains("medium") || lower.contains("moderate") {
        MODERATE
    } else if lower.contains("hard") || lower.contains("difficult") {
        HARD
    } else {
        MODERATE
    }
}

/// Buckets an average ordinal; both bounds are inclusive upper bounds.
pub fn difficulty_label(average: f64) -> &'static str {
    if average <= EASY_TO_MODERATE_UP_TO {
        EASY_TO_MODERATE_LABEL
    } else if average <= MODERATE_UP_TO {
        MODERATE_LABEL
    } else {
        MODERATE_TO_DIFFICULT_LABEL
    }
}

pub fn normalize_mode(raw: &str) -> Option<Mode> {
    let lower = raw.to_lowercase();
    if lower.contains("online") {
        Some(Mode::Online)
    } else if lower.contains("offline") {
        Some(Mode::Offline)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aptitude_variants() {
        for raw in ["Quant Aptitude", "APTITUDE", "aptitude test", "Logical Reasoning"] {
            assert_eq!(normalize_round_type(raw), APTITUDE, "input {raw:?}");
        }
    }

    #[test]
    fn test_coding_variants() {
        assert_eq!(normalize_round_type("Programming Round"), CODING);
        assert_eq!(normalize_round_type("DSA"), CODING);
        assert_eq!(normalize_round_type("Online Coding Test"), CODING);
    }

    #[test]
    fn test_technical_and_hr() {
        assert_eq!(normalize_round_type("Technical Interview 1"), TECHNICAL);
        assert_eq!(normalize_round_type("HR Round"), HR);
        assert_eq!(normalize_round_type("Behavioural"), HR);
        // earlier entries win
        assert_eq!(normalize_round_type("Technical + HR"), TECHNICAL);
    }

    #[test]
    fn test_group_discussion() {
        assert_eq!(normalize_round_type("Group Discussion"), GROUP_DISCUSSION);
        assert_eq!(normalize_round_type("GD"), GROUP_DISCUSSION);
    }

    #[test]
    fn test_other_discussions_are_not_group_discussion() {
        assert_eq!(normalize_round_type("Project Discussion"), "Project Discussion");
        assert_eq!(normalize_round_type("Technical Discussion"), TECHNICAL);
    }

    #[test]
    fn test_short_keywords_need_whole_word() {
        assert_eq!(normalize_round_type("Round three"), "Round three");
    }

    #[test]
    fn test_unknown_type_keeps_trimmed_text() {
        assert_eq!(normalize_round_type("  Case Study "), "Case Study");
    }

    #[test]
    fn test_difficulty_ordinals() {
        assert_eq!(difficulty_ordinal("Easy"), EASY);
        assert_eq!(difficulty_ordinal("medium"), MODERATE);
        assert_eq!(difficulty_ordinal("Moderate"), MODERATE);
        assert_eq!(difficulty_ordinal("HARD"), HARD);
        assert_eq!(difficulty_ordinal("quite difficult"), HARD);
        assert_eq!(difficulty_ordinal("unsure"), MODERATE);
    }

    #[test]
    fn test_difficulty_label_boundaries() {
        assert_eq!(difficulty_label(1.0), EASY_TO_MODERATE_LABEL);
        assert_eq!(difficulty_label(1.5), EASY_TO_MODERATE_LABEL);
        assert_eq!(difficulty_label(5.0 / 3.0), MODERATE_LABEL);
        assert_eq!(difficulty_label(2.5), MODERATE_LABEL);
        assert_eq!(difficulty_label(2.51), MODERATE_TO_DIFFICULT_LABEL);
        assert_eq!(difficulty_label(3.0), MODERATE_TO_DIFFICULT_LABEL);
    }

    #[test]
    fn test_mode() {
        assert_eq!(normalize_mode("Online"), Some(Mode::Online));
        assert_eq!(normalize_mode("offline (on campus)"), Some(Mode::Offline));
        assert_eq!(normalize_mode("Hybrid"), None);
    }
}
