//! Keyword catalogue: the canned phrases the rule-based analyzer can report,
//! each with the trigger substrings that detect it in lowercase feedback text.
//!
//! A phrase matches when ANY of its trigger groups matches, and a group matches
//! when ALL of its substrings are present.

#[derive(Debug)]
pub struct Phrase {
    pub text: &'static str,
    pub triggers: &'static [&'static [&'static str]],
}

impl Phrase {
    /// `haystack` must already be lowercase.
    pub fn matches(&self, haystack: &str) -> bool {
        self.triggers
            .iter()
            .any(|group| group.iter().all(|needle| haystack.contains(needle)))
    }
}

/// Scanned over overall experience + tips.
pub static POSITIVE_ASPECTS: &[Phrase] = &[
    Phrase {
        text: "Well-organized interview process",
        triggers: &[&["well", "organized"], &["well", "organised"], &["smooth"]],
    },
    Phrase {
        text: "Friendly and supportive interviewers",
        triggers: &[&["friendly"], &["supportive"], &["cooperative"]],
    },
    Phrase {
        text: "Interviewers provided helpful hints when candidates were stuck",
        triggers: &[&["hint"], &["guided", "interviewer"]],
    },
    Phrase {
        text: "Questions focused on fundamental concepts",
        triggers: &[&["basic"], &["fundamental"]],
    },
    Phrase {
        text: "Clear communication from the recruitment team",
        triggers: &[&["clear", "communicat"], &["informed", "time"], &["transparent"]],
    },
    Phrase {
        text: "Valuable learning experience",
        triggers: &[&["learning", "experience"], &["learnt"], &["learned"]],
    },
    Phrase {
        text: "Positive overall interview experience",
        triggers: &[
            &["good", "experience"],
            &["great", "experience"],
            &["positive"],
            &["enjoyed"],
        ],
    },
];

/// Scanned over overall experience + tips.
pub static CHALLENGES: &[Phrase] = &[
    Phrase {
        text: "High difficulty level of questions",
        // bare "hard" also appears in advice ("work hard"), so it needs context
        triggers: &[
            &["difficult"],
            &["tough"],
            &["challenging"],
            &["hard", "question"],
            &["very hard"],
            &["too hard"],
            &["was hard"],
            &["were hard"],
        ],
    },
    Phrase {
        text: "Time pressure during assessments",
        triggers: &[
            &["time", "pressure"],
            &["time", "limit"],
            &["time", "constraint"],
            &["less time"],
        ],
    },
    Phrase {
        text: "Lengthy selection process",
        triggers: &[&["lengthy"], &["long", "process"], &["too", "long"]],
    },
    Phrase {
        text: "Nervousness and stress during interviews",
        triggers: &[&["nervous"], &["anxious"], &["stress"]],
    },
    Phrase {
        text: "Unexpected or tricky questions",
        triggers: &[&["unexpected"], &["tricky"]],
    },
    Phrase {
        text: "Limited feedback after interview rounds",
        triggers: &[&["no feedback"], &["lack of feedback"], &["did not hear back"]],
    },
    Phrase {
        text: "Technical issues on the assessment platform",
        triggers: &[&["glitch"], &["network", "issue"], &["platform", "issue"], &["lagging"]],
    },
];

/// Scanned over overall experience + tips + round questions and resources.
pub static PREPARATION_INSIGHTS: &[Phrase] = &[
    Phrase {
        text: "Build a strong command of data structures and algorithms",
        triggers: &[&["dsa"], &["data structure"], &["algorithm"]],
    },
    Phrase {
        text: "Practise regularly on coding platforms such as LeetCode, HackerRank, \
            or GeeksforGeeks",
        triggers: &[
            &["leetcode"],
            &["hackerrank"],
            &["geeksforgeeks"],
            &["gfg"],
            &["codechef"],
            &["codeforces"],
        ],
    },
    Phrase {
        text: "Revise core computer science subjects such as OOP, DBMS, operating systems, \
            and computer networks",
        triggers: &[
            &["oop"],
            &["dbms"],
            &["operating system"],
            &["computer network"],
        ],
    },
    Phrase {
        text: "Be thorough with the projects listed on your resume",
        triggers: &[&["project"], &["resume"]],
    },
    Phrase {
        text: "Prepare for SQL and database queries",
        triggers: &[&["sql"], &["database"]],
    },
    Phrase {
        text: "Practise aptitude and logical reasoning questions",
        triggers: &[&["aptitude"], &["quant"], &["reasoning"]],
    },
    Phrase {
        text: "Work on communication skills and confidence",
        triggers: &[&["communication"], &["confident"], &["confidence"]],
    },
    Phrase {
        text: "Take mock interviews before the drive",
        triggers: &[&["mock"]],
    },
];
