// Shared prompt constants and prompt-building utilities.
// Each stage that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments and the checks that enforce them.

/// Reports are published under the Placement Cell's name.
pub const NO_AUTOMATION_INSTRUCTION: &str = "\
    CRITICAL: The text you write is published as an official document authored by the \
    college Placement Cell. NEVER mention artificial intelligence, AI, language models, \
    automation, or that the text was generated. Write in a formal, institutional voice.";

/// Feedback is anonymized before it is sent; keep it that way.
pub const ANONYMITY_INSTRUCTION: &str = "\
    Feedback entries are identified only by ids such as F1, F2. Never attempt to identify \
    or refer to individual students; speak about students collectively.";

const AUTOMATION_PHRASES: &[&str] = &[
    "artificial intelligence",
    "language model",
    "automated",
    "automatically generated",
    "ai-generated",
    "ai generated",
    "generated by",
    "chatgpt",
    "machine learning model",
];

/// Returns true when `text` refers to automation or AI authorship.
pub fn mentions_automation(text: &str) -> bool {
    let lower = text.to_lowercase();
    if AUTOMATION_PHRASES.iter().any(|p| lower.contains(p)) {
        return true;
    }
    lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "ai" || word == "llm" || word == "gpt")
}
