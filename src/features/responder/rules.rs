//! Keyword-driven responder.
//!
//! Replies are picked by the first rule whose pattern matches the input,
//! case-insensitively. Keywords match anywhere in the input, so "distressed"
//! counts as "stress". Unmatched input gets the fallback reply.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::ResponderService;
use crate::error::SangayError;

/// A single pattern/reply pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    reply: String,
}

impl Rule {
    /// Build a rule from a regex pattern.
    ///
    /// The pattern is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `SangayError::Parse` if the pattern is not a valid regex.
    pub fn new(pattern: &str, reply: impl Into<String>) -> Result<Self, SangayError> {
        let pattern = Regex::new(&format!("(?i){pattern}"))
            .map_err(|e| SangayError::Parse(format!("Invalid responder pattern: {e}")))?;
        Ok(Self {
            pattern,
            reply: reply.into(),
        })
    }

    /// Build a rule matching any of `keywords` anywhere in the input.
    ///
    /// # Errors
    ///
    /// Returns `SangayError::Parse` if the resulting regex is invalid.
    pub fn keywords(keywords: &[&str], reply: impl Into<String>) -> Result<Self, SangayError> {
        let alternatives = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        Self::new(&alternatives, reply)
    }

    /// Whether this rule applies to `input`.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }

    /// The reply this rule gives.
    #[must_use]
    pub fn reply(&self) -> &str {
        &self.reply
    }
}

/// Ordered rule list with a fallback reply.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    rules: Vec<Rule>,
    fallback: String,
}

impl KeywordResponder {
    /// Create a responder with no rules.
    #[must_use]
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Append a rule; earlier rules win.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the responder only ever gives its fallback.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Responder producing reflection prompts for journal entries.
    #[must_use]
    pub fn journal_prompts() -> Self {
        JOURNAL_PROMPTS.clone()
    }

    /// Responder producing chat replies.
    #[must_use]
    pub fn chat() -> Self {
        CHAT.clone()
    }
}

impl ResponderService for KeywordResponder {
    fn respond(&self, input: &str) -> String {
        self.rules
            .iter()
            .find(|rule| rule.matches(input))
            .map_or(self.fallback.as_str(), Rule::reply)
            .to_string()
    }
}

/// Opening line of every conversation.
pub const GREETING: &str =
    "Hello! I'm here to support your mental health journey. How are you feeling today?";

fn stock(fallback: &str, rules: &[(&[&str], &str)]) -> Result<KeywordResponder, SangayError> {
    let mut responder = KeywordResponder::new(fallback);
    for (keywords, reply) in rules {
        responder = responder.with_rule(Rule::keywords(keywords, *reply)?);
    }
    Ok(responder)
}

static JOURNAL_PROMPTS: Lazy<KeywordResponder> = Lazy::new(|| {
    stock(
        "Thank you for sharing. How are you really feeling today? What's on your mind?",
        &[
            (
                &["stress", "anxiety"],
                "I notice you're feeling stressed. Remember to take deep breaths and practice \
                 self-compassion. What's one small thing you can do for yourself today?",
            ),
            (
                &["sad", "depressed"],
                "It's okay to feel sad. Your feelings are valid. Consider reaching out to someone \
                 you trust or doing something that usually brings you joy. What would help you \
                 feel a bit better right now?",
            ),
            (
                &["happy", "excited"],
                "I'm glad you're feeling positive! What contributed to this feeling? How can you \
                 build on this momentum?",
            ),
            (
                &["tired", "exhausted"],
                "Rest is essential for mental health. Consider taking a short break, practicing \
                 gentle movement, or allowing yourself to rest without guilt. What would feel \
                 most restorative right now?",
            ),
        ],
    )
    .unwrap_or_else(|e| panic!("Invalid journal prompt rules: {e}"))
});

static CHAT: Lazy<KeywordResponder> = Lazy::new(|| {
    // "hi" is a whole word; as a substring it would greet "this" and "think".
    let greeting = Rule::new(r"hello|\bhi\b", GREETING)
        .unwrap_or_else(|e| panic!("Invalid greeting rule: {e}"));
    let rest = stock(
        "Thank you for sharing. I'm here to listen and support you. What's on your mind? \
         Remember, your feelings are valid and you don't have to go through this alone.",
        &[
            (
                &["help", "support"],
                "I'm here to listen and support you. You can share your thoughts, feelings, or \
                 concerns. Remember, it's okay to not be okay. What would be most helpful for \
                 you right now?",
            ),
            (
                &["meditation", "breathing"],
                "Great idea! Meditation and breathing exercises can help reduce stress and \
                 improve focus. Try taking 3 deep breaths: inhale for 4 counts, hold for 4, \
                 exhale for 4. How does that feel?",
            ),
            (
                &["stress", "anxiety"],
                "Stress and anxiety are common experiences. Try the 5-4-3-2-1 grounding \
                 technique: name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 \
                 you taste. This can help bring you back to the present moment.",
            ),
            (
                &["sleep", "rest"],
                "Quality sleep is crucial for mental health. Try establishing a calming bedtime \
                 routine, limit screen time before bed, and create a comfortable sleep \
                 environment. What helps you relax before sleep?",
            ),
        ],
    )
    .unwrap_or_else(|e| panic!("Invalid chat rules: {e}"));

    let mut responder = KeywordResponder::new(rest.fallback.clone()).with_rule(greeting);
    responder.rules.extend(rest.rules);
    responder
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_rule_wins() {
        let responder = KeywordResponder::new("default")
            .with_rule(Rule::keywords(&["alpha"], "first").unwrap())
            .with_rule(Rule::keywords(&["alpha", "beta"], "second").unwrap());

        assert_eq!(responder.respond("ALPHA and beta"), "first");
        assert_eq!(responder.respond("just beta"), "second");
        assert_eq!(responder.respond("gamma"), "default");
        assert_eq!(responder.len(), 2);
    }

    #[test]
    fn test_empty_responder_uses_fallback() {
        let responder = KeywordResponder::new("default");
        assert!(responder.is_empty());
        assert_eq!(responder.respond(""), "default");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            Rule::new("(unclosed", "x"),
            Err(SangayError::Parse(_))
        ));
    }

    #[test]
    fn test_journal_prompts() {
        let responder = KeywordResponder::journal_prompts();
        assert!(responder
            .respond("Work has me so stressed")
            .starts_with("I notice you're feeling stressed"));
        assert!(responder
            .respond("Feeling SAD today")
            .starts_with("It's okay to feel sad"));
        assert!(responder
            .respond("I'm excited about the trip")
            .starts_with("I'm glad you're feeling positive"));
        assert!(responder
            .respond("completely exhausted")
            .starts_with("Rest is essential"));
        assert!(responder
            .respond("went for a walk")
            .starts_with("Thank you for sharing. How are you really feeling"));
    }

    #[test]
    fn test_keywords_match_inside_words() {
        let responder = KeywordResponder::journal_prompts();
        assert!(responder
            .respond("I'm so distressed today")
            .starts_with("I notice you're feeling stressed"));
        assert!(responder
            .respond("Unhappy with how it went")
            .starts_with("I'm glad you're feeling positive"));
        assert!(responder
            .respond("feeling anxious")
            .starts_with("Thank you for sharing. How are you really feeling"));
    }

    #[test]
    fn test_keywords_are_literal() {
        let rule = Rule::keywords(&["c++", "a.b"], "x").unwrap();
        assert!(rule.matches("I write C++"));
        assert!(!rule.matches("axb"));
    }

    #[test]
    fn test_chat_greeting_needs_whole_word() {
        let responder = KeywordResponder::chat();
        assert_eq!(responder.respond("Hi there"), GREETING);
        assert_eq!(responder.respond("Well, HELLO"), GREETING);
        assert_ne!(responder.respond("this is nothing"), GREETING);
        assert!(responder
            .respond("I think I need support")
            .starts_with("I'm here to listen"));
    }

    #[test]
    fn test_chat_topics() {
        let responder = KeywordResponder::chat();
        assert!(responder.respond("can you help me").starts_with("I'm here to listen"));
        assert!(responder
            .respond("I want to try breathing exercises")
            .starts_with("Great idea!"));
        assert!(responder
            .respond("I was meditating")
            .starts_with("Thank you for sharing. I'm here to listen"));
        assert!(responder
            .respond("my anxiety is bad")
            .starts_with("Stress and anxiety"));
        assert!(responder
            .respond("I can't sleep")
            .starts_with("Quality sleep"));
        assert!(responder
            .respond("the weather is nice")
            .starts_with("Thank you for sharing. I'm here to listen"));
    }
}
