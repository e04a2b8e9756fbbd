//! Substitution rules - the unit of work of the perspective rewriter

use regex::Regex;
use std::fmt;

/// Apostrophes that terminate a guarded match (straight and typographic)
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// How a rule's pattern is matched against the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Case-insensitive literal, not anchored on word boundaries.
    ///
    /// Used for contractions, where the apostrophe already delimits the token.
    Contraction,

    /// Case-insensitive literal anchored on word boundaries at both ends
    Phrase,

    /// Case-sensitive literal anchored on word boundaries at both ends
    Word,

    /// Raw regular expression; the replacement may use `${n}` back-references
    Pattern,
}

impl MatchMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Contraction => "contraction",
            MatchMode::Phrase => "phrase",
            MatchMode::Word => "word",
            MatchMode::Pattern => "pattern",
        }
    }

    /// Build the regular expression source for a pattern under this mode
    fn to_regex_source(self, pattern: &str) -> String {
        match self {
            MatchMode::Contraction => format!("(?i){}", regex::escape(pattern)),
            MatchMode::Phrase => format!(r"(?i)\b{}\b", regex::escape(pattern)),
            MatchMode::Word => format!(r"\b{}\b", regex::escape(pattern)),
            MatchMode::Pattern => pattern.to_string(),
        }
    }
}

/// Errors raised while building rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The pattern did not compile
    InvalidPattern {
        /// Offending pattern as given
        pattern: String,
        /// Compiler message
        reason: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid rule pattern '{}': {}", pattern, reason)
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// An ordered (pattern, replacement) pair with a match mode
///
/// Every non-overlapping match in the input is replaced. Literal modes
/// insert the replacement verbatim; [`MatchMode::Pattern`] expands
/// `${n}` group references from the match.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    mode: MatchMode,
    pattern: String,
    replacement: String,
    guard_apostrophe: bool,
    regex: Regex,
}

impl SubstitutionRule {
    /// Create a new rule
    ///
    /// # Errors
    /// Returns error if the pattern does not compile under `mode`
    pub fn new(
        mode: MatchMode,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let pattern = pattern.into();
        let regex = Regex::new(&mode.to_regex_source(&pattern)).map_err(|e| {
            RuleError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            mode,
            pattern,
            replacement: replacement.into(),
            guard_apostrophe: false,
            regex,
        })
    }

    /// Skip matches immediately followed by an apostrophe
    ///
    /// Keeps a bare-pronoun rule from splitting contractions such as `you're`.
    pub fn unless_followed_by_apostrophe(mut self) -> Self {
        self.guard_apostrophe = true;
        self
    }

    /// Match mode
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Pattern as written (before mode anchoring)
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Replacement text
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Whether matches followed by an apostrophe are skipped
    pub fn guards_apostrophe(&self) -> bool {
        self.guard_apostrophe
    }

    /// Apply the rule to every match in `text`
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in self.regex.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&text[last..whole.start()]);

            if self.guard_apostrophe && followed_by_apostrophe(text, whole.end()) {
                out.push_str(whole.as_str());
            } else if self.mode == MatchMode::Pattern {
                caps.expand(&self.replacement, &mut out);
            } else {
                out.push_str(&self.replacement);
            }

            last = whole.end();
        }

        out.push_str(&text[last..]);
        out
    }
}

fn followed_by_apostrophe(text: &str, at: usize) -> bool {
    text[at..]
        .chars()
        .next()
        .is_some_and(|c| APOSTROPHES.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contraction_mode_ignores_case_and_boundaries() {
        let rule = SubstitutionRule::new(MatchMode::Contraction, "you're", "I'm").unwrap();
        assert_eq!(rule.apply("YOU'RE here, you're there"), "I'm here, I'm there");
        assert_eq!(rule.apply("thankyou're"), "thankI'm");
    }

    #[test]
    fn test_phrase_mode_respects_word_boundaries() {
        let rule = SubstitutionRule::new(MatchMode::Phrase, "for you", "for myself").unwrap();
        assert_eq!(rule.apply("This is For You"), "This is for myself");
        assert_eq!(rule.apply("for yourself"), "for yourself");
    }

    #[test]
    fn test_word_mode_is_case_sensitive() {
        let rule = SubstitutionRule::new(MatchMode::Word, "your", "my").unwrap();
        assert_eq!(rule.apply("your bag, Your coat, yours"), "my bag, Your coat, yours");
    }

    #[test]
    fn test_pattern_mode_expands_back_references() {
        let rule = SubstitutionRule::new(MatchMode::Pattern, r"(?i)\b(thank|help) you\b", "${1} myself")
            .unwrap();
        assert_eq!(rule.apply("Thank you and help you"), "Thank myself and help myself");
    }

    #[test]
    fn test_literal_replacement_is_not_expanded() {
        let rule = SubstitutionRule::new(MatchMode::Phrase, "cost", "$1").unwrap();
        assert_eq!(rule.apply("the cost"), "the $1");
    }

    #[test]
    fn test_apostrophe_guard() {
        let rule = SubstitutionRule::new(MatchMode::Word, "you", "I")
            .unwrap()
            .unless_followed_by_apostrophe();
        assert_eq!(rule.apply("you'd and you\u{2019}d but you"), "you'd and you\u{2019}d but I");
        assert!(rule.guards_apostrophe());
    }

    #[test]
    fn test_literal_patterns_are_escaped() {
        let rule = SubstitutionRule::new(MatchMode::Contraction, "a.b", "x").unwrap();
        assert_eq!(rule.apply("acb a.b"), "acb x");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = SubstitutionRule::new(MatchMode::Pattern, "(unclosed", "x").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_empty_input() {
        let rule = SubstitutionRule::new(MatchMode::Word, "you", "I").unwrap();
        assert_eq!(rule.apply(""), "");
    }
}
