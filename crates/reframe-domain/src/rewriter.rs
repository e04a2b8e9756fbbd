//! Perspective rewriter - second person to first person
//!
//! The rewriter is an explicit ordered list of phases, each an ordered list
//! of steps. A phase's output feeds the next phase. Order is load-bearing:
//! contractions must be rewritten before bare pronouns, otherwise `you're`
//! becomes `I're`.

use crate::rule::{MatchMode, RuleError, SubstitutionRule};
use std::sync::LazyLock;

/// The four fixed stages of a rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Second-person contractions (`you're` -> `I'm`)
    Contraction,

    /// Multi-word idioms and verb + `you` objects
    Phrase,

    /// Standalone pronouns (`your` -> `my`, `you` -> `I`)
    Pronoun,

    /// Clean-up of artifacts left by earlier phases
    Normalization,
}

impl PhaseKind {
    /// Get the phase name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::Contraction => "contraction",
            PhaseKind::Phrase => "phrase",
            PhaseKind::Pronoun => "pronoun",
            PhaseKind::Normalization => "normalization",
        }
    }
}

/// One step inside a phase
#[derive(Debug, Clone)]
pub enum Step {
    /// Replace every match of a rule
    Substitute(SubstitutionRule),

    /// Upper-case the first character of the whole text
    CapitalizeFirst,
}

impl Step {
    fn apply(&self, text: &str) -> String {
        match self {
            Step::Substitute(rule) => rule.apply(text),
            Step::CapitalizeFirst => capitalize_first(text),
        }
    }
}

/// A named, ordered group of steps
#[derive(Debug, Clone)]
pub struct Phase {
    kind: PhaseKind,
    steps: Vec<Step>,
}

impl Phase {
    /// Create a new phase from ordered steps
    pub fn new(kind: PhaseKind, steps: Vec<Step>) -> Self {
        Self { kind, steps }
    }

    /// Phase kind
    pub fn kind(&self) -> PhaseKind {
        self.kind
    }

    /// Steps in application order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn apply(&self, text: &str) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |acc, step| step.apply(&acc))
    }
}

/// Deterministic second-to-first person rewriter
///
/// Unmatched text passes through verbatim; there are no error conditions.
///
/// # Examples
///
/// ```
/// use reframe_domain::PerspectiveRewriter;
///
/// let rewriter = PerspectiveRewriter::standard();
/// assert_eq!(rewriter.rewrite("You're amazing"), "I'm amazing");
/// ```
#[derive(Debug, Clone)]
pub struct PerspectiveRewriter {
    phases: Vec<Phase>,
}

static STANDARD: LazyLock<PerspectiveRewriter> = LazyLock::new(|| {
    PerspectiveRewriter::try_standard().expect("built-in rewrite table is valid")
});

impl PerspectiveRewriter {
    /// Create a rewriter from explicit phases
    pub fn from_phases(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    /// The shared rewriter with the built-in rule table
    ///
    /// Built once per process; cheap to call repeatedly.
    pub fn standard() -> &'static PerspectiveRewriter {
        &STANDARD
    }

    /// Build the built-in rule table
    ///
    /// # Errors
    /// Returns error if a built-in pattern fails to compile
    pub fn try_standard() -> Result<Self, RuleError> {
        Ok(Self::from_phases(vec![
            contraction_phase()?,
            phrase_phase()?,
            pronoun_phase()?,
            normalization_phase()?,
        ]))
    }

    /// Phases in application order
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Rewrite `input` from second to first person
    pub fn rewrite(&self, input: &str) -> String {
        self.phases
            .iter()
            .fold(input.to_string(), |acc, phase| phase.apply(&acc))
    }
}

/// Rewrite `input` with the built-in rule table
///
/// # Examples
///
/// ```
/// assert_eq!(reframe_domain::rewrite("you need it"), "I need");
/// ```
pub fn rewrite(input: &str) -> String {
    PerspectiveRewriter::standard().rewrite(input)
}

fn substitute(mode: MatchMode, pattern: &str, replacement: &str) -> Result<Step, RuleError> {
    SubstitutionRule::new(mode, pattern, replacement).map(Step::Substitute)
}

fn contraction_phase() -> Result<Phase, RuleError> {
    let pairs = [
        ("you're", "I'm"),
        ("you\u{2019}re", "I'm"),
        ("you'd", "I'd"),
        ("you\u{2019}d", "I'd"),
        ("you've", "I've"),
        ("you\u{2019}ve", "I've"),
        ("you'll", "I'll"),
        ("you\u{2019}ll", "I'll"),
    ];

    let steps = pairs
        .iter()
        .map(|(from, to)| substitute(MatchMode::Contraction, from, to))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Phase::new(PhaseKind::Contraction, steps))
}

fn phrase_phase() -> Result<Phase, RuleError> {
    let phrases = [
        ("i love you", "I love myself"),
        ("proud of you", "proud of myself"),
        ("remind you", "remind myself"),
        ("care about you", "care about myself"),
        ("for you", "for myself"),
        ("you are beautiful", "I am beautiful"),
        ("you are worthy", "I am worthy"),
        ("you are enough", "I am enough"),
        ("you are safe", "I am safe"),
        ("you are loved", "I am loved"),
        ("you are strong", "I am strong"),
        ("you matter", "I matter"),
        ("you belong", "I belong"),
        ("you got this", "I got this"),
    ];

    // Explicit phrases always run before the general patterns below.
    let mut steps = phrases
        .iter()
        .map(|(from, to)| substitute(MatchMode::Phrase, from, to))
        .collect::<Result<Vec<_>, _>>()?;

    let patterns = [
        (
            r"(?i)\b(support|love|remind|trust|forgive|care about|help|thank|appreciate) you\b",
            "${1} myself",
        ),
        (r"(?i)\byou aren['\u{2019}]t\b", "I'm not"),
        (r"(?i)\byou weren['\u{2019}]t\b", "I wasn't"),
        (r"(?i)\byou are\b", "I am"),
        (r"(?i)\byou were\b", "I was"),
    ];

    for (pattern, replacement) in patterns {
        steps.push(substitute(MatchMode::Pattern, pattern, replacement)?);
    }

    Ok(Phase::new(PhaseKind::Phrase, steps))
}

fn pronoun_phase() -> Result<Phase, RuleError> {
    let words = [
        ("yourself", "myself"),
        ("Yourself", "Myself"),
        ("your", "my"),
        ("Your", "My"),
        ("yours", "mine"),
        ("Yours", "Mine"),
    ];

    let mut steps = words
        .iter()
        .map(|(from, to)| substitute(MatchMode::Word, from, to))
        .collect::<Result<Vec<_>, _>>()?;

    for bare in ["you", "You"] {
        let rule = SubstitutionRule::new(MatchMode::Word, bare, "I")?.unless_followed_by_apostrophe();
        steps.push(Step::Substitute(rule));
    }

    Ok(Phase::new(PhaseKind::Pronoun, steps))
}

fn normalization_phase() -> Result<Phase, RuleError> {
    Ok(Phase::new(
        PhaseKind::Normalization,
        vec![
            substitute(MatchMode::Word, "i", "I")?,
            Step::CapitalizeFirst,
            // Pronoun substitution can leave a dangling object after "need".
            substitute(MatchMode::Pattern, r"(?i)\bneed (?:it|to it)\b", "need")?,
        ],
    ))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: text without second-person markers only gains a capital first letter
        #[test]
        fn test_pass_through(s in "[a-hj-xz ,.]{0,40}") {
            prop_assert_eq!(rewrite(&s), capitalize_first(&s));
        }

        /// Property: output never contains a split contraction
        #[test]
        fn test_no_split_contractions(prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}") {
            for c in ["you're", "you've", "you'd", "you'll"] {
                let input = format!("{} {} {}", prefix, c, suffix);
                let out = rewrite(&input);
                prop_assert!(!out.contains("I're"));
                prop_assert!(!out.contains("I've've"));
            }
        }
    }
}
