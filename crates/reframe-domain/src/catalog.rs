//! Built-in prompts offered while composing a reframe

/// Common negative thoughts offered as one-tap starting points
pub const COMMON_THOUGHTS: [&str; 12] = [
    "I'm uncomfortable in my body",
    "I ate too much",
    "I feel gross",
    "My clothes don't fit right",
    "Why do I look like this?",
    "I don\u{2019}t look like I used to",
    "I wish I could disappear",
    "I look different from everyone else",
    "I hate how I look in photos",
    "I hate how I look in the mirror",
    "People are judging my body",
    "I should\u{2019}ve skipped that meal",
];

/// Emotion labels offered for selection
pub const EMOTIONS: [&str; 12] = [
    "Sad",
    "Angry",
    "Anxious",
    "Lonely",
    "Insecure",
    "Overwhelmed",
    "Embarrassed",
    "Stuck",
    "Ashamed",
    "Tired",
    "Guilty",
    "Frustrated",
];

/// Grounding activities suggested after a reframe
pub const GROUNDING_ACTIVITIES: [&str; 5] = [
    "Stretch to your favorite song",
    "Write yourself a letter",
    "Drink water",
    "Go for a walk outside",
    "Call or text a friend",
];

/// Which catalog to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    /// [`COMMON_THOUGHTS`]
    Thoughts,
    /// [`EMOTIONS`]
    Emotions,
    /// [`GROUNDING_ACTIVITIES`]
    Grounding,
}

impl Catalog {
    /// Entries of this catalog
    pub fn entries(&self) -> &'static [&'static str] {
        match self {
            Catalog::Thoughts => &COMMON_THOUGHTS,
            Catalog::Emotions => &EMOTIONS,
            Catalog::Grounding => &GROUNDING_ACTIVITIES,
        }
    }
}
