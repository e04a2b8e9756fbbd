//! Reframe module - composition of the final statement and saved records

use crate::emotion::EmotionSelection;
use crate::formatter::compose;
use crate::rewriter::rewrite;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Rewrite a support statement and compose it with the emotion list
///
/// Returns an empty string when either input is missing.
///
/// # Examples
///
/// ```
/// let text = reframe_domain::reframe(["Anxious", "Ashamed"], "You are doing the best you can");
/// assert_eq!(
///     text,
///     "I feel anxious and ashamed, but this feeling doesn\u{2019}t define me. I am doing the best I can"
/// );
/// ```
pub fn reframe<I, S>(emotions: I, support_text: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if support_text.is_empty() {
        return String::new();
    }
    compose(emotions, &rewrite(support_text))
}

/// A composed first-person reframe
///
/// Computed on demand and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reframe(String);

impl Reframe {
    /// Get the reframe text
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Reframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a user supplies for one reframe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReframeRequest {
    /// The negative thought, kept as display context only
    pub thought: String,

    /// Selected emotions
    pub emotions: EmotionSelection,

    /// What the user would say to a friend, in second person
    pub support: String,
}

impl ReframeRequest {
    /// Check whether a reframe can be produced
    pub fn is_producible(&self) -> bool {
        !self.emotions.is_empty() && !self.support.is_empty()
    }

    /// Build the reframe, or `None` if there is nothing to show
    pub fn build(&self) -> Option<Reframe> {
        let text = reframe(&self.emotions, &self.support);
        (!text.is_empty()).then_some(Reframe(text))
    }
}

/// Unique identifier for a saved reframe based on UUIDv7
///
/// UUIDv7 sorts chronologically, so ids double as creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReframeId(u128);

impl ReframeId {
    /// Generate a new UUIDv7-based id
    ///
    /// # Examples
    ///
    /// ```
    /// use reframe_domain::ReframeId;
    ///
    /// let id = ReframeId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an id from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an id from its hyphenated UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid reframe id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Milliseconds since the Unix epoch encoded in the id
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are the Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for ReframeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReframeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl std::str::FromStr for ReframeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// A reframe the user chose to keep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReframe {
    /// Unique identifier
    pub id: ReframeId,

    /// The reframe text as shown
    pub text: String,

    /// Creation time, milliseconds since the Unix epoch
    pub created_at: u64,
}

impl SavedReframe {
    /// Create a record stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        let id = ReframeId::new();
        Self {
            id,
            text: text.into(),
            created_at: now_millis().unwrap_or_else(|| id.timestamp()),
        }
    }

    /// Create a record from an existing reframe
    pub fn from_reframe(reframe: &Reframe) -> Self {
        Self::new(reframe.as_str())
    }
}

fn now_millis() -> Option<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis() as u64)
}
