//! Emotion selection - the set of feelings attached to a reframe

use std::collections::btree_set::{self, BTreeSet};

/// A set of emotion labels
///
/// Labels are trimmed and stored in title case, so `"sad"`, `" SAD "` and
/// `"Sad"` collapse to one entry. Blank labels are ignored. Iteration is
/// in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmotionSelection(BTreeSet<String>);

impl EmotionSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated input line, e.g. `"sad, tired"`
    ///
    /// # Examples
    ///
    /// ```
    /// use reframe_domain::EmotionSelection;
    ///
    /// let selection = EmotionSelection::parse("tired, sad,, Sad ");
    /// assert_eq!(selection.to_input_string(), "Sad, Tired");
    /// ```
    pub fn parse(input: &str) -> Self {
        input.split(',').collect()
    }

    /// Insert a label; returns `false` if blank or already present
    pub fn insert(&mut self, label: &str) -> bool {
        match canonical_label(label) {
            Some(label) => self.0.insert(label),
            None => false,
        }
    }

    /// Remove a label; returns `false` if it was not present
    pub fn remove(&mut self, label: &str) -> bool {
        match canonical_label(label) {
            Some(label) => self.0.remove(&label),
            None => false,
        }
    }

    /// Insert the label if absent, remove it if present
    ///
    /// Returns whether the label is selected afterwards.
    pub fn toggle(&mut self, label: &str) -> bool {
        let Some(label) = canonical_label(label) else {
            return false;
        };
        if self.0.remove(&label) {
            false
        } else {
            self.0.insert(label);
            true
        }
    }

    /// Check whether a label is selected
    pub fn contains(&self, label: &str) -> bool {
        canonical_label(label).is_some_and(|label| self.0.contains(&label))
    }

    /// Number of selected labels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in sorted order
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Sorted labels joined with `", "` for echoing back into an input field
    pub fn to_input_string(&self) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl<S: AsRef<str>> FromIterator<S> for EmotionSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for label in iter {
            selection.insert(label.as_ref());
        }
        selection
    }
}

impl<'a> IntoIterator for &'a EmotionSelection {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Trim and title-case a label, or `None` if blank
fn canonical_label(label: &str) -> Option<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut at_word_start = true;
    for c in trimmed.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    Some(out)
}
