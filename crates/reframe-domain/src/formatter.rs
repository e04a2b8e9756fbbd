//! Emotion list formatting and reframe composition

use std::collections::BTreeSet;

/// Format emotion labels as a natural-language list
///
/// Labels are trimmed, lower-cased, de-duplicated and sorted; blank labels are
/// dropped. Three or more labels get an Oxford comma.
///
/// # Examples
///
/// ```
/// use reframe_domain::format_list;
///
/// assert_eq!(format_list(["Sad"]), "sad");
/// assert_eq!(format_list(["Sad", "Angry"]), "angry and sad");
/// assert_eq!(format_list(["Sad", "Angry", "Tired"]), "angry, sad, and tired");
/// ```
pub fn format_list<I, S>(emotions: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let labels: Vec<String> = emotions
        .into_iter()
        .map(|label| label.as_ref().trim().to_lowercase())
        .filter(|label| !label.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    match labels.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// Compose the final reframe sentence
///
/// Returns an empty string when either input is missing, which callers
/// treat as "nothing to show". The statement is inserted verbatim.
///
/// # Examples
///
/// ```
/// use reframe_domain::compose;
///
/// assert_eq!(
///     compose(["Sad"], "I am strong"),
///     "I feel sad, but this feeling doesn\u{2019}t define me. I am strong"
/// );
/// assert_eq!(compose(Vec::<String>::new(), "I am strong"), "");
/// ```
pub fn compose<I, S>(emotions: I, rewritten_statement: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if rewritten_statement.is_empty() {
        return String::new();
    }

    let list = format_list(emotions);
    if list.is_empty() {
        return String::new();
    }

    format!(
        "I feel {}, but this feeling doesn\u{2019}t define me. {}",
        list, rewritten_statement
    )
}
