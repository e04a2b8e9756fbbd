//! Compose command implementation.

use crate::cli::ComposeArgs;
use crate::commands::open_store;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use reframe_domain::traits::ReframeStore;
use reframe_domain::{Reframe, ReframeId, ReframeRequest, SavedReframe};
use reframe_store::StoreError;
use tracing::{debug, info};

/// Execute the compose command.
pub fn execute_compose(args: ComposeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let save = args.save;
    let request = build_request(args);

    let Some(reframe) = request.build() else {
        // Not an error: there is simply nothing to show yet.
        println!(
            "{}",
            formatter.info("Nothing to reframe yet: add at least one emotion and what you'd say to a friend")
        );
        return Ok(());
    };

    let thought = Some(request.thought.as_str());
    println!("{}", formatter.format_reframe(thought, reframe.as_str())?);

    if save {
        let mut store = open_store(config)?;
        match save_reframe(&mut store, &reframe)? {
            Some(id) => println!("{}", formatter.reframe_saved(&id)),
            None => println!("{}", formatter.info("This reframe is already saved")),
        }
    }

    Ok(())
}

/// Turn command-line arguments into a reframe request.
pub fn build_request(args: ComposeArgs) -> ReframeRequest {
    let request = ReframeRequest {
        thought: args.thought.unwrap_or_default(),
        emotions: args.emotions.iter().collect(),
        support: args.support.join(" "),
    };
    debug!(
        "Composing with {} emotion(s), {} support chars",
        request.emotions.len(),
        request.support.len()
    );
    request
}

/// Save a reframe; returns `None` when identical text is already saved.
pub fn save_reframe<S>(store: &mut S, reframe: &Reframe) -> Result<Option<ReframeId>>
where
    S: ReframeStore<Error = StoreError>,
{
    match store.save_reframe(SavedReframe::from_reframe(reframe)) {
        Ok(id) => {
            info!("Saved reframe {}", id);
            Ok(Some(id))
        }
        Err(StoreError::Duplicate) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reframe_store::SqliteStore;

    fn args(emotions: &[&str], support: &str) -> ComposeArgs {
        ComposeArgs {
            support: support.split_whitespace().map(String::from).collect(),
            emotions: emotions.iter().map(|e| e.to_string()).collect(),
            thought: Some("I feel gross".to_string()),
            save: false,
        }
    }

    #[test]
    fn test_build_request() {
        let request = build_request(args(&["sad", "Tired", "SAD"], "you are  loved"));
        assert_eq!(request.emotions.to_input_string(), "Sad, Tired");
        assert_eq!(request.support, "you are loved");
        assert_eq!(
            request.build().unwrap().as_str(),
            "I feel sad and tired, but this feeling doesn\u{2019}t define me. I am loved"
        );
    }

    #[test]
    fn test_build_request_without_emotions() {
        let request = build_request(args(&[], "you matter"));
        assert!(request.build().is_none());
    }

    #[test]
    fn test_save_skips_duplicates() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let reframe = build_request(args(&["Stuck"], "you got this")).build().unwrap();

        assert!(save_reframe(&mut store, &reframe).unwrap().is_some());
        assert!(save_reframe(&mut store, &reframe).unwrap().is_none());
        assert_eq!(store.count().unwrap(), 1);
    }
}
