//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use reframe_domain::traits::{ReframeQuery, ReframeStore};
use reframe_domain::ReframeId;
use reframe_store::StoreError;
use std::io::{self, Write};

/// Execute the delete command.
pub fn execute_delete<S>(args: DeleteArgs, store: &mut S, formatter: &Formatter) -> Result<()>
where
    S: ReframeStore<Error = StoreError>,
{
    if args.ids.is_empty() {
        return Err(CliError::InvalidInput("No reframe IDs provided".to_string()));
    }

    let ids: Vec<ReframeId> = args
        .ids
        .iter()
        .map(|id| resolve_id(store, id))
        .collect::<Result<Vec<_>>>()?;

    // Confirm deletion unless --yes is specified
    if !args.yes {
        println!("Are you sure you want to delete {} reframe(s)?", ids.len());
        for id in &ids {
            if let Some(reframe) = store.get_reframe(*id)? {
                println!("  - \u{201c}{}\u{201d}", reframe.text);
            }
        }
        print!("Continue? [y/N] ");
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    let mut deleted = 0;
    for id in ids {
        if store.delete_reframe(id)? {
            deleted += 1;
        }
    }

    println!("{}", formatter.bulk_result("Deleted", deleted));
    Ok(())
}

/// Resolve a full ID or a unique prefix of one (as shown in table output).
pub fn resolve_id<S>(store: &S, input: &str) -> Result<ReframeId>
where
    S: ReframeStore<Error = StoreError>,
{
    let input = input.trim();
    if let Ok(id) = ReframeId::from_string(input) {
        return Ok(id);
    }

    let prefix = input.to_lowercase();
    if prefix.is_empty() {
        return Err(CliError::InvalidInput("Empty reframe ID".to_string()));
    }

    let matches: Vec<ReframeId> = store
        .list_reframes(&ReframeQuery::default())?
        .into_iter()
        .map(|r| r.id)
        .filter(|id| id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CliError::NotFound(input.to_string())),
        _ => Err(CliError::InvalidInput(format!(
            "ID prefix '{}' matches {} reframes",
            input,
            matches.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use reframe_domain::SavedReframe;
    use reframe_store::SqliteStore;

    fn store_with(texts: &[&str]) -> (SqliteStore, Vec<ReframeId>) {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let ids = texts
            .iter()
            .map(|t| store.save_reframe(SavedReframe::new(*t)).unwrap())
            .collect();
        (store, ids)
    }

    #[test]
    fn test_resolve_full_id() {
        let (store, ids) = store_with(&["I matter"]);
        assert_eq!(resolve_id(&store, &ids[0].to_string()).unwrap(), ids[0]);
    }

    #[test]
    fn test_resolve_prefix() {
        let (store, ids) = store_with(&["I matter"]);
        let short = &ids[0].to_string()[..8];
        assert_eq!(resolve_id(&store, short).unwrap(), ids[0]);
        assert_eq!(resolve_id(&store, &short.to_uppercase()).unwrap(), ids[0]);
    }

    #[test]
    fn test_resolve_unknown() {
        let (store, _) = store_with(&["I matter"]);
        assert!(matches!(resolve_id(&store, "zzzz"), Err(CliError::NotFound(_))));
    }

    #[test]
    fn test_delete_with_yes() {
        let (mut store, ids) = store_with(&["I matter", "I belong"]);
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = DeleteArgs {
            ids: vec![ids[0].to_string()],
            yes: true,
        };

        execute_delete(args, &mut store, &formatter).unwrap();
        assert!(store.get_reframe(ids[0]).unwrap().is_none());
        assert!(store.get_reframe(ids[1]).unwrap().is_some());
    }
}
