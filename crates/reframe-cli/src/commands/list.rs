//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use reframe_domain::traits::{ReframeQuery, ReframeStore};
use reframe_store::StoreError;

/// Execute the list command.
pub fn execute_list<S>(args: ListArgs, store: &S, formatter: &Formatter) -> Result<()>
where
    S: ReframeStore<Error = StoreError>,
{
    let query = ReframeQuery {
        contains: args.contains,
        limit: args.limit,
    };

    let reframes = store.list_reframes(&query)?;
    println!("{}", formatter.format_reframes(&reframes)?);

    Ok(())
}
