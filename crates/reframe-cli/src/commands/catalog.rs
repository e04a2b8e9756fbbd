//! Catalog command implementation.

use crate::cli::CatalogArgs;
use crate::error::Result;
use crate::output::Formatter;
use reframe_domain::Catalog;

/// Execute the catalog command.
pub fn execute_catalog(args: CatalogArgs, formatter: &Formatter) -> Result<()> {
    let catalog: Catalog = args.kind.into();
    println!("{}", formatter.format_entries(title(catalog), catalog.entries())?);
    Ok(())
}

/// Heading shown above a catalog in table output.
pub fn title(catalog: Catalog) -> &'static str {
    match catalog {
        Catalog::Thoughts => "What's on your mind?",
        Catalog::Emotions => "How do you feel?",
        Catalog::Grounding => "Try one of these:",
    }
}
