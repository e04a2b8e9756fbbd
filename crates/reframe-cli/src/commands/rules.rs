//! Rules command implementation.

use crate::error::Result;
use crate::output::Formatter;
use reframe_domain::PerspectiveRewriter;

/// Execute the rules command.
pub fn execute_rules(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_rules(PerspectiveRewriter::standard())?);
    Ok(())
}
