//! Rewrite command implementation.

use crate::cli::RewriteArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use reframe_domain::rewrite;

/// Execute the rewrite command.
pub fn execute_rewrite(args: RewriteArgs, formatter: &Formatter) -> Result<()> {
    let input = args.text.join(" ");
    let output = rewrite(&input);

    match formatter.format() {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "input": input,
                "output": output,
            }))?
        ),
        OutputFormat::Table | OutputFormat::Quiet => println!("{}", output),
    }

    Ok(())
}
