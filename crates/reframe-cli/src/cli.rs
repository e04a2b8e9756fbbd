//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reframe CLI - Turn what you'd tell a friend into what you tell yourself.
#[derive(Debug, Parser)]
#[command(name = "reframe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REFRAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Saved-reframes database path
    #[arg(short, long, global = true, env = "REFRAME_DATABASE")]
    pub database: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare text / IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite a second-person statement in first person
    Rewrite(RewriteArgs),

    /// Compose a reframe from emotions and a support statement
    Compose(ComposeArgs),

    /// List saved reframes
    List(ListArgs),

    /// Delete saved reframes
    Delete(DeleteArgs),

    /// Show built-in thoughts, emotions or grounding activities
    Catalog(CatalogArgs),

    /// Show the ordered rewrite rules
    Rules,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the rewrite command.
#[derive(Debug, Parser)]
pub struct RewriteArgs {
    /// Text to rewrite (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Arguments for the compose command.
#[derive(Debug, Parser)]
pub struct ComposeArgs {
    /// What you would say to a friend (words are joined with spaces)
    #[arg(required = true)]
    pub support: Vec<String>,

    /// Emotion label; repeat or use a comma-separated list
    #[arg(short, long = "emotion", value_delimiter = ',')]
    pub emotions: Vec<String>,

    /// The thought being reframed (shown for context)
    #[arg(short, long)]
    pub thought: Option<String>,

    /// Save the reframe
    #[arg(short, long)]
    pub save: bool,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Only reframes containing this text (case-insensitive)
    #[arg(long)]
    pub contains: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Reframe IDs to delete
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the catalog command.
#[derive(Debug, Parser)]
pub struct CatalogArgs {
    /// Which catalog to show
    #[arg(value_enum)]
    pub kind: CatalogArg,
}

/// Catalog argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CatalogArg {
    /// Common negative thoughts
    Thoughts,
    /// Emotion labels
    Emotions,
    /// Grounding activities
    Grounding,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the effective configuration to the file
    Init,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<CatalogArg> for reframe_domain::Catalog {
    fn from(kind: CatalogArg) -> Self {
        match kind {
            CatalogArg::Thoughts => reframe_domain::Catalog::Thoughts,
            CatalogArg::Emotions => reframe_domain::Catalog::Emotions,
            CatalogArg::Grounding => reframe_domain::Catalog::Grounding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_repl() {
        let cli = Cli::parse_from(["reframe"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_compose_command() {
        let cli = Cli::parse_from([
            "reframe", "compose", "-e", "Sad,Tired", "-e", "Lonely", "you", "are", "loved", "--save",
        ]);
        match cli.command {
            Some(Command::Compose(args)) => {
                assert_eq!(args.emotions, ["Sad", "Tired", "Lonely"]);
                assert_eq!(args.support.join(" "), "you are loved");
                assert!(args.save);
            }
            _ => panic!("Expected Compose command"),
        }
    }

    #[test]
    fn test_rewrite_requires_text() {
        assert!(Cli::try_parse_from(["reframe", "rewrite"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["reframe", "list", "--format", "json", "--no-color", "-d", "x.db"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert_eq!(cli.database, Some(PathBuf::from("x.db")));
    }

    #[test]
    fn test_catalog_conversion() {
        let catalog: reframe_domain::Catalog = CatalogArg::Grounding.into();
        assert_eq!(catalog, reframe_domain::Catalog::Grounding);
    }
}
