//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Walks one reframing session at a time: enter a thought, pick emotions,
//! say what you'd tell a friend, then reveal the reframe.

use crate::cli::{DeleteArgs, ListArgs};
use crate::commands;
use crate::commands::catalog::title;
use crate::commands::compose::save_reframe;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use reframe_domain::catalog::{COMMON_THOUGHTS, EMOTIONS};
use reframe_domain::{rewrite, Catalog, ReframeSession, SessionState};
use reframe_store::SqliteStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::debug;

/// Run the interactive REPL.
pub fn run_repl(config: &Config, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Reframe REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session = ReframeSession::new();

    loop {
        let prompt = format!("reframe ({})> ", session.state().as_str());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Take care of yourself."));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, &mut session, store, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    /// Set the thought, either free text or a catalog number
    Thought(ThoughtInput),
    /// Show the common thoughts
    Thoughts,
    /// Replace the emotions from a comma-separated list
    Feel(String),
    /// Toggle emotions, by name or catalog number
    Toggle(Vec<String>),
    /// Show emotions with the current selection marked
    Emotions,
    /// Set what you'd say to a friend
    Say(String),
    Reveal,
    Ground,
    Save,
    Saved,
    Delete(Vec<String>),
    Rewrite(String),
    Status,
    Reset,
}

#[derive(Debug, PartialEq)]
enum ThoughtInput {
    Text(String),
    Catalog(usize),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let cmd = match head.to_lowercase().as_str() {
        "exit" | "quit" | "q" => ReplCommand::Exit,
        "help" | "?" => ReplCommand::Help,
        "thought" | "think" => {
            if rest.is_empty() {
                return Err(usage("thought <text> | thought #<n>"));
            }
            match rest.strip_prefix('#').map(str::parse::<usize>) {
                Some(Ok(n)) => ReplCommand::Thought(ThoughtInput::Catalog(n)),
                Some(Err(_)) => return Err(usage("thought #<n>")),
                None => ReplCommand::Thought(ThoughtInput::Text(rest.to_string())),
            }
        }
        "thoughts" => ReplCommand::Thoughts,
        "feel" => ReplCommand::Feel(rest.to_string()),
        "toggle" => {
            if rest.is_empty() {
                return Err(usage("toggle <emotion|n> [emotion|n]..."));
            }
            ReplCommand::Toggle(rest.split_whitespace().map(String::from).collect())
        }
        "emotions" => ReplCommand::Emotions,
        "say" => {
            if rest.is_empty() {
                return Err(usage("say <what you'd tell a friend>"));
            }
            ReplCommand::Say(rest.to_string())
        }
        "reframe" | "reveal" => ReplCommand::Reveal,
        "ground" => ReplCommand::Ground,
        "save" => ReplCommand::Save,
        "saved" | "list" => ReplCommand::Saved,
        "delete" => {
            if rest.is_empty() {
                return Err(usage("delete <id> [id2] ..."));
            }
            ReplCommand::Delete(rest.split_whitespace().map(String::from).collect())
        }
        "rewrite" => {
            if rest.is_empty() {
                return Err(usage("rewrite <text>"));
            }
            ReplCommand::Rewrite(rest.to_string())
        }
        "status" => ReplCommand::Status,
        "reset" | "new" => ReplCommand::Reset,
        other => {
            return Err(CliError::InvalidInput(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                other
            )))
        }
    };

    Ok(cmd)
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: ReplCommand,
    session: &mut ReframeSession,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    debug!("REPL command {:?} in state {}", cmd, session.state().as_str());

    match cmd {
        ReplCommand::Thought(ThoughtInput::Text(text)) => {
            session.set_thought(text);
        }
        ReplCommand::Thought(ThoughtInput::Catalog(n)) => {
            let thought = catalog_entry(&COMMON_THOUGHTS, n)?;
            session.set_thought(thought);
            println!("{}", formatter.success(&format!("Thought: {}", thought)));
        }
        ReplCommand::Thoughts => {
            print_numbered(formatter, title(Catalog::Thoughts), &COMMON_THOUGHTS, |_| false);
        }
        ReplCommand::Feel(input) => {
            session.set_emotions_from_input(&input);
            print_selection(session, formatter);
        }
        ReplCommand::Toggle(labels) => {
            for label in labels {
                let label = match label.parse::<usize>() {
                    Ok(n) => catalog_entry(&EMOTIONS, n)?.to_string(),
                    Err(_) => label,
                };
                session.toggle_emotion(&label);
            }
            print_selection(session, formatter);
        }
        ReplCommand::Emotions => {
            let emotions = session.emotions();
            print_numbered(formatter, title(Catalog::Emotions), &EMOTIONS, |e| emotions.contains(e));
        }
        ReplCommand::Say(text) => {
            session.set_support(text);
        }
        ReplCommand::Reveal => {
            if matches!(
                session.state(),
                SessionState::ShowingResult | SessionState::Grounding
            ) {
                // Already revealed; just show it again
                if let Some(reframe) = session.reframe() {
                    println!("{}", formatter.format_reframe(None, reframe.as_str())?);
                }
                return Ok(());
            }

            match session.reveal()? {
                Some(reframe) => {
                    let thought = session.request().thought.as_str();
                    println!("{}", formatter.format_reframe(Some(thought), reframe.as_str())?);
                    println!("{}", formatter.info("'save' to keep it, 'ground' for grounding ideas"));
                }
                None => println!(
                    "{}",
                    formatter.warning("Add at least one emotion ('feel') and what you'd say ('say') first")
                ),
            }
        }
        ReplCommand::Ground => {
            if let Some(activities) = session.toggle_grounding()? {
                println!("{}", formatter.format_entries(title(Catalog::Grounding), activities)?);
            }
        }
        ReplCommand::Save => {
            let reframe = match session.state() {
                SessionState::ShowingResult | SessionState::Grounding => session.reframe(),
                _ => None,
            }
            .ok_or_else(|| CliError::InvalidInput("Reveal a reframe before saving it".to_string()))?;

            match save_reframe(store, &reframe)? {
                Some(id) => println!("{}", formatter.reframe_saved(&id)),
                None => println!("{}", formatter.info("This reframe is already saved")),
            }
        }
        ReplCommand::Saved => {
            commands::execute_list(
                ListArgs {
                    contains: None,
                    limit: None,
                },
                store,
                formatter,
            )?;
        }
        ReplCommand::Delete(ids) => {
            commands::execute_delete(DeleteArgs { ids, yes: false }, store, formatter)?;
        }
        ReplCommand::Rewrite(text) => {
            println!("{}", rewrite(&text));
        }
        ReplCommand::Status => {
            print_status(session, formatter);
        }
        ReplCommand::Reset => {
            session.reset();
            println!("{}", formatter.info("Started a new reframe"));
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

/// Look up a 1-based catalog entry.
fn catalog_entry(entries: &'static [&'static str], n: usize) -> Result<&'static str> {
    n.checked_sub(1)
        .and_then(|i| entries.get(i))
        .copied()
        .ok_or_else(|| {
            CliError::InvalidInput(format!("Pick a number between 1 and {}", entries.len()))
        })
}

fn usage(text: &str) -> CliError {
    CliError::InvalidInput(format!("Usage: {}", text))
}

fn print_numbered(
    formatter: &Formatter,
    title: &str,
    entries: &[&str],
    selected: impl Fn(&str) -> bool,
) {
    println!("{}", formatter.info(title));
    for (i, entry) in entries.iter().enumerate() {
        let marker = if selected(entry) { "*" } else { " " };
        println!(" {} {:>2}. {}", marker, i + 1, entry);
    }
}

fn print_selection(session: &ReframeSession, formatter: &Formatter) {
    let emotions = session.emotions();
    if emotions.is_empty() {
        println!("{}", formatter.info("No emotions selected"));
    } else {
        println!("{}", formatter.success(&format!("Feeling: {}", emotions.to_input_string())));
    }
}

fn print_status(session: &ReframeSession, formatter: &Formatter) {
    let request = session.request();
    println!("{}", formatter.info(&format!("State: {}", session.state().as_str())));
    println!("  Thought:  {}", or_dash(&request.thought));
    println!("  Emotions: {}", or_dash(&request.emotions.to_input_string()));
    println!("  Support:  {}", or_dash(&request.support));
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!(
        "Failed to initialize editor: {}",
        e
    )))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::home_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  thought <text> | thought #<n>  - What's on your mind (see 'thoughts')");
    println!("  thoughts                       - List common thoughts");
    println!("  feel <a, b, ...>               - Set emotions");
    println!("  toggle <emotion|n> ...         - Toggle emotions (see 'emotions')");
    println!("  emotions                       - List emotions, * marks selected");
    println!("  say <text>                     - What would you say to a friend?");
    println!("  reframe                        - Show your reframe");
    println!("  ground                         - Show or hide grounding activities");
    println!("  save                           - Save the shown reframe");
    println!("  saved                          - List saved reframes");
    println!("  delete <id> [id2] ...          - Delete saved reframes (ID prefixes work)");
    println!("  rewrite <text>                 - Rewrite text in first person");
    println!("  status                         - Show the current inputs");
    println!("  reset                          - Start over");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_thought() {
        assert_eq!(
            parse_repl_command("thought I feel gross").unwrap(),
            ReplCommand::Thought(ThoughtInput::Text("I feel gross".to_string()))
        );
        assert_eq!(
            parse_repl_command("thought #3").unwrap(),
            ReplCommand::Thought(ThoughtInput::Catalog(3))
        );
        assert!(parse_repl_command("thought #x").is_err());
        assert!(parse_repl_command("thought").is_err());
    }

    #[test]
    fn test_parse_keywords_case_insensitive() {
        assert_eq!(parse_repl_command("EXIT").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("Reframe").unwrap(), ReplCommand::Reveal);
    }

    #[test]
    fn test_parse_toggle_and_feel() {
        assert_eq!(
            parse_repl_command("toggle sad 3").unwrap(),
            ReplCommand::Toggle(vec!["sad".to_string(), "3".to_string()])
        );
        assert_eq!(
            parse_repl_command("feel  sad, tired").unwrap(),
            ReplCommand::Feel("sad, tired".to_string())
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!(parse_repl_command("assert a b c").is_err());
    }

    #[test]
    fn test_catalog_entry_bounds() {
        assert_eq!(catalog_entry(&EMOTIONS, 1).unwrap(), "Sad");
        assert!(catalog_entry(&EMOTIONS, 0).is_err());
        assert!(catalog_entry(&EMOTIONS, 13).is_err());
    }

    #[test]
    fn test_session_flow_through_commands() {
        let mut session = ReframeSession::new();
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        for line in ["thought #2", "toggle 3 anxious 1", "say You are safe", "reframe", "save", "save"] {
            let cmd = parse_repl_command(line).unwrap();
            execute_repl_command(cmd, &mut session, &mut store, &formatter).unwrap();
        }

        // "anxious" toggled twice -> only Sad remains
        assert_eq!(session.emotions().to_input_string(), "Sad");
        assert_eq!(session.state(), SessionState::ShowingResult);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_save_before_reveal_fails() {
        let mut session = ReframeSession::new();
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = execute_repl_command(ReplCommand::Save, &mut session, &mut store, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
