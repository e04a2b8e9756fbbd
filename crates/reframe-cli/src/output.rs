//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chrono::{DateTime, Local, Utc};
use colored::*;
use reframe_domain::{PerspectiveRewriter, ReframeId, SavedReframe, Step};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style, Width},
};

/// Widest reframe column before wrapping in table output
const TEXT_COLUMN_WIDTH: usize = 72;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format saved reframes.
    pub fn format_reframes(&self, reframes: &[SavedReframe]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_reframes_json(reframes),
            OutputFormat::Table => self.format_reframes_table(reframes),
            OutputFormat::Quiet => self.format_reframes_quiet(reframes),
        }
    }

    /// Format saved reframes as JSON.
    fn format_reframes_json(&self, reframes: &[SavedReframe]) -> Result<String> {
        let json_reframes: Vec<serde_json::Value> = reframes
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id.to_string(),
                    "text": r.text,
                    "created_at": r.created_at,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_reframes)?)
    }

    /// Format saved reframes as a table.
    fn format_reframes_table(&self, reframes: &[SavedReframe]) -> Result<String> {
        if reframes.is_empty() {
            return Ok(self.colorize("No saved reframes.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Reframe", "Saved"]);

        for reframe in reframes {
            builder.push_record([
                &reframe.id.to_string()[..8], // Truncate ID for readability
                &reframe.text,
                &format_timestamp(reframe.created_at),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(TEXT_COLUMN_WIDTH)));

        Ok(table.to_string())
    }

    /// Format saved reframes in quiet mode (IDs only).
    fn format_reframes_quiet(&self, reframes: &[SavedReframe]) -> Result<String> {
        let ids: Vec<String> = reframes.iter().map(|r| r.id.to_string()).collect();
        Ok(ids.join("\n"))
    }

    /// Format a composed reframe, with the thought it answers if given.
    pub fn format_reframe(&self, thought: Option<&str>, reframe: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "thought": thought,
                "reframe": reframe,
            }))?),
            OutputFormat::Quiet => Ok(reframe.to_string()),
            OutputFormat::Table => {
                let mut out = String::new();
                if let Some(thought) = thought.filter(|t| !t.is_empty()) {
                    out.push_str(&format!("{} {}\n", self.colorize("Thought:", "cyan"), thought));
                }
                out.push_str(&format!("{} {}", self.colorize("Your Reframe:", "magenta"), reframe));
                Ok(out)
            }
        }
    }

    /// Format a plain list of catalog entries.
    pub fn format_entries(&self, title: &str, entries: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Quiet => Ok(entries.join("\n")),
            OutputFormat::Table => {
                let mut out = self.colorize(title, "cyan");
                for entry in entries {
                    out.push_str(&format!("\n  • {}", entry));
                }
                Ok(out)
            }
        }
    }

    /// Format the rewrite rule table in application order.
    pub fn format_rules(&self, rewriter: &PerspectiveRewriter) -> Result<String> {
        let rows: Vec<[String; 5]> = rewriter
            .phases()
            .iter()
            .enumerate()
            .flat_map(|(phase_idx, phase)| {
                phase.steps().iter().map(move |step| match step {
                    Step::Substitute(rule) => [
                        (phase_idx + 1).to_string(),
                        phase.kind().as_str().to_string(),
                        rule.mode().as_str().to_string(),
                        rule.pattern().to_string(),
                        if rule.guards_apostrophe() {
                            format!("{} (unless followed by ')", rule.replacement())
                        } else {
                            rule.replacement().to_string()
                        },
                    ],
                    Step::CapitalizeFirst => [
                        (phase_idx + 1).to_string(),
                        phase.kind().as_str().to_string(),
                        "-".to_string(),
                        "first character".to_string(),
                        "upper-case".to_string(),
                    ],
                })
            })
            .collect();

        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|[phase, kind, mode, pattern, replacement]| {
                        serde_json::json!({
                            "phase": phase,
                            "kind": kind,
                            "mode": mode,
                            "pattern": pattern,
                            "replacement": replacement,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|row| format!("{} -> {}", row[3], row[4]))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Phase", "Mode", "Pattern", "Replacement"]);
                for row in &rows {
                    builder.push_record(row);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a saved-reframe result.
    pub fn reframe_saved(&self, id: &ReframeId) -> String {
        self.success(&format!("Reframe saved: {}", id))
    }

    /// Format bulk operation result.
    pub fn bulk_result(&self, operation: &str, count: usize) -> String {
        self.success(&format!("{} {} reframe(s)", operation, count))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render Unix milliseconds in local time, e.g. `Jul 8, 2025 at 3:04 PM`.
pub fn format_timestamp(millis: u64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis as i64) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%b %-d, %Y at %-I:%M %p")
            .to_string(),
        None => millis.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_reframe() -> SavedReframe {
        SavedReframe {
            id: ReframeId::new(),
            text: "I feel sad, but this feeling doesn\u{2019}t define me. I matter".to_string(),
            created_at: 1_751_987_040_000,
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_reframes(&[create_test_reframe()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["created_at"], 1_751_987_040_000u64);
        assert!(parsed[0]["text"].as_str().unwrap().ends_with("I matter"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let reframe = create_test_reframe();
        let output = formatter.format_reframes(&[reframe.clone()]).unwrap();
        assert_eq!(output, reframe.id.to_string());
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_reframes(&[create_test_reframe()]).unwrap();
        assert!(output.contains("Reframe"));
        assert!(output.contains("Saved"));
    }

    #[test]
    fn test_empty_reframes() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_reframes(&[]).unwrap();
        assert!(output.contains("No saved reframes"));
    }

    #[test]
    fn test_format_reframe_with_thought() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_reframe(Some("I feel gross"), "I am safe").unwrap();
        assert_eq!(output, "Thought: I feel gross\nYour Reframe: I am safe");
    }

    #[test]
    fn test_format_reframe_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_reframe(None, "I am safe").unwrap(), "I am safe");
    }

    #[test]
    fn test_rules_cover_every_step() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let rewriter = PerspectiveRewriter::standard();
        let output = formatter.format_rules(rewriter).unwrap();
        let steps: usize = rewriter.phases().iter().map(|p| p.steps().len()).sum();
        assert_eq!(output.lines().count(), steps);
        assert!(output.lines().next().unwrap().starts_with("you're -> I'm"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }

    #[test]
    fn test_timestamp_renders_year() {
        assert!(format_timestamp(1_751_987_040_000).contains("2025"));
    }
}
