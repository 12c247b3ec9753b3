//! Output formatting for CLI commands.
//!
//! This module renders diff reports and state summaries for the user in
//! text or JSON form. The text layout is presentation only; the report
//! itself is the contract.

use colored::Colorize;
use std::fmt::Write;
use tabled::{Table, Tabled};

use crate::differ::{DiffReport, ResourceDiff, Transition};
use crate::state::{InfraState, ResourceKind, StateFingerprint};

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

/// Diff row for table display.
#[derive(Tabled)]
struct DiffRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Fields")]
    fields: String,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a diff report for display.
    #[must_use]
    pub fn format_report(&self, report: &DiffReport, detailed: bool) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
            OutputFormat::Text => Self::format_report_text(report, detailed),
        }
    }

    /// Formats a report as text.
    fn format_report_text(report: &DiffReport, detailed: bool) -> String {
        if !report.has_changes() {
            return format!(
                "{} No changes required - infrastructure is up to date.\n",
                "✓".green()
            );
        }

        let mut output = String::from("\nInfrastructure Diff\n\n");

        let rows: Vec<DiffRow> = report
            .actionable_diffs()
            .iter()
            .enumerate()
            .map(|(i, d)| DiffRow {
                index: i + 1,
                action: Self::format_transition(d.transition),
                kind: d.label().to_string(),
                resource: d.name.clone(),
                fields: Self::changed_fields(d),
            })
            .collect();

        if !rows.is_empty() {
            let table = Table::new(rows).to_string();
            output.push_str(&table);
            output.push('\n');
        }

        if detailed {
            for diff in report.actionable_diffs() {
                if diff.field_changes.is_empty() {
                    continue;
                }
                let _ = write!(output, "\n{} '{}':\n", diff.label(), diff.name);
                for change in &diff.field_changes {
                    let _ = writeln!(output, "   {change}");
                }
            }
        }

        let _ = write!(
            output,
            "\nPlan: {} to create, {} to update, {} to destroy ({} unchanged)\n",
            report.creates.to_string().green(),
            report.updates.to_string().yellow(),
            report.deletes.to_string().red(),
            report.unchanged
        );

        output
    }

    /// Formats a state summary for display.
    #[must_use]
    pub fn format_state(&self, state: &InfraState) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(state).unwrap_or_default(),
            OutputFormat::Text => Self::format_state_text(state),
        }
    }

    /// Formats a state summary as text.
    fn format_state_text(state: &InfraState) -> String {
        let hasher = StateFingerprint::new();
        let fingerprint = hasher.fingerprint(state);

        let mut output = String::new();
        let _ = write!(output, "\nState: {}\n\n", state.project);
        let _ = writeln!(output, "   Version: {}", state.version);
        let _ = writeln!(output, "   Fingerprint: {}", hasher.short_hash(&fingerprint));
        let _ = writeln!(output, "   Resources: {}", state.len());

        for kind in ResourceKind::ALL {
            let resources = state.resources_of(kind);
            if resources.is_empty() {
                continue;
            }
            let names: Vec<&str> = resources.iter().map(|r| r.name()).collect();
            let _ = writeln!(output, "     {}: {}", kind, names.join(", "));
        }

        output
    }

    /// Formats a transition with color.
    fn format_transition(transition: Transition) -> String {
        match transition {
            Transition::Create => "+create".green().to_string(),
            Transition::Update => "~update".yellow().to_string(),
            Transition::Delete => "-delete".red().to_string(),
            Transition::Unchanged => "unchanged".dimmed().to_string(),
        }
    }

    /// Summarizes the changed field names of one diff.
    fn changed_fields(diff: &ResourceDiff) -> String {
        if diff.field_changes.is_empty() {
            return String::from("-");
        }
        let fields: Vec<&str> = diff
            .field_changes
            .iter()
            .map(|c| c.field_name.as_str())
            .collect();
        Self::truncate(&fields.join(", "), 40)
    }

    /// Truncates a string to a maximum length.
    fn truncate(s: &str, max_len: usize) -> String {
        if s.len() <= max_len {
            s.to_string()
        } else {
            format!("{}...", &s[..max_len - 3])
        }
    }
}
