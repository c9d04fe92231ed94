//! Output formatting and styling.
//!
//! All terminal output of the binary goes through [`OutputFormatter`], so the
//! library itself stays silent apart from its logging collaborator.

use crate::pruner::Stats;
use colored::*;
use humansize::{DECIMAL, format_size};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Prints CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nmprune::output::OutputFormatter;
    /// OutputFormatter::error("removing node_modules/pkg/readme.md: Permission denied");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Creates a spinner shown while a prune is running.
    pub fn create_spinner(message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Prints the summary block for a prune.
    pub fn summary(stats: &Stats, elapsed: Duration) {
        println!();
        for (label, value) in summary_rows(stats, elapsed) {
            println!("{:>15} {}", label.bold(), value.green());
        }
    }
}

/// Label/value pairs shown in the summary, in display order.
pub fn summary_rows(stats: &Stats, elapsed: Duration) -> Vec<(&'static str, String)> {
    vec![
        ("files total", format_count(stats.files_total)),
        ("files removed", format_count(stats.files_removed)),
        ("size removed", format_size(stats.size_removed, DECIMAL)),
        ("duration", format_elapsed(elapsed)),
    ]
}

/// Formats a count with comma thousands separators.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Formats a wall-clock duration, rounded to milliseconds.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.1}s", elapsed.as_secs_f64())
    }
}
