//! Output formatting and styling module.
//!
//! All user-facing text goes through [`OutputFormatter`], so the colours and
//! layout of the final report live in one place.

use crate::file_category::Category;
use colored::*;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// ```no_run
    /// use clean_folder::output::OutputFormatter;
    /// OutputFormatter::success("The task has been completed");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints the entries of every non-empty category folder.
    pub fn category_listing(contents: &[(Category, Vec<PathBuf>)]) {
        Self::header("Files in Each Category:");

        for (category, entries) in contents {
            if entries.is_empty() {
                continue;
            }
            println!("{}:", category.dir_name().bold());
            for entry in entries {
                println!(" - {}", entry.display());
            }
        }
    }

    /// Prints a titled list of extensions, one per line.
    ///
    /// The empty extension is shown as `(none)`.
    pub fn extension_list(title: &str, extensions: &BTreeSet<String>) {
        Self::header(title);

        if extensions.is_empty() {
            println!("{}", "(none)".dimmed());
            return;
        }
        for ext in extensions {
            if ext.is_empty() {
                println!("(none)");
            } else {
                println!("{}", ext);
            }
        }
    }

    /// Prints the counters of a finished run.
    pub fn run_summary(
        moved: usize,
        in_place: usize,
        skipped: usize,
        extracted: usize,
        removed: usize,
    ) {
        Self::header("SUMMARY");

        let rows = [
            ("Moved", moved, "file", "files"),
            ("Already sorted", in_place, "file", "files"),
            ("Left in place", skipped, "file", "files"),
            ("Unpacked", extracted, "archive", "archives"),
            ("Removed", removed, "empty folder", "empty folders"),
        ];
        let width = rows.iter().map(|(label, ..)| label.len()).max().unwrap_or(0);

        for (label, count, one, many) in rows {
            println!(
                "{:<width$} | {} {}",
                label,
                count.to_string().green(),
                if count == 1 { one } else { many },
                width = width
            );
        }
    }
}
