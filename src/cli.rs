//! Command-line interface module for clean-folder.
//!
//! This module validates the single directory argument, runs the sort,
//! unpack and prune steps in order and prints the final report.

use crate::archive::unpack_archives;
use crate::error::{CleanError, PipelineError, Stage};
use crate::file_category::{Category, CategoryTable};
use crate::output::OutputFormatter;
use crate::prune::delete_empty_folders;
use crate::sorter::{SortReport, list_dir, sort_folder};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// Sort a folder into category subfolders, unpack its archives and remove
/// the folders left empty.
#[derive(Debug, Parser)]
#[command(name = "clean-folder", version, about)]
pub struct Cli {
    /// Directory to clean up
    pub path: Option<PathBuf>,
}

/// Everything a full run did, plus the resulting category contents.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub sort: SortReport,
    /// Folders archives were extracted into.
    pub extracted: Vec<PathBuf>,
    /// Empty folders that were deleted.
    pub removed: Vec<PathBuf>,
    /// Entries of each category folder after the run, in table order.
    pub contents: Vec<(Category, Vec<PathBuf>)>,
}

/// Lists the entries of each category folder under `root`.
///
/// Categories whose folder does not exist get an empty list.
pub fn category_contents(
    root: &Path,
    table: &CategoryTable,
) -> Result<Vec<(Category, Vec<PathBuf>)>, CleanError> {
    let mut categories: Vec<Category> = table.categories().collect();
    categories.push(Category::Other);

    let mut contents = Vec::with_capacity(categories.len());
    for category in categories {
        let folder = root.join(category.dir_name());
        let entries = if folder.is_dir() {
            list_dir(&folder)?
        } else {
            Vec::new()
        };
        contents.push((category, entries));
    }

    Ok(contents)
}

/// Runs sort, unpack and prune on `root`, in that order.
///
/// The first failing step stops the run; work already done stays done.
pub fn run_pipeline(root: &Path, table: &CategoryTable) -> Result<PipelineReport, PipelineError> {
    let sort = sort_folder(root, table).map_err(|e| PipelineError::new(Stage::Sort, e))?;
    let extracted = unpack_archives(root).map_err(|e| PipelineError::new(Stage::Unpack, e))?;
    let removed = delete_empty_folders(root).map_err(|e| PipelineError::new(Stage::Prune, e))?;
    let contents =
        category_contents(root, table).map_err(|e| PipelineError::new(Stage::Report, e))?;

    info!(
        "run finished: {} moved, {} archives unpacked, {} folders removed",
        sort.moved.len(),
        extracted.len(),
        removed.len()
    );

    Ok(PipelineReport {
        sort,
        extracted,
        removed,
        contents,
    })
}

/// Runs the CLI application on the given directory.
///
/// A missing argument or a path that does not exist is reported and the
/// function returns `Ok(())`. Failures inside the pipeline are returned.
///
/// # Examples
///
/// ```no_run
/// use clean_folder::cli::run_cli;
/// use std::path::Path;
///
/// match run_cli(Some(Path::new("/path/to/downloads"))) {
///     Ok(()) => {}
///     Err(e) => eprintln!("{} (at {})", e, e.source.path().display()),
/// }
/// ```
pub fn run_cli(path: Option<&Path>) -> Result<(), PipelineError> {
    let Some(root) = path else {
        OutputFormatter::error("No path to folder");
        OutputFormatter::plain("Usage: clean-folder <directory_path>");
        return Ok(());
    };

    if !root.exists() {
        OutputFormatter::error(&format!(
            "Folder with path {} does not exist.",
            root.display()
        ));
        return Ok(());
    }

    if !root.is_dir() {
        OutputFormatter::error(&format!("{} is not a folder.", root.display()));
        return Ok(());
    }

    OutputFormatter::info(&format!("Cleaning up: {}", root.display()));

    let table = CategoryTable::default();
    let report = run_pipeline(root, &table)?;

    OutputFormatter::success("The task has been completed");
    print_report(&report);

    Ok(())
}

fn print_report(report: &PipelineReport) {
    OutputFormatter::category_listing(&report.contents);
    OutputFormatter::extension_list("Used extensions:", &report.sort.extensions.encountered);
    OutputFormatter::extension_list("Unknown extensions:", &report.sort.extensions.unknown);

    if !report.sort.skipped.is_empty() {
        OutputFormatter::header("Left in place (name already taken):");
        for path in &report.sort.skipped {
            OutputFormatter::warning(&path.display().to_string());
        }
    }

    OutputFormatter::run_summary(
        report.sort.moved.len(),
        report.sort.in_place.len(),
        report.sort.skipped.len(),
        report.extracted.len(),
        report.removed.len(),
    );
}
