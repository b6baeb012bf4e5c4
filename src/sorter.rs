//! Folder sorting.
//!
//! Walks every regular file under a root, categorizes it and hands it to the
//! [`FileOrganizer`]. Extensions seen along the way are collected into an
//! [`ExtensionLog`] that is returned to the caller.

use crate::error::{CleanError, CleanResult};
use crate::file_category::{Category, CategoryTable, extension_of};
use crate::file_organizer::{FileOrganizer, MoveOutcome};
use glob::Pattern;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Extensions observed during a sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionLog {
    /// Every extension seen, known or not.
    pub encountered: BTreeSet<String>,
    /// Extensions that matched no category.
    pub unknown: BTreeSet<String>,
}

impl ExtensionLog {
    /// Records one file's extension and the category it landed in.
    pub fn record(&mut self, extension: &str, category: Category) {
        self.encountered.insert(extension.to_string());
        if category == Category::Other {
            self.unknown.insert(extension.to_string());
        }
    }
}

/// Everything one sort pass did.
#[derive(Debug, Clone, Default)]
pub struct SortReport {
    pub extensions: ExtensionLog,
    /// Files that were relocated, as `(from, to)`.
    pub moved: Vec<(PathBuf, PathBuf)>,
    /// Files left in place because their destination was taken.
    pub skipped: Vec<PathBuf>,
    /// Files that were already at their destination.
    pub in_place: Vec<PathBuf>,
}

impl SortReport {
    /// Total number of files the sorter looked at.
    pub fn files_seen(&self) -> usize {
        self.moved.len() + self.skipped.len() + self.in_place.len()
    }
}

/// Lists every path below `root` (not `root` itself) in one recursive glob.
pub(crate) fn walk_tree(root: &Path) -> CleanResult<Vec<PathBuf>> {
    let root_str = root.to_string_lossy();
    let pattern = format!(
        "{}/**/*",
        Pattern::escape(root_str.trim_end_matches(['/', '\\']))
    );

    let paths = glob::glob(&pattern).map_err(|e| CleanError::Walk {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    paths
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CleanError::Walk {
            path: e.path().to_path_buf(),
            reason: e.error().to_string(),
        })
}

/// Lists the direct children of `dir`, sorted by path.
///
/// Failing to open the folder or to read any of its entries is an error.
pub(crate) fn list_dir(dir: &Path) -> CleanResult<Vec<PathBuf>> {
    let read_failed = |e: std::io::Error| CleanError::ReadDirFailed {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut paths = fs::read_dir(dir)
        .map_err(read_failed)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_failed)?;
    paths.sort();
    Ok(paths)
}

/// Sorts every regular file under `root` into its category folder.
///
/// The list of files is taken before anything moves, so files relocated
/// during this pass are not visited twice. Files already inside their
/// category folder are reported as in place, which makes a second pass a
/// no-op.
///
/// # Examples
///
/// ```no_run
/// use clean_folder::file_category::CategoryTable;
/// use clean_folder::sorter::sort_folder;
/// use std::path::Path;
///
/// let report = sort_folder(Path::new("/path/to/downloads"), &CategoryTable::default())?;
/// println!("moved {} files", report.moved.len());
/// # Ok::<(), clean_folder::CleanError>(())
/// ```
pub fn sort_folder(root: &Path, table: &CategoryTable) -> CleanResult<SortReport> {
    info!("sorting {}", root.display());

    let files: Vec<PathBuf> = walk_tree(root)?
        .into_iter()
        .filter(|path| path.is_file())
        .collect();

    let mut report = SortReport::default();

    for file in &files {
        let category = table.categorize(file);

        match FileOrganizer::move_to_category(root, file, category)? {
            MoveOutcome::Moved { from, to } => report.moved.push((from, to)),
            MoveOutcome::Skipped { path, .. } => report.skipped.push(path),
            MoveOutcome::AlreadyInPlace { path } => report.in_place.push(path),
        }

        report.extensions.record(&extension_of(file), category);
    }

    info!(
        "sorted {} files ({} moved, {} skipped, {} already in place)",
        report.files_seen(),
        report.moved.len(),
        report.skipped.len(),
        report.in_place.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extension_log_records_unknown_only_for_other() {
        let mut log = ExtensionLog::default();
        log.record(".jpg", Category::Image);
        log.record(".xyz", Category::Other);
        log.record("", Category::Other);

        assert_eq!(
            log.encountered,
            BTreeSet::from([String::new(), ".jpg".to_string(), ".xyz".to_string()])
        );
        assert_eq!(
            log.unknown,
            BTreeSet::from([String::new(), ".xyz".to_string()])
        );
    }

    #[test]
    fn test_walk_tree_excludes_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/c.txt"), "c").unwrap();

        let mut paths = walk_tree(root).unwrap();
        paths.sort();
        assert_eq!(
            paths,
            vec![root.join("a"), root.join("a/b"), root.join("a/b/c.txt")]
        );
    }

    #[test]
    fn test_walk_tree_with_glob_characters_in_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("[weird] dir*");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("file.txt"), "x").unwrap();

        let paths = walk_tree(&root).unwrap();
        assert_eq!(paths, vec![root.join("file.txt")]);
    }

    #[test]
    fn test_list_dir_is_sorted_and_shallow() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::write(root.join("c.txt"), "c").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();

        assert_eq!(
            list_dir(root).unwrap(),
            vec![root.join("a.txt"), root.join("b"), root.join("c.txt")]
        );
    }

    #[test]
    fn test_list_dir_missing_folder_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");

        let result = list_dir(&missing);
        assert!(matches!(
            result,
            Err(CleanError::ReadDirFailed { ref path, .. }) if *path == missing
        ));
    }

    #[test]
    fn test_sort_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("deep/er")).unwrap();
        fs::write(root.join("deep/er/clip.mp4"), "v").unwrap();
        fs::write(root.join("deep/book.fb2"), "b").unwrap();

        let report = sort_folder(root, &CategoryTable::default()).unwrap();

        assert!(root.join("Video/clip.mp4").exists());
        assert!(root.join("Book/book.fb2").exists());
        assert_eq!(report.moved.len(), 2);
        assert!(report.extensions.unknown.is_empty());
    }

    #[test]
    fn test_second_sort_moves_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.png"), "a").unwrap();
        fs::write(root.join("b.weird"), "b").unwrap();

        let first = sort_folder(root, &CategoryTable::default()).unwrap();
        assert_eq!(first.moved.len(), 2);

        let second = sort_folder(root, &CategoryTable::default()).unwrap();
        assert!(second.moved.is_empty());
        assert!(second.skipped.is_empty());
        assert_eq!(second.in_place.len(), 2);
        assert_eq!(second.files_seen(), 2);
        assert_eq!(second.extensions, first.extensions);
    }

    #[test]
    fn test_collision_and_in_place_reported_apart() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("Documents")).unwrap();
        fs::write(root.join("Documents/report.pdf"), "sorted").unwrap();
        fs::create_dir(root.join("inbox")).unwrap();
        fs::write(root.join("inbox/report.pdf"), "newcomer").unwrap();

        let report = sort_folder(root, &CategoryTable::default()).unwrap();

        assert!(report.moved.is_empty());
        assert_eq!(report.skipped, vec![root.join("inbox/report.pdf")]);
        assert_eq!(report.in_place, vec![root.join("Documents/report.pdf")]);
        assert_eq!(
            fs::read_to_string(root.join("Documents/report.pdf")).unwrap(),
            "sorted"
        );
    }
}
