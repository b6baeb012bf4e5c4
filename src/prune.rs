//! Removal of empty folders.

use crate::error::{CleanError, CleanResult};
use crate::file_category::Category;
use crate::sorter::walk_tree;
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn is_empty_dir(path: &Path) -> CleanResult<bool> {
    let mut entries = fs::read_dir(path).map_err(|e| CleanError::ReadDirFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(entries.next().is_none())
}

/// Deletes every empty directory under `root`, deepest first.
///
/// Category folders (direct children of `root` named after a category) are
/// kept even when empty. A deeper folder with a category name is an ordinary
/// folder. `root` itself is never removed. Because children are visited before their
/// parents, a chain of nested empty folders disappears in a single pass.
///
/// Returns the removed directories in the order they were deleted.
pub fn delete_empty_folders(root: &Path) -> CleanResult<Vec<PathBuf>> {
    info!("pruning empty folders in {}", root.display());

    let mut dirs: Vec<PathBuf> = walk_tree(root)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort_by_key(|path| Reverse(path.components().count()));

    let mut removed = Vec::new();
    for dir in dirs {
        let is_category_folder = dir.parent() == Some(root)
            && dir
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(Category::is_category_folder);
        if is_category_folder || !is_empty_dir(&dir)? {
            continue;
        }

        fs::remove_dir(&dir).map_err(|e| CleanError::RemoveDirFailed {
            path: dir.clone(),
            source: e,
        })?;
        debug!("removed empty folder {}", dir.display());
        removed.push(dir);
    }

    Ok(removed)
}
