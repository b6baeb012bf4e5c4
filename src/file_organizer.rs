/// Moving files into category directories.
///
/// This module relocates a single file into `root/<category>/`, creating the
/// category folder on demand. The destination name is the normalized form of
/// the original name. Name collisions follow [`CollisionPolicy::FirstClaimWins`].
use crate::error::{CleanError, CleanResult};
use crate::file_category::Category;
use crate::normalize::normalize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What happens when the destination of a move is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// The file already at the destination keeps it; the newcomer stays
    /// where it is, untouched. Nothing is overwritten or renamed.
    #[default]
    FirstClaimWins,
}

/// Result of asking the organizer to move one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The file was renamed into its category directory.
    Moved { from: PathBuf, to: PathBuf },
    /// The destination was taken by another file, so this one was left in place.
    Skipped { path: PathBuf, existing: PathBuf },
    /// The file already sits at its own destination.
    AlreadyInPlace { path: PathBuf },
}

impl MoveOutcome {
    /// Returns true if the file was actually relocated.
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Organizes files by moving them into category subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// The collision policy every move applies.
    pub const COLLISION_POLICY: CollisionPolicy = CollisionPolicy::FirstClaimWins;

    /// Returns the path a file would be moved to.
    pub fn destination_for(root: &Path, file_path: &Path, category: Category) -> PathBuf {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        root.join(category.dir_name()).join(normalize(&file_name))
    }

    /// Moves a file into its category directory within `root`.
    ///
    /// The category directory is created if it doesn't exist. If a file
    /// with the same (normalized) name is already there, the source file is
    /// left untouched and `MoveOutcome::Skipped` is returned. A file that is
    /// already its own destination yields `MoveOutcome::AlreadyInPlace`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use clean_folder::file_category::Category;
    /// use clean_folder::file_organizer::{FileOrganizer, MoveOutcome};
    /// use std::path::Path;
    ///
    /// let outcome = FileOrganizer::move_to_category(
    ///     Path::new("/path/to/root"),
    ///     Path::new("/path/to/root/image.png"),
    ///     Category::Image,
    /// );
    ///
    /// match outcome {
    ///     Ok(MoveOutcome::Moved { to, .. }) => println!("Moved to {}", to.display()),
    ///     Ok(MoveOutcome::Skipped { existing, .. }) => println!("{} is taken", existing.display()),
    ///     Ok(MoveOutcome::AlreadyInPlace { .. }) => {}
    ///     Err(e) => eprintln!("Organization failed: {}", e),
    /// }
    /// ```
    pub fn move_to_category(
        root: &Path,
        file_path: &Path,
        category: Category,
    ) -> CleanResult<MoveOutcome> {
        let category_path = root.join(category.dir_name());

        if !category_path.is_dir() {
            fs::create_dir_all(&category_path).map_err(|e| {
                CleanError::DirectoryCreationFailed {
                    path: category_path.clone(),
                    source: e,
                }
            })?;
        }

        let destination_path = Self::destination_for(root, file_path, category);

        if destination_path == file_path {
            return Ok(MoveOutcome::AlreadyInPlace {
                path: destination_path,
            });
        }

        match Self::COLLISION_POLICY {
            CollisionPolicy::FirstClaimWins => {
                if destination_path.exists() {
                    warn!(
                        "{} already exists, leaving {} in place",
                        destination_path.display(),
                        file_path.display()
                    );
                    return Ok(MoveOutcome::Skipped {
                        path: file_path.to_path_buf(),
                        existing: destination_path,
                    });
                }
            }
        }

        fs::rename(file_path, &destination_path).map_err(|e| CleanError::FileMoveFailure {
            from: file_path.to_path_buf(),
            to: destination_path.clone(),
            source: e,
        })?;

        debug!(
            "moved {} -> {}",
            file_path.display(),
            destination_path.display()
        );

        Ok(MoveOutcome::Moved {
            from: file_path.to_path_buf(),
            to: destination_path,
        })
    }
}
