//! clean-folder - a one-shot directory cleanup utility
//!
//! This library sorts the files of a directory tree into category folders
//! based on their extension, transliterates file names to ASCII, unpacks
//! archives found in the `Archive` folder and removes folders left empty.

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod file_category;
pub mod file_organizer;
pub mod normalize;
pub mod output;
pub mod prune;
pub mod sorter;

pub use config::{CategoryConfig, ConfigError};
pub use error::{CleanError, ExtractError, PipelineError, Stage};
pub use file_category::{Category, CategoryTable};
pub use file_organizer::{CollisionPolicy, FileOrganizer, MoveOutcome};
pub use normalize::normalize;
pub use sorter::{ExtensionLog, SortReport, sort_folder};

pub use cli::{Cli, PipelineReport, run_cli, run_pipeline};
