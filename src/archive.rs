//! Archive unpacking.
//!
//! Every regular file directly inside `root/Archive` is extracted into a
//! sibling folder named after the file's stem. Supported formats are ZIP,
//! plain TAR and gzip-compressed TAR. The format comes from the file name when
//! it is decisive and from the file's leading bytes otherwise.

use crate::error::{CleanError, CleanResult, ExtractError};
use crate::file_category::Category;
use crate::sorter::list_dir;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::ZipArchive;

/// Archive formats the unpacker can extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
}

impl ArchiveFormat {
    /// Infers the format from a file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use clean_folder::archive::ArchiveFormat;
    ///
    /// assert_eq!(ArchiveFormat::from_file_name("a.ZIP"), Some(ArchiveFormat::Zip));
    /// assert_eq!(ArchiveFormat::from_file_name("a.tar.gz"), Some(ArchiveFormat::TarGz));
    /// assert_eq!(ArchiveFormat::from_file_name("a.rar"), None);
    /// ```
    pub fn from_file_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(ArchiveFormat::TarGz)
        } else if name.ends_with(".tar") {
            Some(ArchiveFormat::Tar)
        } else if name.ends_with(".zip") {
            Some(ArchiveFormat::Zip)
        } else {
            None
        }
    }

    /// Infers the format from a MIME type reported by content sniffing.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime {
            "application/zip" => Some(ArchiveFormat::Zip),
            "application/x-tar" => Some(ArchiveFormat::Tar),
            "application/gzip" => Some(ArchiveFormat::TarGz),
            _ => None,
        }
    }

    /// Determines the format of an archive on disk, by name first and by
    /// content second.
    pub fn detect(path: &Path) -> Result<Self, ExtractError> {
        let by_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(Self::from_file_name);
        if let Some(format) = by_name {
            return Ok(format);
        }

        infer::get_from_path(path)?
            .and_then(|kind| Self::from_mime_type(kind.mime_type()))
            .ok_or(ExtractError::UnsupportedFormat)
    }
}

/// Extracts an archive into `destination`, overwriting files already there.
///
/// Entries whose paths would escape `destination` are skipped.
pub fn extract_archive(archive_path: &Path, destination: &Path) -> Result<(), ExtractError> {
    let format = ArchiveFormat::detect(archive_path)?;
    debug!(
        "extracting {} as {:?} into {}",
        archive_path.display(),
        format,
        destination.display()
    );

    let file = File::open(archive_path)?;
    match format {
        ArchiveFormat::Zip => extract_zip(file, destination),
        ArchiveFormat::Tar => Ok(tar::Archive::new(file).unpack(destination)?),
        ArchiveFormat::TarGz => Ok(tar::Archive::new(GzDecoder::new(file)).unpack(destination)?),
    }
}

fn extract_zip(file: File, destination: &Path) -> Result<(), ExtractError> {
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(relative) = entry.enclosed_name() else {
            debug!("skipping zip entry with unsafe path: {}", entry.name());
            continue;
        };
        let outpath = destination.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&outpath)?;
            io::copy(&mut entry, &mut outfile)?;
        }
    }

    Ok(())
}

/// Returns the folder an archive is extracted into: `Archive/<stem>`.
pub fn extraction_dir(archive_path: &Path) -> PathBuf {
    let stem = archive_path.file_stem().unwrap_or_default();
    archive_path.with_file_name(stem)
}

/// Unpacks every archive directly inside `root/Archive`.
///
/// Returns the extraction folders, in file name order. A missing `Archive`
/// folder means there is nothing to do. The first archive that cannot be
/// extracted stops the pass with `CleanError::ExtractionFailed`.
pub fn unpack_archives(root: &Path) -> CleanResult<Vec<PathBuf>> {
    let archive_folder = root.join(Category::Archive.dir_name());
    if !archive_folder.is_dir() {
        return Ok(Vec::new());
    }
    info!("unpacking archives in {}", archive_folder.display());

    let archives: Vec<PathBuf> = list_dir(&archive_folder)?
        .into_iter()
        .filter(|path| path.is_file())
        .collect();

    let mut extracted = Vec::with_capacity(archives.len());
    for archive in archives {
        let destination = extraction_dir(&archive);
        fs::create_dir_all(&destination).map_err(|e| CleanError::DirectoryCreationFailed {
            path: destination.clone(),
            source: e,
        })?;

        extract_archive(&archive, &destination).map_err(|e| CleanError::ExtractionFailed {
            archive: archive.clone(),
            source: e,
        })?;
        extracted.push(destination);
    }

    Ok(extracted)
}
