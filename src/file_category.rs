/// File categorization by extension.
///
/// This module holds the static table that maps a category to the set of
/// lowercase extensions (with leading dot) it recognises, and the lookup that
/// turns a file path into a category.
///
/// # Examples
///
/// ```
/// use clean_folder::file_category::{Category, CategoryTable};
/// use std::path::Path;
///
/// let table = CategoryTable::default();
/// assert_eq!(table.categorize(Path::new("photo.JPG")), Category::Image);
/// assert_eq!(table.categorize(Path::new("notes.txt")), Category::Documents);
/// assert_eq!(table.categorize(Path::new("data.xyz")), Category::Other);
/// ```
use std::path::Path;

/// Represents a file category and the folder files of that category go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Image files (JPEG, PNG, SVG, etc.)
    Image,
    /// Document files (DOCX, TXT, PDF, etc.)
    Documents,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Video files (AVI, MP4, MKV, etc.)
    Video,
    /// Archive files (ZIP, RAR, TAR, etc.)
    Archive,
    /// E-books (FB2, MOBI)
    Book,
    /// Files whose extension is not in the table
    Other,
}

impl Category {
    /// Every category, in table order, followed by `Other`.
    pub const ALL: [Category; 7] = [
        Category::Image,
        Category::Documents,
        Category::Audio,
        Category::Video,
        Category::Archive,
        Category::Book,
        Category::Other,
    ];

    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use clean_folder::file_category::Category;
    ///
    /// assert_eq!(Category::Image.dir_name(), "Image");
    /// assert_eq!(Category::Documents.dir_name(), "Documents");
    /// assert_eq!(Category::Other.dir_name(), "Other");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Image => "Image",
            Category::Documents => "Documents",
            Category::Audio => "Audio",
            Category::Video => "Video",
            Category::Archive => "Archive",
            Category::Book => "Book",
            Category::Other => "Other",
        }
    }

    /// Looks up a category by its folder name. Matching is exact.
    pub fn from_dir_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.dir_name() == name)
    }

    /// Returns true if `name` is the folder name of some category.
    ///
    /// Folders with such names directly under the sorted root are never
    /// pruned, even when empty.
    pub fn is_category_folder(name: &str) -> bool {
        Self::from_dir_name(name).is_some()
    }
}

/// Returns the extension of a path as the categorizer sees it: the final
/// suffix, lowercased, with a leading dot. Paths without a suffix (including
/// dot-files such as `.bashrc` and names ending in a dot) yield an empty
/// string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Maps file extensions to categories.
///
/// Entries are kept in insertion order; the first category whose extension
/// set contains a file's extension wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl CategoryTable {
    /// Creates an empty table. Every file categorizes as `Other`.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a table with the built-in extension sets.
    pub fn new() -> Self {
        let mut table = Self::empty();
        table.populate_standard_mappings();
        table
    }

    fn populate_standard_mappings(&mut self) {
        self.add_extensions(
            Category::Image,
            &[
                ".jpeg", ".png", ".pcd", ".jpg", ".svg", ".tiff", ".raw", ".gif", ".bmp",
            ],
        );
        self.add_extensions(
            Category::Documents,
            &[
                ".docx", ".doc", ".txt", ".pdf", ".xls", ".xlsx", ".pptx", ".rtf",
            ],
        );
        self.add_extensions(Category::Audio, &[".mp3", ".aiff", ".wav", ".aac", ".flac"]);
        self.add_extensions(Category::Video, &[".avi", ".mp4", ".mov", ".mkv", ".mpeg"]);
        self.add_extensions(
            Category::Archive,
            &[".zip", ".7-zip", ".7zip", ".rar", ".gz", ".tar"],
        );
        self.add_extensions(Category::Book, &[".fb2", ".mobi"]);
    }

    /// Adds extensions to a category, creating its entry if needed.
    ///
    /// Extensions are stored lowercased.
    pub fn add_extensions(&mut self, category: Category, extensions: &[&str]) {
        let lowered = extensions.iter().map(|ext| ext.to_lowercase());
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => existing.extend(lowered),
            None => self.entries.push((category, lowered.collect())),
        }
    }

    /// Returns the category an extension (lowercase, with leading dot) belongs to.
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        let ext = ext.to_lowercase();
        self.entries
            .iter()
            .find(|(_, exts)| exts.contains(&ext))
            .map(|(category, _)| *category)
    }

    /// Determines the category of a file from its extension.
    ///
    /// Falls back to `Category::Other` when no entry recognises the extension.
    pub fn categorize(&self, path: &Path) -> Category {
        self.extension_to_category(&extension_of(path))
            .unwrap_or(Category::Other)
    }

    /// Iterates over the categories that have entries, in table order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(category, _)| *category)
    }

    /// Returns the extensions registered for a category.
    pub fn extensions(&self, category: Category) -> &[String] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, exts)| exts.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}
