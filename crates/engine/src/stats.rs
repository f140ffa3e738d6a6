use crate::path::extension_of;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Aggregated outcome of a completed traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    /// Every file found, in visitation order.
    pub files: Vec<PathBuf>,
    /// Directories counted below the root (the root itself is not counted).
    pub subdirectory_count: usize,
    /// Directories whose listing came back empty, in visitation order.
    pub empty_directories: Vec<PathBuf>,
}

impl TraversalResult {
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Distinct extensions of [`Self::files`], first-seen order, empty extension included.
    #[must_use]
    pub fn extensions(&self) -> ExtensionSet {
        ExtensionSet::from_paths(self.files.iter().map(PathBuf::as_path))
    }

    #[must_use]
    pub fn summary(&self, root: &Path) -> Summary {
        let extensions = self.extensions();
        Summary {
            root: root.to_path_buf(),
            files: self.file_count(),
            subdirectories: self.subdirectory_count,
            extension_count: extensions.len(),
            extensions: extensions.displayed().map(str::to_owned).collect(),
            empty_directories: self.empty_directories.clone(),
        }
    }
}

/// Insertion-ordered set of file extensions.
///
/// Values are compared case-sensitively, so `.txt` and `.TXT` are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    values: Vec<String>,
}

impl ExtensionSet {
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut set = Self::default();
        for path in paths {
            set.insert(extension_of(path));
        }
        set
    }

    /// Returns `false` when the value was already present.
    pub fn insert(&mut self, ext: String) -> bool {
        if self.values.contains(&ext) {
            return false;
        }
        self.values.push(ext);
        true
    }

    /// Count of distinct values, the empty extension included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Values suitable for display: the empty extension is left out.
    pub fn displayed(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|ext| !ext.is_empty())
    }
}

/// Serializable run summary, as printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub root: PathBuf,
    pub files: usize,
    pub subdirectories: usize,
    pub extension_count: usize,
    pub extensions: Vec<String>,
    pub empty_directories: Vec<PathBuf>,
}
