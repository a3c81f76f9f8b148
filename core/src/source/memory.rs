use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::MetadataSource;

#[derive(Debug, Clone)]
enum Entry {
    File(Vec<String>),
    Unreadable,
}

/// In-memory tree. Directories are implied by the files beneath them.
#[derive(Debug, Clone, Default)]
pub struct MemoryMetadataSource {
    entries: BTreeMap<PathBuf, Entry>,
}

impl MemoryMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.insert_file(path, content);
        self
    }

    /// A file that exists but fails every read.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(path.into(), Entry::Unreadable);
        self
    }

    pub fn insert_file(&mut self, path: impl Into<PathBuf>, content: &str) {
        let lines = content.lines().map(str::to_string).collect();
        self.entries.insert(path.into(), Entry::File(lines));
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entries
            .keys()
            .any(|p| p != path && p.starts_with(path))
    }
}

impl MetadataSource for MemoryMetadataSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn exists(&self, path: &Path) -> bool {
        self.entries.contains_key(path) || self.is_dir(path)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        match self.entries.get(path) {
            Some(Entry::File(lines)) => Ok(lines.clone()),
            Some(Entry::Unreadable) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("unreadable: {}", path.display()),
            )),
            None if self.is_dir(path) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_are_implied_by_files() {
        let src = MemoryMetadataSource::new().with_file("/r/a/b.txt", "");
        assert!(src.exists(Path::new("/r/a")));
        assert!(!src.is_regular_file(Path::new("/r/a")));
        assert!(src.is_regular_file(Path::new("/r/a/b.txt")));
        assert!(!src.exists(Path::new("/r/c")));
    }

    #[test]
    fn unreadable_entries_fail_reads() {
        let src = MemoryMetadataSource::new().with_unreadable("/r/OWNERS");
        assert!(src.exists(Path::new("/r/OWNERS")));
        let err = src.read_lines(Path::new("/r/OWNERS")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
