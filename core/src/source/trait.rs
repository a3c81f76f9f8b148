use std::path::Path;

/// Read-only view of the tree that holds changed files and declarations.
///
/// Paths handed to a source are absolute: the query root joined with a
/// normalized relative path.
pub trait MetadataSource: Send + Sync {
    fn name(&self) -> &str;

    fn exists(&self, path: &Path) -> bool;

    /// True for regular files. A symbolic link entry counts as a file and
    /// is not resolved.
    fn is_regular_file(&self, path: &Path) -> bool;

    fn read_lines(&self, path: &Path) -> std::io::Result<Vec<String>>;
}
