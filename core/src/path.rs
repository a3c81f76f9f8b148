use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

const PARENT: &str = "..";

/// A path relative to the system root, lexically normalized.
///
/// Equality is structural on the component list, so `a/./b`, `a/b/` and
/// `a/c/../b` are the same path. The root itself has no components and
/// renders as `.`. A `..` that would climb above the root is kept as a
/// leading component, which makes out-of-tree paths explicit rather than
/// silently clamping them to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    components: Vec<String>,
}

impl NormalizedPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(raw: &str) -> Self {
        let mut components: Vec<String> = Vec::new();
        for part in raw.split(is_separator) {
            match part {
                "" | "." => {}
                PARENT => match components.last() {
                    Some(last) if last != PARENT => {
                        components.pop();
                    }
                    _ => components.push(PARENT.to_string()),
                },
                other => components.push(other.to_string()),
            }
        }
        Self { components }
    }

    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// True when the path points above the system root.
    pub fn escapes_root(&self) -> bool {
        self.components.first().is_some_and(|c| c == PARENT)
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Parent directory; `None` only for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let mut components = self.components.clone();
        components.pop();
        Some(Self { components })
    }

    /// Absolute location of this path under `root`.
    pub fn under(&self, root: &Path) -> PathBuf {
        let mut out = root.to_path_buf();
        out.extend(self.components.iter());
        out
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        f.write_str(&self.components.join("/"))
    }
}

impl From<&str> for NormalizedPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
