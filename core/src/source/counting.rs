use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{MemoryMetadataSource, MetadataSource};

/// Wraps a [`MemoryMetadataSource`] and records every `read_lines` call.
pub(crate) struct CountingSource {
    inner: MemoryMetadataSource,
    reads: Mutex<BTreeMap<PathBuf, usize>>,
}

impl CountingSource {
    pub(crate) fn new(inner: MemoryMetadataSource) -> Self {
        Self {
            inner,
            reads: Mutex::new(BTreeMap::new()),
        }
    }

    pub(crate) fn total_reads(&self) -> usize {
        self.reads.lock().unwrap().values().sum()
    }

    pub(crate) fn reads_of(&self, path: impl AsRef<Path>) -> usize {
        self.reads
            .lock()
            .unwrap()
            .get(path.as_ref())
            .copied()
            .unwrap_or(0)
    }
}

impl MetadataSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        self.inner.is_regular_file(path)
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        *self
            .reads
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_default() += 1;
        self.inner.read_lines(path)
    }
}
