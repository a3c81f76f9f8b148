use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use approvals_core::api as core_api;

/// Reads the tree straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMetadataSource;

impl FsMetadataSource {
    pub fn new() -> Self {
        Self
    }
}

impl core_api::MetadataSource for FsMetadataSource {
    fn name(&self) -> &str {
        "fs"
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        match std::fs::symlink_metadata(path) {
            Ok(meta) => {
                let ft = meta.file_type();
                ft.is_file() || ft.is_symlink()
            }
            Err(_) => false,
        }
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let reader = BufReader::new(File::open(path)?);
        reader.lines().collect()
    }
}
