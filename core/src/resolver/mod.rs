//! Ownership and dependency lookup for a single directory.
//!
//! Owners are inherited: a directory's owners are the union of the owners
//! declared at that directory and at every ancestor up to and including the
//! root. Dependencies are not inherited; only the directory's own
//! declaration counts. Missing declarations contribute nothing.

mod cached;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::DeclarationConfig;
use crate::errors::ApprovalError;
use crate::path::NormalizedPath;
use crate::source::MetadataSource;
use crate::types::{OwnerId, Resolution};

pub use cached::{CachedResolution, CachedResolver};

pub struct OwnershipResolver<'a> {
    source: &'a dyn MetadataSource,
    root: PathBuf,
    declarations: &'a DeclarationConfig,
}

impl<'a> OwnershipResolver<'a> {
    pub fn new(
        source: &'a dyn MetadataSource,
        root: impl Into<PathBuf>,
        declarations: &'a DeclarationConfig,
    ) -> Self {
        Self {
            source,
            root: root.into(),
            declarations,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, path: &NormalizedPath) -> Result<Resolution, ApprovalError> {
        Ok(Resolution {
            owners: self.owners(path)?,
            dependencies: self.dependencies(path)?,
        })
    }

    /// Owners of `path` including every ancestor up to the root.
    pub fn owners(&self, path: &NormalizedPath) -> Result<BTreeSet<OwnerId>, ApprovalError> {
        let mut owners = BTreeSet::new();
        if path.escapes_root() {
            return Ok(owners);
        }
        let mut current = Some(path.clone());
        while let Some(dir) = current {
            owners.extend(self.declared_owners(&dir)?);
            current = dir.parent();
        }
        Ok(owners)
    }

    /// Owners declared at exactly `dir`, before inheritance.
    pub fn declared_owners(&self, dir: &NormalizedPath) -> Result<BTreeSet<OwnerId>, ApprovalError> {
        let lines = self.read_declaration(dir, &self.declarations.owners_file)?;
        Ok(lines.into_iter().map(OwnerId::from).collect())
    }

    pub fn dependencies(
        &self,
        dir: &NormalizedPath,
    ) -> Result<BTreeSet<NormalizedPath>, ApprovalError> {
        let lines = self.read_declaration(dir, &self.declarations.dependencies_file)?;
        Ok(lines.iter().map(|l| NormalizedPath::new(l)).collect())
    }

    fn read_declaration(
        &self,
        dir: &NormalizedPath,
        file_name: &str,
    ) -> Result<Vec<String>, ApprovalError> {
        if dir.escapes_root() {
            return Ok(Vec::new());
        }
        let file = dir.under(&self.root).join(file_name);
        if !self.source.exists(&file) {
            return Ok(Vec::new());
        }
        let lines = self
            .source
            .read_lines(&file)
            .map_err(|source| ApprovalError::Io {
                path: file.clone(),
                source,
            })?;
        let entries = declaration_entries(lines);
        tracing::debug!(
            target: "approvals.resolver",
            file = %file.display(),
            entries = entries.len(),
            "read declaration"
        );
        Ok(entries)
    }
}

/// Trimmed, non-blank lines of a declaration file.
fn declaration_entries(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
