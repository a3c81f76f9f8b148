use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::path::NormalizedPath;

/// An approver identity. Compared byte-for-byte, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for OwnerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OwnerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OwnerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Owners and dependencies attributed to one directory.
///
/// `owners` is already inherited (the directory plus every ancestor up to
/// the root); `dependencies` is only what the directory itself declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub owners: BTreeSet<OwnerId>,
    pub dependencies: BTreeSet<NormalizedPath>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    Disapproved,
}

impl Verdict {
    pub fn is_approved(self) -> bool {
        matches!(self, Verdict::Approved)
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Approved => "Approved",
            Verdict::Disapproved => "Insufficient Approvals",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Input to a single approval check.
#[derive(Debug, Clone)]
pub struct ApprovalQuery {
    root: PathBuf,
    approvers: BTreeSet<OwnerId>,
    changed_files: BTreeSet<NormalizedPath>,
}

impl ApprovalQuery {
    pub fn new<A, F>(root: impl Into<PathBuf>, approvers: A, changed_files: F) -> Self
    where
        A: IntoIterator,
        A::Item: Into<OwnerId>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        Self {
            root: root.into(),
            approvers: approvers.into_iter().map(Into::into).collect(),
            changed_files: changed_files
                .into_iter()
                .map(|f| NormalizedPath::new(f.as_ref()))
                .collect(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn approvers(&self) -> &BTreeSet<OwnerId> {
        &self.approvers
    }

    /// Changed files in sorted order, duplicates collapsed.
    pub fn changed_files(&self) -> &BTreeSet<NormalizedPath> {
        &self.changed_files
    }

    pub fn is_approver(&self, owners: &BTreeSet<OwnerId>) -> bool {
        owners.iter().any(|o| self.approvers.contains(o))
    }
}

/// Verdict plus where it was decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalReport {
    pub verdict: Verdict,
    /// Root owners approved, no per-file traversal ran.
    pub fast_path: bool,
    pub failed_file: Option<NormalizedPath>,
    pub failed_dir: Option<NormalizedPath>,
}

impl ApprovalReport {
    pub(crate) fn approved(fast_path: bool) -> Self {
        Self {
            verdict: Verdict::Approved,
            fast_path,
            failed_file: None,
            failed_dir: None,
        }
    }

    pub(crate) fn disapproved(file: NormalizedPath, dir: NormalizedPath) -> Self {
        Self {
            verdict: Verdict::Disapproved,
            fast_path: false,
            failed_file: Some(file),
            failed_dir: Some(dir),
        }
    }
}
