//! Approval check over a changeset.
//!
//! The engine holds no per-check state: every call to [`ApprovalEngine::check`]
//! builds its own resolver cache and visited sets, so one engine can serve
//! repeated or concurrent checks.

mod traversal;

use crate::config::{AppConfig, DeclarationConfig};
use crate::errors::ApprovalError;
use crate::path::NormalizedPath;
use crate::resolver::{CachedResolver, OwnershipResolver};
use crate::source::MetadataSource;
use crate::types::{ApprovalQuery, ApprovalReport, Verdict};

pub struct ApprovalEngine<'a> {
    source: &'a dyn MetadataSource,
    declarations: DeclarationConfig,
    memoize: bool,
}

impl<'a> ApprovalEngine<'a> {
    pub fn new(source: &'a dyn MetadataSource) -> Self {
        Self {
            source,
            declarations: DeclarationConfig::default(),
            memoize: true,
        }
    }

    pub fn from_config(source: &'a dyn MetadataSource, cfg: &AppConfig) -> Self {
        Self {
            source,
            declarations: cfg.declarations.clone(),
            memoize: cfg.engine.memoize,
        }
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn check(&self, query: &ApprovalQuery) -> Result<Verdict, ApprovalError> {
        self.check_detailed(query).map(|r| r.verdict)
    }

    pub fn check_detailed(&self, query: &ApprovalQuery) -> Result<ApprovalReport, ApprovalError> {
        let resolver = OwnershipResolver::new(self.source, query.root(), &self.declarations);
        let mut cache = CachedResolver::new(resolver, self.memoize);

        // Root owners approve everything beneath them.
        let root_owners = cache.owners(&NormalizedPath::root())?;
        if query.is_approver(&root_owners) {
            tracing::info!(
                target: "approvals.engine",
                root = %query.root().display(),
                "root owner approved, skipping per-file checks"
            );
            return Ok(ApprovalReport::approved(true));
        }

        for file in query.changed_files() {
            let dir = self.validate_changed_file(&cache, file)?;
            if let Some(failed) = traversal::first_unapproved(&mut cache, &dir, query.approvers())? {
                tracing::info!(
                    target: "approvals.engine",
                    file = %file,
                    dir = %failed,
                    cache_hits = cache.hits(),
                    "insufficient approvals"
                );
                return Ok(ApprovalReport::disapproved(file.clone(), failed));
            }
            tracing::debug!(target: "approvals.engine", file = %file, "approved");
        }

        tracing::info!(
            target: "approvals.engine",
            files = query.changed_files().len(),
            cache_hits = cache.hits(),
            "all changed files approved"
        );
        Ok(ApprovalReport::approved(false))
    }

    /// Confirms `file` names a regular file under the root and returns its
    /// directory.
    fn validate_changed_file(
        &self,
        cache: &CachedResolver<'_>,
        file: &NormalizedPath,
    ) -> Result<NormalizedPath, ApprovalError> {
        let root = cache.inner().root();
        let full = file.under(root);
        let reason = if file.is_root() {
            Some("empty path")
        } else if file.escapes_root() {
            Some("outside system root")
        } else if self.source.is_regular_file(&full) {
            None
        } else if self.source.exists(&full) {
            Some("not a regular file")
        } else {
            Some("no such file")
        };

        match (reason, file.parent()) {
            (None, Some(dir)) => Ok(dir),
            (reason, _) => Err(ApprovalError::InvalidInput {
                path: full,
                reason: reason.unwrap_or("empty path"),
            }),
        }
    }
}
