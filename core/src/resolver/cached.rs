use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::OwnershipResolver;
use crate::errors::ApprovalError;
use crate::path::NormalizedPath;
use crate::types::OwnerId;

#[derive(Debug, Clone)]
pub struct CachedResolution {
    pub owners: Rc<BTreeSet<OwnerId>>,
    pub dependencies: Rc<BTreeSet<NormalizedPath>>,
}

/// Memoizing front for [`OwnershipResolver`], scoped to one check.
///
/// The backing tree is assumed not to change while a check runs, so every
/// directory is read at most once. Inherited owners are built from the
/// parent's cached set, which means sibling directories share one read of
/// each common ancestor. With `memoize` off every call goes straight to the
/// resolver.
pub struct CachedResolver<'a> {
    inner: OwnershipResolver<'a>,
    memoize: bool,
    owners: HashMap<NormalizedPath, Rc<BTreeSet<OwnerId>>>,
    dependencies: HashMap<NormalizedPath, Rc<BTreeSet<NormalizedPath>>>,
    hits: usize,
}

impl<'a> CachedResolver<'a> {
    pub fn new(inner: OwnershipResolver<'a>, memoize: bool) -> Self {
        Self {
            inner,
            memoize,
            owners: HashMap::new(),
            dependencies: HashMap::new(),
            hits: 0,
        }
    }

    pub fn inner(&self) -> &OwnershipResolver<'a> {
        &self.inner
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn resolve(&mut self, path: &NormalizedPath) -> Result<CachedResolution, ApprovalError> {
        Ok(CachedResolution {
            owners: self.owners(path)?,
            dependencies: self.dependencies(path)?,
        })
    }

    pub fn owners(&mut self, path: &NormalizedPath) -> Result<Rc<BTreeSet<OwnerId>>, ApprovalError> {
        if !self.memoize {
            return self.inner.owners(path).map(Rc::new);
        }
        if let Some(hit) = self.owners.get(path) {
            self.hits += 1;
            tracing::trace!(target: "approvals.resolver", path = %path, "owners cache hit");
            return Ok(Rc::clone(hit));
        }

        let acc = if path.escapes_root() {
            BTreeSet::new()
        } else {
            let mut acc = match path.parent() {
                Some(parent) => (*self.owners(&parent)?).clone(),
                None => BTreeSet::new(),
            };
            acc.extend(self.inner.declared_owners(path)?);
            acc
        };

        let acc = Rc::new(acc);
        self.owners.insert(path.clone(), Rc::clone(&acc));
        Ok(acc)
    }

    pub fn dependencies(
        &mut self,
        path: &NormalizedPath,
    ) -> Result<Rc<BTreeSet<NormalizedPath>>, ApprovalError> {
        if !self.memoize {
            return self.inner.dependencies(path).map(Rc::new);
        }
        if let Some(hit) = self.dependencies.get(path) {
            self.hits += 1;
            tracing::trace!(target: "approvals.resolver", path = %path, "dependencies cache hit");
            return Ok(Rc::clone(hit));
        }
        let deps = Rc::new(self.inner.dependencies(path)?);
        self.dependencies.insert(path.clone(), Rc::clone(&deps));
        Ok(deps)
    }
}
