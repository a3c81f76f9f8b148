//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `approvals_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load, AppConfig, DeclarationConfig, EngineConfig, LoggingConfig,
    DEFAULT_CONFIG_FILE,
};
pub use crate::engine::ApprovalEngine;
pub use crate::errors::{ApprovalError, ConfigError};
pub use crate::path::NormalizedPath;
pub use crate::resolver::{CachedResolver, OwnershipResolver};
pub use crate::source::{MemoryMetadataSource, MetadataSource};
pub use crate::types::{ApprovalQuery, ApprovalReport, OwnerId, Resolution, Verdict};
