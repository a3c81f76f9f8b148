//! Directory-scoped change approval.
//!
//! Every directory may carry an owners declaration and a dependencies
//! declaration. A changed file is approved when some approver owns its
//! directory (owners are inherited from ancestors) and, transitively, every
//! directory it depends on.

pub mod api;
pub mod config;
pub mod engine;
pub mod errors;
pub mod path;
pub mod resolver;
pub mod source;
pub mod types;
