pub mod approval_error;
pub mod config_error;

pub use approval_error::ApprovalError;
pub use config_error::ConfigError;
