use approvals_core::api as core_api;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] core_api::ConfigError),

    #[error(transparent)]
    Approval(#[from] core_api::ApprovalError),

    #[error("failed to render report")]
    Render(#[source] serde_json::Error),
}

impl CliError {
    /// Clap exits with 2 on its own parse failures; usage errors found after
    /// parsing share that code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Config(_) => 3,
            CliError::Approval(_) | CliError::Render(_) => 1,
        }
    }

    /// Message printed to stderr, including every source in the chain.
    pub fn report(self) -> String {
        match self {
            CliError::Usage(msg) => msg,
            other => format!(
                "Exception found while approving process was running. {:#}",
                anyhow::Error::new(other)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn io_errors_report_their_cause() {
        let err = CliError::from(core_api::ApprovalError::Io {
            path: PathBuf::from("/repo/a/OWNERS"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(err.exit_code(), 1);
        let msg = err.report();
        assert!(msg.starts_with("Exception found while approving process was running."));
        assert!(msg.contains("/repo/a/OWNERS"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn usage_errors_are_printed_verbatim() {
        let err = CliError::Usage("--approvers must name at least one approver".into());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.report(), "--approvers must name at least one approver");
    }
}
