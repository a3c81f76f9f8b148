use approvals_core::api as core_api;
use tracing_subscriber::EnvFilter;

use crate::commands::cli::Args;
use crate::error::CliError;
use crate::output;

/// Runs one approval check and returns the rendered output line.
pub fn run_app(args: Args) -> Result<String, CliError> {
    let cfg = core_api::load(args.config.as_deref())?;
    init_tracing(&cfg.logging);

    let approvers = args.approvers();
    if approvers.is_empty() {
        return Err(CliError::Usage(
            "--approvers must name at least one approver".into(),
        ));
    }
    let changed_files = args.changed_files();
    if changed_files.is_empty() {
        return Err(CliError::Usage(
            "--changed-files must name at least one file".into(),
        ));
    }

    tracing::debug!(
        root = %args.system_root.display(),
        approvers = approvers.len(),
        changed_files = changed_files.len(),
        "starting approval check"
    );

    let report = check(&args, &cfg, approvers, changed_files)?;
    output::render(&report, args.format)
}

pub fn check(
    args: &Args,
    cfg: &core_api::AppConfig,
    approvers: Vec<String>,
    changed_files: Vec<String>,
) -> Result<core_api::ApprovalReport, CliError> {
    let source = approvals_plugins::build_source(cfg);
    let query = core_api::ApprovalQuery::new(&args.system_root, approvers, changed_files);
    let engine = core_api::ApprovalEngine::from_config(&*source, cfg);
    Ok(engine.check_detailed(&query)?)
}

fn init_tracing(cfg: &core_api::LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    fn args(root: &std::path::Path, extra: &[&str]) -> Args {
        let mut argv = vec![
            "validate_approvals".to_string(),
            "--system-root".to_string(),
            root.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    fn repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("svc")).unwrap();
        fs::write(dir.path().join("svc/OWNERS"), "bob\n").unwrap();
        fs::write(dir.path().join("svc/main.rs"), "").unwrap();
        dir
    }

    #[test]
    fn prints_verdict_line() {
        let dir = repo();
        let out = run_app(args(dir.path(), &["--approvers", "bob", "--changed-files", "svc/main.rs"]));
        assert_eq!(out.unwrap(), "Approved");

        let out = run_app(args(dir.path(), &["--approvers", "eve", "--changed-files", "svc/main.rs"]));
        assert_eq!(out.unwrap(), "Insufficient Approvals");
    }

    #[test]
    fn blank_approver_list_is_a_usage_error() {
        let dir = repo();
        let err = run_app(args(dir.path(), &["--approvers", " , ", "--changed-files", "svc/main.rs"]))
            .unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn missing_changed_file_fails() {
        let dir = repo();
        let err = run_app(args(dir.path(), &["--approvers", "bob", "--changed-files", "svc/gone.rs"]))
            .unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn config_file_renames_declarations() {
        let dir = repo();
        fs::write(dir.path().join("svc/MAINTAINERS"), "dana\n").unwrap();
        let cfg_path = dir.path().join("approvals.toml");
        fs::write(&cfg_path, "[declarations]\nowners_file = \"MAINTAINERS\"\n").unwrap();

        let out = run_app(args(
            dir.path(),
            &[
                "--config",
                cfg_path.to_str().unwrap(),
                "--approvers",
                "dana",
                "--changed-files",
                "svc/main.rs",
            ],
        ));
        assert_eq!(out.unwrap(), "Approved");
    }

    #[test]
    fn padded_declaration_name_in_config_is_trimmed() {
        let dir = repo();
        let cfg_path = dir.path().join("approvals.toml");
        fs::write(&cfg_path, "[declarations]\nowners_file = \"OWNERS \"\n").unwrap();

        let out = run_app(args(
            dir.path(),
            &[
                "--config",
                cfg_path.to_str().unwrap(),
                "--approvers",
                "bob",
                "--changed-files",
                "svc/main.rs",
            ],
        ));
        assert_eq!(out.unwrap(), "Approved");
    }

    #[test]
    fn malformed_config_is_a_config_error() {
        let dir = repo();
        let cfg_path = dir.path().join("bad.toml");
        fs::write(&cfg_path, "[declarations\n").unwrap();

        let err = run_app(args(
            dir.path(),
            &["--config", cfg_path.to_str().unwrap(), "--approvers", "a", "--changed-files", "b"],
        ))
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
