use std::path::PathBuf;

use clap::Parser;

pub const SEPARATOR: char = ',';

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "validate_approvals", version)]
pub struct Args {
    /// Path to system root
    #[arg(long, default_value = ".")]
    pub system_root: PathBuf,

    /// Comma-separated list of approvers
    #[arg(long)]
    pub approvers: String,

    /// Comma-separated list of changed files with full path relative to system root
    #[arg(long)]
    pub changed_files: String,

    /// Config file (defaults to ./approvals.toml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    pub fn approvers(&self) -> Vec<String> {
        split_list(&self.approvers)
    }

    pub fn changed_files(&self) -> Vec<String> {
        split_list(&self.changed_files)
    }
}

/// Splits a comma-separated flag value, trimming items and dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(split_list(" alice, bob ,,carol,"), vec!["alice", "bob", "carol"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn parses_required_flags_with_defaults() {
        let args = Args::try_parse_from([
            "validate_approvals",
            "--approvers",
            "alice,bob",
            "--changed-files",
            "src/a.rs",
        ])
        .unwrap();
        assert_eq!(args.system_root, PathBuf::from("."));
        assert_eq!(args.approvers(), vec!["alice", "bob"]);
        assert_eq!(args.changed_files(), vec!["src/a.rs"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.config.is_none());
    }

    #[test]
    fn missing_required_flag_is_rejected() {
        let err = Args::try_parse_from(["validate_approvals", "--approvers", "alice"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn accepts_json_format() {
        let args = Args::try_parse_from([
            "validate_approvals",
            "--system-root",
            "/repo",
            "--approvers",
            "a",
            "--changed-files",
            "x",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.system_root, PathBuf::from("/repo"));
    }
}
