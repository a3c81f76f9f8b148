use approvals_core::api as core_api;
use serde::Serialize;

use crate::commands::cli::OutputFormat;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    message: &'static str,
    #[serde(flatten)]
    report: &'a core_api::ApprovalReport,
}

pub fn render(report: &core_api::ApprovalReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(report.verdict.message().to_string()),
        OutputFormat::Json => serde_json::to_string(&JsonReport {
            message: report.verdict.message(),
            report,
        })
        .map_err(CliError::Render),
    }
}
