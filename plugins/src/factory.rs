use approvals_core::api as core_api;

use crate::source::FsMetadataSource;

pub fn build_source(cfg: &core_api::AppConfig) -> Box<dyn core_api::MetadataSource> {
    let source = FsMetadataSource::new();
    tracing::debug!(
        target: "approvals.plugins",
        source = core_api::MetadataSource::name(&source),
        owners_file = %cfg.declarations.owners_file,
        dependencies_file = %cfg.declarations.dependencies_file,
        "metadata source ready"
    );
    Box::new(source)
}
