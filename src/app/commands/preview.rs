use crate::app::AppContext;
use crate::domain::{AppError, RenderedArtifacts, ServiceSpec};
use crate::ports::PackageBuilder;

/// Render the artifacts without writing anything or invoking the builder.
pub fn execute<B>(ctx: &AppContext<B>, spec: &ServiceSpec) -> Result<RenderedArtifacts, AppError>
where
    B: PackageBuilder,
{
    ctx.templates().render(spec)
}

/// Format rendered artifacts for terminal output, one `==> <file>` header per file.
pub fn format(artifacts: &RenderedArtifacts) -> String {
    artifacts
        .files()
        .iter()
        .map(|(name, content)| format!("==> {}\n{}", name, content))
        .collect::<Vec<_>>()
        .join("\n")
}
