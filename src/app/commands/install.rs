use std::path::PathBuf;

use log::info;

use crate::app::AppContext;
use crate::domain::{AppError, ServiceSpec};
use crate::ports::PackageBuilder;
use crate::services::ScratchWorkspace;

/// Result of a completed install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub service_name: String,
    pub unit_file_name: String,
    pub installed_program_path: PathBuf,
}

/// Execute the install pipeline: render, write to scratch space, build once.
///
/// The scratch directory is removed before this returns, on success and on every error.
pub fn execute<B>(ctx: &AppContext<B>, spec: &ServiceSpec) -> Result<InstallOutcome, AppError>
where
    B: PackageBuilder,
{
    let artifacts = ctx.templates().render(spec)?;

    let scratch = ScratchWorkspace::create_in(ctx.scratch_parent())?;
    scratch.write(&artifacts)?;
    info!("Generated {} and PKGBUILD in {}", artifacts.unit_file_name, scratch.path().display());

    ctx.builder().build_and_install(scratch.path())?;

    Ok(InstallOutcome {
        service_name: spec.name().to_string(),
        unit_file_name: artifacts.unit_file_name,
        installed_program_path: spec.installed_program_path().to_path_buf(),
    })
}
