use std::env;

use log::info;

use crate::domain::{AppError, Invocation, ServiceSpec};

/// Resolve raw input against the current working directory.
pub fn execute(invocation: Invocation) -> Result<ServiceSpec, AppError> {
    // Without a separator nothing else matters, so fail before touching the filesystem.
    if invocation.program.is_none() {
        return Err(AppError::MissingSeparator);
    }

    let cwd = env::current_dir().map_err(|e| AppError::PathResolution {
        path: invocation.program.iter().flatten().next().cloned().unwrap_or_default(),
        reason: format!("cannot read current directory: {}", e),
    })?;

    let spec = ServiceSpec::resolve(invocation, &cwd)?;

    info!("Program: {}", spec.source_program_path().display());
    info!("Program args: {:?}", spec.program_args());
    info!("Service name: {}", spec.name());

    Ok(spec)
}
