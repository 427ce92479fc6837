//! quicksvc: wrap an executable into a systemd service package built and installed with makepkg.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use app::{
    AppContext,
    commands::{install, preview, resolve},
};
use services::MakepkgBuilder;

pub use app::commands::install::InstallOutcome;
pub use domain::{
    AppError, Invocation, RenderedArtifacts, ServiceSpec, decode_program_tokens, split_at_separator,
};

/// Resolve the invocation, generate the unit and PKGBUILD, and run `makepkg -i` on them.
pub fn install(invocation: Invocation) -> Result<InstallOutcome, AppError> {
    let spec = resolve::execute(invocation)?;
    let ctx = AppContext::new(MakepkgBuilder::new());

    let outcome = install::execute(&ctx, &spec)?;
    println!("✅ Installed {} ({})", outcome.service_name, outcome.unit_file_name);
    Ok(outcome)
}

/// Resolve the invocation and print the rendered artifacts without building.
pub fn preview(invocation: Invocation) -> Result<RenderedArtifacts, AppError> {
    let spec = resolve::execute(invocation)?;
    let ctx = AppContext::new(MakepkgBuilder::new());

    let artifacts = preview::execute(&ctx, &spec)?;
    print!("{}", preview::format(&artifacts));
    Ok(artifacts)
}
