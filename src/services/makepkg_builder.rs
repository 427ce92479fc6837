use std::path::Path;
use std::process::Command;

use log::info;

use crate::domain::AppError;
use crate::ports::PackageBuilder;

/// Runs `makepkg -i` in the build directory with the terminal's standard streams.
#[derive(Debug, Clone)]
pub struct MakepkgBuilder {
    program: String,
    args: Vec<String>,
}

impl MakepkgBuilder {
    pub fn new() -> Self {
        Self::with_command("makepkg", &["-i"])
    }

    /// Use a different builder command line.
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self { program: program.to_string(), args: args.iter().map(|a| a.to_string()).collect() }
    }
}

impl Default for MakepkgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageBuilder for MakepkgBuilder {
    fn build_and_install(&self, build_dir: &Path) -> Result<(), AppError> {
        info!("Running {} in {}", self.command_line(), build_dir.display());

        // stdin/stdout/stderr are inherited so prompts reach the terminal.
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(build_dir)
            .status()
            .map_err(|e| AppError::BuildFailed {
                command: self.command_line(),
                details: e.to_string(),
            })?;

        if !status.success() {
            return Err(AppError::BuildFailed {
                command: self.command_line(),
                details: status.to_string(),
            });
        }

        Ok(())
    }

    fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
