use crate::domain::AppError;
use std::path::Path;

pub trait PackageBuilder {
    /// Build and install the package whose recipe lives in `build_dir`.
    ///
    /// Runs exactly once; implementations must not retry.
    fn build_and_install(&self, build_dir: &Path) -> Result<(), AppError>;

    /// Command line shown in logs and error messages.
    fn command_line(&self) -> String;
}
