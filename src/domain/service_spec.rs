use std::path::{Component, Path, PathBuf};

use super::AppError;
use super::invocation::Invocation;
use super::validation::validate_service_name;

/// Directory the package installs the wrapped binary into.
pub const INSTALL_BIN_DIR: &str = "/usr/bin";

/// Prefix for service names derived from the program file name.
pub const DEFAULT_NAME_PREFIX: &str = "quicksvc-";

/// Resolved description of the service to package.
///
/// Guarantees:
/// - `name` is a valid package name
/// - `source_program_path` is absolute and lexically normalized
/// - `installed_program_path` is `/usr/bin/<name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    name: String,
    source_program_path: PathBuf,
    program_args: Vec<String>,
    installed_program_path: PathBuf,
}

impl ServiceSpec {
    /// Resolve raw input into a service spec, using `cwd` for relative program paths.
    pub fn resolve(invocation: Invocation, cwd: &Path) -> Result<Self, AppError> {
        let Invocation { name, stray, program } = invocation;

        let program = program.ok_or(AppError::MissingSeparator)?;
        if let Some(first) = stray.into_iter().next() {
            return Err(AppError::UnexpectedArgument(first));
        }

        let mut tokens = program.into_iter();
        let raw_path = tokens.next().ok_or(AppError::MissingProgram)?;
        let program_args: Vec<String> = tokens.collect();

        let source_program_path = absolutize(Path::new(&raw_path), cwd);
        // The recipe single-quotes the source path and its file name.
        if source_program_path.as_os_str().to_string_lossy().contains('\'') {
            return Err(AppError::PathResolution {
                path: raw_path,
                reason: "path must not contain a single quote".to_string(),
            });
        }
        let file_name = program_file_name(&source_program_path).ok_or_else(|| {
            AppError::PathResolution {
                path: raw_path.clone(),
                reason: "path has no file name".to_string(),
            }
        })?;

        let name = match name.filter(|n| !n.is_empty()) {
            Some(explicit) => explicit,
            None => format!("{}{}", DEFAULT_NAME_PREFIX, file_name),
        };
        if !validate_service_name(&name) {
            return Err(AppError::InvalidServiceName(name));
        }

        let installed_program_path = Path::new(INSTALL_BIN_DIR).join(&name);

        Ok(Self { name, source_program_path, program_args, installed_program_path })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_program_path(&self) -> &Path {
        &self.source_program_path
    }

    pub fn program_args(&self) -> &[String] {
        &self.program_args
    }

    pub fn installed_program_path(&self) -> &Path {
        &self.installed_program_path
    }

    /// File name of the wrapped program.
    pub fn program_file_name(&self) -> &str {
        program_file_name(&self.source_program_path).unwrap_or_default()
    }

    /// Human-readable unit description.
    pub fn description(&self) -> String {
        format!("[quicksvc] {}", self.program_file_name())
    }

    /// Program arguments joined with single spaces. No quoting is applied.
    pub fn joined_args(&self) -> String {
        self.program_args.join(" ")
    }

    /// File name of the generated unit.
    pub fn unit_file_name(&self) -> String {
        format!("{}.service", self.name)
    }
}

fn program_file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Join `path` onto `cwd` when relative, then drop `.` and fold `..` lexically.
fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if normalized.parent().is_some() {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
