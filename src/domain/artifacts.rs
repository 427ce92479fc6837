use serde::Serialize;

use super::ServiceSpec;

/// File name of the generated package recipe.
pub const PKGBUILD_FILE: &str = "PKGBUILD";

/// Values substituted into the embedded templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub service_description: String,
    pub package_name: String,
    pub source_program_path: String,
    pub program_path: String,
    pub program_args: String,
}

impl From<&ServiceSpec> for TemplateContext {
    fn from(spec: &ServiceSpec) -> Self {
        Self {
            service_description: spec.description(),
            package_name: spec.name().to_string(),
            source_program_path: spec.source_program_path().display().to_string(),
            program_path: spec.installed_program_path().display().to_string(),
            program_args: spec.joined_args(),
        }
    }
}

/// Rendered unit file and package recipe, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub unit_file_name: String,
    pub unit: String,
    pub pkgbuild: String,
}

impl RenderedArtifacts {
    /// Artifacts as `(file name, content)` pairs in write order.
    pub fn files(&self) -> [(&str, &str); 2] {
        [
            (self.unit_file_name.as_str(), self.unit.as_str()),
            (PKGBUILD_FILE, self.pkgbuild.as_str()),
        ]
    }
}
