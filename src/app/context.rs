use std::path::{Path, PathBuf};

use crate::ports::PackageBuilder;
use crate::services::EmbeddedTemplateCatalog;

/// Application context holding dependencies for command execution.
pub struct AppContext<B: PackageBuilder> {
    builder: B,
    templates: EmbeddedTemplateCatalog,
    scratch_parent: PathBuf,
}

impl<B: PackageBuilder> AppContext<B> {
    /// Create a new application context using the system temp location for scratch space.
    pub fn new(builder: B) -> Self {
        Self::with_scratch_parent(builder, std::env::temp_dir())
    }

    /// Create a context whose scratch directories are created under `scratch_parent`.
    pub fn with_scratch_parent<P: Into<PathBuf>>(builder: B, scratch_parent: P) -> Self {
        Self {
            builder,
            templates: EmbeddedTemplateCatalog::new(),
            scratch_parent: scratch_parent.into(),
        }
    }

    /// Get a reference to the package builder.
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Get a reference to the template catalog.
    pub fn templates(&self) -> &EmbeddedTemplateCatalog {
        &self.templates
    }

    pub fn scratch_parent(&self) -> &Path {
        &self.scratch_parent
    }
}
