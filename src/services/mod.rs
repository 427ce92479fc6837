mod makepkg_builder;
mod scratch_workspace;
mod template_catalog;

pub use makepkg_builder::MakepkgBuilder;
pub use scratch_workspace::ScratchWorkspace;
pub use template_catalog::{EmbeddedTemplateCatalog, PKGBUILD_TEMPLATE, SERVICE_TEMPLATE};
