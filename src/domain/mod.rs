pub mod artifacts;
pub mod error;
pub mod invocation;
pub mod service_spec;
pub mod validation;

pub use artifacts::{PKGBUILD_FILE, RenderedArtifacts, TemplateContext};
pub use error::AppError;
pub use invocation::{Invocation, SEPARATOR, decode_program_tokens, split_at_separator};
pub use service_spec::{DEFAULT_NAME_PREFIX, INSTALL_BIN_DIR, ServiceSpec};
