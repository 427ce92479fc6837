use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::domain::{AppError, RenderedArtifacts, ServiceSpec, TemplateContext};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

pub const SERVICE_TEMPLATE: &str = "service.j2";
pub const PKGBUILD_TEMPLATE: &str = "PKGBUILD.j2";

/// Renders the embedded unit and recipe templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateCatalog;

impl EmbeddedTemplateCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Render both artifacts for `spec`.
    pub fn render(&self, spec: &ServiceSpec) -> Result<RenderedArtifacts, AppError> {
        let env = environment()?;
        let context = TemplateContext::from(spec);

        Ok(RenderedArtifacts {
            unit_file_name: spec.unit_file_name(),
            unit: render_template(env, SERVICE_TEMPLATE, &context)?,
            pkgbuild: render_template(env, PKGBUILD_TEMPLATE, &context)?,
        })
    }
}

fn environment() -> Result<&'static Environment<'static>, AppError> {
    if let Some(env) = ENV.get() {
        return Ok(env);
    }
    let env = build_environment(&embedded_sources()?)?;
    Ok(ENV.get_or_init(|| env))
}

/// `(name, source)` pairs for every embedded template.
fn embedded_sources() -> Result<Vec<(&'static str, &'static str)>, AppError> {
    TEMPLATES_DIR
        .files()
        .map(|file| {
            let name = file.path().to_str().ok_or_else(|| AppError::Template {
                template: file.path().display().to_string(),
                reason: "template name is not valid UTF-8".to_string(),
            })?;
            let source = file.contents_utf8().ok_or_else(|| AppError::Template {
                template: name.to_string(),
                reason: "template is not valid UTF-8".to_string(),
            })?;
            Ok((name, source))
        })
        .collect()
}

fn build_environment(
    sources: &[(&'static str, &'static str)],
) -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for &(name, source) in sources {
        env.add_template(name, source).map_err(|err| template_error(name, err))?;
    }

    Ok(env)
}

fn render_template(
    env: &Environment<'static>,
    name: &str,
    context: &TemplateContext,
) -> Result<String, AppError> {
    let template = env.get_template(name).map_err(|err| template_error(name, err))?;
    template.render(context).map_err(|err| template_error(name, err))
}

fn template_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: template_name.to_string(), reason: err.to_string() }
}
