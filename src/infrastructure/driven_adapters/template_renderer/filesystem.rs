//! File System Template Renderer
//!
//! `TemplateRenderer` backed by a minijinja environment that loads templates
//! from a directory on first use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use minijinja::{context, Environment, ErrorKind};

use crate::domain::gateways::TemplateRenderer;
use crate::shared::errors::RenderError;

/// Renders templates found under a directory
pub struct FileSystemTemplateRenderer {
    env: Arc<Environment<'static>>,
    dir: PathBuf,
}

impl FileSystemTemplateRenderer {
    /// Create a renderer resolving template names against `dir`
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(&dir));
        env.set_keep_trailing_newline(true);

        Self {
            env: Arc::new(env),
            dir,
        }
    }

    /// Directory templates are loaded from
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl TemplateRenderer for FileSystemTemplateRenderer {
    async fn render(&self, template_name: &str) -> Result<String, RenderError> {
        let env = Arc::clone(&self.env);
        let name = template_name.to_owned();

        tokio::task::spawn_blocking(move || render_template(&env, &name)).await?
    }
}

fn render_template(env: &Environment<'static>, name: &str) -> Result<String, RenderError> {
    let template = env.get_template(name).map_err(|source| {
        if source.kind() == ErrorKind::TemplateNotFound {
            RenderError::NotFound(name.to_string())
        } else {
            RenderError::Render {
                name: name.to_string(),
                source,
            }
        }
    })?;

    // Past this point the template exists; a missing `extends`/`include`
    // target is a render failure and the engine error names the culprit.
    template
        .render(context! {})
        .map_err(|source| RenderError::Render {
            name: name.to_string(),
            source,
        })
}
