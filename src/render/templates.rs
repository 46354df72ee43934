//! Page templates.

use minijinja::Environment;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pages::Page;

/// The two page views and their template files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateView {
    View,
    Edit,
}

impl TemplateView {
    pub const ALL: [TemplateView; 2] = [TemplateView::View, TemplateView::Edit];

    pub fn file_name(self) -> &'static str {
        match self {
            TemplateView::View => "view.html",
            TemplateView::Edit => "edit.html",
        }
    }
}

/// Errors from loading or rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Template(#[from] minijinja::Error),
}

/// Parsed page templates.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Load and parse `view.html` and `edit.html` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, RenderError> {
        let mut sources = Vec::with_capacity(TemplateView::ALL.len());
        for view in TemplateView::ALL {
            let path = dir.join(view.file_name());
            let source = std::fs::read_to_string(&path)
                .map_err(|source| RenderError::Read { path: path.clone(), source })?;
            tracing::debug!(template = view.file_name(), path = %path.display(), "Template loaded");
            sources.push((view, source));
        }
        Self::from_sources(sources)
    }

    /// Build from in-memory template sources.
    pub fn from_sources(
        sources: impl IntoIterator<Item = (TemplateView, String)>,
    ) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for (view, source) in sources {
            env.add_template_owned(view.file_name(), source)?;
        }
        Ok(Self { env })
    }

    /// Render `view` with the page as context.
    pub fn render(&self, view: TemplateView, page: &Page) -> Result<String, RenderError> {
        let template = self.env.get_template(view.file_name())?;
        Ok(template.render(page.context())?)
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.env.templates().map(|(name, _)| name).collect();
        f.debug_struct("Renderer").field("templates", &names).finish()
    }
}
