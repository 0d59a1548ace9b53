//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod links;
pub mod markdown;

use crate::model::DeclarationRecord;
use anyhow::{anyhow, Result};

/// Settings shared by all renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Base URL of the wrapped library's API reference, with trailing slash.
    pub docs_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            docs_url: crate::DEFAULT_DOCS_URL.to_string(),
        }
    }
}

/// Trait for rendering a DeclarationRecord into a specific output format.
pub trait Renderer {
    fn render(&self, record: &DeclarationRecord) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, options: &RenderOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" | "mdx" => Ok(Box::new(markdown::MarkdownRenderer::new(options.clone()))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown or json",
            format
        )),
    }
}
