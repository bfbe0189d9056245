//! Static site builder.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tokio::fs;

use nexus_site_schema::SiteConfig;

use crate::assets::AssetPipeline;
use crate::contract::{render, RenderError};
use crate::html::HtmlRenderer;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of sections rendered
    pub sections: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render site: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Render the site and write it to the output directory.
    pub async fn build(&self, site: &SiteConfig) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let out = &self.config.output_dir;

        tracing::info!(
            "Rendering {} with {} sections",
            site.title(),
            site.sections().len()
        );

        let html = render(site, HtmlRenderer::new(base_url(&self.config.base_url)))?;

        create_dir(out).await?;
        write(&out.join("index.html"), html).await?;

        self.generate_assets().await?;

        let duration = start.elapsed();

        Ok(BuildResult {
            sections: site.sections().len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: out.clone(),
        })
    }

    /// Generate static assets.
    async fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        create_dir(&assets_dir).await?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Skipping CSS minification: {}", e);
                    css
                }
            }
        } else {
            css
        };
        write(&assets_dir.join("main.css"), css).await?;

        write(&assets_dir.join("main.js"), AssetPipeline::generate_js()).await?;

        tracing::debug!("Wrote assets to {}", assets_dir.display());
        Ok(())
    }
}

/// Ensure the base URL ends with a slash so asset paths can be appended.
fn base_url(raw: &str) -> String {
    if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    }
}

async fn create_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).await.map_err(|e| BuildError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

async fn write(path: &Path, contents: String) -> Result<(), BuildError> {
    fs::write(path, contents).await.map_err(|e| BuildError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_site_schema::example;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builds_example_site() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        });

        let result = builder.build(&example::nexus_router()).await.unwrap();

        assert_eq!(result.sections, 4);
        assert!(out.join("index.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains(r#"<section id="adapters""#));
    }

    #[tokio::test]
    async fn keeps_css_readable_without_minify() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            minify: false,
            base_url: "/docs".to_string(),
        })
        .build(&example::nexus_router())
        .await
        .unwrap();

        let css = std::fs::read_to_string(out.join("assets/main.css")).unwrap();
        assert_eq!(css, AssetPipeline::generate_css());

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains(r#"href="/docs/assets/main.css""#));
    }

    #[test]
    fn normalizes_base_url() {
        assert_eq!(base_url("/"), "/");
        assert_eq!(base_url("/docs"), "/docs/");
        assert_eq!(base_url("https://example.com/"), "https://example.com/");
    }
}
