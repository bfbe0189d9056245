//! Static site build command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use nexus_site_render::{BuildConfig, SiteBuilder};
use nexus_site_schema::load_site;

use crate::project::Project;

/// Run the build command.
pub async fn run(project: &Project, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let site_file = project.site_file();
    let site = load_site(&site_file)
        .with_context(|| format!("Invalid site file {}", site_file.display()))?;

    let settings = &project.settings.build;
    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| project.output_dir()),
        minify: minify.unwrap_or(settings.minify),
        base_url: settings.base_url.clone(),
    };

    let result = SiteBuilder::new(config).build(&site).await?;

    tracing::info!(
        "Built {} sections in {}ms",
        result.sections,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
