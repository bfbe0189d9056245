//! Site file export command.

use std::path::Path;

use anyhow::{Context, Result};
use nexus_site_schema::{load_site, loader, SiteFormat};

/// Run the export command.
pub fn run(file: &Path, format: SiteFormat) -> Result<()> {
    let site = load_site(file).with_context(|| format!("Invalid site file {}", file.display()))?;
    let output = loader::to_string(&site, format).context("Failed to serialize site")?;

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
