//! Site file validation command.

use std::path::Path;

use anyhow::{Context, Result};
use nexus_site_schema::load_site;

/// Run the validate command.
pub fn run(file: &Path) -> Result<()> {
    let site = load_site(file).with_context(|| format!("Invalid site file {}", file.display()))?;

    tracing::info!(
        "{} is valid: {} sections, {} hero previews",
        file.display(),
        site.sections().len(),
        site.hero().previews.len()
    );

    for (i, section) in site.sections().iter().enumerate() {
        tracing::info!("  sections[{}] {} #{}", i, section.kind(), section.id());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_site_schema::{example, loader, SiteFormat};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn accepts_valid_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.yaml");
        let yaml = loader::to_string(&example::nexus_router(), SiteFormat::Yaml).unwrap();
        fs::write(&path, yaml).unwrap();

        assert!(run(&path).is_ok());
    }

    #[test]
    fn reports_offending_field() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.json");
        let json = loader::to_string(&example::nexus_router(), SiteFormat::Json)
            .unwrap()
            .replace("\"kind\": \"code-cards\"", "\"kind\": \"testimonial\"");
        fs::write(&path, json).unwrap();

        let err = run(&path).unwrap_err();

        assert!(format!("{:#}", err).contains("sections[1].kind"));
    }
}
