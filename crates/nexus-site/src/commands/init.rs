//! Scaffold a site in a project directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nexus_site_schema::{example, loader, SiteFormat};

use crate::project::Project;

/// Run the init command.
pub fn run(root: &Path, yes: bool, format: SiteFormat) -> Result<()> {
    tracing::info!("Initializing nexus-site...");

    let site_name = format!("site.{}", format.extension());
    let site_path = root.join(&site_name);

    if site_path.exists() && !yes {
        tracing::warn!("{} already exists. Use --yes to overwrite.", site_name);
        return Ok(());
    }

    // A kept project file must still point at the file written here.
    let config_path = root.join("nexus-site.toml");
    if config_path.exists() && !yes {
        let project = Project::load(&config_path)?;
        if project.settings.site.file.as_path() != Path::new(&site_name) {
            tracing::warn!(
                "nexus-site.toml uses {} instead of {}. Use --yes to overwrite.",
                project.settings.site.file.display(),
                site_name
            );
            return Ok(());
        }
    }

    let site = loader::to_string(&example::nexus_router(), format)
        .context("Failed to serialize starter site")?;
    fs::write(&site_path, site).with_context(|| format!("Failed to write {}", site_name))?;
    tracing::info!("Created {}", site_name);

    if !config_path.exists() || yes {
        fs::write(&config_path, default_config(&site_name))
            .context("Failed to write nexus-site.toml")?;
        tracing::info!("Created nexus-site.toml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'nexus-site build' to render the site.");

    Ok(())
}

fn default_config(site_file: &str) -> String {
    format!(
        r#"# nexus-site configuration

[site]
# Site content file (yaml, json or toml)
file = "{site_file}"

[build]
# Output directory for the built site
output = "dist"

# Minify the stylesheet
minify = true

# Base URL (for deployment under a sub-path)
base_url = "/"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_site_schema::load_site;
    use tempfile::tempdir;

    #[test]
    fn scaffolds_loadable_project() {
        let temp = tempdir().unwrap();

        run(temp.path(), false, SiteFormat::Toml).unwrap();

        let project = Project::load(&temp.path().join("nexus-site.toml")).unwrap();
        assert_eq!(project.site_file(), temp.path().join("site.toml"));

        let site = load_site(&project.site_file()).unwrap();
        assert_eq!(site, example::nexus_router());
    }

    #[test]
    fn keeps_existing_site_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.yaml");
        fs::write(&path, "custom").unwrap();

        run(temp.path(), false, SiteFormat::Yaml).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "custom");
        assert!(!temp.path().join("nexus-site.toml").exists());
    }

    #[test]
    fn keeps_project_file_pointing_elsewhere() {
        let temp = tempdir().unwrap();
        run(temp.path(), false, SiteFormat::Yaml).unwrap();
        let config = fs::read_to_string(temp.path().join("nexus-site.toml")).unwrap();

        run(temp.path(), false, SiteFormat::Json).unwrap();

        assert!(!temp.path().join("site.json").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("nexus-site.toml")).unwrap(),
            config
        );
    }

    #[test]
    fn yes_rewrites_project_file_for_new_format() {
        let temp = tempdir().unwrap();
        run(temp.path(), false, SiteFormat::Yaml).unwrap();

        run(temp.path(), true, SiteFormat::Json).unwrap();

        let project = Project::load(&temp.path().join("nexus-site.toml")).unwrap();
        assert_eq!(project.site_file(), temp.path().join("site.json"));
        assert_eq!(load_site(&project.site_file()).unwrap(), example::nexus_router());
    }
}
