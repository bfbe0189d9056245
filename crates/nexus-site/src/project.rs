//! Project settings file (`nexus-site.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ProjectFile {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteSettings {
    /// Site file, relative to the project file
    #[serde(default = "default_site_file")]
    pub file: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_minify")]
    pub minify: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            file: default_site_file(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: default_minify(),
            base_url: default_base_url(),
        }
    }
}

fn default_site_file() -> PathBuf {
    PathBuf::from("site.yaml")
}
fn default_output() -> PathBuf {
    PathBuf::from("dist")
}
fn default_minify() -> bool {
    true
}
fn default_base_url() -> String {
    "/".to_string()
}

/// A loaded project file and the directory it lives in.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub settings: ProjectFile,
}

impl Project {
    /// Load the project file if it exists, otherwise fall back to defaults.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let settings = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let settings: ProjectFile = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            tracing::info!("Loaded settings from {}", path.display());
            settings
        } else {
            tracing::debug!("{} not found, using defaults", path.display());
            ProjectFile::default()
        };

        Ok(Self { root, settings })
    }

    /// Path of the site file.
    pub fn site_file(&self) -> PathBuf {
        self.root.join(&self.settings.site.file)
    }

    /// Path of the build output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.settings.build.output)
    }
}
