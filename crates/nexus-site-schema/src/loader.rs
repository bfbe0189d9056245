//! Reading and writing site files.
//!
//! Every format is first decoded into an untyped value so the validator can
//! report errors with exact field paths, independent of the file format.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::Value;

use crate::error::ValidationError;
use crate::model::SiteConfig;
use crate::validate::validate;

/// Supported site file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl SiteFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Preferred file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for SiteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for SiteFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(format!("unsupported site format `{}`", other)),
        }
    }
}

/// Errors that can occur when loading or writing a site file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported site file extension: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to write TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Invalid site configuration: {0}")]
    Validation(#[from] ValidationError),
}

/// Parse and validate a site file's contents.
pub fn parse_site(source: &str, format: SiteFormat) -> Result<SiteConfig, LoadError> {
    let value: Value = match format {
        SiteFormat::Yaml => serde_yaml::from_str(source)?,
        SiteFormat::Json => serde_json::from_str(source)?,
        SiteFormat::Toml => toml::from_str(source)?,
    };

    Ok(validate(&value)?)
}

/// Load and validate a site file, detecting the format from its extension.
pub fn load_site(path: &Path) -> Result<SiteConfig, LoadError> {
    let format =
        SiteFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    let source = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Loading {} site file {}", format, path.display());

    parse_site(&source, format)
}

/// Serialize a configuration in the given format.
pub fn to_string(config: &SiteConfig, format: SiteFormat) -> Result<String, LoadError> {
    let output = match format {
        SiteFormat::Yaml => serde_yaml::to_string(config)?,
        SiteFormat::Json => serde_json::to_string_pretty(config)?,
        SiteFormat::Toml => toml::to_string_pretty(config)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(SiteFormat::from_path(Path::new("site.yaml")), Some(SiteFormat::Yaml));
        assert_eq!(SiteFormat::from_path(Path::new("site.YML")), Some(SiteFormat::Yaml));
        assert_eq!(SiteFormat::from_path(Path::new("site.json")), Some(SiteFormat::Json));
        assert_eq!(SiteFormat::from_path(Path::new("site.toml")), Some(SiteFormat::Toml));
        assert_eq!(SiteFormat::from_path(Path::new("site.ts")), None);
    }

    #[test]
    fn round_trips_through_every_format() {
        let config = example::nexus_router();

        for format in [SiteFormat::Yaml, SiteFormat::Json, SiteFormat::Toml] {
            let text = to_string(&config, format).unwrap();
            let parsed = parse_site(&text, format).unwrap();
            assert_eq!(parsed, config, "round trip through {}", format);
        }
    }

    #[test]
    fn parses_handwritten_yaml() {
        let source = r##"
title: tool
description: A small tool.
logoBadge: T
brandName: tool
repoUrl: https://example.com/tool
footerText: MIT Licensed
hero:
  badge: Beta
  headline: Ship it,
  headlineAccent: safely.
  description: A small tool.
  primaryCta: { href: "#usage", label: Get started }
  secondaryCta: { href: "#table", label: Learn more }
  previews:
    - label: Install
      code: |
        cargo install tool
sections:
  - kind: data-table
    id: table
    title: Table
    columns: [Name, Value]
    rows:
      - [a, "1"]
      - [b, "2"]
"##;

        let config = parse_site(source, SiteFormat::Yaml).unwrap();

        assert_eq!(config.sections().len(), 1);
        assert_eq!(config.hero().previews[0].code, "cargo install tool\n");
    }

    #[test]
    fn reports_validation_errors_with_path() {
        let source = r#"{ "title": "tool" }"#;

        let err = parse_site(source, SiteFormat::Json).unwrap_err();

        match err {
            LoadError::Validation(e) => assert_eq!(e.path().as_str(), "description"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.json");
        let config = example::nexus_router();
        fs::write(&path, to_string(&config, SiteFormat::Json).unwrap()).unwrap();

        assert_eq!(load_site(&path).unwrap(), config);
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_site(Path::new("site.ts")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }
}
