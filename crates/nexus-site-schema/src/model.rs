//! The root site configuration and its hero block.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::path::FieldPath;
use crate::section::Section;
use crate::validate::validate;

/// A validated description of the whole site.
///
/// There is no way to obtain a `SiteConfig` without passing the validator:
/// deserializing one validates it, and [`SiteConfigBuilder::build`] does the
/// same. Fields are only reachable through shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct SiteConfig {
    title: String,
    description: String,
    logo_badge: String,
    brand_name: String,
    repo_url: String,
    footer_text: String,
    hero: HeroBlock,
    sections: Vec<Section>,
}

impl SiteConfig {
    /// Start building a configuration in code.
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn logo_badge(&self) -> &str {
        &self.logo_badge
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    /// Footer HTML. May contain inline `<a>` links and nothing else.
    pub fn footer_text(&self) -> &str {
        &self.footer_text
    }

    pub fn hero(&self) -> &HeroBlock {
        &self.hero
    }

    /// Sections in render order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a section by its anchor id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }
}

impl TryFrom<serde_json::Value> for SiteConfig {
    type Error = ValidationError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

/// Mirror of [`SiteConfig`] used to decode an already validated value.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSiteConfig {
    title: String,
    description: String,
    logo_badge: String,
    brand_name: String,
    repo_url: String,
    footer_text: String,
    hero: HeroBlock,
    sections: Vec<Section>,
}

impl From<RawSiteConfig> for SiteConfig {
    fn from(raw: RawSiteConfig) -> Self {
        Self {
            title: raw.title,
            description: raw.description,
            logo_badge: raw.logo_badge,
            brand_name: raw.brand_name,
            repo_url: raw.repo_url,
            footer_text: raw.footer_text,
            hero: raw.hero,
            sections: raw.sections,
        }
    }
}

/// Above-the-fold introduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    pub badge: String,
    pub headline: String,
    /// Rendered with accent styling after `headline`
    pub headline_accent: String,
    pub description: String,
    pub primary_cta: Cta,
    pub secondary_cta: Cta,
    /// Code snippets shown beside the headline, in order
    pub previews: Vec<Preview>,
}

/// Call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub href: String,
    pub label: String,
}

impl Cta {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// A labelled snippet rendered as a code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub label: String,
    pub code: String,
}

impl Preview {
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }
}

/// Checked builder for [`SiteConfig`].
///
/// Unset fields are left out of the candidate, so `build` reports them the
/// same way it would for a site file missing those keys.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigBuilder {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo_badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero: Option<HeroBlock>,
    sections: Vec<Section>,
}

impl SiteConfigBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn logo_badge(mut self, badge: impl Into<String>) -> Self {
        self.logo_badge = Some(badge.into());
        self
    }

    pub fn brand_name(mut self, name: impl Into<String>) -> Self {
        self.brand_name = Some(name.into());
        self
    }

    pub fn repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    pub fn footer_text(mut self, text: impl Into<String>) -> Self {
        self.footer_text = Some(text.into());
        self
    }

    pub fn hero(mut self, hero: HeroBlock) -> Self {
        self.hero = Some(hero);
        self
    }

    /// Append a section. Sections render in the order they are added.
    pub fn section(mut self, section: impl Into<Section>) -> Self {
        self.sections.push(section.into());
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<SiteConfig, ValidationError> {
        let candidate = serde_json::to_value(&self).map_err(|e| ValidationError::Decode {
            path: FieldPath::root(),
            message: e.to_string(),
        })?;
        validate(&candidate)
    }
}
