//! The renderer contract.
//!
//! [`render`] is the only way a configuration is walked: metadata first,
//! then the hero block once, then every section in order. Which hook runs
//! for a section depends on its `kind` and nothing else. Implementations of
//! [`PageRenderer`] only decide what each piece looks like.

use serde::Serialize;

use nexus_site_schema::{
    CodeCardsSection, DataTableSection, FeaturesSection, HeroBlock, Section, SiteConfig,
};

/// Errors that can occur while rendering a configuration.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Section `{id}` has kind `{kind}`, which this renderer does not support")]
    UnsupportedSection { id: String, kind: String },
}

/// Page-level metadata and branding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub logo_badge: String,
    pub brand_name: String,
    pub repo_url: String,
    /// Trusted inline-link HTML, already checked by the validator
    pub footer_text: String,
    /// In-page anchor targets, one per section, in render order
    pub anchors: Vec<Anchor>,
}

/// Stable anchor for a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub id: String,
    pub title: String,
}

impl From<&SiteConfig> for PageMeta {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title().to_string(),
            description: config.description().to_string(),
            logo_badge: config.logo_badge().to_string(),
            brand_name: config.brand_name().to_string(),
            repo_url: config.repo_url().to_string(),
            footer_text: config.footer_text().to_string(),
            anchors: config
                .sections()
                .iter()
                .map(|s| Anchor {
                    id: s.id().to_string(),
                    title: s.title().to_string(),
                })
                .collect(),
        }
    }
}

/// Hooks called by [`render`].
pub trait PageRenderer {
    /// What a finished render produces.
    type Output;

    fn metadata(&mut self, meta: &PageMeta) -> Result<(), RenderError>;

    fn hero(&mut self, hero: &HeroBlock) -> Result<(), RenderError>;

    fn features(&mut self, section: &FeaturesSection) -> Result<(), RenderError>;

    fn code_cards(&mut self, section: &CodeCardsSection) -> Result<(), RenderError>;

    fn data_table(&mut self, section: &DataTableSection) -> Result<(), RenderError>;

    /// Called once after the last section.
    fn finish(self) -> Result<Self::Output, RenderError>;
}

/// Walk a configuration with the given renderer.
pub fn render<R: PageRenderer>(config: &SiteConfig, mut renderer: R) -> Result<R::Output, RenderError> {
    renderer.metadata(&PageMeta::from(config))?;
    renderer.hero(config.hero())?;

    for section in config.sections() {
        match section {
            Section::Features(s) => renderer.features(s)?,
            Section::CodeCards(s) => renderer.code_cards(s)?,
            Section::DataTable(s) => renderer.data_table(s)?,
            other => {
                return Err(RenderError::UnsupportedSection {
                    id: other.id().to_string(),
                    kind: other.kind().to_string(),
                })
            }
        }
    }

    renderer.finish()
}
