//! Typed site configuration for the nexus-router marketing site.
//!
//! A [`SiteConfig`] describes the whole page: branding, a hero block and an
//! ordered list of [`Section`]s. Values are only produced by the validator,
//! so a `SiteConfig` in hand is always safe to pass to a renderer.

pub mod error;
pub mod example;
pub mod loader;
pub mod model;
pub mod path;
pub mod section;
pub mod validate;

pub use error::ValidationError;
pub use loader::{load_site, parse_site, LoadError, SiteFormat};
pub use model::{Cta, HeroBlock, Preview, SiteConfig, SiteConfigBuilder};
pub use path::FieldPath;
pub use section::{
    CodeCard, CodeCardsSection, DataTableSection, Feature, FeaturesSection, Section, SectionKind,
};
pub use validate::validate;
