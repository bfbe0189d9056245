//! Reference renderer for nexus-site configurations.
//!
//! Turns a validated [`SiteConfig`](nexus_site_schema::SiteConfig) into a
//! single static landing page with its stylesheet and script.

pub mod assets;
pub mod builder;
pub mod contract;
pub mod html;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use contract::{render, Anchor, PageMeta, PageRenderer, RenderError};
pub use html::HtmlRenderer;
