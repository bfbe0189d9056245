//! HTML renderer backed by minijinja templates.
//!
//! Every template name ends in `.html`, so minijinja escapes all values
//! except the pre-rendered fragments, the validated footer and the base URL,
//! which comes from the build settings rather than site content.

use minijinja::{context, Environment, Value};

use nexus_site_schema::{
    CodeCardsSection, DataTableSection, FeaturesSection, HeroBlock, SectionKind,
};

use crate::contract::{PageMeta, PageRenderer, RenderError};

/// Renders a configuration to a single HTML page.
pub struct HtmlRenderer {
    env: Environment<'static>,
    base_url: String,
    meta: Option<PageMeta>,
    hero: String,
    sections: Vec<String>,
}

impl HtmlRenderer {
    /// Create a renderer whose asset links are rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut env = Environment::new();

        env.add_template("page.html", PAGE_TEMPLATE)
            .expect("Failed to add page template");
        env.add_template("hero.html", HERO_TEMPLATE)
            .expect("Failed to add hero template");
        env.add_template("features.html", FEATURES_TEMPLATE)
            .expect("Failed to add features template");
        env.add_template("code-cards.html", CODE_CARDS_TEMPLATE)
            .expect("Failed to add code-cards template");
        env.add_template("data-table.html", DATA_TABLE_TEMPLATE)
            .expect("Failed to add data-table template");

        Self {
            env,
            base_url: base_url.into(),
            meta: None,
            hero: String::new(),
            sections: Vec::new(),
        }
    }

    /// Render one section with the template named after its kind.
    fn push_section<S: serde::Serialize>(
        &mut self,
        kind: SectionKind,
        section: &S,
    ) -> Result<(), RenderError> {
        let tmpl = self.env.get_template(&format!("{}.html", kind.as_str()))?;
        let html = tmpl.render(context! {
            kind => kind.as_str(),
            section => section,
        })?;
        self.sections.push(html);
        Ok(())
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("/")
    }
}

impl PageRenderer for HtmlRenderer {
    type Output = String;

    fn metadata(&mut self, meta: &PageMeta) -> Result<(), RenderError> {
        self.meta = Some(meta.clone());
        Ok(())
    }

    fn hero(&mut self, hero: &HeroBlock) -> Result<(), RenderError> {
        let tmpl = self.env.get_template("hero.html")?;
        self.hero = tmpl.render(context! { hero => hero })?;
        Ok(())
    }

    fn features(&mut self, section: &FeaturesSection) -> Result<(), RenderError> {
        self.push_section(SectionKind::Features, section)
    }

    fn code_cards(&mut self, section: &CodeCardsSection) -> Result<(), RenderError> {
        self.push_section(SectionKind::CodeCards, section)
    }

    fn data_table(&mut self, section: &DataTableSection) -> Result<(), RenderError> {
        self.push_section(SectionKind::DataTable, section)
    }

    fn finish(self) -> Result<String, RenderError> {
        let tmpl = self.env.get_template("page.html")?;
        let html = tmpl.render(context! {
            meta => self.meta,
            base_url => Value::from_safe_string(self.base_url),
            hero => self.hero,
            sections => self.sections,
        })?;
        Ok(html)
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ meta.title }}</title>
  <meta name="description" content="{{ meta.description }}">
  <meta property="og:title" content="{{ meta.title }}">
  <meta property="og:description" content="{{ meta.description }}">
  <link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <header class="site-header">
    <a href="{{ base_url }}" class="brand">
      <span class="logo-badge">{{ meta.logo_badge }}</span>
      <span class="brand-name">{{ meta.brand_name }}</span>
    </a>
    <nav class="site-nav">
      {% for anchor in meta.anchors %}<a href="#{{ anchor.id }}">{{ anchor.title }}</a>
      {% endfor %}<a href="{{ meta.repo_url }}" class="repo-link">GitHub</a>
    </nav>
  </header>
  <main>
    {{ hero | safe }}
    {% for section in sections %}{{ section | safe }}
    {% endfor %}
  </main>
  <footer class="site-footer">{{ meta.footer_text | safe }}</footer>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

const HERO_TEMPLATE: &str = r##"<section class="hero">
  <div class="hero-copy">
    <span class="hero-badge">{{ hero.badge }}</span>
    <h1>{{ hero.headline }} <span class="accent">{{ hero.headlineAccent }}</span></h1>
    <p class="hero-description">{{ hero.description }}</p>
    <div class="hero-actions">
      <a class="cta cta-primary" href="{{ hero.primaryCta.href }}">{{ hero.primaryCta.label }}</a>
      <a class="cta cta-secondary" href="{{ hero.secondaryCta.href }}">{{ hero.secondaryCta.label }}</a>
    </div>
  </div>
  <div class="hero-previews">
  {% for preview in hero.previews %}
    <figure class="preview">
      <figcaption>{{ preview.label }}</figcaption>
      <pre><code>{{ preview.code }}</code></pre>
    </figure>
  {% endfor %}
  </div>
</section>"##;

const FEATURES_TEMPLATE: &str = r##"<section id="{{ section.id }}" class="section" data-kind="{{ kind }}">
  <h2>{{ section.title }}</h2>
  {% if section.subtitle %}<p class="subtitle">{{ section.subtitle }}</p>{% endif %}
  <div class="feature-grid">
  {% for feature in section.features %}
    <div class="feature">
      <h3>{{ feature.title }}</h3>
      <p>{{ feature.desc }}</p>
    </div>
  {% endfor %}
  </div>
</section>"##;

const CODE_CARDS_TEMPLATE: &str = r##"<section id="{{ section.id }}" class="section" data-kind="{{ kind }}">
  <h2>{{ section.title }}</h2>
  <div class="code-cards">
  {% for card in section.cards %}
    <div class="code-card">
      <h3>{{ card.title }}</h3>
      <pre><code>{{ card.code }}</code></pre>
    </div>
  {% endfor %}
  </div>
</section>"##;

const DATA_TABLE_TEMPLATE: &str = r##"<section id="{{ section.id }}" class="section" data-kind="{{ kind }}">
  <h2>{{ section.title }}</h2>
  {% if section.subtitle %}<p class="subtitle">{{ section.subtitle }}</p>{% endif %}
  <table class="data-table">
    <thead>
      <tr>{% for column in section.columns %}<th>{{ column }}</th>{% endfor %}</tr>
    </thead>
    <tbody>
    {% for row in section.rows %}
      <tr>{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
    {% endfor %}
    </tbody>
  </table>
</section>"##;
