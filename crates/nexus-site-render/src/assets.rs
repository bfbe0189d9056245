//! Stylesheet and script for the rendered landing page.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* nexus-site landing page theme */

:root {
  --color-bg: #0b0d12;
  --color-surface: #141821;
  --color-border: #232a36;
  --color-text: #e6e9ef;
  --color-muted: #8b93a7;
  --color-accent: #5eead4;
  --content-max-width: 1100px;
  --font-sans: system-ui, -apple-system, "Segoe UI", sans-serif;
  --font-mono: ui-monospace, "SFMono-Regular", Menlo, monospace;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--color-bg);
  color: var(--color-text);
  line-height: 1.6;
}

a {
  color: var(--color-accent);
  text-decoration: none;
}

/* Header */
.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 1.25rem 1.5rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  color: var(--color-text);
  font-weight: 600;
}

.logo-badge {
  display: inline-grid;
  place-items: center;
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  background: var(--color-accent);
  color: var(--color-bg);
  font-size: 0.8rem;
  font-weight: 700;
}

.site-nav {
  display: flex;
  gap: 1.25rem;
}

.site-nav a {
  color: var(--color-muted);
}

.site-nav a:hover {
  color: var(--color-text);
}

main {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* Hero */
.hero {
  display: grid;
  grid-template-columns: 1.1fr 1fr;
  gap: 3rem;
  padding: 5rem 0 4rem;
}

.hero-badge {
  display: inline-block;
  padding: 0.2rem 0.7rem;
  border: 1px solid var(--color-border);
  border-radius: 999px;
  color: var(--color-muted);
  font-size: 0.85rem;
}

.hero h1 {
  margin: 1rem 0;
  font-size: 3rem;
  line-height: 1.1;
}

.hero .accent {
  color: var(--color-accent);
}

.hero-description {
  color: var(--color-muted);
  font-size: 1.15rem;
}

.hero-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 2rem;
}

.cta {
  padding: 0.65rem 1.2rem;
  border-radius: 0.5rem;
  font-weight: 600;
}

.cta-primary {
  background: var(--color-accent);
  color: var(--color-bg);
}

.cta-secondary {
  border: 1px solid var(--color-border);
  color: var(--color-text);
}

.hero-previews {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.preview figcaption {
  color: var(--color-muted);
  font-size: 0.8rem;
  margin-bottom: 0.35rem;
}

/* Code */
pre {
  position: relative;
  overflow-x: auto;
  padding: 1rem;
  border: 1px solid var(--color-border);
  border-radius: 0.5rem;
  background: var(--color-surface);
  font-family: var(--font-mono);
  font-size: 0.85rem;
}

.copy-button {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  padding: 0.15rem 0.5rem;
  border: 1px solid var(--color-border);
  border-radius: 0.35rem;
  background: var(--color-bg);
  color: var(--color-muted);
  font-size: 0.75rem;
  cursor: pointer;
}

/* Sections */
.section {
  padding: 4rem 0;
  border-top: 1px solid var(--color-border);
  scroll-margin-top: 1rem;
}

.section h2 {
  font-size: 2rem;
}

.subtitle {
  color: var(--color-muted);
  margin-top: 0.5rem;
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.25rem;
  margin-top: 2rem;
}

.feature {
  padding: 1.25rem;
  border: 1px solid var(--color-border);
  border-radius: 0.75rem;
  background: var(--color-surface);
}

.feature p {
  color: var(--color-muted);
  margin-top: 0.5rem;
}

.code-cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(380px, 1fr));
  gap: 1.25rem;
  margin-top: 2rem;
}

.code-card h3 {
  margin-bottom: 0.6rem;
}

.data-table {
  width: 100%;
  margin-top: 2rem;
  border-collapse: collapse;
}

.data-table th,
.data-table td {
  padding: 0.7rem 0.9rem;
  border-bottom: 1px solid var(--color-border);
  text-align: left;
}

.data-table th {
  color: var(--color-muted);
  font-weight: 600;
}

/* Footer */
.site-footer {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 2rem 1.5rem 3rem;
  border-top: 1px solid var(--color-border);
  color: var(--color-muted);
  font-size: 0.9rem;
}

@media (max-width: 800px) {
  .hero {
    grid-template-columns: 1fr;
    padding-top: 3rem;
  }

  .site-nav {
    display: none;
  }
}
"#;

const DEFAULT_JS: &str = r#"// Copy buttons for code blocks
document.querySelectorAll('pre > code').forEach((code) => {
  const button = document.createElement('button');
  button.className = 'copy-button';
  button.type = 'button';
  button.textContent = 'Copy';
  button.addEventListener('click', async () => {
    try {
      await navigator.clipboard.writeText(code.textContent);
      button.textContent = 'Copied';
    } catch (e) {
      button.textContent = 'Failed';
    }
    setTimeout(() => { button.textContent = 'Copy'; }, 1500);
  });
  code.parentElement.appendChild(button);
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minifies_default_css() {
        let css = AssetPipeline::generate_css();
        let minified = AssetPipeline::minify_css(&css).unwrap();

        assert!(minified.len() < css.len());
        assert!(minified.contains(".feature-grid"));
    }

    #[test]
    fn script_adds_copy_buttons() {
        assert!(AssetPipeline::generate_js().contains("copy-button"));
    }
}
