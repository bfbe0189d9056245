//! The nexus-router marketing site.

use crate::model::{Cta, HeroBlock, Preview, SiteConfig};
use crate::section::{
    CodeCard, CodeCardsSection, DataTableSection, Feature, FeaturesSection,
};

/// Site configuration for nexus-router.
pub fn nexus_router() -> SiteConfig {
    SiteConfig::builder()
        .title("nexus-router")
        .description(
            "Event-sourced MCP router with provenance + integrity. Every tool call is logged, \
             every run is replayable, every result is verifiable.",
        )
        .logo_badge("NR")
        .brand_name("nexus-router")
        .repo_url("https://github.com/mcp-tool-shop-org/nexus-router")
        .footer_text(
            "MIT Licensed — built by <a href=\"https://github.com/mcp-tool-shop-org\" \
             style=\"color:var(--color-muted);text-decoration:underline\">mcp-tool-shop-org</a>",
        )
        .hero(hero())
        .section(FeaturesSection {
            id: "features".into(),
            title: "Features".into(),
            subtitle: Some("Platform-grade routing with built-in auditability.".into()),
            features: vec![
                feature(
                    "Event log",
                    "Monotonically sequenced event log — every tool call, policy decision, \
                     and result is recorded.",
                ),
                feature(
                    "Provenance bundles",
                    "Every run produces a SHA256-signed provenance bundle. Export, import, \
                     and verify across databases.",
                ),
                feature(
                    "Adapter ecosystem",
                    "Formal adapter contract with validation tools, CI templates, and \
                     auto-generated documentation.",
                ),
            ],
        })
        .section(CodeCardsSection {
            id: "usage".into(),
            title: "Usage".into(),
            cards: vec![
                CodeCard {
                    title: "Basic run".into(),
                    code: BASIC_RUN.into(),
                },
                CodeCard {
                    title: "Export & replay".into(),
                    code: EXPORT_AND_REPLAY.into(),
                },
            ],
        })
        .section(DataTableSection {
            id: "adapters".into(),
            title: "Official Adapters".into(),
            subtitle: Some("Dispatch tool calls to any backend.".into()),
            columns: row(&["Adapter", "Description", "Install"]),
            rows: vec![
                row(&[
                    "adapter-http",
                    "HTTP/REST dispatch",
                    "pip install nexus-router-adapter-http",
                ]),
                row(&[
                    "adapter-stdout",
                    "Debug logging to stdout",
                    "pip install nexus-router-adapter-stdout",
                ]),
            ],
        })
        .section(FeaturesSection {
            id: "guarantees".into(),
            title: "v1.x Stability Guarantees".into(),
            subtitle: Some("Versioned contracts you can depend on.".into()),
            features: vec![
                feature(
                    "Adapter contract",
                    "Factory signatures, manifest schema, and capability sets are stable \
                     across v1.x — breaking changes only in v2.0.",
                ),
                feature(
                    "Event types",
                    "Core event payloads are additive-only. Your existing replay logic will \
                     never break within v1.x.",
                ),
                feature(
                    "Validation IDs",
                    "Check IDs like LOAD_OK, PROTOCOL_FIELDS, and MANIFEST_* are fixed — safe \
                     to match in CI gates.",
                ),
            ],
        })
        .build()
        .expect("built-in nexus-router site configuration is valid")
}

fn hero() -> HeroBlock {
    HeroBlock {
        badge: "Event-sourced".into(),
        headline: "Route tool calls,".into(),
        headline_accent: "prove every result.".into(),
        description: "An event-sourced MCP router where every tool call is logged, every run is \
                      replayable, and every result ships with a SHA256 provenance bundle."
            .into(),
        primary_cta: Cta::new("#usage", "Get started"),
        secondary_cta: Cta::new("#features", "Learn more"),
        previews: vec![
            Preview::new("Install", "pip install nexus-router"),
            Preview::new(
                "Run",
                "resp = run({\"goal\": \"demo\", \"mode\": \"dry_run\",\n  \"plan_override\": []})",
            ),
            Preview::new(
                "Replay",
                "result = replay({\"db_path\": \"nexus.db\",\n  \"run_id\": \"...\"})\nprint(result[\"ok\"])  # True",
            ),
        ],
    }
}

fn feature(title: &str, desc: &str) -> Feature {
    Feature {
        title: title.into(),
        desc: desc.into(),
    }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

const BASIC_RUN: &str = r#"from nexus_router.tool import run

resp = run({
  "goal": "demo",
  "mode": "dry_run",
  "plan_override": []
})

print(resp["run"]["run_id"])
print(resp["summary"])"#;

const EXPORT_AND_REPLAY: &str = r#"from nexus_router.tool import run, export, replay

# Export a run as a portable bundle
bundle = export({
  "db_path": "source.db",
  "run_id": run_id
})["artifact"]

# Replay and verify invariants
result = replay({
  "db_path": "nexus.db",
  "run_id": "..."
})
print(result["ok"])  # True"#;
