//! Validator for untyped site configuration candidates.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. root string fields, repository URL, footer markup
//! 2. hero block, CTAs and previews
//! 3. section shape: recognized `kind`, unique non-empty `id`, variant fields
//! 4. data-table row arity
//! 5. nested feature and code-card items are non-empty

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use url::Url;

use crate::error::ValidationError;
use crate::model::{RawSiteConfig, SiteConfig};
use crate::path::FieldPath;
use crate::section::SectionKind;

type Object = Map<String, Value>;

const ROOT_TEXT_FIELDS: [&str; 6] = [
    "title",
    "description",
    "logoBadge",
    "brandName",
    "repoUrl",
    "footerText",
];

const ROOT_FIELDS: [&str; 8] = [
    "title",
    "description",
    "logoBadge",
    "brandName",
    "repoUrl",
    "footerText",
    "hero",
    "sections",
];

const HERO_TEXT_FIELDS: [&str; 4] = ["badge", "headline", "headlineAccent", "description"];

const HERO_FIELDS: [&str; 7] = [
    "badge",
    "headline",
    "headlineAccent",
    "description",
    "primaryCta",
    "secondaryCta",
    "previews",
];

const CTA_FIELDS: [&str; 2] = ["href", "label"];
const PREVIEW_FIELDS: [&str; 2] = ["label", "code"];
const FEATURE_FIELDS: [&str; 2] = ["title", "desc"];
const CODE_CARD_FIELDS: [&str; 2] = ["title", "code"];

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("valid tag pattern"));
static LINK_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^<a(\s[^<>]*)?>$").expect("valid link pattern"));
static LINK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^</a\s*>$").expect("valid link pattern"));
static LINK_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s+([A-Za-z][A-Za-z-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid attribute pattern")
});

/// Attributes a footer link may carry.
const LINK_ATTRIBUTES: [&str; 5] = ["href", "title", "target", "rel", "style"];

/// A section that passed the shape check.
struct CheckedSection<'a> {
    path: FieldPath,
    kind: SectionKind,
    body: &'a Object,
}

/// Validate a candidate value and return it as a typed [`SiteConfig`].
///
/// The returned error names the first offending field.
pub fn validate(candidate: &Value) -> Result<SiteConfig, ValidationError> {
    let root = FieldPath::root();
    let obj = candidate
        .as_object()
        .ok_or_else(|| ValidationError::WrongType {
            path: root.clone(),
            expected: "an object",
        })?;

    check_root_fields(obj, &root)?;
    check_hero(obj, &root)?;
    let sections = check_sections(obj, &root)?;
    check_table_arity(&sections)?;
    check_section_items(&sections)?;

    let raw: RawSiteConfig =
        serde_json::from_value(candidate.clone()).map_err(|e| ValidationError::Decode {
            path: root,
            message: e.to_string(),
        })?;

    tracing::debug!(sections = sections.len(), "site configuration validated");
    Ok(raw.into())
}

fn check_root_fields(obj: &Object, path: &FieldPath) -> Result<(), ValidationError> {
    for key in ROOT_TEXT_FIELDS {
        required_text(obj, key, path)?;
    }

    check_repo_url(obj, path)?;

    let footer = required_text(obj, "footerText", path)?;
    check_inline_markup(footer, &path.field("footerText"))?;

    reject_unknown(obj, &ROOT_FIELDS, path)
}

fn check_repo_url(obj: &Object, path: &FieldPath) -> Result<(), ValidationError> {
    let value = required_text(obj, "repoUrl", path)?;
    let invalid = |reason: String| ValidationError::InvalidUrl {
        path: path.field("repoUrl"),
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }

    Ok(())
}

/// Allow `<a ...>` and `</a>` only. Opening tags may carry the attributes in
/// [`LINK_ATTRIBUTES`], and `href` must pass [`check_link_target`]. Character
/// references inside a tag and any stray `<` are rejected.
pub(crate) fn check_inline_markup(text: &str, path: &FieldPath) -> Result<(), ValidationError> {
    for tag in TAG.find_iter(text) {
        let fragment = tag.as_str();
        let is_link = LINK_CLOSE.is_match(fragment) || is_safe_link_open(fragment);

        if !is_link {
            return Err(ValidationError::UnsafeMarkup {
                path: path.clone(),
                fragment: fragment.to_string(),
            });
        }
    }

    let stripped = TAG.replace_all(text, "");
    if let Some(pos) = stripped.find('<') {
        let fragment: String = stripped[pos..].chars().take(16).collect();
        return Err(ValidationError::UnsafeMarkup {
            path: path.clone(),
            fragment,
        });
    }

    Ok(())
}

fn is_safe_link_open(tag: &str) -> bool {
    if !LINK_OPEN.is_match(tag) || tag.contains('&') {
        return false;
    }

    // Attributes must be whitespace separated, so `"x"/onclick` never parses.
    let mut rest = &tag[2..tag.len() - 1];
    while let Some(caps) = LINK_ATTR.captures(rest) {
        let name = caps[1].to_ascii_lowercase();
        if !LINK_ATTRIBUTES.contains(&name.as_str()) {
            return false;
        }
        if name == "href" {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str());
            if check_link_target(value).is_err() {
                return false;
            }
        }
        rest = &rest[caps[0].len()..];
    }

    rest.trim().is_empty()
}

/// Accept `http`, `https` and `mailto` URLs, plus relative paths and
/// `#fragment` targets.
pub(crate) fn check_link_target(value: &str) -> Result<(), String> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https" | "mailto") => Ok(()),
        Ok(url) => Err(format!("unsupported scheme `{}`", url.scheme())),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn check_hero(obj: &Object, root: &FieldPath) -> Result<(), ValidationError> {
    let path = root.field("hero");
    let hero = required_object(obj, "hero", root)?;

    for key in HERO_TEXT_FIELDS {
        required_text(hero, key, &path)?;
    }

    for key in ["primaryCta", "secondaryCta"] {
        let cta_path = path.field(key);
        let cta = required_object(hero, key, &path)?;
        for field in CTA_FIELDS {
            required_text(cta, field, &cta_path)?;
        }
        let href = required_text(cta, "href", &cta_path)?;
        check_link_target(href).map_err(|reason| ValidationError::InvalidUrl {
            path: cta_path.field("href"),
            value: href.to_string(),
            reason,
        })?;
        reject_unknown(cta, &CTA_FIELDS, &cta_path)?;
    }

    let previews_path = path.field("previews");
    for (i, preview) in required_array(hero, "previews", &path)?.iter().enumerate() {
        let preview_path = previews_path.index(i);
        let preview = preview
            .as_object()
            .ok_or_else(|| ValidationError::WrongType {
                path: preview_path.clone(),
                expected: "an object",
            })?;
        for field in PREVIEW_FIELDS {
            required_text(preview, field, &preview_path)?;
        }
        reject_unknown(preview, &PREVIEW_FIELDS, &preview_path)?;
    }

    reject_unknown(hero, &HERO_FIELDS, &path)
}

fn check_sections<'a>(
    obj: &'a Object,
    root: &FieldPath,
) -> Result<Vec<CheckedSection<'a>>, ValidationError> {
    let sections_path = root.field("sections");
    let sections = required_array(obj, "sections", root)?;

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut checked = Vec::with_capacity(sections.len());

    for (i, section) in sections.iter().enumerate() {
        let path = sections_path.index(i);
        let body = section
            .as_object()
            .ok_or_else(|| ValidationError::malformed(path.clone(), "section must be an object"))?;

        let kind = section_kind(body, &path)?;

        let id = section_text(body, "id", &path)?;
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyRequiredField {
                path: path.field("id"),
            });
        }
        if let Some(&first) = seen.get(id) {
            return Err(ValidationError::DuplicateSectionId {
                path: path.field("id"),
                id: id.to_string(),
                first,
            });
        }
        seen.insert(id, i);

        if section_text(body, "title", &path)?.trim().is_empty() {
            return Err(ValidationError::EmptyRequiredField {
                path: path.field("title"),
            });
        }

        check_variant_shape(body, kind, &path)?;
        reject_unknown(body, kind.fields(), &path)?;

        checked.push(CheckedSection { path, kind, body });
    }

    Ok(checked)
}

fn section_kind(body: &Object, path: &FieldPath) -> Result<SectionKind, ValidationError> {
    let kind_path = path.field("kind");
    let tag = match body.get("kind") {
        None => return Err(ValidationError::malformed(kind_path, "missing `kind`")),
        Some(Value::String(tag)) => tag,
        Some(_) => {
            return Err(ValidationError::malformed(
                kind_path,
                "`kind` must be a string",
            ))
        }
    };

    SectionKind::from_tag(tag).ok_or_else(|| {
        let known: Vec<&str> = SectionKind::ALL.iter().map(|k| k.as_str()).collect();
        ValidationError::malformed(
            kind_path,
            format!(
                "unrecognized kind `{}`, expected one of {}",
                tag,
                known.join(", ")
            ),
        )
    })
}

fn check_variant_shape(
    body: &Object,
    kind: SectionKind,
    path: &FieldPath,
) -> Result<(), ValidationError> {
    match kind {
        SectionKind::Features => {
            optional_section_text(body, "subtitle", path)?;
            check_items_shape(body, "features", &FEATURE_FIELDS, path)
        }
        SectionKind::CodeCards => check_items_shape(body, "cards", &CODE_CARD_FIELDS, path),
        SectionKind::DataTable => {
            optional_section_text(body, "subtitle", path)?;

            let columns_path = path.field("columns");
            for (i, column) in section_array(body, "columns", path)?.iter().enumerate() {
                if !column.is_string() {
                    return Err(ValidationError::malformed(
                        columns_path.index(i),
                        "column header must be a string",
                    ));
                }
            }

            let rows_path = path.field("rows");
            for (i, row) in section_array(body, "rows", path)?.iter().enumerate() {
                let row_path = rows_path.index(i);
                let cells = row
                    .as_array()
                    .ok_or_else(|| ValidationError::malformed(row_path.clone(), "row must be an array"))?;
                if let Some(j) = cells.iter().position(|cell| !cell.is_string()) {
                    return Err(ValidationError::malformed(
                        row_path.index(j),
                        "cell must be a string",
                    ));
                }
            }

            Ok(())
        }
    }
}

fn check_items_shape(
    body: &Object,
    key: &str,
    fields: &[&str],
    path: &FieldPath,
) -> Result<(), ValidationError> {
    let items_path = path.field(key);
    for (i, item) in section_array(body, key, path)?.iter().enumerate() {
        let item_path = items_path.index(i);
        let item = item
            .as_object()
            .ok_or_else(|| ValidationError::malformed(item_path.clone(), "item must be an object"))?;
        for field in fields {
            section_text(item, field, &item_path)?;
        }
        reject_unknown(item, fields, &item_path)?;
    }
    Ok(())
}

fn check_table_arity(sections: &[CheckedSection<'_>]) -> Result<(), ValidationError> {
    for section in sections.iter().filter(|s| s.kind == SectionKind::DataTable) {
        let columns = section
            .body
            .get("columns")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        let rows_path = section.path.field("rows");

        let rows = section.body.get("rows").and_then(Value::as_array);
        let rows = rows.into_iter().flatten();
        for (i, row) in rows.enumerate() {
            let len = row.as_array().map_or(0, Vec::len);
            if len != columns {
                return Err(ValidationError::TableRowArityMismatch {
                    path: rows_path.index(i),
                    len,
                    columns,
                });
            }
        }
    }
    Ok(())
}

fn check_section_items(sections: &[CheckedSection<'_>]) -> Result<(), ValidationError> {
    for section in sections {
        let (key, fields) = match section.kind {
            SectionKind::Features => ("features", &FEATURE_FIELDS),
            SectionKind::CodeCards => ("cards", &CODE_CARD_FIELDS),
            SectionKind::DataTable => continue,
        };

        let items_path = section.path.field(key);
        let items = section.body.get(key).and_then(Value::as_array);
        let items = items.into_iter().flatten();
        for (i, item) in items.enumerate() {
            for field in fields {
                let empty = item[*field].as_str().map_or(true, |s| s.trim().is_empty());
                if empty {
                    return Err(ValidationError::EmptyRequiredField {
                        path: items_path.index(i).field(field),
                    });
                }
            }
        }
    }
    Ok(())
}

fn required_text<'a>(
    obj: &'a Object,
    key: &str,
    path: &FieldPath,
) -> Result<&'a str, ValidationError> {
    let field = path.field(key);
    match obj.get(key) {
        None => Err(ValidationError::MissingField { path: field }),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(ValidationError::EmptyRequiredField { path: field })
        }
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::WrongType {
            path: field,
            expected: "a string",
        }),
    }
}

fn required_object<'a>(
    obj: &'a Object,
    key: &str,
    path: &FieldPath,
) -> Result<&'a Object, ValidationError> {
    let field = path.field(key);
    match obj.get(key) {
        None => Err(ValidationError::MissingField { path: field }),
        Some(Value::Object(o)) => Ok(o),
        Some(_) => Err(ValidationError::WrongType {
            path: field,
            expected: "an object",
        }),
    }
}

fn required_array<'a>(
    obj: &'a Object,
    key: &str,
    path: &FieldPath,
) -> Result<&'a Vec<Value>, ValidationError> {
    let field = path.field(key);
    match obj.get(key) {
        None => Err(ValidationError::MissingField { path: field }),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ValidationError::WrongType {
            path: field,
            expected: "an array",
        }),
    }
}

/// Section fields report shape problems as malformed sections.
fn section_text<'a>(
    obj: &'a Object,
    key: &str,
    path: &FieldPath,
) -> Result<&'a str, ValidationError> {
    let field = path.field(key);
    match obj.get(key) {
        None => Err(ValidationError::malformed(field, format!("missing `{}`", key))),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::malformed(
            field,
            format!("`{}` must be a string", key),
        )),
    }
}

fn optional_section_text(obj: &Object, key: &str, path: &FieldPath) -> Result<(), ValidationError> {
    match obj.get(key) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(ValidationError::malformed(
            path.field(key),
            format!("`{}` must be a string", key),
        )),
    }
}

fn section_array<'a>(
    obj: &'a Object,
    key: &str,
    path: &FieldPath,
) -> Result<&'a Vec<Value>, ValidationError> {
    let field = path.field(key);
    match obj.get(key) {
        None => Err(ValidationError::malformed(field, format!("missing `{}`", key))),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ValidationError::malformed(
            field,
            format!("`{}` must be an array", key),
        )),
    }
}

fn reject_unknown(obj: &Object, allowed: &[&str], path: &FieldPath) -> Result<(), ValidationError> {
    match obj.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(ValidationError::UnknownField {
            path: path.field(key),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::example;

    fn example_value() -> Value {
        serde_json::to_value(example::nexus_router()).unwrap()
    }

    #[test]
    fn accepts_example_configuration() {
        let config = validate(&example_value()).unwrap();
        assert_eq!(config, example::nexus_router());
    }

    #[test]
    fn rejects_short_table_row() {
        let mut value = example_value();
        value["sections"][2]["rows"][1] = json!(["adapter-stdout", "Debug logging to stdout"]);

        let err = validate(&value).unwrap_err();

        assert_eq!(
            err,
            ValidationError::TableRowArityMismatch {
                path: FieldPath::from("sections[2].rows[1]"),
                len: 2,
                columns: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "sections[2].rows[1]: length 2 != columns length 3"
        );
    }

    #[test]
    fn rejects_duplicate_section_ids() {
        let mut value = example_value();
        value["sections"][3]["id"] = json!("features");

        let err = validate(&value).unwrap_err();

        assert_eq!(
            err,
            ValidationError::DuplicateSectionId {
                path: FieldPath::from("sections[3].id"),
                id: "features".to_string(),
                first: 0,
            }
        );
    }

    #[test]
    fn rejects_unknown_kind() {
        let mut value = example_value();
        value["sections"]
            .as_array_mut()
            .unwrap()
            .push(json!({ "kind": "testimonial", "id": "quotes", "title": "Quotes" }));

        let err = validate(&value).unwrap_err();

        assert!(matches!(err, ValidationError::MalformedSection { .. }));
        assert_eq!(err.path().as_str(), "sections[4].kind");
        assert!(err.to_string().contains("testimonial"));
    }

    #[test]
    fn rejects_missing_variant_field() {
        let mut value = example_value();
        value["sections"][1].as_object_mut().unwrap().remove("cards");

        let err = validate(&value).unwrap_err();

        assert!(matches!(err, ValidationError::MalformedSection { .. }));
        assert_eq!(err.path().as_str(), "sections[1].cards");
    }

    #[test]
    fn rejects_fields_from_another_variant() {
        let mut value = example_value();
        value["sections"][0]["columns"] = json!(["A"]);

        let err = validate(&value).unwrap_err();

        assert_eq!(
            err,
            ValidationError::UnknownField {
                path: FieldPath::from("sections[0].columns")
            }
        );
    }

    #[test]
    fn rejects_empty_root_field() {
        let mut value = example_value();
        value["logoBadge"] = json!("  ");

        let err = validate(&value).unwrap_err();

        assert_eq!(
            err,
            ValidationError::EmptyRequiredField {
                path: FieldPath::from("logoBadge")
            }
        );
    }

    #[test]
    fn root_fields_checked_before_sections() {
        let mut value = example_value();
        value["title"] = json!("");
        value["sections"][2]["rows"][0] = json!([]);

        let err = validate(&value).unwrap_err();

        assert_eq!(err.path().as_str(), "title");
    }

    #[test]
    fn rejects_empty_cta_label() {
        let mut value = example_value();
        value["hero"]["secondaryCta"]["label"] = json!("");

        let err = validate(&value).unwrap_err();

        assert_eq!(err.path().as_str(), "hero.secondaryCta.label");
    }

    #[test]
    fn rejects_missing_hero() {
        let mut value = example_value();
        value.as_object_mut().unwrap().remove("hero");

        let err = validate(&value).unwrap_err();

        assert_eq!(
            err,
            ValidationError::MissingField {
                path: FieldPath::from("hero")
            }
        );
    }

    #[test]
    fn rejects_empty_feature_description() {
        let mut value = example_value();
        value["sections"][3]["features"][1]["desc"] = json!("");

        let err = validate(&value).unwrap_err();

        assert_eq!(
            err,
            ValidationError::EmptyRequiredField {
                path: FieldPath::from("sections[3].features[1].desc")
            }
        );
    }

    #[test]
    fn arity_checked_before_nested_items() {
        let mut value = example_value();
        value["sections"][0]["features"][0]["title"] = json!("");
        value["sections"][2]["rows"][0] = json!(["only one"]);

        let err = validate(&value).unwrap_err();

        assert!(matches!(err, ValidationError::TableRowArityMismatch { .. }));
    }

    #[test]
    fn allows_empty_nested_sequences() {
        let mut value = example_value();
        value["sections"][0]["features"] = json!([]);
        value["sections"][1]["cards"] = json!([]);
        value["sections"][2]["rows"] = json!([]);

        let config = validate(&value).unwrap();

        assert_eq!(config.sections().len(), 4);
    }

    #[test]
    fn rejects_non_http_repo_url() {
        let mut value = example_value();
        value["repoUrl"] = json!("ftp://example.com/repo");

        let err = validate(&value).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { .. }));

        value["repoUrl"] = json!("not a url");
        let err = validate(&value).unwrap_err();
        assert_eq!(err.path().as_str(), "repoUrl");
    }

    #[test]
    fn footer_allows_inline_links_only() {
        let path = FieldPath::from("footerText");

        assert!(check_inline_markup(
            r#"MIT — by <a href="https://example.com" style="color:red">us</a>"#,
            &path
        )
        .is_ok());
        assert!(check_inline_markup("plain text", &path).is_ok());

        let err = check_inline_markup("<script>alert(1)</script>", &path).unwrap_err();
        assert!(matches!(err, ValidationError::UnsafeMarkup { fragment, .. } if fragment == "<script>"));

        assert!(check_inline_markup(r#"<a href="x" onclick="y">z</a>"#, &path).is_err());
        assert!(check_inline_markup(r#"<a href="javascript:void(0)">z</a>"#, &path).is_err());
        assert!(check_inline_markup("<a href=\"x\"", &path).is_err());
    }

    #[test]
    fn footer_rejects_disguised_handlers() {
        let path = FieldPath::from("footerText");

        for markup in [
            r#"<a href="x"/onclick="alert(1)">z</a>"#,
            r#"<a href="x"onclick="alert(1)">z</a>"#,
            r#"<a href="&#106;avascript:alert(1)">z</a>"#,
            r#"<a href="  JavaScript:alert(1)">z</a>"#,
            r#"<a href=x onmouseover=alert(1)>z</a>"#,
            r#"<a data-x="1">z</a>"#,
        ] {
            let err = check_inline_markup(markup, &path).unwrap_err();
            assert!(
                matches!(err, ValidationError::UnsafeMarkup { .. }),
                "{markup} should be rejected"
            );
        }

        for markup in [
            r#"<a href="/docs" target="_blank" rel="noopener">docs</a>"#,
            r#"<a href='#usage' title="Usage">usage</a>"#,
            r#"<A HREF="mailto:team@example.com">mail</A>"#,
        ] {
            assert!(check_inline_markup(markup, &path).is_ok(), "{markup} should pass");
        }
    }

    #[test]
    fn rejects_scripted_cta_href() {
        let mut value = example_value();
        value["hero"]["primaryCta"]["href"] = json!("javascript:alert(document.cookie)");

        let err = validate(&value).unwrap_err();

        assert_eq!(err.path().as_str(), "hero.primaryCta.href");
        assert!(matches!(err, ValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn accepts_relative_and_anchor_cta_hrefs() {
        let mut value = example_value();
        value["hero"]["primaryCta"]["href"] = json!("#usage");
        value["hero"]["secondaryCta"]["href"] = json!("docs/getting-started");
        assert!(validate(&value).is_ok());

        value["hero"]["secondaryCta"]["href"] = json!("https://example.com/docs");
        assert!(validate(&value).is_ok());
    }

    #[test]
    fn rejects_non_object_root() {
        let err = validate(&json!(["not", "a", "site"])).unwrap_err();
        assert!(err.path().is_root());
    }
}
