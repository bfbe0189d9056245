//! Content sections and their nested items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A content block on the page, tagged by `kind`.
///
/// New kinds may be added in later minor versions. Existing variants keep
/// their field sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Section {
    /// Grid of short feature blurbs
    Features(FeaturesSection),
    /// Gallery of code samples
    CodeCards(CodeCardsSection),
    /// Table with fixed column headers
    DataTable(DataTableSection),
}

impl Section {
    /// Discriminant of this section.
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Features(_) => SectionKind::Features,
            Self::CodeCards(_) => SectionKind::CodeCards,
            Self::DataTable(_) => SectionKind::DataTable,
        }
    }

    /// In-page anchor id.
    pub fn id(&self) -> &str {
        match self {
            Self::Features(s) => &s.id,
            Self::CodeCards(s) => &s.id,
            Self::DataTable(s) => &s.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Features(s) => &s.title,
            Self::CodeCards(s) => &s.title,
            Self::DataTable(s) => &s.title,
        }
    }
}

/// The closed set of recognized section tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SectionKind {
    Features,
    CodeCards,
    DataTable,
}

impl SectionKind {
    /// Every recognized kind, in declaration order.
    pub const ALL: [SectionKind; 3] = [Self::Features, Self::CodeCards, Self::DataTable];

    /// The `kind` tag as it appears in site files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::CodeCards => "code-cards",
            Self::DataTable => "data-table",
        }
    }

    /// Look up a kind by its tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Keys allowed on a section of this kind, tag included.
    pub(crate) fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Features => &["kind", "id", "title", "subtitle", "features"],
            Self::CodeCards => &["kind", "id", "title", "cards"],
            Self::DataTable => &["kind", "id", "title", "subtitle", "columns", "rows"],
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("unknown section kind `{}`", s))
    }
}

/// `kind: features`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub features: Vec<Feature>,
}

/// A single feature blurb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub desc: String,
}

/// `kind: code-cards`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeCardsSection {
    pub id: String,
    pub title: String,
    pub cards: Vec<CodeCard>,
}

/// A titled code sample. `code` may span multiple lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeCard {
    pub title: String,
    pub code: String,
}

/// `kind: data-table`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub columns: Vec<String>,
    /// Each row holds exactly `columns.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl From<FeaturesSection> for Section {
    fn from(section: FeaturesSection) -> Self {
        Self::Features(section)
    }
}

impl From<CodeCardsSection> for Section {
    fn from(section: CodeCardsSection) -> Self {
        Self::CodeCards(section)
    }
}

impl From<DataTableSection> for Section {
    fn from(section: DataTableSection) -> Self {
        Self::DataTable(section)
    }
}
