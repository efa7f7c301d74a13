//! Resource records and query state for the hub API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three kinds of resources the hub serves, and the tab set of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Datasets,
    Tools,
    Snippets,
}

impl Category {
    /// Tab caption. Snippets read "Code" in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Datasets => "Datasets",
            Category::Tools => "Tools",
            Category::Snippets => "Code",
        }
    }

    /// Path segment under `/api/`.
    pub fn api_segment(&self) -> &'static str {
        match self {
            Category::Datasets => "datasets",
            Category::Tools => "tools",
            Category::Snippets => "snippets",
        }
    }

    /// All categories, in tab order.
    pub fn variants() -> &'static [Category] {
        &[Category::Datasets, Category::Tools, Category::Snippets]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_segment())
    }
}

/// One record as returned by the backend.
///
/// Everything but the identifier is optional; which of the variant fields
/// are populated depends on the category the record came from. Unknown
/// fields are ignored so the client keeps working when the backend schema
/// grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Dataset source address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Tool repository address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    /// Tool homepage address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,
    /// Snippet language tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Snippet source text, rendered verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Resource {
    /// Card heading: `name` over `title`, with a neutral fallback when a
    /// record carries neither.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("Untitled")
    }
}

/// The browse selection: active category plus free-text and tag filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceQuery {
    pub category: Category,
    pub query: String,
    pub tag: String,
}

impl ResourceQuery {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Whether any text filter is set.
    pub fn has_filters(&self) -> bool {
        !self.query.is_empty() || !self.tag.is_empty()
    }
}
