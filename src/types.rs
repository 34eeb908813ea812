//! Shared types passed between the outline driver and layout strategies.
//!
//! [`ContentPage`] and [`LevelDescriptor`] are built per visit by the driver
//! and dropped once the strategy call returns. [`CategoryMetadata`] is what
//! ends up on disk in each level directory's `_category_.json`.

use serde::{Deserialize, Serialize};

/// A leaf of the outline: one page of rendered content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPage {
    /// Stable identifier from the content source.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Explicit slug, if the author set one. Takes precedence over the
    /// title for the file name and over the id for link paths.
    pub slug: Option<String>,
    /// Accumulated logical path of the ancestor levels, assigned by the
    /// driver before the page is resolved. Empty for top-level pages.
    pub layout_context: String,
}

impl ContentPage {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: None,
            layout_context: String::new(),
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_layout_context(mut self, context: impl Into<String>) -> Self {
        self.layout_context = context.into();
        self
    }

    /// Explicit slug without its leading `/`, when set and non-empty.
    pub fn explicit_slug(&self) -> Option<&str> {
        self.slug
            .as_deref()
            .map(|s| s.trim_start_matches('/'))
            .filter(|s| !s.is_empty())
    }

    /// Raw file-name candidate: the explicit slug, else the title.
    ///
    /// Not sanitized; strategies run it through
    /// [`page_stem`](crate::paths::page_stem).
    pub fn name_for_file(&self) -> &str {
        self.explicit_slug().unwrap_or(&self.title)
    }
}

/// An interior node of the outline at the moment it is visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDescriptor {
    /// Position among siblings. Need not be contiguous.
    pub order: u32,
    /// Display label, stored verbatim in the sidecar.
    pub label: String,
    /// Logical context of the parent level; empty at the top.
    pub parent_context: String,
}

impl LevelDescriptor {
    pub fn new(order: u32, parent_context: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            order,
            label: label.into(),
            parent_context: parent_context.into(),
        }
    }
}

/// Contents of a level directory's `_category_.json`.
///
/// Only `position` and `label` are always present. The rest come from the
/// `[category]` config table and are omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMetadata {
    pub position: u32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<CategoryLink>,
}

impl CategoryMetadata {
    pub fn new(position: u32, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            collapsible: None,
            collapsed: None,
            class_name: None,
            link: None,
        }
    }
}

/// What clicking a category in the sidebar opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryLink {
    /// An auto-generated index of the category's children.
    GeneratedIndex {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// An existing doc, by id.
    Doc { id: String },
}
