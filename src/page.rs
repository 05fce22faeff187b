//! Page data as supplied by the content/link provider, and the annotated
//! order handed to a diagram renderer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─── PageData ────────────────────────────────────────────────────────────────

/// One content page. Only `id` and `links` matter to the optimizer;
/// `title` is carried through for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Ids of related pages. Treated as undirected when counting crossings.
    #[serde(default)]
    pub links: Vec<String>,
}

impl PageData {
    pub fn new(id: impl Into<String>, title: impl Into<String>, links: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            links: links.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// A page whose title is its id.
    pub fn bare(id: &str, links: &[&str]) -> Self {
        Self::new(id, id, links)
    }
}

// ─── RankedPage ──────────────────────────────────────────────────────────────

/// A page annotated with its zero-based position on the circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPage {
    pub id: String,
    pub title: String,
    pub links: Vec<String>,
    pub display_order: usize,
}

/// Tag every page with its position in `order`.
pub fn annotate_display_order(order: &[PageData]) -> Vec<RankedPage> {
    order
        .iter()
        .enumerate()
        .map(|(display_order, page)| RankedPage {
            id: page.id.clone(),
            title: page.title.clone(),
            links: page.links.clone(),
            display_order,
        })
        .collect()
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a JSON array of `{ id, title, links }` objects.
///
/// Ids must be unique. Links to unknown ids are kept as-is; the metric
/// engine ignores them.
pub fn parse_pages(src: &str) -> Result<Vec<PageData>> {
    let pages: Vec<PageData> = serde_json::from_str(src)?;
    let mut seen: HashSet<&str> = HashSet::with_capacity(pages.len());
    for page in &pages {
        if !seen.insert(page.id.as_str()) {
            return Err(Error::DuplicatePageId {
                id: page.id.clone(),
            });
        }
    }
    Ok(pages)
}

#[cfg(test)]
#[path = "../tests/rust/test_page.rs"]
mod tests;
