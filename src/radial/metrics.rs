//! Metric engine: crossing count and average chord length of a circular order.
//!
//! Pure functions. Positions 0..n are equally spaced on a circle, with n-1
//! adjacent to 0.

use std::collections::HashMap;

use petgraph::graphmap::UnGraphMap;

use crate::page::PageData;

/// Page id → position in the order it was built from.
pub type IndexMap = HashMap<String, usize>;

/// Build the id → position lookup for `order`.
pub fn build_index_map(order: &[PageData]) -> IndexMap {
    order
        .iter()
        .enumerate()
        .map(|(pos, page)| (page.id.clone(), pos))
        .collect()
}

/// Deduplicated, undirected chords of `order` as `(low, high)` positions.
///
/// A→B and B→A collapse into one edge. Self-links and links to ids absent
/// from `index` are dropped.
pub fn chord_edges(order: &[PageData], index: &IndexMap) -> Vec<(usize, usize)> {
    let mut graph: UnGraphMap<usize, ()> = UnGraphMap::new();
    for page in order {
        let Some(&from) = index.get(&page.id) else {
            continue;
        };
        for target in &page.links {
            let Some(&to) = index.get(target) else {
                continue;
            };
            if from != to {
                graph.add_edge(from, to, ());
            }
        }
    }
    graph
        .all_edges()
        .map(|(a, b, _)| (a.min(b), a.max(b)))
        .collect()
}

/// True if the chords `(a, b)` and `(c, d)` cross strictly inside the circle.
///
/// Both edges must be normalized to `low < high`. Chords sharing an endpoint
/// never cross.
pub fn chords_cross(first: (usize, usize), second: (usize, usize)) -> bool {
    let (a, b) = first;
    let (c, d) = second;
    if a == c || a == d || b == c || b == d {
        return false;
    }
    let inside = |p: usize| a < p && p < b;
    inside(c) != inside(d)
}

/// Number of crossing chord pairs in `order`.
pub fn count_crossings(order: &[PageData], index: &IndexMap) -> usize {
    let edges = chord_edges(order, index);
    let mut total = 0usize;
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            if chords_cross(edges[i], edges[j]) {
                total += 1;
            }
        }
    }
    total
}

/// Circular distance between two positions on a circle of `n` slots.
pub fn circular_distance(i: usize, j: usize, n: usize) -> usize {
    let d = i.abs_diff(j);
    d.min(n - d)
}

/// Mean circular distance over every declared link, counted per declaration.
///
/// Self-links and dangling links are skipped. Returns 0.0 when no link
/// qualifies.
pub fn average_link_distance(order: &[PageData], index: &IndexMap) -> f64 {
    let n = order.len();
    let mut total = 0usize;
    let mut count = 0usize;
    for page in order {
        let Some(&from) = index.get(&page.id) else {
            continue;
        };
        for target in &page.links {
            let Some(&to) = index.get(target) else {
                continue;
            };
            if from == to {
                continue;
            }
            total += circular_distance(from, to, n);
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

// ─── Score ───────────────────────────────────────────────────────────────────

/// Lexicographic objective: crossings first, then average chord length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub crossings: usize,
    pub avg_distance: f64,
}

impl Score {
    /// Score `order`, building its index map.
    pub fn of(order: &[PageData]) -> Self {
        let index = build_index_map(order);
        Self {
            crossings: count_crossings(order, &index),
            avg_distance: average_link_distance(order, &index),
        }
    }

    /// Acceptance rule: strictly fewer crossings, or equal crossings and a
    /// strictly shorter average chord.
    pub fn improves_on(&self, current: &Score) -> bool {
        self.crossings < current.crossings
            || (self.crossings == current.crossings && self.avg_distance < current.avg_distance)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_radial_metrics.rs"]
mod tests;
