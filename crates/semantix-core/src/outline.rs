//! Tolerant outline tree over model-produced segments
//!
//! Segments carry both a `parent` link and a `children` list, and the model
//! fills both independently. Reconciliation rules:
//!
//! 1. Duplicate ids: the first occurrence wins; later ones are ignored.
//! 2. A segment's own `parent` is used when it names another known segment.
//! 3. Otherwise the first segment listing it in `children` adopts it.
//! 4. Otherwise, or when the link would close a cycle, it is a root.
//!
//! Children keep input order and appear once. Dangling parent ids and
//! duplicates are recorded, never fatal.

use crate::types::Segment;
use std::collections::HashMap;

/// A `parent` id that names no segment in the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingParent {
    /// Segment carrying the bad link
    pub segment_id: String,
    /// Id it pointed at
    pub parent_id: String,
}

#[derive(Debug)]
struct OutlineNode<'a> {
    segment: &'a Segment,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Reconciled segment hierarchy
#[derive(Debug)]
pub struct DocumentOutline<'a> {
    nodes: Vec<OutlineNode<'a>>,
    index: HashMap<&'a str, usize>,
    roots: Vec<usize>,
    dangling: Vec<DanglingParent>,
    duplicates: Vec<String>,
}

impl<'a> DocumentOutline<'a> {
    /// Build the outline from a flat segment list
    #[must_use]
    pub fn from_segments(segments: &'a [Segment]) -> Self {
        let mut nodes = Vec::with_capacity(segments.len());
        let mut index = HashMap::with_capacity(segments.len());
        let mut duplicates = Vec::new();

        for segment in segments {
            if index.contains_key(segment.id.as_str()) {
                duplicates.push(segment.id.clone());
                continue;
            }
            index.insert(segment.id.as_str(), nodes.len());
            nodes.push(OutlineNode {
                segment,
                parent: None,
                children: Vec::new(),
            });
        }

        // First node listing a child claims it.
        let mut claimed_by: HashMap<usize, usize> = HashMap::new();
        for (owner, node) in nodes.iter().enumerate() {
            for child_id in &node.segment.children {
                if let Some(&child) = index.get(child_id.as_str()) {
                    if child != owner {
                        claimed_by.entry(child).or_insert(owner);
                    }
                }
            }
        }

        let mut dangling = Vec::new();
        let mut parents: Vec<Option<usize>> = vec![None; nodes.len()];

        for (idx, node) in nodes.iter().enumerate() {
            let declared = match node.segment.parent.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(parent_id) => match index.get(parent_id) {
                    Some(&p) if p != idx => Some(p),
                    Some(_) => None,
                    None => {
                        dangling.push(DanglingParent {
                            segment_id: node.segment.id.clone(),
                            parent_id: parent_id.to_string(),
                        });
                        None
                    }
                },
            };

            let candidates = [declared, claimed_by.get(&idx).copied()];
            parents[idx] = candidates
                .into_iter()
                .flatten()
                .find(|&p| !reaches(&parents, p, idx));
        }

        let mut roots = Vec::new();
        for (idx, parent) in parents.iter().enumerate() {
            nodes[idx].parent = *parent;
            match parent {
                Some(p) => nodes[*p].children.push(idx),
                None => roots.push(idx),
            }
        }

        Self {
            nodes,
            index,
            roots,
            dangling,
            duplicates,
        }
    }

    /// Number of distinct segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when there are no segments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a segment by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Segment> {
        self.index.get(id).map(|&i| self.nodes[i].segment)
    }

    /// Top-level segments in input order
    pub fn roots(&self) -> impl Iterator<Item = &'a Segment> + '_ {
        self.roots.iter().map(|&i| self.nodes[i].segment)
    }

    /// Children of `id` in input order (empty for unknown ids)
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<&'a Segment> {
        self.index
            .get(id)
            .map(|&i| {
                self.nodes[i]
                    .children
                    .iter()
                    .map(|&c| self.nodes[c].segment)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Effective parent of `id`
    #[must_use]
    pub fn parent_of(&self, id: &str) -> Option<&'a Segment> {
        let &i = self.index.get(id)?;
        self.nodes[i].parent.map(|p| self.nodes[p].segment)
    }

    /// Distance from the root, 0 for top-level segments
    #[must_use]
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        let &i = self.index.get(id)?;
        let mut depth = 0;
        let mut current = self.nodes[i].parent;
        while let Some(p) = current {
            depth += 1;
            current = self.nodes[p].parent;
        }
        Some(depth)
    }

    /// Depth-first pre-order walk as `(depth, segment)`
    #[must_use]
    pub fn walk(&self) -> Vec<(usize, &'a Segment)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, usize)> = self.roots.iter().rev().map(|&r| (0, r)).collect();

        while let Some((depth, idx)) = stack.pop() {
            let node = &self.nodes[idx];
            out.push((depth, node.segment));
            stack.extend(node.children.iter().rev().map(|&c| (depth + 1, c)));
        }
        out
    }

    /// Parent links that named no known segment
    #[inline]
    #[must_use]
    pub fn dangling_parents(&self) -> &[DanglingParent] {
        &self.dangling
    }

    /// Ids that appeared more than once (later copies ignored)
    #[inline]
    #[must_use]
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicates
    }
}

/// True if following assigned parents from `from` arrives at `target`
fn reaches(parents: &[Option<usize>], from: usize, target: usize) -> bool {
    let mut current = Some(from);
    let mut steps = 0;
    while let Some(idx) = current {
        if idx == target {
            return true;
        }
        steps += 1;
        if steps > parents.len() {
            return true;
        }
        current = parents[idx];
    }
    false
}
