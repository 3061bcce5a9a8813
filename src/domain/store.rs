//! Arena-based binary search tree keyed by course identifier.
//!
//! Uses generational arena storage with index-based child links, so node
//! lifetimes are managed by the store and a cleared tree frees in one pass.
//! Insert, search, and traversal are all iterative: stack depth never
//! depends on tree height, even for adversarial (pre-sorted) input order.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::course::Course;

/// Tree node owning one course and optional child links.
#[derive(Debug)]
struct CourseNode {
    course: Course,
    left: Option<Index>,
    right: Option<Index>,
}

/// Ordered course container.
///
/// Keys are compared with `str` ordering (byte-wise lexicographic).
/// Placement rule: strictly-less descends left, equal-or-greater descends
/// right, so a duplicate identifier lands in the right subtree as its own
/// node and `search` returns the earliest-inserted match. Tree shape is a
/// pure function of insertion order; no rebalancing, no deletion.
#[derive(Debug, Default)]
pub struct CourseStore {
    arena: Arena<CourseNode>,
    root: Option<Index>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Insert a course, keyed by its identifier. Always succeeds.
    #[instrument(level = "trace", skip(self, course), fields(identifier = %course.identifier))]
    pub fn insert(&mut self, course: Course) {
        let key = course.identifier.clone();
        let node_idx = self.arena.insert(CourseNode {
            course,
            left: None,
            right: None,
        });

        let Some(mut current) = self.root else {
            self.root = Some(node_idx);
            return;
        };

        loop {
            let node = &mut self.arena[current];
            if key < node.course.identifier {
                match node.left {
                    Some(child) => current = child,
                    None => {
                        node.left = Some(node_idx);
                        return;
                    }
                }
            } else {
                match node.right {
                    Some(child) => current = child,
                    None => {
                        node.right = Some(node_idx);
                        return;
                    }
                }
            }
        }
    }

    /// Exact-key lookup. First match on the descent path wins, which for
    /// duplicate identifiers is the earliest-inserted node.
    #[instrument(level = "trace", skip(self))]
    pub fn search(&self, identifier: &str) -> Option<&Course> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.arena[idx];
            if identifier == node.course.identifier {
                return Some(&node.course);
            }
            current = if identifier < node.course.identifier.as_str() {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    /// In-order iterator over all courses, ascending by identifier.
    /// Restartable: each call walks the current tree from scratch.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    /// Materialized sorted listing.
    pub fn list_sorted(&self) -> Vec<&Course> {
        self.iter().collect()
    }

    /// Discard all nodes, returning the store to the empty state.
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }
}

/// Explicit-stack in-order traversal (left subtree, node, right subtree).
pub struct InOrderIterator<'a> {
    store: &'a CourseStore,
    stack: Vec<Index>,
}

impl<'a> InOrderIterator<'a> {
    fn new(store: &'a CourseStore) -> Self {
        let mut iter = Self {
            store,
            stack: Vec::new(),
        };
        iter.push_left_spine(store.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.store.arena[idx].left;
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = &self.store.arena[idx];
        self.push_left_spine(node.right);
        Some(&node.course)
    }
}
