//! Union-find over vertex ids, used by Kruskal.

use std::collections::HashMap;

/// Disjoint-set forest with path compression and union by size.
#[derive(Debug, Default)]
pub struct DisjointSet {
    parent: HashMap<String, String>,
    size: HashMap<String, usize>,
}

impl DisjointSet {
    /// Create a partition with every given element in its own class.
    pub fn new<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for element in elements {
            set.insert(element.into());
        }
        set
    }

    /// Add a new singleton class; no-op if the element is already tracked.
    pub fn insert(&mut self, element: String) {
        if !self.parent.contains_key(&element) {
            self.parent.insert(element.clone(), element.clone());
            self.size.insert(element, 1);
        }
    }

    /// Representative of the element's class, or `None` for unknown elements.
    /// Compresses the path to the root along the way.
    pub fn find(&mut self, element: &str) -> Option<String> {
        if !self.parent.contains_key(element) {
            return None;
        }

        // Walk to the root.
        let mut root = element.to_string();
        while self.parent[&root] != root {
            root = self.parent[&root].clone();
        }

        // Second pass: point every vertex on the path at the root.
        let mut current = element.to_string();
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }

        Some(root)
    }

    /// Merge the classes of `a` and `b`. Returns true if two distinct
    /// classes were merged.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let (root_a, root_b) = match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => (ra, rb),
            _ => return false,
        };
        if root_a == root_b {
            return false;
        }

        // Attach the smaller tree under the larger one.
        let (big, small) = if self.size[&root_a] >= self.size[&root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        let absorbed = self.size[&small];
        self.parent.insert(small, big.clone());
        if let Some(s) = self.size.get_mut(&big) {
            *s += absorbed;
        }
        true
    }

    /// Whether both elements exist and share a class.
    pub fn same_set(&mut self, a: &str, b: &str) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new(["A", "B", "C"]);
        assert_eq!(ds.find("A").as_deref(), Some("A"));
        assert!(!ds.same_set("A", "B"));
    }

    #[test]
    fn test_union_merges() {
        let mut ds = DisjointSet::new(["A", "B", "C", "D"]);
        assert!(ds.union("A", "B"));
        assert!(ds.union("C", "D"));
        assert!(!ds.same_set("A", "C"));
        assert!(ds.union("B", "C"));
        assert!(ds.same_set("A", "D"));
        // Already merged.
        assert!(!ds.union("A", "D"));
    }

    #[test]
    fn test_unknown_elements() {
        let mut ds = DisjointSet::new(["A"]);
        assert_eq!(ds.find("Z"), None);
        assert!(!ds.union("A", "Z"));
        assert!(!ds.same_set("A", "Z"));
    }
}
