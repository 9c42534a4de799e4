//! Disjoint-set union over node ids
//!
//! Used by Kruskal to detect cycle-forming edges. Elements are interned to
//! dense indices; parents and ranks live in flat vectors.

use indexmap::IndexSet;

#[derive(Debug, Clone)]
pub struct UnionFind {
    ids: IndexSet<String>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Create one singleton set per element. Repeated elements are ignored.
    pub fn new<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut uf = UnionFind {
            ids: IndexSet::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            sets: 0,
        };
        for element in elements {
            uf.insert(element);
        }
        uf
    }

    /// Add a singleton set. Returns false if the element already existed.
    pub fn insert(&mut self, element: impl Into<String>) -> bool {
        let (index, inserted) = self.ids.insert_full(element.into());
        if inserted {
            self.parent.push(index);
            self.rank.push(0);
            self.sets += 1;
        }
        inserted
    }

    pub fn contains(&self, element: &str) -> bool {
        self.ids.contains(element)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn index_of(&self, element: &str) -> usize {
        match self.ids.get_index_of(element) {
            Some(index) => index,
            None => panic!("union-find has no element {:?}", element),
        }
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Re-point every node on the walked path straight at the root
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Canonical representative of the set containing `element`.
    ///
    /// # Panics
    ///
    /// Panics if `element` was never inserted.
    pub fn find(&mut self, element: &str) -> &str {
        let index = self.index_of(element);
        let root = self.find_root(index);
        self.ids
            .get_index(root)
            .map(|s| s.as_str())
            .unwrap_or_default()
    }

    /// Whether both elements are in the same set
    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        let a = self.index_of(a);
        let b = self.index_of(b);
        self.find_root(a) == self.find_root(b)
    }

    /// Merge the sets containing `a` and `b` (union by rank).
    ///
    /// Returns true if two distinct sets were merged, false if both elements
    /// already shared a set.
    ///
    /// # Panics
    ///
    /// Panics if either element was never inserted.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let a = self.index_of(a);
        let b = self.index_of(b);
        let mut root_a = self.find_root(a);
        let mut root_b = self.find_root(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        if self.rank[root_a] == self.rank[root_b] {
            self.rank[root_a] = self.rank[root_a].saturating_add(1);
        }
        self.sets -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_reports_merges() {
        let mut uf = UnionFind::new(["a", "b", "c"]);
        assert!(uf.union("a", "b"));
        assert!(!uf.union("a", "b"));
        assert!(!uf.union("b", "a"));
        assert!(uf.union("b", "c"));
        assert!(!uf.union("a", "c"));
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_find_is_canonical_after_union() {
        let mut uf = UnionFind::new(["x", "y", "z"]);
        assert_eq!(uf.find("x"), "x");
        uf.union("x", "y");
        let rx = uf.find("x").to_owned();
        let ry = uf.find("y").to_owned();
        assert_eq!(rx, ry);
        assert_ne!(uf.find("z"), rx);
        assert!(uf.connected("y", "x"));
        assert!(!uf.connected("y", "z"));
    }

    #[test]
    fn test_path_compression_flattens_chain() {
        let names: Vec<String> = (0..8).map(|i| format!("n{}", i)).collect();
        let mut uf = UnionFind::new(names.iter().cloned());
        for pair in names.windows(2) {
            uf.union(&pair[0], &pair[1]);
        }
        let root = uf.find("n7").to_owned();
        for name in &names {
            let index = uf.index_of(name);
            let root_index = uf.index_of(&root);
            assert_eq!(uf.parent[index], root_index, "{} not compressed", name);
        }
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let mut uf = UnionFind::new(["a", "a", "b"]);
        assert_eq!(uf.len(), 2);
        assert!(!uf.insert("b"));
        assert!(uf.insert("c"));
        assert_eq!(uf.set_count(), 3);
        assert!(uf.contains("c"));
    }

    #[test]
    #[should_panic(expected = "no element")]
    fn test_find_unknown_element_panics() {
        let mut uf = UnionFind::new(["a"]);
        uf.find("missing");
    }
}
