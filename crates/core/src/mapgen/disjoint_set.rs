//! Union-find over dense indices.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    pub(crate) fn new(len: usize) -> Self {
        Self { parent: (0..len).collect(), sets: len }
    }

    pub(crate) fn find(&mut self, mut index: usize) -> usize {
        while self.parent[index] != index {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    /// Merges the sets holding `a` and `b`; false when they were already joined.
    pub(crate) fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        self.sets -= 1;
        true
    }

    pub(crate) const fn set_count(&self) -> usize {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_reports_whether_sets_merged() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert_eq!(sets.set_count(), 2);
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));
        assert_eq!(sets.set_count(), 1);
        assert_eq!(sets.find(0), sets.find(3));
    }
}
