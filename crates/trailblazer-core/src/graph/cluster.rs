//! Disjoint-set forest used by Kruskal to track vertex clusters

/// Union-find with path compression and union by size
#[derive(Debug, Clone)]
pub struct Clusters {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Clusters {
    /// Every element starts as its own singleton cluster
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Representative of the cluster containing `x`
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the clusters of `a` and `b`; false if they were already one
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.count -= 1;
        true
    }

    pub fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint clusters
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cluster_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_as_singletons() {
        let mut clusters = Clusters::new(4);
        assert_eq!(clusters.count(), 4);
        for i in 0..4 {
            assert_eq!(clusters.find(i), i);
            assert_eq!(clusters.cluster_size(i), 1);
        }
    }

    #[test]
    fn test_union_merges_and_counts() {
        let mut clusters = Clusters::new(5);
        assert!(clusters.union(0, 1));
        assert!(clusters.union(2, 3));
        assert_eq!(clusters.count(), 3);
        assert!(clusters.same(0, 1));
        assert!(!clusters.same(1, 2));

        assert!(clusters.union(1, 3));
        assert_eq!(clusters.count(), 2);
        assert!(clusters.same(0, 2));
        assert_eq!(clusters.cluster_size(3), 4);
    }

    #[test]
    fn test_union_within_cluster_is_rejected() {
        let mut clusters = Clusters::new(3);
        clusters.union(0, 1);
        assert!(!clusters.union(1, 0));
        assert!(!clusters.union(2, 2));
        assert_eq!(clusters.count(), 2);
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut clusters = Clusters::new(1000);
        for i in 1..1000 {
            clusters.union(i - 1, i);
        }
        assert_eq!(clusters.count(), 1);
        let root = clusters.find(999);
        assert_eq!(clusters.find(0), root);
    }
}
