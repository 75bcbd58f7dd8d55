use tracing::*;

/// The capability a [`Grid`](crate::Grid) needs from its connectivity backend.
///
/// Elements are the integers `0..count`; each starts in its own set.
///
/// # Example
/// ```
/// use percolation::{UnionFind, WeightedQuickUnion};
///
/// let mut uf = WeightedQuickUnion::new(4);
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(1, 2));
/// assert_eq!(uf.count(), 2);
/// ```
pub trait UnionFind {
    /// Creates `count` singleton sets.
    fn new(count: usize) -> Self;

    /// Merges the sets containing `a` and `b`. No-op when already connected.
    fn union(&mut self, a: usize, b: usize);

    /// Returns `true` if `a` and `b` are in the same set.
    ///
    /// Takes `&mut self` so implementations may compress paths while querying.
    fn connected(&mut self, a: usize, b: usize) -> bool;

    /// Returns the number of disjoint sets.
    fn count(&self) -> usize;
}

/// Quick-find: every element stores its set id directly.
#[derive(Debug, Clone)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl UnionFind for QuickFind {
    fn new(count: usize) -> Self {
        Self {
            id: (0..count).collect(),
            count,
        }
    }

    fn union(&mut self, a: usize, b: usize) {
        let (a_id, b_id) = (self.id[a], self.id[b]);
        if a_id == b_id {
            return;
        }
        for id in self.id.iter_mut().filter(|id| **id == a_id) {
            *id = b_id;
        }
        self.count -= 1;
        trace!("quick-find union {} -> {}, {} sets left", a, b, self.count);
    }

    fn connected(&mut self, a: usize, b: usize) -> bool {
        self.id[a] == self.id[b]
    }

    fn count(&self) -> usize {
        self.count
    }
}

/// Weighted quick-union with path halving.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    count: usize,
}

impl WeightedQuickUnion {
    /// Returns the root of `p`, halving the path on the way up.
    pub fn find(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }
}

impl UnionFind for WeightedQuickUnion {
    fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            sizes: vec![1; count],
            count,
        }
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut root_a, mut root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return;
        }
        // Smaller tree goes under the larger one
        if self.sizes[root_a] > self.sizes[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_a] = root_b;
        self.sizes[root_b] += self.sizes[root_a];
        self.count -= 1;
        trace!("weighted union {} -> {}, {} sets left", a, b, self.count);
    }

    fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    fn count(&self) -> usize {
        self.count
    }
}
