//! The counting map filled by the first pass.
use crate::vertex::VertexId;
use std::collections::HashMap;

/// Vertex id -> number of times it was seen in a counted role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeCounter<T: VertexId> {
    counts: HashMap<T, u64>,
}

impl<T: VertexId> Default for DegreeCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: VertexId> DegreeCounter<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
    /// Count one more occurrence of `vertex`.
    pub fn add(&mut self, vertex: T) {
        *self.counts.entry(vertex).or_default() += 1;
    }
    /// Count an edge. The destination always counts; the source counts
    /// too when the graph is undirected.
    pub fn add_edge(&mut self, source: T, dest: T, undirected: bool) {
        self.add(dest);
        if undirected {
            self.add(source);
        }
    }
    /// The tally of `vertex`, zero if it never appeared.
    pub fn get(&self, vertex: &T) -> u64 {
        self.counts.get(vertex).copied().unwrap_or(0)
    }
    /// Number of distinct vertices counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
    /// Entries sorted by vertex id.
    pub fn sorted(&self) -> Vec<(T, u64)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn directed() {
        let mut counter = DegreeCounter::new();
        counter.add_edge(1u32, 2, false);
        counter.add_edge(2, 3, false);
        assert_eq!(counter.sorted(), vec![(2, 1), (3, 1)]);
        assert_eq!(counter.get(&1), 0);
    }
    #[test]
    fn undirected() {
        let mut counter = DegreeCounter::new();
        counter.add_edge(1u32, 2, true);
        counter.add_edge(2, 1, true);
        assert_eq!(counter.sorted(), vec![(1, 2), (2, 2)]);
        assert_eq!(counter.len(), 2);
    }
    #[test]
    fn self_loop_counts_twice_when_undirected() {
        let mut counter = DegreeCounter::new();
        counter.add_edge(4u64, 4, true);
        assert_eq!(counter.get(&4), 2);
        let mut counter = DegreeCounter::new();
        counter.add_edge(4u64, 4, false);
        assert_eq!(counter.get(&4), 1);
    }
}
