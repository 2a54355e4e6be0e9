//! Optional write-only sink for node/edge creation.
//!
//! The source project this crate's algorithm is grounded on wraps every
//! node/edge creation in a domain event published to a bus, so an
//! event-sourced shell can reconstruct the tree from a log. That
//! persistence layer is out of scope for this crate (§1), but the seam it
//! needs is preserved here as a plain trait: an implementation may publish
//! these notifications however it likes. Construction never reads anything
//! back from the observer and does not depend on it.

/// Receives notifications as a [`super::SuffixTree`] is constructed.
///
/// Passed by mutable reference only for the duration of a single build;
/// the finished, immutable tree does not retain it.
pub trait Observer {
    /// Called immediately after a node is allocated.
    fn node_created(&mut self, node: usize) {
        let _ = node;
    }

    /// Called immediately after an edge is inserted into the edge store.
    fn edge_created(&mut self, source: usize, destination: usize, first_index: usize, last_index: usize) {
        let _ = (source, destination, first_index, last_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        nodes: Vec<usize>,
        edges: Vec<(usize, usize, usize, usize)>,
    }

    impl Observer for Recorder {
        fn node_created(&mut self, node: usize) {
            self.nodes.push(node);
        }

        fn edge_created(&mut self, source: usize, destination: usize, first_index: usize, last_index: usize) {
            self.edges.push((source, destination, first_index, last_index));
        }
    }

    #[test]
    fn test_default_methods_are_no_ops() {
        struct Silent;
        impl Observer for Silent {}
        let mut silent = Silent;
        silent.node_created(0);
        silent.edge_created(0, 1, 0, 1);
    }

    #[test]
    fn test_recorder_observes_construction() {
        use crate::suffix_tree::SuffixTree;

        let mut recorder = Recorder::default();
        let tree = SuffixTree::with_observer("banana", false, &mut recorder);

        assert_eq!(recorder.nodes.len(), tree.node_count());
        assert!(!recorder.edges.is_empty());
    }
}
