//! Append-only arena of suffix tree nodes.

/// Opaque handle into the node arena. A dense integer suffices; this crate
/// uses the node's index into the backing `Vec` directly.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy)]
struct NodeData {
    suffix_link: Option<NodeId>,
}

/// Append-only store of suffix tree nodes.
///
/// Nodes are never deleted. The only mutation permitted after creation is a
/// one-time assignment of `suffix_link` from `None` to `Some` (I5).
#[derive(Debug, Default)]
pub(crate) struct NodeStore {
    nodes: Vec<NodeData>,
}

impl NodeStore {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocates a fresh node with no suffix link and returns its handle.
    pub(crate) fn new_node(&mut self) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(NodeData { suffix_link: None });
        id
    }

    /// Installs `link` as `node`'s suffix link. Idempotent: re-assigning the
    /// same link is a no-op in effect.
    pub(crate) fn set_suffix_link(&mut self, node: NodeId, link: NodeId) {
        self.nodes[node].suffix_link = Some(link);
    }

    pub(crate) fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].suffix_link
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_has_no_suffix_link() {
        let mut store = NodeStore::new();
        let root = store.new_node();
        assert_eq!(store.suffix_link(root), None);
    }

    #[test]
    fn test_set_suffix_link() {
        let mut store = NodeStore::new();
        let a = store.new_node();
        let b = store.new_node();
        store.set_suffix_link(a, b);
        assert_eq!(store.suffix_link(a), Some(b));
    }

    #[test]
    fn test_len_grows_with_allocation() {
        let mut store = NodeStore::new();
        assert_eq!(store.len(), 0);
        store.new_node();
        store.new_node();
        assert_eq!(store.len(), 2);
    }
}
