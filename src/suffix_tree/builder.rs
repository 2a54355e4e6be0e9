//! Ukkonen's online construction: the add-prefix loop, edge splitting,
//! suffix-link installation, and canonization. This is the hard part.

use super::active_point::ActivePoint;
use super::edge::{Edge, EdgeStore};
use super::node::{NodeId, NodeStore};
use super::observer::Observer;
use super::text::Text;
use super::SuffixTree;

/// Owns the string, the node/edge arenas, and the active point while a
/// [`SuffixTree`] is under construction. Consumed by [`Builder::build`],
/// which runs `add_prefix` for every position in the string and hands the
/// finished arenas to [`SuffixTree`].
pub(super) struct Builder<'o> {
    text: Text,
    nodes: NodeStore,
    edges: EdgeStore,
    root: NodeId,
    /// `N = len(S) - 1`; `-1` for the empty string, in which case the
    /// add-prefix loop never runs (§4.8).
    n: isize,
    active: ActivePoint,
    observer: Option<&'o mut dyn Observer>,
    case_insensitive: bool,
}

impl<'o> Builder<'o> {
    pub(super) fn new(
        input: impl AsRef<[u8]>,
        case_insensitive: bool,
        observer: Option<&'o mut dyn Observer>,
    ) -> Self {
        let text = Text::new(input, case_insensitive);
        let mut nodes = NodeStore::new();
        let root = nodes.new_node();
        let n = text.len() as isize - 1;

        let mut builder = Self {
            text,
            nodes,
            edges: EdgeStore::new(),
            root,
            n,
            active: ActivePoint::new(root),
            observer,
            case_insensitive,
        };
        builder.notify_node_created(root);
        builder
    }

    /// Runs the add-prefix loop for every position in the string and
    /// assembles the finished, immutable tree.
    pub(super) fn build(mut self) -> SuffixTree {
        if self.n >= 0 {
            for i in 0..=(self.n as usize) {
                self.add_prefix(i);
            }
        }

        SuffixTree {
            text: self.text,
            nodes: self.nodes,
            edges: self.edges,
            root: self.root,
            case_insensitive: self.case_insensitive,
        }
    }

    fn notify_node_created(&mut self, node: NodeId) {
        if let Some(observer) = self.observer.as_mut() {
            observer.node_created(node);
        }
    }

    fn notify_edge_created(&mut self, edge: &Edge) {
        if let Some(observer) = self.observer.as_mut() {
            observer.edge_created(edge.source, edge.destination, edge.first_index, edge.last_index);
        }
    }

    fn alloc_node(&mut self) -> NodeId {
        let id = self.nodes.new_node();
        self.notify_node_created(id);
        id
    }

    fn insert_edge(&mut self, edge: Edge) {
        self.edges.insert(edge, &self.text);
        self.notify_edge_created(&edge);
    }

    fn remove_edge(&mut self, edge: &Edge) {
        self.edges.remove(edge, &self.text);
    }

    /// Processes the extension phase for the new byte `S[i]` (§4.4).
    fn add_prefix(&mut self, i: usize) {
        let ch = self.text.at(i);
        let mut last_parent_node_id: Option<NodeId> = None;
        let final_parent: NodeId;

        loop {
            let mut parent = self.active.source;

            if self.active.explicit() {
                if self.edges.lookup(self.active.source, ch).is_some() {
                    // The byte is already represented below the current
                    // explicit point (Rule 3) — this suffix is already in
                    // the tree, stop here.
                    final_parent = parent;
                    break;
                }
            } else {
                let edge_first_char = self.text.at(self.active.first_index);
                let e = self
                    .edges
                    .lookup(self.active.source, edge_first_char)
                    .expect("an implicit active point must sit on an existing edge (I4)");

                let next_char_index = e.first_index + self.active.length() as usize + 1;
                if self.text.at(next_char_index) == ch {
                    // The byte extends the current implicit point without
                    // branching (Rule 3) — stop here.
                    final_parent = parent;
                    break;
                }

                parent = self.split_edge(e);
            }

            let leaf = self.alloc_node();
            let edge = Edge {
                source: parent,
                destination: leaf,
                first_index: i,
                last_index: self.n as usize,
            };
            self.insert_edge(edge);

            if let Some(last) = last_parent_node_id {
                self.nodes.set_suffix_link(last, parent);
            }
            last_parent_node_id = Some(parent);

            // Shift the active point one suffix down.
            if self.active.source == self.root {
                self.active.first_index += 1;
            } else {
                self.active.source = self
                    .nodes
                    .suffix_link(self.active.source)
                    .expect("an internal node gets its suffix link on the very next extension (I5)");
            }
            self.canonize_suffix();
        }

        if let Some(last) = last_parent_node_id {
            self.nodes.set_suffix_link(last, final_parent);
        }
        self.active.last_index += 1;
        self.canonize_suffix();
    }

    /// Splits `e` at offset `active.length()` from its start, inserting a
    /// fresh internal node between `e.source` and `e.destination` (§4.5).
    /// Returns the new internal node.
    fn split_edge(&mut self, e: Edge) -> NodeId {
        debug_assert_eq!(e.source, self.active.source, "suffix.source == e.source");

        let mid = self.alloc_node();

        let head = Edge {
            source: self.active.source,
            destination: mid,
            first_index: e.first_index,
            last_index: e.first_index + self.active.length() as usize,
        };

        self.remove_edge(&e);
        self.insert_edge(head);

        // Provisional: overwritten consistently by the outer loop's
        // invariants on the very next extension that needs it (§4.5).
        self.nodes.set_suffix_link(mid, self.active.source);

        let mut tail = e;
        tail.first_index += self.active.length() as usize + 1;
        tail.source = mid;
        self.insert_edge(tail);

        mid
    }

    /// Normalizes the active point so its `source` is the deepest node on
    /// its path, leaving an implicit remainder strictly shorter than the
    /// edge that starts it (§4.6). Each iteration strictly advances
    /// `first_index`, so this terminates (I6).
    fn canonize_suffix(&mut self) {
        while self.active.implicit() {
            let c = self.text.at(self.active.first_index);
            let e = self
                .edges
                .lookup(self.active.source, c)
                .expect("canonize requires an edge under the active point (I4)");

            if e.length() as isize > self.active.length() {
                break;
            }
            self.active.first_index += e.length() + 1;
            self.active.source = e.destination;
        }
    }
}
