/*!
This crate provides an online construction of a generalized suffix tree over
a single input string, built with Ukkonen's algorithm, together with the
substring-search query it enables.

A suffix tree over a string S of length n supports queries of the form "does
pattern P occur in S, and if so, at which position?" in O(|P|) time after an
O(n) construction. The hard engineering is the incremental construction
itself: three classes of extension, suffix links that must be threaded in the
correct order, and edge canonization that must terminate.

# Scope

In scope: the tree's node/edge/active-point data model, the Ukkonen
construction (add-prefix loop, edge splitting, suffix-link installation,
canonization), substring search, and a case-folding policy for the input.

Out of scope: generalized (multi-string) suffix trees with terminators,
suffix arrays, approximate matching, disk-resident variants, and Unicode
grapheme segmentation — the input is treated as an indexable sequence of
bytes.

# Usage Example

```rust
use suffix_tree::SuffixTree;

let tree = SuffixTree::new("banana");
assert!(tree.has_substring("ana")); // occurs at both position 1 and 3
assert!(tree.has_substring("nan"));
assert!(!tree.has_substring("xyz"));
```

# Features
- O(n) online construction, O(m) substring search.
- An optional [`Observer`](suffix_tree::Observer) hook notified as nodes and
  edges are created, for shells that want to persist construction as a
  stream of facts without the core depending on that behavior.
- Case-insensitive construction via [`SuffixTree::new_case_insensitive`].
*/

pub mod error;
pub mod suffix_tree;

pub use error::{Result, SuffixTreeError};
pub use suffix_tree::{Observer, SuffixTree};
