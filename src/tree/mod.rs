//! Implicit suffix tree built with Ukkonen's algorithm
//!
//! The tree is constructed in a single left-to-right pass over the input.
//! Each phase `i` first advances one shared "open end" counter, which
//! extends every open leaf edge by the new character for free (rule 1), and
//! then explicitly inserts the suffixes that are not yet present (rule 2)
//! until either all of them are handled or one of them turns out to already
//! exist in the tree (rule 3, which ends the phase early). Together with
//! suffix links and the skip/count walk-down this gives amortized O(n)
//! construction.

mod node;
mod traversal;

pub use node::{Edge, EdgeEnd, Node, NodeId};

use crate::alphabet::{self, TextError};
use tracing::debug;

/// Arena index of the root node.
const ROOT: NodeId = 0;

/// Suffix tree over a sentinel-terminated byte string.
///
/// Every suffix of the input is spelled out by a unique root-to-leaf path,
/// and every leaf corresponds to exactly one suffix start offset. The tree
/// owns all nodes through a flat arena; edges and suffix links refer to
/// nodes by arena index only.
#[derive(Debug)]
pub struct SuffixTree {
    text: Vec<u8>,
    nodes: Vec<Node>,
    /// Final value of the per-build phase counter. Open leaf edges resolve
    /// their end offset against this after construction completes.
    open_end: usize,
}

/// Shape summary of a constructed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeStats {
    /// Length of the input text, terminal included.
    pub text_len: usize,
    /// Total number of nodes in the arena, root included.
    pub node_count: usize,
    /// Number of leaves. Equals `text_len` for a sentinel-terminated input.
    pub leaf_count: usize,
    /// Number of internal non-root nodes.
    pub internal_count: usize,
}

impl SuffixTree {
    /// Build the suffix tree for `text` using Ukkonen's algorithm.
    ///
    /// The input must be non-empty, consist of bytes in the supported ASCII
    /// band, and end with the terminal symbol `$`, which must not occur
    /// anywhere else. Violations are reported as [`TextError`] before any
    /// construction work happens.
    pub fn build(text: impl Into<Vec<u8>>) -> Result<Self, TextError> {
        let text = text.into();
        let symbols = alphabet::encode_terminated(&text)?;
        debug!(text_len = text.len(), "building suffix tree");

        let mut builder = Builder::new(text, symbols);
        builder.run();
        let tree = builder.finish();

        debug!(nodes = tree.nodes.len(), "suffix tree complete");
        Ok(tree)
    }

    /// The input text the tree was built from, terminal included.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Root node of the tree.
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    /// Node stored at arena index `id`.
    ///
    /// # Panics
    /// Panics if `id` is not an index previously handed out by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total number of nodes in the arena. Bounded by `2 * text_len` for
    /// any sentinel-terminated input.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Phase counter value that open leaf edges resolve their end against.
    pub fn open_end(&self) -> usize {
        self.open_end
    }

    /// Shape summary of the tree.
    pub fn stats(&self) -> TreeStats {
        let leaf_count = self.nodes.iter().filter(|node| node.leaf).count();
        TreeStats {
            text_len: self.text.len(),
            node_count: self.nodes.len(),
            leaf_count,
            internal_count: self.nodes.len() - leaf_count - 1,
        }
    }
}

/// Construction state for one `build` call.
///
/// The active point `(active_node, active_edge, active_length)` identifies
/// where the next pending suffix extension begins; `active_edge` is an
/// offset into the text naming the first character of the active edge.
/// `last_j` counts the extensions completed so far across all phases.
struct Builder {
    text: Vec<u8>,
    /// Alphabet indices of `text`, one per byte.
    symbols: Vec<u8>,
    nodes: Vec<Node>,
    active_node: NodeId,
    active_edge: usize,
    active_length: usize,
    last_j: usize,
    open_end: usize,
}

impl Builder {
    fn new(text: Vec<u8>, symbols: Vec<u8>) -> Self {
        let mut nodes = Vec::with_capacity(2 * text.len());
        // The root's suffix link points at itself.
        nodes.push(Node::new(false, true, ROOT));
        Self {
            text,
            symbols,
            nodes,
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            last_j: 0,
            open_end: 0,
        }
    }

    fn run(&mut self) {
        for i in 0..self.text.len() {
            // Rule 1: advance the shared open end before any extension work
            // for the phase. Every open leaf edge now covers character i.
            self.open_end = i;
            self.extend(i);
        }
    }

    /// Perform the explicit extensions of phase `i`.
    fn extend(&mut self, i: usize) {
        // Internal node created earlier in this phase, still waiting for
        // its suffix link.
        let mut pending: Option<NodeId> = None;

        // i - last_j + 1 suffixes remain to be added in this phase.
        while self.last_j <= i {
            if self.active_length == 0 {
                self.active_edge = i;
            }
            let edge_symbol = self.symbols[self.active_edge] as usize;

            let outgoing = self.nodes[self.active_node].children[edge_symbol];
            let Some(edge) = outgoing else {
                // Rule 2: no outgoing edge for this symbol, attach a new
                // open leaf starting at the current phase index.
                let leaf = self.new_node(true);
                self.nodes[self.active_node].children[edge_symbol] =
                    Some(Edge::new(i, EdgeEnd::Open, leaf));
                self.last_j += 1;
                if let Some(waiting) = pending.take() {
                    self.nodes[waiting].suffix_link = self.active_node;
                }
                self.step_active_point();
                continue;
            };

            // Skip/count: never walk an edge character by character when the
            // remaining active length covers the whole label.
            let edge_len = edge.label_len(self.open_end);
            if self.active_length >= edge_len {
                self.active_edge += edge_len;
                self.active_length -= edge_len;
                self.active_node = edge.target;
                continue;
            }

            // Rule 3: the next character is already present on the edge.
            // All remaining suffixes of this phase are implicitly present,
            // so the phase ends here.
            if self.symbols[edge.start + self.active_length] == self.symbols[i] {
                if !self.nodes[self.active_node].root {
                    if let Some(waiting) = pending.take() {
                        self.nodes[waiting].suffix_link = self.active_node;
                    }
                }
                self.active_length += 1;
                return;
            }

            // Mismatch partway along the edge: split it at the active point
            // and hang a new leaf for the current character off the split.
            let split = self.split_edge(edge, edge_symbol, i);
            self.last_j += 1;
            if let Some(waiting) = pending.take() {
                self.nodes[waiting].suffix_link = split;
            }
            pending = Some(split);

            self.step_active_point();
        }
    }

    /// Move the active point to where the next suffix extension begins:
    /// shrink from the front when sitting at the root, otherwise follow the
    /// active node's suffix link (resolved by the time it is read).
    fn step_active_point(&mut self) {
        if self.nodes[self.active_node].root {
            if self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge = self.last_j;
            }
        } else {
            self.active_node = self.nodes[self.active_node].suffix_link;
        }
    }

    /// Split `edge` after `active_length` characters. The new internal node
    /// keeps the remainder of the old edge and gains a fresh open leaf for
    /// the character at phase index `i`.
    fn split_edge(&mut self, edge: Edge, edge_symbol: usize, i: usize) -> NodeId {
        let split_end = edge.start + self.active_length - 1;
        let split_node = self.new_node(false);
        let leaf = self.new_node(true);

        self.nodes[split_node].children[self.symbols[i] as usize] =
            Some(Edge::new(i, EdgeEnd::Open, leaf));

        // Remainder of the original edge, first character now past the
        // split point. Its target node and end offset are unchanged.
        let remainder = Edge::new(edge.start + self.active_length, edge.end, edge.target);
        self.nodes[split_node].children[self.symbols[remainder.start] as usize] = Some(remainder);

        self.nodes[self.active_node].children[edge_symbol] =
            Some(Edge::new(edge.start, EdgeEnd::Closed(split_end), split_node));

        split_node
    }

    /// Allocate a node. Fresh nodes point their suffix link at the root
    /// until an extension resolves it.
    fn new_node(&mut self, leaf: bool) -> NodeId {
        self.nodes.push(Node::new(leaf, false, ROOT));
        self.nodes.len() - 1
    }

    fn finish(self) -> SuffixTree {
        SuffixTree {
            text: self.text,
            nodes: self.nodes,
            open_end: self.open_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_malformed_input() {
        assert_eq!(SuffixTree::build("").unwrap_err(), TextError::Empty);
        assert_eq!(
            SuffixTree::build("banana").unwrap_err(),
            TextError::MissingTerminal
        );
        assert_eq!(
            SuffixTree::build("ban$ana$").unwrap_err(),
            TextError::StrayTerminal { position: 3 }
        );
        assert_eq!(
            SuffixTree::build("ba nana$").unwrap_err(),
            TextError::UnsupportedCharacter {
                ch: ' ',
                position: 2
            }
        );
    }

    #[test]
    fn leaf_count_equals_text_length() {
        let tree = SuffixTree::build("banana$").expect("build should succeed");
        let stats = tree.stats();
        assert_eq!(stats.text_len, 7);
        assert_eq!(stats.leaf_count, 7);
        assert_eq!(stats.node_count, stats.leaf_count + stats.internal_count + 1);
    }

    #[test]
    fn node_count_is_linear_in_text_length() {
        // A suffix tree over n characters has at most 2n nodes.
        for text in ["banana$", "aaaaaaaa$", "abcabxabcd$", "a$"] {
            let tree = SuffixTree::build(text).expect("build should succeed");
            assert!(tree.node_count() <= 2 * text.len());
        }
    }

    #[test]
    fn root_children_cover_distinct_symbols_once() {
        let tree = SuffixTree::build("banana$").expect("build should succeed");
        // banana$ has distinct starting symbols $, a, b, n.
        assert_eq!(tree.root().degree(), 4);
    }

    #[test]
    fn repeated_character_input_collapses_to_chain() {
        // aaaa$ forces the rule 3 and skip/count paths: the tree is a chain
        // of internal nodes each with an 'a' edge and a '$' leaf.
        let tree = SuffixTree::build("aaaa$").expect("build should succeed");
        let stats = tree.stats();
        assert_eq!(stats.leaf_count, 5);
        assert_eq!(stats.internal_count, 3);
    }

    #[test]
    fn suffix_links_stay_inside_the_arena() {
        let tree = SuffixTree::build("mississippi$").expect("build should succeed");
        for id in 0..tree.node_count() {
            assert!(tree.node(id).suffix_link() < tree.node_count());
        }
    }
}
