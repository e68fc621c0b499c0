//! Suffix-array extraction by alphabet-ordered depth-first traversal
//!
//! Visiting children in ascending alphabet-index order emits leaves in
//! lexicographic order of their suffixes, because alphabet indices are
//! assigned in character sort order with the terminal first. Each leaf
//! contributes `edge.start - accumulated_label_length` as a suffix start
//! offset, where the accumulator counts the label characters walked since
//! the root.

use super::{Edge, SuffixTree};

impl SuffixTree {
    /// Extract the suffix array: every suffix start offset, ordered by the
    /// lexicographic order of the suffixes.
    ///
    /// The traversal is pre-order and uses an explicit stack; tree depth is
    /// bounded by the text length, which would overflow the call stack on
    /// long non-branching inputs.
    pub fn suffix_array(&self) -> Vec<usize> {
        let mut suffixes = Vec::with_capacity(self.text.len());
        let mut stack: Vec<(Edge, usize)> = Vec::new();

        // Children are pushed in reverse alphabet order so the stack pops
        // them in ascending order. The prefix length resets at the root.
        for edge in self.root().edges().rev() {
            stack.push((*edge, 0));
        }

        while let Some((edge, prefix_len)) = stack.pop() {
            let target = &self.nodes[edge.target];
            if target.leaf {
                suffixes.push(edge.start - prefix_len);
                continue;
            }

            let descended = prefix_len + edge.label_len(self.open_end);
            for child in target.edges().rev() {
                stack.push((*child, descended));
            }
        }

        suffixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
        let mut sa: Vec<usize> = (0..text.len()).collect();
        sa.sort_by(|&a, &b| compare_suffixes(text, a, b));
        sa
    }

    fn compare_suffixes(text: &[u8], lhs: usize, rhs: usize) -> Ordering {
        text[lhs..].cmp(&text[rhs..])
    }

    #[test]
    fn banana_suffix_array_matches_known_order() {
        let tree = SuffixTree::build("banana$").expect("build should succeed");
        assert_eq!(tree.suffix_array(), vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn single_character_input_orders_terminal_first() {
        let tree = SuffixTree::build("a$").expect("build should succeed");
        assert_eq!(tree.suffix_array(), vec![1, 0]);
    }

    #[test]
    fn repeated_character_input_orders_by_length() {
        let tree = SuffixTree::build("aaaa$").expect("build should succeed");
        assert_eq!(tree.suffix_array(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn mississippi_matches_naive_construction() {
        let text = b"mississippi$";
        let tree = SuffixTree::build(&text[..]).expect("build should succeed");
        assert_eq!(tree.suffix_array(), naive_suffix_array(text));
        assert_eq!(
            tree.suffix_array(),
            vec![11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]
        );
    }

    #[test]
    fn extraction_covers_every_offset_exactly_once() {
        let text = b"abcabxabcd$";
        let tree = SuffixTree::build(&text[..]).expect("build should succeed");
        let mut sa = tree.suffix_array();
        assert_eq!(sa.len(), text.len());
        sa.sort_unstable();
        assert_eq!(sa, (0..text.len()).collect::<Vec<_>>());
    }
}
