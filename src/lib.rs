//! # Linear-Time Suffix Trees and the Burrows-Wheeler Transform
//!
//! This crate builds an implicit suffix tree over a sentinel-terminated
//! string with Ukkonen's algorithm in amortized O(n), extracts the suffix
//! array by alphabet-ordered depth-first traversal, and derives the
//! Burrows-Wheeler transform from it.
//!
//! ## Pipeline
//!
//! 1. **Suffix tree construction**: one phase per input character, with a
//!    shared open end for leaf edges, suffix links, and the skip/count
//!    walk-down keeping the total work linear.
//! 2. **Suffix-array extraction**: depth-first traversal visiting children
//!    in alphabet-index order, which is exactly lexicographic order.
//! 3. **BWT emission**: each suffix-array entry maps to the character
//!    preceding that suffix, with offset 0 wrapping to the terminal.
//!
//! ## Usage Example
//!
//! ```
//! use ukkonen::{bwt, SuffixTree};
//!
//! let tree = SuffixTree::build("banana$")?;
//! let suffix_array = tree.suffix_array();
//! assert_eq!(suffix_array, vec![6, 5, 3, 1, 0, 4, 2]);
//!
//! let transform = bwt::transform(tree.text(), &suffix_array);
//! assert_eq!(transform, b"annb$aa");
//! assert_eq!(bwt::invert(&transform)?, b"banana$");
//! # Ok::<(), ukkonen::TextError>(())
//! ```
//!
//! Inputs use the printable ASCII band `36..=126` with `$` as the reserved
//! terminal symbol, which must appear exactly once, at the end. Violations
//! are reported as [`TextError`] before construction starts.

#![warn(missing_docs, missing_debug_implementations)]

pub mod alphabet; // Symbol/index mapping and input validation
pub mod bwt;      // Burrows-Wheeler transform and its inverse
pub mod tree;     // Ukkonen suffix tree and suffix-array extraction
pub mod zarray;   // Z-algorithm utility

// Re-exports for convenience
pub use alphabet::{TextError, ALPHABET_SIZE, TERMINAL};
pub use tree::{SuffixTree, TreeStats};
