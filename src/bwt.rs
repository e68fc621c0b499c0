//! Burrows-Wheeler transform derivation and inversion.
//!
//! The forward transform maps each suffix-array entry to the character
//! immediately preceding that suffix in the text. The entry for offset 0
//! wraps to the final character, which is the terminal symbol for a
//! sentinel-terminated input, so the cyclic and non-cyclic definitions
//! coincide.

use crate::alphabet::{self, TextError, ALPHABET_SIZE, TERMINAL, TERMINAL_INDEX};
use crate::tree::SuffixTree;

/// Generate the BWT of a sentinel-terminated text.
///
/// Convenience for the full pipeline: suffix tree construction, suffix-array
/// extraction, then [`transform`]. Fails fast on the same preconditions as
/// [`SuffixTree::build`].
pub fn generate(text: impl Into<Vec<u8>>) -> Result<Vec<u8>, TextError> {
    let tree = SuffixTree::build(text)?;
    let suffix_array = tree.suffix_array();
    Ok(transform(tree.text(), &suffix_array))
}

/// Derive the BWT of `text` from its suffix array.
///
/// Entry `k` of the output is the character preceding suffix
/// `suffix_array[k]`; the entry for offset 0 is the final character of
/// `text`. The caller guarantees `suffix_array` is a permutation of
/// `[0, text.len())`; there are no failure modes beyond that precondition.
pub fn transform(text: &[u8], suffix_array: &[usize]) -> Vec<u8> {
    debug_assert_eq!(text.len(), suffix_array.len());
    suffix_array
        .iter()
        .map(|&start| {
            if start == 0 {
                text[text.len() - 1]
            } else {
                text[start - 1]
            }
        })
        .collect()
}

/// Reconstruct the original text from its BWT.
///
/// Walks the LF-mapping backwards from the terminal's row, using the
/// first-occurrence table of the sorted column and per-position occurrence
/// counts of the transform itself. The input must consist of supported
/// characters and contain the terminal symbol exactly once.
pub fn invert(bwt: &[u8]) -> Result<Vec<u8>, TextError> {
    let symbols = encode_transform(bwt)?;
    let n = bwt.len();

    // First-occurrence table: where each symbol's run begins in the sorted
    // first column.
    let mut counts = [0usize; ALPHABET_SIZE];
    for &symbol in &symbols {
        counts[symbol as usize] += 1;
    }
    let mut first = [0usize; ALPHABET_SIZE];
    let mut total = 0;
    for symbol in 0..ALPHABET_SIZE {
        first[symbol] = total;
        total += counts[symbol];
    }

    // Occurrence counts: occ[i] is the number of occurrences of bwt[i] in
    // bwt[..i].
    let mut occ = vec![0usize; n];
    let mut seen = [0usize; ALPHABET_SIZE];
    for (i, &symbol) in symbols.iter().enumerate() {
        occ[i] = seen[symbol as usize];
        seen[symbol as usize] += 1;
    }

    // The terminal sorts first, so its suffix heads row 0. Each LF step
    // yields the preceding character of the text.
    let mut text = vec![0u8; n];
    text[n - 1] = TERMINAL;
    let mut row = 0usize;
    for slot in (0..n - 1).rev() {
        text[slot] = bwt[row];
        row = first[symbols[row] as usize] + occ[row];
    }

    Ok(text)
}

/// Encode a BWT string into alphabet indices, requiring every byte in band
/// and the terminal exactly once (at any position).
fn encode_transform(bwt: &[u8]) -> Result<Vec<u8>, TextError> {
    if bwt.is_empty() {
        return Err(TextError::Empty);
    }

    let mut symbols = Vec::with_capacity(bwt.len());
    let mut terminal_seen = false;
    for (position, &ch) in bwt.iter().enumerate() {
        let index = alphabet::symbol_index(ch).ok_or(TextError::UnsupportedCharacter {
            ch: ch as char,
            position,
        })?;
        if index == TERMINAL_INDEX {
            if terminal_seen {
                return Err(TextError::StrayTerminal { position });
            }
            terminal_seen = true;
        }
        symbols.push(index as u8);
    }

    if !terminal_seen {
        return Err(TextError::MissingTerminal);
    }

    Ok(symbols)
}
