//! Fixed-alphabet symbol mapping shared by the tree builder and the
//! transform routines.
//!
//! Admissible input bytes are the printable ASCII band `36..=126`, mapped
//! bijectively onto `[0, ALPHABET_SIZE)`. Index 0 is reserved for the
//! terminal symbol `$` (ASCII 36), so the terminal sorts before every other
//! admissible symbol under index order.

use thiserror::Error;

/// Number of admissible symbols (ASCII `36..=126`).
pub const ALPHABET_SIZE: usize = 91;

/// Unique terminal symbol required at the end of every input text.
pub const TERMINAL: u8 = b'$';

/// Alphabet index of [`TERMINAL`].
pub const TERMINAL_INDEX: usize = 0;

const BAND_LO: u8 = b'$'; // ASCII 36
const BAND_HI: u8 = b'~'; // ASCII 126

/// Error type covering input-text precondition and alphabet-range
/// violations. Construction correctness is undefined on malformed input, so
/// callers fail fast with one of these instead of building a broken tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// Input text was empty.
    #[error("input text must be non-empty")]
    Empty,

    /// Encountered a byte outside the supported ASCII band.
    #[error("unsupported character {ch:?} at position {position} (expected ASCII '{}'..='{}')", BAND_LO as char, BAND_HI as char)]
    UnsupportedCharacter {
        /// Character that could not be mapped to an alphabet index.
        ch: char,
        /// Position within the input where the character was observed.
        position: usize,
    },

    /// The terminal symbol is required exactly once and was not found.
    #[error("text must contain the terminal symbol '{}' exactly once", TERMINAL as char)]
    MissingTerminal,

    /// The terminal symbol occurred at a position where it is not permitted.
    #[error("terminal symbol '{}' not permitted at position {position}", TERMINAL as char)]
    StrayTerminal {
        /// Position of the offending occurrence.
        position: usize,
    },
}

/// Map an input byte to its alphabet index, or `None` if it falls outside
/// the supported band.
#[inline]
pub fn symbol_index(ch: u8) -> Option<usize> {
    if (BAND_LO..=BAND_HI).contains(&ch) {
        Some((ch - BAND_LO) as usize)
    } else {
        None
    }
}

/// Inverse of [`symbol_index`]. Panics on indices outside `[0, ALPHABET_SIZE)`.
#[inline]
pub fn index_symbol(index: usize) -> u8 {
    assert!(index < ALPHABET_SIZE, "alphabet index {index} out of range");
    BAND_LO + index as u8
}

/// Encode a sentinel-terminated text into alphabet indices, enforcing the
/// builder preconditions: non-empty, every byte inside the band, and the
/// terminal symbol exactly once, at the final position.
pub fn encode_terminated(text: &[u8]) -> Result<Vec<u8>, TextError> {
    if text.is_empty() {
        return Err(TextError::Empty);
    }

    let last = text.len() - 1;
    let mut indices = Vec::with_capacity(text.len());
    for (position, &ch) in text.iter().enumerate() {
        let index = symbol_index(ch).ok_or(TextError::UnsupportedCharacter {
            ch: ch as char,
            position,
        })?;
        if index == TERMINAL_INDEX && position != last {
            return Err(TextError::StrayTerminal { position });
        }
        indices.push(index as u8);
    }

    if indices[last] as usize != TERMINAL_INDEX {
        return Err(TextError::MissingTerminal);
    }

    Ok(indices)
}

/// Check the builder preconditions without keeping the encoded form.
pub fn validate_terminated(text: &[u8]) -> Result<(), TextError> {
    encode_terminated(text).map(|_| ())
}
