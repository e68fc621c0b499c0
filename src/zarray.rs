//! Gusfield's Z-algorithm.
//!
//! Linear-time prefix-match lengths, kept alongside the suffix-tree core as
//! the standard preprocessing step for the matching routines that consume
//! these indexes.

/// Z-values of `text`: `z[k]` is the length of the longest substring
/// starting at `k` that matches a prefix of `text`. `z[0]` is 0 by
/// convention.
///
/// Maintains the rightmost match window `[left, right)`; positions inside
/// the window reuse the mirrored value and only extend past the window
/// edge, giving O(n) total comparisons.
pub fn z_array(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    let mut z = vec![0usize; n];
    let mut left = 0;
    let mut right = 0;

    for k in 1..n {
        let mut matched = if k < right { z[k - left].min(right - k) } else { 0 };
        while k + matched < n && text[matched] == text[k + matched] {
            matched += 1;
        }
        z[k] = matched;
        if k + matched > right {
            left = k;
            right = k + matched;
        }
    }

    z
}
