//! Ordered-subsequence matching used to filter the clipboard history.
//!
//! This is an inclusion test, not a relevance score: every character of the
//! needle must appear in the haystack in the same order, with arbitrary gaps.
//! The scan is greedy (earliest possible alignment) and never backtracks, so a
//! comparison costs O(|haystack|).

/// Returns `true` when every character of `needle` occurs in `haystack` in order.
///
/// Matching is case-sensitive; callers normalize case beforehand.
///
/// - An empty needle matches anything.
/// - A needle longer than the haystack never matches.
/// - A needle of the same length matches only itself.
///
/// # Examples
///
/// ```
/// use tw_core::fuzzy::fuzzy_match;
///
/// assert!(fuzzy_match("wd", "world"));
/// assert!(fuzzy_match("wd", "wide"));
/// assert!(!fuzzy_match("wd", "dog"));
/// ```
pub fn fuzzy_match(needle: &str, haystack: &str) -> bool {
    let needle_len = needle.chars().count();
    let haystack_len = haystack.chars().count();

    if needle_len > haystack_len {
        return false;
    }
    if needle_len == haystack_len {
        return needle == haystack;
    }

    let mut hay = haystack.chars();
    needle.chars().all(|wanted| hay.any(|c| c == wanted))
}
