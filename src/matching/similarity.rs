/*!
 * Title similarity scoring.
 *
 * Provides the longest-common-subsequence matching ratio used to compare
 * a cleaned row title against candidate titles from the catalog.
 */

/// Calculate similarity between two strings (0.0-1.0)
///
/// Uses the matching ratio `2 * lcs(a, b) / (len(a) + len(b))`: identical
/// strings score 1.0, strings with no characters in common score 0.0.
/// Comparison is exact, callers lowercase both sides beforehand.
pub fn title_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let matched = lcs_length(&a_chars, &b_chars);

    (2.0 * matched as f64) / ((a_chars.len() + b_chars.len()) as f64)
}

/// Longest common subsequence length between two character slices
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let a_len = a.len();
    let b_len = b.len();

    // Use two-row optimization for space efficiency
    let mut prev_row: Vec<usize> = vec![0; b_len + 1];
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for i in 1..=a_len {
        for j in 1..=b_len {
            curr_row[j] = if a[i - 1] == b[j - 1] {
                prev_row[j - 1] + 1
            } else {
                prev_row[j].max(curr_row[j - 1])
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}
