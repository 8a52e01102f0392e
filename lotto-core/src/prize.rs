//! Fixed prize rules.

/// Ordered prize table: `(matched, strong_match, prize)`. First match wins.
pub const PRIZE_TABLE: [(usize, bool, i64); 3] = [(6, true, 1000), (6, false, 600), (4, true, 400)];

/// Prize for a graded ticket. Anything not in the table pays 0.
pub fn calculate_prize(matched: usize, strong_match: bool) -> i64 {
    PRIZE_TABLE
        .iter()
        .find(|(count, strong, _)| *count == matched && *strong == strong_match)
        .map_or(0, |(_, _, prize)| *prize)
}

/// Values of `picked` that also appear in `winning`, in `picked` order.
pub fn matched_numbers(picked: &[u32], winning: &[u32]) -> Vec<u32> {
    picked
        .iter()
        .copied()
        .filter(|n| winning.contains(n))
        .collect()
}
