//! Ranker - Orders alternatives by score with a stable tie-break.

/// Default relative tolerance under which two scores count as tied.
pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-9;

/// Score ordering functions.
pub struct Ranker;

impl Ranker {
    /// Returns alternative indices from most to least suitable.
    ///
    /// # Algorithm
    /// Stable descending sort on the scores, then every run of consecutive
    /// scores tied with the run's first score is put back into input order.
    /// Position `k` of the result holds the alternative with rank `k + 1`.
    ///
    /// # Edge Cases
    /// - Empty scores: returns empty Vec
    /// - Exact and near ties: earlier input index ranks first
    /// - Ranks are never shared
    pub fn order(scores: &[f64], tolerance: f64) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut start = 0;
        while start < order.len() {
            let anchor = scores[order[start]];
            let mut end = start + 1;
            while end < order.len() && Self::is_tie(anchor, scores[order[end]], tolerance) {
                end += 1;
            }
            order[start..end].sort_unstable();
            start = end;
        }

        order
    }

    /// Checks if two scores are equal within a relative tolerance.
    pub fn is_tie(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance * a.abs().max(b.abs())
    }
}
