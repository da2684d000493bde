use ndarray::Array2;

use crate::utils::base_utils::BaseUtils;

/// Minimum alternate allele fraction that rescues a base call.
pub const MIN_AF: f32 = 0.5;
/// Applied to the softmax gap probability wherever gap is not the winner.
pub const SCALE_DOWN_GAP: f32 = 0.2;
/// Confidence assigned to calls rescued from thin evidence. Carried
/// verbatim from the trained model's calibration.
pub const SCALE_LOW_DEPTH: f32 = 0.20567;

/**
 * Post processes the network's per column softmax rows
 * (`[gap, A, C, G, T]`, one row per MSA column) before base calling.
 *
 * The transforms fire on evidence gathered from the MSA itself: the base
 * percentage matrix (fractions over both strands) and the per column pass
 * counts, never on the raw softmax values alone. They are applied in the
 * order listed in `calibrate`; each touches only the cells it describes.
 */
pub struct ProbabilityCalibrator {}

impl ProbabilityCalibrator {
    pub fn calibrate(
        softmax: &mut Array2<f32>,
        base_pct: &Array2<f32>,
        num_pass_per_column: &[usize],
    ) {
        Self::normalize_base_prob(softmax, num_pass_per_column);
        Self::update_base_prob_where_gap_is_majority(base_pct, softmax, num_pass_per_column);
        Self::update_base_prob_where_base_pct_meets_min_af(base_pct, softmax, num_pass_per_column);
        Self::update_base_prob_where_gap_is_replaced(base_pct, softmax, num_pass_per_column);
        Self::update_base_prob_where_majority_base_count_is_two(
            base_pct,
            softmax,
            num_pass_per_column,
        );
        Self::update_base_prob_where_majority_base_count_is_one(
            base_pct,
            softmax,
            num_pass_per_column,
        );
    }

    /**
     * Scale the gap probability down wherever the network itself prefers a
     * base, then renormalize the row. Keeps borderline gap mass from
     * eroding the Phred score of a clear base call.
     */
    pub fn normalize_base_prob(softmax: &mut Array2<f32>, num_pass_per_column: &[usize]) {
        for (column, mut row) in softmax.rows_mut().into_iter().enumerate() {
            if num_pass_per_column[column] == 0 {
                continue;
            }
            let gap = row[0];
            let best_base = row.iter().skip(1).cloned().fold(0.0f32, f32::max);
            if gap > 0.0 && gap < best_base {
                row[0] = gap * SCALE_DOWN_GAP;
                let total: f32 = row.iter().sum();
                if total > 0.0 {
                    row.mapv_inplace(|value| value / total);
                }
            }
        }
    }

    /**
     * Below full depth a gap majority in the MSA is a real deletion, not
     * network noise; force the gap call there.
     */
    pub fn update_base_prob_where_gap_is_majority(
        base_pct: &Array2<f32>,
        softmax: &mut Array2<f32>,
        num_pass_per_column: &[usize],
    ) {
        let full_depth = num_pass_per_column.iter().max().copied().unwrap_or(0);
        for (column, mut row) in softmax.rows_mut().into_iter().enumerate() {
            if num_pass_per_column[column] >= full_depth {
                continue;
            }
            let gap_pct = base_pct[[column, 0]];
            let best_base_pct = (1..BaseUtils::NUM_BASE_STATES)
                .map(|state| base_pct[[column, state]])
                .fold(0.0f32, f32::max);
            if gap_pct > best_base_pct {
                row.fill(0.0);
                row[0] = 1.0;
            }
        }
    }

    /**
     * Wherever a single base reaches the minimum allele fraction in the
     * MSA, drop every competing softmax entry, the gap included.
     */
    pub fn update_base_prob_where_base_pct_meets_min_af(
        base_pct: &Array2<f32>,
        softmax: &mut Array2<f32>,
        _num_pass_per_column: &[usize],
    ) {
        for (column, mut row) in softmax.rows_mut().into_iter().enumerate() {
            match Self::unique_top_base(base_pct, column) {
                Some(winner) if base_pct[[column, winner]] >= MIN_AF => {
                    for state in 0..BaseUtils::NUM_BASE_STATES {
                        if state != winner {
                            row[state] = 0.0;
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /**
     * A column split evenly between gap and one base gets the base, at low
     * confidence. Mirror image of the gap majority rule for the tied case.
     */
    pub fn update_base_prob_where_gap_is_replaced(
        base_pct: &Array2<f32>,
        softmax: &mut Array2<f32>,
        _num_pass_per_column: &[usize],
    ) {
        for (column, mut row) in softmax.rows_mut().into_iter().enumerate() {
            if base_pct[[column, 0]] < MIN_AF {
                continue;
            }
            let (winner, winner_pct) = Self::top_base(base_pct, column);
            if winner_pct >= MIN_AF {
                row.fill(0.0);
                row[winner] = SCALE_LOW_DEPTH;
            }
        }
    }

    /// With only two passes no call deserves confidence; emit the best
    /// supported base at the low depth score.
    pub fn update_base_prob_where_majority_base_count_is_two(
        base_pct: &Array2<f32>,
        softmax: &mut Array2<f32>,
        num_pass_per_column: &[usize],
    ) {
        for (column, mut row) in softmax.rows_mut().into_iter().enumerate() {
            if num_pass_per_column[column] != 2 {
                continue;
            }
            let (winner, winner_pct) = Self::top_base(base_pct, column);
            if winner_pct > 0.0 {
                row.fill(0.0);
                row[winner] = SCALE_LOW_DEPTH;
            }
        }
    }

    /// A single pass column is trusted only when the network already
    /// agrees with the lone observation.
    pub fn update_base_prob_where_majority_base_count_is_one(
        base_pct: &Array2<f32>,
        softmax: &mut Array2<f32>,
        num_pass_per_column: &[usize],
    ) {
        for (column, mut row) in softmax.rows_mut().into_iter().enumerate() {
            if num_pass_per_column[column] != 1 {
                continue;
            }
            let (winner, winner_pct) = Self::top_base(base_pct, column);
            if winner_pct <= 0.0 {
                continue;
            }
            let network_call = (0..BaseUtils::NUM_BASE_STATES)
                .fold(0, |best, state| if row[state] > row[best] { state } else { best });
            if network_call == winner {
                row.fill(0.0);
                row[winner] = SCALE_LOW_DEPTH;
            }
        }
    }

    // earliest base code wins ties
    fn top_base(base_pct: &Array2<f32>, column: usize) -> (usize, f32) {
        let mut winner = 1;
        for state in 2..BaseUtils::NUM_BASE_STATES {
            if base_pct[[column, state]] > base_pct[[column, winner]] {
                winner = state;
            }
        }
        (winner, base_pct[[column, winner]])
    }

    // None when two bases tie for the top fraction
    fn unique_top_base(base_pct: &Array2<f32>, column: usize) -> Option<usize> {
        let (winner, winner_pct) = Self::top_base(base_pct, column);
        let contested = (1..BaseUtils::NUM_BASE_STATES)
            .filter(|state| *state != winner)
            .any(|state| base_pct[[column, state]] == winner_pct);
        if contested {
            None
        } else {
            Some(winner)
        }
    }
}
