use ndarray::Array2;
use rayon::prelude::*;

use crate::msa::alignment_info::AlignmentInfo;
use crate::utils::base_utils::BaseUtils;
use crate::utils::errors::ConsensusError;

/// Per strand gap/A/C/G/T fractions plus the column pass count.
pub const NUM_FEATURES_WITHOUT_QSCORE: usize = 11;
/// Bin count of the optional per column quality histogram.
pub const QSCORE_HISTOGRAM_BINS: usize = 8;
pub const NUM_FEATURES_WITH_QSCORE: usize = NUM_FEATURES_WITHOUT_QSCORE + QSCORE_HISTOGRAM_BINS;

// raw scores span 0..=93
const QSCORE_BIN_WIDTH: usize = 12;

/**
 * Projects a cluster MSA into the network's input tensor.
 *
 * Feature rows, per MSA column:
 *
 *   0    fraction of forward strand deletions
 *   1-4  fraction of forward strand A, C, G, T
 *   5    fraction of reverse strand deletions
 *   6-9  fraction of reverse strand A, C, G, T
 *   10   pass count of the column
 *
 * Fractions are over the column's pass count; padding cells contribute to
 * neither numerator nor denominator. With `use_qscore_features` a
 * normalized quality histogram is appended below row 10.
 */
pub struct FeatureBuilder {
    pub use_qscore_features: bool,
}

impl FeatureBuilder {
    pub fn new(use_qscore_features: bool) -> Self {
        Self {
            use_qscore_features,
        }
    }

    pub fn num_features(&self) -> usize {
        if self.use_qscore_features {
            NUM_FEATURES_WITH_QSCORE
        } else {
            NUM_FEATURES_WITHOUT_QSCORE
        }
    }

    pub fn build(&self, info: &AlignmentInfo) -> Array2<f32> {
        let mut features = Self::calculate_feature(&info.msa, &info.strands);
        if self.use_qscore_features {
            let histogram = Self::qscore_histogram(&info.msa, &info.qscores);
            let mut stacked = Array2::<f32>::zeros((NUM_FEATURES_WITH_QSCORE, info.num_columns()));
            stacked
                .slice_mut(ndarray::s![..NUM_FEATURES_WITHOUT_QSCORE, ..])
                .assign(&features);
            stacked
                .slice_mut(ndarray::s![NUM_FEATURES_WITHOUT_QSCORE.., ..])
                .assign(&histogram);
            features = stacked;
        }
        features
    }

    /// The strand split base fraction block, `11 x num_columns`.
    pub fn calculate_feature(bases: &Array2<u8>, strands: &Array2<u8>) -> Array2<f32> {
        let num_columns = bases.ncols();
        let mut features = Array2::<f32>::zeros((NUM_FEATURES_WITHOUT_QSCORE, num_columns));
        for column in 0..num_columns {
            let mut num_pass = 0usize;
            for row in 0..bases.nrows() {
                let cell = bases[[row, column]];
                if cell == BaseUtils::PADDING {
                    continue;
                }
                num_pass += 1;
                let strand_offset = if strands[[row, column]] == 0 { 0 } else { 5 };
                features[[strand_offset + cell as usize, column]] += 1.0;
            }
            if num_pass > 0 {
                for feature in 0..10 {
                    features[[feature, column]] /= num_pass as f32;
                }
            }
            features[[10, column]] = num_pass as f32;
        }
        features
    }

    /**
     * Replace every cell of `values` whose coordinate is flagged in
     * `index_matrix` with `replacement`. Used to blank padded positions
     * before any per column statistics.
     */
    pub fn matrix_where(
        values: &Array2<f32>,
        index_matrix: &Array2<u8>,
        replacement: f32,
    ) -> Array2<f32> {
        let mut masked = values.clone();
        masked.zip_mut_with(index_matrix, |value, flag| {
            if *flag != 0 {
                *value = replacement;
            }
        });
        masked
    }

    fn qscore_histogram(bases: &Array2<u8>, qscores: &Array2<u8>) -> Array2<f32> {
        let pad_mask = bases.mapv(|cell| (cell == BaseUtils::PADDING) as u8);
        let scores = Self::matrix_where(&qscores.mapv(|score| score as f32), &pad_mask, -1.0);

        let num_columns = bases.ncols();
        let mut histogram = Array2::<f32>::zeros((QSCORE_HISTOGRAM_BINS, num_columns));
        for column in 0..num_columns {
            let mut num_pass = 0usize;
            for row in 0..bases.nrows() {
                let score = scores[[row, column]];
                if score < 0.0 {
                    continue;
                }
                num_pass += 1;
                let bin = ((score as usize) / QSCORE_BIN_WIDTH).min(QSCORE_HISTOGRAM_BINS - 1);
                histogram[[bin, column]] += 1.0;
            }
            if num_pass > 0 {
                for bin in 0..QSCORE_HISTOGRAM_BINS {
                    histogram[[bin, column]] /= num_pass as f32;
                }
            }
        }
        histogram
    }

    /**
     * Flatten per cluster feature matrices into one inference buffer,
     * cluster major, feature row major. Clusters shorter than `max_len`
     * are right padded with zero columns; a longer cluster is rejected.
     */
    pub fn create_batches(
        clusters: &[Array2<f32>],
        output: &mut Vec<f32>,
        num_features: usize,
        max_len: usize,
    ) -> Result<(), ConsensusError> {
        for features in clusters.iter() {
            if features.nrows() != num_features {
                return Err(ConsensusError::InvalidAlignment(format!(
                    "feature matrix has {} rows, expected {}",
                    features.nrows(),
                    num_features
                )));
            }
            if features.ncols() > max_len {
                return Err(ConsensusError::InvalidAlignment(format!(
                    "cluster of {} columns exceeds the batch length {}",
                    features.ncols(),
                    max_len
                )));
            }
        }

        let flattened = clusters
            .par_iter()
            .map(|features| {
                let mut flat = Vec::with_capacity(num_features * max_len);
                for feature in 0..num_features {
                    for column in 0..max_len {
                        if column < features.ncols() {
                            flat.push(features[[feature, column]]);
                        } else {
                            flat.push(0.0);
                        }
                    }
                }
                flat
            })
            .collect::<Vec<Vec<f32>>>();

        output.reserve(clusters.len() * num_features * max_len);
        for flat in flattened {
            output.extend(flat);
        }
        Ok(())
    }
}
