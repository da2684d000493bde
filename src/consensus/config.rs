use std::path::PathBuf;

use crate::utils::errors::ConsensusError;

/**
 * The four score knobs shared by the aligner-facing configuration and the
 * MAPQ like quality aggregation of the majority voter.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentOptions {
    pub base_match_score: i64,
    pub base_mismatch_score: i64,
    pub insert_score: i64,
    pub delete_score: i64,
}

impl AlignmentOptions {
    pub fn new(
        base_match_score: i64,
        base_mismatch_score: i64,
        insert_score: i64,
        delete_score: i64,
    ) -> Self {
        Self {
            base_match_score,
            base_mismatch_score,
            insert_score,
            delete_score,
        }
    }
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self::new(10, 8, 8, 6)
    }
}

/// Everything the enclosing binary decides for the engine. No persisted
/// state, no environment variables, no CLI in here.
#[derive(Debug, Clone)]
pub struct ConsensusConfig {
    pub majority_ratio: f64,
    pub min_depth: usize,
    pub super_majority_deletion_threshold: f64,
    pub alignment_options: AlignmentOptions,
    pub model_path: PathBuf,
    pub use_qscore_features: bool,
    pub batch_size: usize,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            majority_ratio: 0.5,
            min_depth: 2,
            super_majority_deletion_threshold: 1.0,
            alignment_options: AlignmentOptions::default(),
            model_path: PathBuf::new(),
            use_qscore_features: false,
            batch_size: 1,
        }
    }
}

impl ConsensusConfig {
    pub fn validate(&self) -> Result<(), ConsensusError> {
        if !(self.majority_ratio > 0.0 && self.majority_ratio <= 1.0) {
            return Err(ConsensusError::ConfigurationError(format!(
                "majority_ratio {} outside (0, 1]",
                self.majority_ratio
            )));
        }
        if !(self.super_majority_deletion_threshold > 0.0
            && self.super_majority_deletion_threshold <= 1.0)
        {
            return Err(ConsensusError::ConfigurationError(format!(
                "super_majority_deletion_threshold {} outside (0, 1]",
                self.super_majority_deletion_threshold
            )));
        }
        if self.batch_size == 0 {
            return Err(ConsensusError::ConfigurationError(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
