use std::sync::Arc;

use ndarray::{s, Array2, Array3};
use ordered_float::OrderedFloat;
use rust_htslib::bam::record::Cigar;

use crate::consensus::consensus_read::{ClusterDiagnostics, ConsensusRead};
use crate::consensus::feature_builder::FeatureBuilder;
use crate::consensus::probability_calibrator::ProbabilityCalibrator;
use crate::msa::alignment_info::AlignmentInfo;
use crate::msa::msa_builder::MsaBuilder;
use crate::reads::cigar_builder::CigarBuilder;
use crate::reads::read_record::ReadRecord;
use crate::utils::base_utils::BaseUtils;
use crate::utils::errors::ConsensusError;
use crate::utils::quality_utils::QualityUtils;

/**
 * The neural runtime behind the CNN strategy. Implementations wrap the
 * actual model (ONNX session, remote service, a stub in tests); they are
 * shared immutably across batches and must be internally thread safe.
 *
 * Input is `batch x num_features x max_len`, output must be
 * `batch x max_len x 5` with softmax rows ordered `[gap, A, C, G, T]`.
 */
pub trait Inferencer: Send + Sync {
    fn infer(&self, features: &Array3<f32>) -> Result<Array3<f32>, ConsensusError>;
}

/// What became of one cluster of a batch.
pub enum ClusterOutcome {
    Consensus(ConsensusRead),
    /// Dropped for depth below the worker's minimum, not an error.
    Filtered,
    Failed(ConsensusError),
}

struct PreparedCluster {
    info: AlignmentInfo,
    features: Array2<f32>,
    tag: String,
    num_reads: usize,
    num_dropped_reads: usize,
}

/**
 * CNN based consensus: project the cluster MSA into a feature tensor, run
 * the network once per batch, calibrate the softmax against the raw MSA
 * evidence, and call bases with Phred scores from the winning
 * probabilities.
 */
pub struct CnnConsensusStrategy {
    inferencer: Arc<dyn Inferencer>,
    feature_builder: FeatureBuilder,
}

impl CnnConsensusStrategy {
    pub fn new(inferencer: Arc<dyn Inferencer>, use_qscore_features: bool) -> Self {
        Self {
            inferencer,
            feature_builder: FeatureBuilder::new(use_qscore_features),
        }
    }

    pub fn num_features(&self) -> usize {
        self.feature_builder.num_features()
    }

    /// Collapse a single cluster, no depth gate.
    pub fn build_consensus(&self, reads: &[ReadRecord]) -> Result<ConsensusRead, ConsensusError> {
        let clusters = vec![reads.to_vec()];
        match self.call_batch(&clusters, 0).pop() {
            Some(ClusterOutcome::Consensus(read)) => Ok(read),
            Some(ClusterOutcome::Failed(error)) => Err(error),
            _ => Err(ConsensusError::DegenerateCluster),
        }
    }

    /**
     * Collapse a batch of clusters with one inference call. The returned
     * outcomes are in input order. An inference failure surfaces as
     * `Failed` on every cluster of the batch that was still pending.
     */
    pub fn call_batch(
        &self,
        clusters: &[Vec<ReadRecord>],
        min_depth: usize,
    ) -> Vec<ClusterOutcome> {
        let mut outcomes = Vec::with_capacity(clusters.len());
        let mut pending = Vec::new();
        for (index, cluster) in clusters.iter().enumerate() {
            match self.prepare_cluster(cluster, min_depth) {
                Ok(Some(prepared)) => {
                    pending.push((index, prepared));
                    outcomes.push(ClusterOutcome::Filtered); // placeholder
                }
                Ok(None) => outcomes.push(ClusterOutcome::Filtered),
                Err(error) => outcomes.push(ClusterOutcome::Failed(error)),
            }
        }
        if pending.is_empty() {
            return outcomes;
        }

        let num_features = self.num_features();
        let max_len = pending
            .iter()
            .map(|(_, prepared)| prepared.features.ncols())
            .max()
            .unwrap();
        let mut flat = Vec::new();
        let feature_matrices = pending
            .iter()
            .map(|(_, prepared)| prepared.features.clone())
            .collect::<Vec<Array2<f32>>>();
        if let Err(error) =
            FeatureBuilder::create_batches(&feature_matrices, &mut flat, num_features, max_len)
        {
            for (index, _) in pending {
                outcomes[index] = ClusterOutcome::Failed(error.clone());
            }
            return outcomes;
        }

        let batch =
            match Array3::from_shape_vec((pending.len(), num_features, max_len), flat) {
                Ok(batch) => batch,
                Err(error) => {
                    let error = ConsensusError::InferenceFailed(error.to_string());
                    for (index, _) in pending {
                        outcomes[index] = ClusterOutcome::Failed(error.clone());
                    }
                    return outcomes;
                }
            };

        let softmax = match self.inferencer.infer(&batch) {
            Ok(softmax) => softmax,
            Err(error) => {
                for (index, _) in pending {
                    outcomes[index] = ClusterOutcome::Failed(error.clone());
                }
                return outcomes;
            }
        };
        if softmax.dim().0 != pending.len()
            || softmax.dim().1 < max_len
            || softmax.dim().2 != BaseUtils::NUM_BASE_STATES
        {
            let error = ConsensusError::InferenceFailed(format!(
                "softmax shape {:?} does not cover batch {} x {} x {}",
                softmax.dim(),
                pending.len(),
                max_len,
                BaseUtils::NUM_BASE_STATES
            ));
            for (index, _) in pending {
                outcomes[index] = ClusterOutcome::Failed(error.clone());
            }
            return outcomes;
        }

        for (slice, (index, prepared)) in pending.into_iter().enumerate() {
            let num_columns = prepared.info.num_columns();
            let cluster_softmax = softmax
                .slice(s![slice, ..num_columns, ..])
                .to_owned();
            outcomes[index] = match self.finalize_cluster(prepared, cluster_softmax) {
                Ok(read) => ClusterOutcome::Consensus(read),
                Err(error) => ClusterOutcome::Failed(error),
            };
        }
        outcomes
    }

    fn prepare_cluster(
        &self,
        reads: &[ReadRecord],
        min_depth: usize,
    ) -> Result<Option<PreparedCluster>, ConsensusError> {
        let mut info = MsaBuilder::new().build(reads)?;
        info.delete_gap_major_columns();
        let num_dropped_reads = info.remove_empty_reads()?;
        info.set_effective_num_pass();
        if info.effective_num_pass < min_depth {
            debug!(
                "cluster {} below min depth ({} < {}), filtered",
                reads[0].name, info.effective_num_pass, min_depth
            );
            return Ok(None);
        }
        let features = self.feature_builder.build(&info);
        Ok(Some(PreparedCluster {
            features,
            tag: reads[0].name.clone(),
            num_reads: reads.len(),
            num_dropped_reads,
            info,
        }))
    }

    fn finalize_cluster(
        &self,
        prepared: PreparedCluster,
        mut softmax: Array2<f32>,
    ) -> Result<ConsensusRead, ConsensusError> {
        let info = &prepared.info;
        let base_pct = Self::base_percentages(info);
        ProbabilityCalibrator::calibrate(&mut softmax, &base_pct, &info.num_pass_per_column);

        let mut calls = Vec::with_capacity(info.num_columns());
        let mut probabilities = Vec::with_capacity(info.num_columns());
        for row in softmax.rows() {
            let (call, probability) = row
                .iter()
                .enumerate()
                .max_by_key(|(_, value)| OrderedFloat(**value))
                .map(|(state, value)| (state as u8, *value))
                .unwrap_or((BaseUtils::GAP, 0.0));
            calls.push(call);
            probabilities.push(probability);
        }

        let aligned_bases = BaseUtils::numeric_to_dna(&calls);
        let phred_scores = probabilities
            .iter()
            .map(|probability| QualityUtils::probability_to_phred(*probability as f64))
            .collect::<Vec<u8>>();
        let (bases, qscores) = BaseUtils::remove_gaps_with_quality(&aligned_bases, &phred_scores);

        let mut cigar_builder = CigarBuilder::new(true);
        for (column, call) in calls.iter().enumerate() {
            let is_insertion = info.columns[column].is_insertion;
            if BaseUtils::is_base(*call) {
                if is_insertion {
                    cigar_builder.add(Cigar::Ins(1))?;
                } else {
                    cigar_builder.add(Cigar::Match(1))?;
                }
            } else if !is_insertion {
                cigar_builder.add(Cigar::Del(1))?;
            }
        }
        let reference_start =
            info.reference_start() + cigar_builder.get_leading_deletion_bases_removed() as i64;
        let cigar = cigar_builder.make(false)?;

        let diagnostics = ClusterDiagnostics::new(
            &cigar,
            prepared.num_reads,
            prepared.num_dropped_reads,
            info.effective_num_pass,
        );
        Ok(ConsensusRead::new(
            &prepared.tag,
            reference_start,
            bases,
            qscores,
            cigar,
            diagnostics,
        ))
    }

    // base fractions over both strands, the calibrator's view of the MSA
    fn base_percentages(info: &AlignmentInfo) -> Array2<f32> {
        let mut base_pct =
            Array2::<f32>::zeros((info.num_columns(), BaseUtils::NUM_BASE_STATES));
        for column in 0..info.num_columns() {
            let counts = info.column_base_counts(column);
            let num_pass = info.num_pass_per_column[column];
            if num_pass == 0 {
                continue;
            }
            for state in 0..BaseUtils::NUM_BASE_STATES {
                base_pct[[column, state]] = counts[state] as f32 / num_pass as f32;
            }
        }
        base_pct
    }
}
