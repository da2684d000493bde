use rust_htslib::bam::record::{Cigar, CigarString};

use crate::consensus::config::AlignmentOptions;
use crate::consensus::consensus_read::{ClusterDiagnostics, ConsensusRead};
use crate::msa::alignment_info::AlignmentInfo;
use crate::msa::msa_builder::MsaBuilder;
use crate::reads::cigar_builder::CigarBuilder;
use crate::reads::read_record::ReadRecord;
use crate::utils::base_utils::BaseUtils;
use crate::utils::errors::ConsensusError;
use crate::utils::quality_utils::QualityUtils;

/// Output of one round of voting: the ungapped consensus, one quality per
/// base and the cigar carrying the gap structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingResult {
    pub bases: String,
    pub qscores: Vec<u8>,
    pub cigar: CigarString,
    pub reference_start: i64,
    pub effective_num_pass: usize,
    pub num_dropped_reads: usize,
}

/**
 * Classical column wise majority vote over the cluster MSA.
 *
 * A base call needs at least `majority_ratio` of the column's passes behind
 * it, otherwise it is emitted with quality zero. A deletion needs
 * `super_majority_deletion_threshold` of the passes, otherwise the best
 * non gap base wins the column. Insertions are resolved per anchor by a
 * length vote before the inserted bases themselves are voted on.
 */
pub struct MajorityVotingConsensus {
    majority_ratio: f64,
    min_depth: usize,
    super_majority_deletion_threshold: f64,
    calibration: AlignmentOptions,
}

impl MajorityVotingConsensus {
    pub fn new(
        majority_ratio: f64,
        min_depth: usize,
        super_majority_deletion_threshold: f64,
        calibration: AlignmentOptions,
    ) -> Result<Self, ConsensusError> {
        if !(majority_ratio > 0.0 && majority_ratio <= 1.0) {
            return Err(ConsensusError::ConfigurationError(format!(
                "majority_ratio {} outside (0, 1]",
                majority_ratio
            )));
        }
        if !(super_majority_deletion_threshold > 0.0 && super_majority_deletion_threshold <= 1.0) {
            return Err(ConsensusError::ConfigurationError(format!(
                "super_majority_deletion_threshold {} outside (0, 1]",
                super_majority_deletion_threshold
            )));
        }
        Ok(Self {
            majority_ratio,
            min_depth,
            super_majority_deletion_threshold,
            calibration,
        })
    }

    pub fn set_majority_ratio(&mut self, majority_ratio: f64) {
        self.majority_ratio = majority_ratio;
    }

    pub fn set_min_depth(&mut self, min_depth: usize) {
        self.min_depth = min_depth;
    }

    pub fn do_voting(&self, reads: &[ReadRecord]) -> Result<VotingResult, ConsensusError> {
        let mut info = MsaBuilder::new().build(reads)?;
        info.trim_alignment_info();
        let num_dropped_reads = info.remove_empty_reads()?;
        info.set_effective_num_pass();

        let mut bases = String::new();
        let mut qscores = Vec::new();
        let mut cigar_builder = CigarBuilder::new(true);

        let mut column = 0;
        while column < info.num_columns() {
            if info.columns[column].is_insertion {
                let anchor = info.columns[column].ref_pos;
                let mut run_end = column;
                while run_end < info.num_columns()
                    && info.columns[run_end].is_insertion
                    && info.columns[run_end].ref_pos == anchor
                {
                    run_end += 1;
                }
                self.resolve_insertion(
                    &info,
                    column,
                    run_end,
                    &mut bases,
                    &mut qscores,
                    &mut cigar_builder,
                )?;
                column = run_end;
            } else {
                self.vote_reference_column(
                    &info,
                    column,
                    &mut bases,
                    &mut qscores,
                    &mut cigar_builder,
                )?;
                column += 1;
            }
        }

        let reference_start =
            info.reference_start() + cigar_builder.get_leading_deletion_bases_removed() as i64;
        let cigar = cigar_builder.make(false)?;

        Ok(VotingResult {
            bases,
            qscores,
            cigar,
            reference_start,
            effective_num_pass: info.effective_num_pass,
            num_dropped_reads,
        })
    }

    pub fn build_consensus(&self, reads: &[ReadRecord]) -> Result<ConsensusRead, ConsensusError> {
        let result = self.do_voting(reads)?;
        let diagnostics = ClusterDiagnostics::new(
            &result.cigar,
            reads.len(),
            result.num_dropped_reads,
            result.effective_num_pass,
        );
        Ok(ConsensusRead::new(
            &reads[0].name,
            result.reference_start,
            result.bases,
            result.qscores,
            result.cigar,
            diagnostics,
        ))
    }

    fn vote_reference_column(
        &self,
        info: &AlignmentInfo,
        column: usize,
        bases: &mut String,
        qscores: &mut Vec<u8>,
        cigar_builder: &mut CigarBuilder,
    ) -> Result<(), ConsensusError> {
        let num_pass = info.num_pass_per_column[column];
        if num_pass < self.min_depth {
            // below depth the column is dropped, which reads as a deletion
            // against the reference
            return cigar_builder.add(Cigar::Del(1));
        }

        let counts = info.column_base_counts(column);
        let mut top = Self::argmax(&counts, 0);
        if top == BaseUtils::GAP as usize {
            let best_base = Self::argmax(&counts, 1);
            if counts[best_base] == 0
                || counts[top] as f64
                    >= self.super_majority_deletion_threshold * counts[best_base] as f64
            {
                return cigar_builder.add(Cigar::Del(1));
            }
            // gap lost its super majority, the best base takes the column
            top = best_base;
        }

        let ratio = counts[top] as f64 / num_pass as f64;
        let quality = if ratio >= self.majority_ratio {
            self.aggregate_quality(info, column, top as u8, self.calibration.base_match_score)
        } else {
            0
        };
        bases.push(BaseUtils::decode_base(top as u8) as char);
        qscores.push(quality);
        cigar_builder.add(Cigar::Match(1))
    }

    /**
     * Resolve one insertion anchor. Reads crossing the junction with no
     * event vote for length zero; the insertion is kept only when the
     * event reads reach the majority ratio among crossing reads, its
     * length is the longest one still supported by a majority of the
     * event reads, which prefers the longer candidate on vote ties.
     */
    fn resolve_insertion(
        &self,
        info: &AlignmentInfo,
        run_start: usize,
        run_end: usize,
        bases: &mut String,
        qscores: &mut Vec<u8>,
        cigar_builder: &mut CigarBuilder,
    ) -> Result<(), ConsensusError> {
        let mut event_lengths = Vec::new();
        let mut crossing_rows = Vec::new();
        for row in 0..info.num_reads() {
            let cells = (run_start..run_end)
                .map(|column| info.msa[[row, column]])
                .collect::<Vec<u8>>();
            if cells.iter().all(|cell| *cell == BaseUtils::PADDING) {
                continue;
            }
            let length = cells.iter().filter(|cell| BaseUtils::is_base(**cell)).count();
            crossing_rows.push(row);
            event_lengths.push((row, length));
        }

        let num_crossing = crossing_rows.len();
        if num_crossing < self.min_depth {
            return Ok(());
        }
        let events = event_lengths
            .iter()
            .filter(|(_, length)| *length > 0)
            .copied()
            .collect::<Vec<(usize, usize)>>();
        if (events.len() as f64) < self.majority_ratio * num_crossing as f64 {
            return Ok(());
        }

        let max_length = events.iter().map(|(_, length)| *length).max().unwrap_or(0);
        let mut consensus_length = 0;
        for length in 1..=max_length {
            let support = events.iter().filter(|(_, l)| *l >= length).count();
            if support as f64 >= self.majority_ratio * events.len() as f64 {
                consensus_length = length;
            }
        }

        for offset in 0..consensus_length {
            let column = run_start + offset;
            let contributing = events
                .iter()
                .filter(|(_, length)| *length > offset)
                .map(|(row, _)| *row)
                .collect::<Vec<usize>>();
            let mut counts = [0usize; 5];
            for row in contributing.iter() {
                counts[info.msa[[*row, column]] as usize] += 1;
            }
            let top = Self::argmax(&counts, 1);
            let ratio = counts[top] as f64 / contributing.len() as f64;
            let quality = if ratio >= self.majority_ratio {
                self.aggregate_quality(info, column, top as u8, self.calibration.insert_score)
            } else {
                0
            };
            bases.push(BaseUtils::decode_base(top as u8) as char);
            qscores.push(quality);
            cigar_builder.add(Cigar::Ins(1))?;
        }
        Ok(())
    }

    /**
     * MAPQ like aggregation: the agreeing reads pool their scores plus a
     * per extra read bonus, each disagreeing read costs its penalty, and
     * the result is clamped to [0, Q40]. A single read consensus therefore
     * keeps its input quality.
     */
    fn aggregate_quality(
        &self,
        info: &AlignmentInfo,
        column: usize,
        code: u8,
        bonus: i64,
    ) -> u8 {
        let mut quality = 0i64;
        let mut num_agree = 0i64;
        for row in 0..info.num_reads() {
            let cell = info.msa[[row, column]];
            if cell == BaseUtils::PADDING {
                continue;
            }
            if cell == code {
                quality += info.qscores[[row, column]] as i64;
                num_agree += 1;
            } else if cell == BaseUtils::GAP {
                quality -= self.calibration.delete_score;
            } else {
                quality -= self.calibration.base_mismatch_score;
            }
        }
        if num_agree > 1 {
            quality += bonus * (num_agree - 1);
        }
        QualityUtils::cap_quality(quality)
    }

    // ties go to the later base code
    fn argmax(counts: &[usize; 5], from: usize) -> usize {
        let mut best = from;
        for code in from..counts.len() {
            if counts[code] >= counts[best] {
                best = code;
            }
        }
        best
    }
}
