use rust_htslib::bam::record::{Cigar, CigarString};

use crate::reads::cigar_utils::CigarUtils;
use crate::utils::errors::ConsensusError;

/**
 * One aligned read of a cluster, as handed over by the BAM reader.
 *
 * `reference_end` is exclusive. The cigar is restricted to
 * {Match, Ins, Del, SoftClip}; the sum of its read-consuming lengths must
 * equal the number of bases, which must equal the number of quality scores.
 * The record is consumed read only, all engine transforms work on copies.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRecord {
    pub reference_start: i64,
    pub reference_end: i64,
    pub bases: Vec<u8>,
    pub cigar: CigarString,
    pub qscores: Vec<u8>,
    pub is_reverse: bool,
    pub name: String,
}

impl ReadRecord {
    /// Quality assumed for reads whose producer did not keep scores.
    pub const DEFAULT_BASE_QUALITY: u8 = 20;

    pub fn new(
        reference_start: i64,
        reference_end: i64,
        bases: &str,
        cigar: Vec<Cigar>,
        qscores: Vec<u8>,
        name: &str,
    ) -> Self {
        Self {
            reference_start,
            reference_end,
            bases: bases.as_bytes().to_vec(),
            cigar: CigarString(cigar),
            qscores,
            is_reverse: false,
            name: name.to_string(),
        }
    }

    /// Construct with every base at the default quality.
    pub fn with_default_quals(
        reference_start: i64,
        reference_end: i64,
        bases: &str,
        cigar: Vec<Cigar>,
        name: &str,
    ) -> Self {
        let qscores = vec![Self::DEFAULT_BASE_QUALITY; bases.len()];
        Self::new(reference_start, reference_end, bases, cigar, qscores, name)
    }

    pub fn reverse(mut self) -> Self {
        self.is_reverse = true;
        self
    }

    pub fn validate(&self) -> Result<(), ConsensusError> {
        CigarUtils::validate_operators(&self.cigar)?;
        let read_length = CigarUtils::read_length(&self.cigar);
        if read_length != self.bases.len() {
            return Err(ConsensusError::InvalidAlignment(format!(
                "read {}: cigar consumes {} bases but the sequence has {}",
                self.name,
                read_length,
                self.bases.len()
            )));
        }
        if self.qscores.len() != self.bases.len() {
            return Err(ConsensusError::InvalidAlignment(format!(
                "read {}: {} quality scores for {} bases",
                self.name,
                self.qscores.len(),
                self.bases.len()
            )));
        }
        Ok(())
    }

    /**
     * A copy with leading and trailing soft clips stripped from the cigar
     * together with their bases and scores. Soft clips never consume
     * reference, so the alignment coordinates are unchanged. Returns None
     * when the read was nothing but clips.
     */
    pub fn without_soft_clips(&self) -> Option<ReadRecord> {
        let mut elements = self.cigar.0.clone();
        let mut clip_front = 0usize;
        let mut clip_back = 0usize;

        while let Some(Cigar::SoftClip(length)) = elements.first().copied() {
            clip_front += length as usize;
            elements.remove(0);
        }
        while let Some(Cigar::SoftClip(length)) = elements.last().copied() {
            clip_back += length as usize;
            elements.pop();
        }
        if elements.is_empty() {
            return None;
        }

        let kept = self.bases.len() - clip_back;
        Some(ReadRecord {
            reference_start: self.reference_start,
            reference_end: self.reference_end,
            bases: self.bases[clip_front..kept].to_vec(),
            cigar: CigarString(elements),
            qscores: self.qscores[clip_front..kept].to_vec(),
            is_reverse: self.is_reverse,
            name: self.name.clone(),
        })
    }

    /// Span actually covered on the reference, as implied by the cigar.
    pub fn cigar_reference_span(&self) -> (i64, i64) {
        let reference_length = CigarUtils::reference_length(&self.cigar) as i64;
        (
            self.reference_start,
            self.reference_start + reference_length,
        )
    }
}
