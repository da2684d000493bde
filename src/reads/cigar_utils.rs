use rust_htslib::bam::record::{Cigar, CigarString};

use crate::utils::errors::ConsensusError;

pub struct CigarUtils {}

impl CigarUtils {
    pub fn cigar_consumes_read_bases(cig: &Cigar) -> bool {
        // Consumes read bases
        match cig {
            Cigar::Match(_) | Cigar::Ins(_) | Cigar::SoftClip(_) => true,
            _ => false,
        }
    }

    pub fn cigar_consumes_reference_bases(cig: &Cigar) -> bool {
        // consumes reference bases
        match cig {
            Cigar::Match(_) | Cigar::Del(_) => true,
            _ => false,
        }
    }

    pub fn cigar_is_soft_clip(cig: &Cigar) -> bool {
        match cig {
            Cigar::SoftClip(_) => true,
            _ => false,
        }
    }

    pub fn cigar_elements_are_same_type(this: &Cigar, other: &Option<Cigar>) -> bool {
        match other {
            None => false,
            Some(other) => match (this, other) {
                (Cigar::Match(_), Cigar::Match(_))
                | (Cigar::Ins(_), Cigar::Ins(_))
                | (Cigar::Del(_), Cigar::Del(_))
                | (Cigar::SoftClip(_), Cigar::SoftClip(_)) => true,
                _ => false,
            },
        }
    }

    pub fn cigar_from_element_and_length(cigar: &Cigar, length: u32) -> Cigar {
        match cigar {
            Cigar::Match(_) => Cigar::Match(length),
            Cigar::Ins(_) => Cigar::Ins(length),
            Cigar::Del(_) => Cigar::Del(length),
            Cigar::SoftClip(_) => Cigar::SoftClip(length),
            Cigar::RefSkip(_) => Cigar::RefSkip(length),
            Cigar::Equal(_) => Cigar::Equal(length),
            Cigar::Diff(_) => Cigar::Diff(length),
            Cigar::Pad(_) => Cigar::Pad(length),
            Cigar::HardClip(_) => Cigar::HardClip(length),
        }
    }

    /// Number of read bases the cigar consumes.
    pub fn read_length(cigar: &CigarString) -> usize {
        cigar
            .iter()
            .filter(|element| Self::cigar_consumes_read_bases(element))
            .map(|element| element.len() as usize)
            .sum()
    }

    /// Number of reference bases the cigar consumes.
    pub fn reference_length(cigar: &CigarString) -> usize {
        cigar
            .iter()
            .filter(|element| Self::cigar_consumes_reference_bases(element))
            .map(|element| element.len() as usize)
            .sum()
    }

    /**
     * Reject cigars carrying operators this engine does not model. Reads
     * reaching the collapser are plain alignments of {M, I, D, S}; hard
     * clips, skips and pads indicate an upstream problem.
     */
    pub fn validate_operators(cigar: &CigarString) -> Result<(), ConsensusError> {
        for element in cigar.iter() {
            match element {
                Cigar::Match(_) | Cigar::Ins(_) | Cigar::Del(_) | Cigar::SoftClip(_) => continue,
                other => {
                    return Err(ConsensusError::InvalidAlignment(format!(
                        "unsupported cigar operator {}",
                        other
                    )))
                }
            }
        }
        Ok(())
    }
}
