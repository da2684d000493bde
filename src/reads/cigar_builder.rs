use rust_htslib::bam::record::{Cigar, CigarString};

use crate::reads::cigar_utils::CigarUtils;
use crate::utils::errors::ConsensusError;

/**
 * Lets the consensus emitters build a cigar naively, one column at a time.
 * The builder takes care of:
 *
 * 1)  Merging consecutive identical operators, eg 10M5M -> 15M
 * 2)  Eliminating leading and trailing deletions, eg 10D10M -> 10M and 10M10D -> 10M
 *
 * Leading deletions that were removed are counted, so a caller can shift the
 * consensus reference start by `leading_deletion_bases_removed()`.
 *
 * All of this is achieved by invoking add() repeatedly, followed by make().
 */
pub struct CigarBuilder {
    cigar_elements: Vec<Cigar>,
    // track the last operator so we can merge consecutive elements with the
    // same operator, for example adding 3M and 4M is equivalent to adding 7M
    last_operator: Option<Cigar>,
    remove_deletions_at_ends: bool,
    leading_deletion_bases_removed: u32,
    trailing_deletion_bases_removed: u32,
}

impl CigarBuilder {
    pub fn new(remove_deletions_at_ends: bool) -> Self {
        Self {
            cigar_elements: Vec::new(),
            last_operator: None,
            remove_deletions_at_ends,
            leading_deletion_bases_removed: 0,
            trailing_deletion_bases_removed: 0,
        }
    }

    pub fn add(&mut self, element: Cigar) -> Result<(), ConsensusError> {
        if element.len() == 0 {
            return Ok(());
        }
        if CigarUtils::cigar_is_soft_clip(&element) {
            // consensus alignments are never clipped
            return Err(ConsensusError::InvalidAlignment(
                "soft clips cannot be added to a consensus cigar".to_string(),
            ));
        }

        // ignore deletions before the first aligned base
        if self.remove_deletions_at_ends && self.cigar_elements.is_empty() {
            if let Cigar::Del(length) = element {
                self.leading_deletion_bases_removed += length;
                return Ok(());
            }
        }

        if CigarUtils::cigar_elements_are_same_type(&element, &self.last_operator) {
            let n = self.cigar_elements.len() - 1;
            self.cigar_elements[n] = CigarUtils::cigar_from_element_and_length(
                &element,
                self.cigar_elements[n].len() + element.len(),
            );
        } else {
            self.cigar_elements.push(element);
            self.last_operator = Some(element);
        }
        Ok(())
    }

    pub fn add_all(&mut self, elements: Vec<Cigar>) -> Result<(), ConsensusError> {
        for element in elements {
            self.add(element)?;
        }
        Ok(())
    }

    pub fn make(mut self, allow_empty: bool) -> Result<CigarString, ConsensusError> {
        if self.remove_deletions_at_ends {
            if let Some(Cigar::Del(length)) = self.cigar_elements.last().copied() {
                self.trailing_deletion_bases_removed += length;
                self.cigar_elements.pop();
            }
        }

        if !allow_empty && self.cigar_elements.is_empty() {
            return Err(ConsensusError::InvalidAlignment(
                "no cigar elements left after removing leading and trailing deletions".to_string(),
            ));
        }

        Ok(CigarString::from(self.cigar_elements))
    }

    /**
     * Count of leading deletion bases discarded so far. These never show up
     * in make(), but they do shift where the consensus starts on the
     * reference.
     */
    pub fn get_leading_deletion_bases_removed(&self) -> u32 {
        self.leading_deletion_bases_removed
    }
}
