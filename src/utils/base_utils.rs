use crate::utils::errors::ConsensusError;

lazy_static! {
    // index by base code, 0..=4
    static ref CODE_TO_DNA: Vec<u8> = vec![b'-', b'A', b'C', b'G', b'T'];
}

pub struct BaseUtils {}

impl BaseUtils {
    /// Column value for a deleted base.
    pub const GAP: u8 = 0;
    pub const BASE_A: u8 = 1;
    pub const BASE_C: u8 = 2;
    pub const BASE_G: u8 = 3;
    pub const BASE_T: u8 = 4;
    /// Column value outside a read's projected span.
    pub const PADDING: u8 = 7;

    // gap + four nucleotides, the width of a softmax row
    pub const NUM_BASE_STATES: usize = 5;

    pub fn is_base(code: u8) -> bool {
        code >= Self::BASE_A && code <= Self::BASE_T
    }

    pub fn encode_base(base: u8) -> Result<u8, ConsensusError> {
        match base {
            b'A' | b'a' => Ok(Self::BASE_A),
            b'C' | b'c' => Ok(Self::BASE_C),
            b'G' | b'g' => Ok(Self::BASE_G),
            b'T' | b't' => Ok(Self::BASE_T),
            _ => Err(ConsensusError::InvalidAlignment(format!(
                "unrecognized base {:?}",
                base as char
            ))),
        }
    }

    pub fn decode_base(code: u8) -> u8 {
        CODE_TO_DNA[code as usize]
    }

    /**
     * Convert a numeric call sequence into a DNA string, gaps included.
     * `[0, 1, 2, 0, 3, 4]` becomes `"-AC-GT"`.
     */
    pub fn numeric_to_dna(calls: &[u8]) -> String {
        let bases = calls
            .iter()
            .map(|code| Self::decode_base(*code))
            .collect::<Vec<u8>>();
        String::from_utf8(bases).unwrap()
    }

    /**
     * Drop the gap positions out of an aligned consensus, removing the
     * matching quality entries so bases and scores stay in register.
     */
    pub fn remove_gaps_with_quality(bases: &str, qscores: &[u8]) -> (String, Vec<u8>) {
        let mut kept_bases = String::with_capacity(bases.len());
        let mut kept_scores = Vec::with_capacity(qscores.len());
        for (base, score) in bases.bytes().zip(qscores.iter()) {
            if base != b'-' {
                kept_bases.push(base as char);
                kept_scores.push(*score);
            }
        }
        (kept_bases, kept_scores)
    }
}
