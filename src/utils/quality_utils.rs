pub struct QualityUtils {}

impl QualityUtils {
    /// Consensus qualities are capped here regardless of how much evidence
    /// agrees.
    pub const MAX_CONSENSUS_QUALITY: u8 = 40;

    // floor on the error probability so a certainty of 1.0 stays finite
    const MIN_ERROR_PROBABILITY: f64 = 1e-10;

    /**
     * Convert a call probability into a Phred score,
     * `round(-10 * log10(max(1 - p, 1e-10)))`, capped at Q40.
     */
    pub fn probability_to_phred(probability: f64) -> u8 {
        let error = (1.0 - probability).max(Self::MIN_ERROR_PROBABILITY);
        let phred = (-10.0 * error.log10()).round();
        std::cmp::min(phred as i64, Self::MAX_CONSENSUS_QUALITY as i64) as u8
    }

    pub fn cap_quality(quality: i64) -> u8 {
        quality.clamp(0, Self::MAX_CONSENSUS_QUALITY as i64) as u8
    }
}
