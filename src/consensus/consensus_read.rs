use rust_htslib::bam::record::{Cigar, CigarString};

/// Shape counts of the collapsed cluster, carried on the consensus read and
/// folded into its name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClusterDiagnostics {
    pub insertion_events: usize,
    pub deletion_events: usize,
    pub num_reads: usize,
    pub num_dropped_reads: usize,
    pub effective_num_pass: usize,
}

impl ClusterDiagnostics {
    pub fn new(
        cigar: &CigarString,
        num_reads: usize,
        num_dropped_reads: usize,
        effective_num_pass: usize,
    ) -> Self {
        let mut insertion_events = 0;
        let mut deletion_events = 0;
        for element in cigar.iter() {
            match element {
                Cigar::Ins(_) => insertion_events += 1,
                Cigar::Del(_) => deletion_events += 1,
                _ => {}
            }
        }
        Self {
            insertion_events,
            deletion_events,
            num_reads,
            num_dropped_reads,
            effective_num_pass,
        }
    }
}

/**
 * The collapsed result of one cluster: an ungapped base string with one
 * Phred score per base and a cigar carrying the indel structure against
 * the reference. Owned by whichever sink receives it.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusRead {
    pub reference_start: i64,
    pub bases: String,
    pub qscores: Vec<u8>,
    pub cigar: CigarString,
    pub read_name: String,
    pub diagnostics: ClusterDiagnostics,
}

impl ConsensusRead {
    pub fn new(
        cluster_tag: &str,
        reference_start: i64,
        bases: String,
        qscores: Vec<u8>,
        cigar: CigarString,
        diagnostics: ClusterDiagnostics,
    ) -> Self {
        let read_name = Self::format_read_name(cluster_tag, &diagnostics);
        Self {
            reference_start,
            bases,
            qscores,
            cigar,
            read_name,
            diagnostics,
        }
    }

    /// `{tag}-{ins}-{del}-{reads}-{dropped}-{depth}`
    pub fn format_read_name(cluster_tag: &str, diagnostics: &ClusterDiagnostics) -> String {
        format!(
            "{}-{}-{}-{}-{}-{}",
            cluster_tag,
            diagnostics.insertion_events,
            diagnostics.deletion_events,
            diagnostics.num_reads,
            diagnostics.num_dropped_reads,
            diagnostics.effective_num_pass
        )
    }
}
