use currawong::consensus::config::AlignmentOptions;
use currawong::consensus::majority_voting::MajorityVotingConsensus;
use currawong::consensus::strategy::ConsensusStrategy;
use currawong::reads::read_record::ReadRecord;
use currawong::utils::errors::ConsensusError;
use rust_htslib::bam::record::Cigar;

fn read(start: i64, end: i64, bases: &str, cigar: Vec<Cigar>) -> ReadRecord {
    ReadRecord::with_default_quals(start, end, bases, cigar, "A")
}

fn voter(majority_ratio: f64, min_depth: usize) -> MajorityVotingConsensus {
    MajorityVotingConsensus::new(
        majority_ratio,
        min_depth,
        1.0,
        AlignmentOptions::new(10, 8, 8, 6),
    )
    .unwrap()
}

#[test]
fn test_min_depth_drops_thin_columns() {
    let reads = vec![
        read(100, 108, "ACGTACGT", vec![Cigar::Match(8)]),
        read(100, 103, "ACG", vec![Cigar::Match(3)]),
        read(105, 108, "CGT", vec![Cigar::Match(3)]),
    ];
    let result = voter(0.5, 2).do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGCGT");
    // the two dropped columns surface as an interior deletion
    assert_eq!(
        result.cigar.0,
        vec![Cigar::Match(3), Cigar::Del(2), Cigar::Match(3)]
    );
}

#[test]
fn test_min_depth_with_wiggle() {
    let reads = vec![
        read(99, 108, "TACGTACGT", vec![Cigar::Match(9)]),
        read(100, 108, "ACGTACGT", vec![Cigar::Match(8)]),
        read(100, 109, "ACGTACGTA", vec![Cigar::Match(9)]),
    ];
    let result = voter(0.5, 2).do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTACGT");
    assert_eq!(result.reference_start, 100);
}

#[test]
fn test_agreeing_reads_pool_to_max_qscore() {
    let reads = vec![
        ReadRecord::new(
            100,
            104,
            "ACGT",
            vec![Cigar::Match(4)],
            vec![20, 20, 20, 20],
            "A",
        ),
        ReadRecord::new(
            100,
            104,
            "ACGT",
            vec![Cigar::Match(4)],
            vec![10, 40, 30, 20],
            "A",
        ),
    ];
    let result = voter(0.5, 0).do_voting(&reads).unwrap();
    assert_eq!(result.qscores, vec![40, 40, 40, 40]);
}

#[test]
fn test_ambiguous_columns_get_zero_quality() {
    let mut reads = vec![
        read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]),
        read(100, 116, "CCGTTCGTACGTACGG", vec![Cigar::Match(16)]),
        read(100, 116, "TCGTGCGTACGTACGC", vec![Cigar::Match(16)]),
    ];
    let mut voter = voter(0.5, 0);
    let result = voter.do_voting(&reads).unwrap();
    assert_eq!(result.qscores[0], 0);
    assert_eq!(result.qscores[4], 0);
    assert_eq!(*result.qscores.last().unwrap(), 0);

    // two more copies of the last read give every column a clear winner
    reads.push(read(100, 116, "TCGTGCGTACGTACGC", vec![Cigar::Match(16)]));
    reads.push(read(100, 116, "TCGTGCGTACGTACGC", vec![Cigar::Match(16)]));
    let result = voter.do_voting(&reads).unwrap();
    assert!(result.qscores.iter().all(|quality| *quality == 40));

    // a higher bar flips the contested columns back to ambiguous
    voter.set_majority_ratio(0.7);
    let result = voter.do_voting(&reads).unwrap();
    assert_eq!(result.qscores[0], 0);
    assert_eq!(result.qscores[4], 0);
    assert_eq!(*result.qscores.last().unwrap(), 0);
}

#[test]
fn test_position_wiggle_is_handled() {
    let reads = vec![
        read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]),
        read(102, 118, "GTACGTACGTACGTAC", vec![Cigar::Match(16)]),
        read(101, 117, "CGTACGTACGTACGTA", vec![Cigar::Match(16)]),
    ];
    let result = voter(0.5, 0).do_voting(&reads).unwrap();
    assert_eq!(result.bases, "CGTACGTACGTACGTA");
}

#[test]
fn test_simple_deletion() {
    let deleted = || {
        read(
            100,
            116,
            "ACGTCGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Del(1), Cigar::Match(11)],
        )
    };
    let mut reads = vec![
        read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]),
        deleted(),
        deleted(),
    ];
    let generator = voter(0.5, 0);
    let result = generator.do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTCGTACGTACGT");
    assert_eq!(
        result.cigar.0,
        vec![Cigar::Match(4), Cigar::Del(1), Cigar::Match(11)]
    );

    // outvoted, the deletion disappears
    reads.push(read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]));
    reads.push(read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]));
    let result = generator.do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTACGTACGTACGT");
    assert_eq!(result.cigar.0, vec![Cigar::Match(16)]);
}

#[test]
fn test_deletion_with_lower_super_majority_threshold() {
    let deleted = || {
        read(
            100,
            116,
            "ACGTCGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Del(1), Cigar::Match(11)],
        )
    };
    let mut reads = vec![
        read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]),
        deleted(),
        deleted(),
    ];
    let generator =
        MajorityVotingConsensus::new(0.5, 0, 0.5, AlignmentOptions::default()).unwrap();
    let result = generator.do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTCGTACGTACGT");
    assert_eq!(
        result.cigar.0,
        vec![Cigar::Match(4), Cigar::Del(1), Cigar::Match(11)]
    );

    reads.push(read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]));
    reads.push(read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]));
    let result = generator.do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTACGTACGTACGT");
}

#[test]
fn test_simple_insertion() {
    let inserted = || {
        read(
            100,
            116,
            "ACGTAAACGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Ins(2), Cigar::Match(12)],
        )
    };
    let mut reads = vec![
        read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]),
        inserted(),
        inserted(),
    ];
    let generator = voter(0.5, 0);
    let result = generator.do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTAAACGTACGTACGT");
    assert_eq!(
        result.cigar.0,
        vec![Cigar::Match(4), Cigar::Ins(2), Cigar::Match(12)]
    );

    // outvoted, the insertion disappears
    reads.push(read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]));
    reads.push(read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]));
    let result = generator.do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTACGTACGTACGT");
}

#[test]
fn test_insertions_of_different_lengths() {
    let reads = vec![
        read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]),
        read(
            100,
            116,
            "ACGTAAACGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Ins(2), Cigar::Match(12)],
        ),
        read(
            100,
            116,
            "ACGTAAACGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Ins(2), Cigar::Match(12)],
        ),
        read(
            100,
            116,
            "ACGTAAAACGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Ins(3), Cigar::Match(12)],
        ),
    ];
    let result = voter(0.5, 0).do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTAAACGTACGTACGT");
}

#[test]
fn test_insertion_sequence_tie_prefers_supported_length() {
    let reads = vec![
        read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]),
        // insertion is T
        read(
            100,
            116,
            "ACGTTACGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Ins(1), Cigar::Match(12)],
        ),
        // insertion is AA
        read(
            100,
            116,
            "ACGTAAACGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Ins(2), Cigar::Match(12)],
        ),
        // insertion is AAT
        read(
            100,
            116,
            "ACGTAATACGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Ins(3), Cigar::Match(12)],
        ),
        // insertion is ATAT
        read(
            100,
            116,
            "ACGTATATACGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Ins(4), Cigar::Match(12)],
        ),
    ];
    let result = voter(0.5, 0).do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTAATACGTACGTACGT");
}

#[test]
fn test_single_read_consensus_is_identity() {
    let reads = vec![ReadRecord::new(
        100,
        108,
        "ACGTACGT",
        vec![Cigar::Match(8)],
        vec![2, 15, 27, 40, 41, 60, 93, 0],
        "lonely",
    )];
    let result = voter(0.5, 0).do_voting(&reads).unwrap();
    assert_eq!(result.bases, "ACGTACGT");
    // input qualities survive, capped at Q40
    assert_eq!(result.qscores, vec![2, 15, 27, 40, 40, 40, 40, 0]);
    assert_eq!(result.cigar.0, vec![Cigar::Match(8)]);
    assert_eq!(result.reference_start, 100);
}

#[test]
fn test_build_consensus_derives_the_read_name() {
    let deleted = || {
        read(
            100,
            116,
            "ACGTCGTACGTACGT",
            vec![Cigar::Match(4), Cigar::Del(1), Cigar::Match(11)],
        )
    };
    let reads = vec![
        read(100, 116, "ACGTACGTACGTACGT", vec![Cigar::Match(16)]),
        deleted(),
        deleted(),
    ];
    let strategy = ConsensusStrategy::MajorityVoting(voter(0.5, 0));
    let consensus = strategy.build_consensus(&reads).unwrap();
    // one deletion event, three reads, full depth three
    assert_eq!(consensus.read_name, "A-0-1-3-0-3");
    assert_eq!(consensus.diagnostics.deletion_events, 1);
}

#[test]
fn test_invalid_majority_ratio_is_a_configuration_error() {
    for ratio in [0.0, -0.5, 1.5] {
        match MajorityVotingConsensus::new(ratio, 0, 1.0, AlignmentOptions::default()) {
            Err(ConsensusError::ConfigurationError(_)) => {}
            _ => panic!("ratio {} should be rejected", ratio),
        }
    }
    match MajorityVotingConsensus::new(0.5, 0, 0.0, AlignmentOptions::default()) {
        Err(ConsensusError::ConfigurationError(_)) => {}
        _ => panic!("zero deletion threshold should be rejected"),
    }
}
