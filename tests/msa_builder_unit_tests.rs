use currawong::msa::alignment_info::AlignmentInfo;
use currawong::msa::msa_builder::MsaBuilder;
use currawong::reads::read_record::ReadRecord;
use currawong::utils::errors::ConsensusError;
use ndarray::{arr2, Array2};
use rand::Rng;
use rust_htslib::bam::record::Cigar;

fn read(start: i64, end: i64, bases: &str, cigar: Vec<Cigar>) -> ReadRecord {
    ReadRecord::with_default_quals(start, end, bases, cigar, "read")
}

fn build(reads: &[ReadRecord]) -> currawong::msa::alignment_info::AlignmentInfo {
    MsaBuilder::new().build(reads).unwrap()
}

#[test]
fn test_reference_match_only() {
    let reads = vec![
        read(99, 108, "TACGTACGT", vec![Cigar::Match(9)]),
        read(100, 108, "ACGTACGT", vec![Cigar::Match(8)]),
        read(100, 109, "ACGTACGTA", vec![Cigar::Match(9)]),
    ];
    let info = build(&reads);
    let expected = arr2(&[
        [1, 2, 3, 4, 1, 2, 3, 4],
        [1, 2, 3, 4, 1, 2, 3, 4],
        [1, 2, 3, 4, 1, 2, 3, 4],
    ]);
    assert_eq!(info.msa, expected);
    assert_eq!(info.reference_start(), 100);
    assert_eq!(info.reference_end(), 108);
}

#[test]
fn test_deletion_and_insert() {
    let reads = vec![
        read(
            99,
            108,
            "ATGAGCTA",
            vec![
                Cigar::Match(3),
                Cigar::Del(1),
                Cigar::Match(2),
                Cigar::Ins(1),
                Cigar::Match(2),
            ],
        ),
        read(
            99,
            107,
            "ATGAGTA",
            vec![Cigar::Match(3), Cigar::Del(1), Cigar::Match(4)],
        ),
    ];
    let info = build(&reads);
    let expected = arr2(&[[1, 4, 3, 1, 3, 2, 4, 1], [1, 4, 3, 1, 3, 0, 4, 1]]);
    assert_eq!(info.msa, expected);
    // deleted and padded cells never carry quality
    assert_eq!(info.qscores[[1, 5]], 0);
    assert_eq!(info.qscores[[0, 5]], ReadRecord::DEFAULT_BASE_QUALITY);
}

#[test]
fn test_multi_base_deletion_and_insert() {
    let reads = vec![
        read(
            99,
            108,
            "ATGAGCTA",
            vec![
                Cigar::Match(3),
                Cigar::Del(2),
                Cigar::Match(2),
                Cigar::Ins(1),
                Cigar::Match(2),
            ],
        ),
        read(
            99,
            107,
            "ATGAGTA",
            vec![Cigar::Match(3), Cigar::Del(1), Cigar::Match(4)],
        ),
    ];
    let info = build(&reads);
    let expected = arr2(&[[1, 4, 3, 0, 1, 3, 2, 4], [1, 4, 3, 1, 3, 4, 0, 1]]);
    assert_eq!(info.msa, expected);
}

#[test]
fn test_multiple_inserts_share_anchor_columns() {
    let reads = vec![
        read(
            99,
            110,
            "ACGTAAAAAC",
            vec![Cigar::Match(4), Cigar::Ins(1), Cigar::Match(5)],
        ),
        read(
            99,
            112,
            "ACGTATAAAACT",
            vec![Cigar::Match(4), Cigar::Ins(2), Cigar::Match(6)],
        ),
        read(
            99,
            110,
            "ACGTAAAAGC",
            vec![Cigar::Match(8), Cigar::Ins(1), Cigar::Match(1)],
        ),
    ];
    let info = build(&reads);
    let expected = arr2(&[
        [1, 2, 3, 4, 1, 0, 1, 1, 1, 1, 0, 2],
        [1, 2, 3, 4, 1, 4, 1, 1, 1, 1, 0, 2],
        [1, 2, 3, 4, 0, 0, 1, 1, 1, 1, 3, 2],
    ]);
    assert_eq!(info.msa, expected);
}

#[test]
fn test_three_prime_soft_clips_removed() {
    let reads = vec![
        read(
            99,
            108,
            "TACGTACGT",
            vec![Cigar::Match(6), Cigar::SoftClip(3)],
        ),
        read(
            100,
            108,
            "ACGTACGT",
            vec![Cigar::Match(5), Cigar::SoftClip(3)],
        ),
        read(
            100,
            109,
            "ACGTACGTA",
            vec![Cigar::Match(5), Cigar::SoftClip(4)],
        ),
    ];
    let info = build(&reads);
    let expected = arr2(&[
        [1, 2, 3, 4, 1],
        [1, 2, 3, 4, 1],
        [1, 2, 3, 4, 1],
    ]);
    assert_eq!(info.msa, expected);
}

#[test]
fn test_five_prime_soft_clips_removed() {
    let reads = vec![
        read(
            99,
            108,
            "TACGTACGT",
            vec![Cigar::SoftClip(2), Cigar::Match(7)],
        ),
        read(
            100,
            108,
            "ACGTACGT",
            vec![Cigar::SoftClip(1), Cigar::Match(7)],
        ),
        read(
            100,
            109,
            "ACGTACGTA",
            vec![Cigar::SoftClip(1), Cigar::Match(8)],
        ),
    ];
    let info = build(&reads);
    let expected = arr2(&[
        [3, 4, 1, 2, 3, 4, 7],
        [2, 3, 4, 1, 2, 3, 4],
        [2, 3, 4, 1, 2, 3, 4],
    ]);
    assert_eq!(info.msa, expected);
}

#[test]
fn test_trim_alignment_info_is_stable_after_build() {
    let reads = vec![
        read(
            99,
            108,
            "TACGTACGT",
            vec![Cigar::SoftClip(2), Cigar::Match(7)],
        ),
        read(
            100,
            108,
            "ACGTACGT",
            vec![Cigar::SoftClip(1), Cigar::Match(7)],
        ),
        read(
            100,
            109,
            "ACGTACGTA",
            vec![Cigar::SoftClip(1), Cigar::Match(8)],
        ),
    ];
    let mut info = build(&reads);
    info.trim_alignment_info();
    let expected = arr2(&[
        [3, 4, 1, 2, 3, 4, 7],
        [2, 3, 4, 1, 2, 3, 4],
        [2, 3, 4, 1, 2, 3, 4],
    ]);
    assert_eq!(info.msa, expected);
}

#[test]
fn test_insertions_in_partial_reads() {
    let reads = vec![
        read(
            99,
            106,
            "TACGTACGTACG",
            vec![
                Cigar::SoftClip(2),
                Cigar::Match(4),
                Cigar::Ins(2),
                Cigar::Match(4),
            ],
        ),
        read(
            100,
            107,
            "AGTATAGCGT",
            vec![
                Cigar::SoftClip(1),
                Cigar::Match(5),
                Cigar::Ins(1),
                Cigar::Match(3),
            ],
        ),
        read(
            100,
            102,
            "AGTA",
            vec![Cigar::SoftClip(1), Cigar::Match(3)],
        ),
    ];
    let info = build(&reads);
    let expected = arr2(&[
        [3, 4, 1, 2, 3, 4, 1, 0, 2, 3],
        [3, 4, 1, 0, 0, 4, 1, 3, 2, 3],
        [3, 4, 1, 7, 7, 7, 7, 7, 7, 7],
    ]);
    assert_eq!(info.msa, expected);
}

#[test]
fn test_delete_gap_major_columns() {
    let reads = vec![
        read(
            99,
            111,
            "ATGAGTA",
            vec![Cigar::Match(3), Cigar::Del(5), Cigar::Match(4)],
        ),
        read(
            99,
            111,
            "ATGAGTA",
            vec![Cigar::Match(3), Cigar::Del(5), Cigar::Match(4)],
        ),
        read(
            99,
            111,
            "ATGAGTA",
            vec![Cigar::Match(3), Cigar::Del(5), Cigar::Match(4)],
        ),
    ];
    let mut info = build(&reads);
    info.delete_gap_major_columns();
    let expected = arr2(&[
        [1, 4, 3, 1, 3, 4, 1],
        [1, 4, 3, 1, 3, 4, 1],
        [1, 4, 3, 1, 3, 4, 1],
    ]);
    assert_eq!(info.msa, expected);
}

#[test]
fn test_delete_gap_major_columns_preserves_partial_read_insertions() {
    let full = |name: &str| {
        ReadRecord::with_default_quals(99, 105, "ATGTAAG", vec![Cigar::Match(7)], name)
    };
    let reads = vec![
        ReadRecord::with_default_quals(
            99,
            105,
            "ATGAGTACAG",
            vec![
                Cigar::Match(3),
                Cigar::Ins(2),
                Cigar::Match(2),
                Cigar::Ins(1),
                Cigar::Match(2),
            ],
            "with_insertions",
        ),
        full("full_1"),
        full("full_2"),
        full("full_3"),
        ReadRecord::with_default_quals(99, 103, "ATGTA", vec![Cigar::Match(5)], "partial"),
    ];
    let mut info = build(&reads);
    info.delete_gap_major_columns();
    let expected = arr2(&[
        [1, 4, 3, 4, 1, 2, 1, 3],
        [1, 4, 3, 4, 1, 0, 1, 3],
        [1, 4, 3, 4, 1, 0, 1, 3],
        [1, 4, 3, 4, 1, 0, 1, 3],
        [1, 4, 3, 4, 1, 7, 7, 7],
    ]);
    assert_eq!(info.msa, expected);
}

#[test]
fn test_remove_empty_reads() {
    let reads = vec![
        read(
            99,
            106,
            "TACGTACGTACG",
            vec![
                Cigar::SoftClip(2),
                Cigar::Match(4),
                Cigar::Ins(2),
                Cigar::Match(4),
            ],
        ),
        read(
            100,
            107,
            "AGTATAGCGT",
            vec![
                Cigar::SoftClip(1),
                Cigar::Match(5),
                Cigar::Ins(1),
                Cigar::Match(3),
            ],
        ),
        read(97, 98, "AG", vec![Cigar::Match(2)]),
    ];
    let mut info = build(&reads);
    let removed = info.remove_empty_reads().unwrap();
    assert_eq!(removed, 1);
    let expected = arr2(&[
        [3, 4, 1, 2, 3, 4, 1, 0, 2, 3],
        [3, 4, 1, 0, 0, 4, 1, 3, 2, 3],
    ]);
    assert_eq!(info.msa, expected);
}

#[test]
fn test_set_effective_num_pass() {
    let reads = vec![
        read(
            99,
            106,
            "TACGTACGTACG",
            vec![
                Cigar::SoftClip(2),
                Cigar::Match(4),
                Cigar::Ins(2),
                Cigar::Match(4),
            ],
        ),
        read(
            100,
            107,
            "AGTATAGCGT",
            vec![
                Cigar::SoftClip(1),
                Cigar::Match(5),
                Cigar::Ins(1),
                Cigar::Match(3),
            ],
        ),
        read(97, 98, "AG", vec![Cigar::Match(2)]),
    ];
    let mut info = build(&reads);
    info.set_effective_num_pass();
    assert_eq!(info.effective_num_pass, 2);
}

#[test]
fn test_reverse_strand_broadcast() {
    let reads = vec![
        read(100, 104, "ACGT", vec![Cigar::Match(4)]),
        read(100, 104, "ACGT", vec![Cigar::Match(4)]).reverse(),
    ];
    let info = build(&reads);
    assert!(info.strands.row(0).iter().all(|strand| *strand == 0));
    assert!(info.strands.row(1).iter().all(|strand| *strand == 1));
}

#[test]
fn test_get_non_empty_columns() {
    let msa = arr2(&[
        [0, 2, 3, 4, 1, 0, 1, 1, 1, 1, 0, 2, 7],
        [0, 2, 3, 4, 1, 4, 1, 1, 1, 1, 0, 2, 7],
        [0, 2, 3, 4, 0, 0, 1, 1, 1, 1, 3, 2, 7],
    ]);
    let columns = AlignmentInfo::get_non_empty_columns(&msa);
    assert_eq!(columns, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
}

#[test]
fn test_get_more_than_one_pass_columns() {
    let msa = arr2(&[
        [0, 2, 3, 4, 1, 0, 1, 1, 1, 1, 0, 2, 7],
        [0, 2, 3, 4, 1, 4, 1, 1, 1, 1, 0, 2, 7],
        [0, 2, 3, 4, 0, 0, 1, 1, 1, 1, 3, 2, 7],
    ]);
    let columns = AlignmentInfo::get_more_than_one_pass_columns(&msa, 1, 11);
    assert_eq!(columns, vec![1, 2, 3, 4, 6, 7, 8, 9, 11]);
}

#[test]
fn test_get_non_gap_columns_with_full_read_size() {
    let msa = arr2(&[
        [0, 2, 3, 4, 1, 0, 1, 0, 2, 7],
        [0, 2, 3, 4, 1, 4, 1, 0, 2, 7],
        [0, 2, 3, 4, 0, 0, 1, 3, 2, 7],
        [0, 2, 3, 4, 1, 7, 7, 7, 7, 7],
    ]);
    let columns = AlignmentInfo::get_non_gap_columns(&msa, 3, 1, 9);
    assert_eq!(columns, vec![1, 2, 3, 4, 6, 8]);
}

#[test]
fn test_get_non_gap_columns_without_full_read_size() {
    let msa = arr2(&[
        [0, 2, 3, 4, 1, 0, 1, 0, 2, 7],
        [0, 2, 3, 4, 1, 4, 1, 0, 2, 7],
        [0, 2, 3, 4, 0, 0, 1, 3, 2, 7],
        [0, 2, 3, 4, 1, 7, 7, 7, 7, 7],
    ]);
    let columns = AlignmentInfo::get_non_gap_columns(&msa, 0, 1, 8);
    assert_eq!(columns, vec![1, 2, 3, 4, 6, 8]);
}

#[test]
fn test_get_gap_major_columns() {
    let msa = arr2(&[
        [1, 0, 3, 4, 1, 1, 0],
        [1, 2, 3, 4, 2, 2, 7],
        [1, 2, 3, 4, 3, 3, 7],
        [1, 2, 3, 4, 4, 4, 7],
    ]);
    let columns = AlignmentInfo::get_gap_major_columns(&msa);
    assert_eq!(columns, vec![6]);
}

#[test]
fn test_remove_rows_helper() {
    let msa = arr2(&[
        [1, 2, 3, 4, 1, 1, 7],
        [1, 2, 3, 4, 2, 2, 7],
        [1, 2, 3, 4, 3, 3, 7],
        [1, 2, 3, 4, 4, 4, 7],
    ]);
    let result = AlignmentInfo::remove_rows(&msa, &[1, 3]);
    let expected = arr2(&[[1, 2, 3, 4, 1, 1, 7], [1, 2, 3, 4, 3, 3, 7]]);
    assert_eq!(result, expected);
}

#[test]
fn test_remove_columns_helper() {
    let msa = arr2(&[
        [1, 2, 3, 4, 1, 1, 7],
        [1, 2, 3, 4, 2, 2, 7],
        [1, 2, 3, 4, 3, 3, 7],
        [1, 2, 3, 4, 4, 4, 7],
    ]);
    let result = AlignmentInfo::remove_columns(&msa, &[1, 3, 5]);
    let expected = arr2(&[[1, 3, 1, 7], [1, 3, 2, 7], [1, 3, 3, 7], [1, 3, 4, 7]]);
    assert_eq!(result, expected);
}

#[test]
fn test_empty_cluster_is_rejected() {
    let result = MsaBuilder::new().build(&[]);
    assert_eq!(result.unwrap_err(), ConsensusError::EmptyCluster);
}

#[test]
fn test_malformed_cigar_is_rejected() {
    // cigar consumes 5 bases, the sequence has 4
    let reads = vec![read(100, 105, "ACGT", vec![Cigar::Match(5)])];
    match MsaBuilder::new().build(&reads) {
        Err(ConsensusError::InvalidAlignment(_)) => {}
        other => panic!("expected InvalidAlignment, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_fully_soft_clipped_cluster_is_degenerate() {
    let reads = vec![read(100, 104, "ACGT", vec![Cigar::SoftClip(4)])];
    assert_eq!(
        MsaBuilder::new().build(&reads).unwrap_err(),
        ConsensusError::DegenerateCluster
    );
}

#[test]
fn test_single_read_cluster_keeps_every_column() {
    let reads = vec![read(100, 108, "ACGTACGT", vec![Cigar::Match(8)])];
    let info = build(&reads);
    assert_eq!(info.msa, arr2(&[[1, 2, 3, 4, 1, 2, 3, 4]]));
}

#[test]
fn test_random_clusters_stay_rectangular_with_legal_codes() {
    let mut rng = rand::thread_rng();
    let alphabet = [b'A', b'C', b'G', b'T'];
    for _ in 0..25 {
        let num_reads = rng.gen_range(2..6);
        let reads = (0..num_reads)
            .map(|index| {
                let start = 100 + rng.gen_range(0..3) as i64;
                let length = rng.gen_range(6..14);
                let bases = (0..length)
                    .map(|_| alphabet[rng.gen_range(0..4)] as char)
                    .collect::<String>();
                ReadRecord::with_default_quals(
                    start,
                    start + length as i64,
                    &bases,
                    vec![Cigar::Match(length as u32)],
                    &format!("read_{}", index),
                )
            })
            .collect::<Vec<ReadRecord>>();
        let info = build(&reads);
        assert_eq!(info.msa.nrows(), num_reads);
        assert_eq!(info.msa.ncols(), info.num_pass_per_column.len());
        for cell in info.msa.iter() {
            assert!(matches!(*cell, 0..=4 | 7), "illegal code {}", cell);
        }
        for (column, num_pass) in info.num_pass_per_column.iter().enumerate() {
            let counted = info
                .msa
                .column(column)
                .iter()
                .filter(|cell| **cell != 7)
                .count();
            assert_eq!(counted, *num_pass);
        }
    }
}

#[test]
fn test_no_gap_majority_survives_on_full_depth_columns() {
    let mut rng = rand::thread_rng();
    for _ in 0..25 {
        let mut rows = Vec::new();
        for _ in 0..4 {
            let row = (0..8)
                .map(|_| {
                    if rng.gen_bool(0.3) {
                        0u8
                    } else {
                        rng.gen_range(1..5) as u8
                    }
                })
                .collect::<Vec<u8>>();
            rows.push(row);
        }
        let msa = Array2::from_shape_vec(
            (4, 8),
            rows.into_iter().flatten().collect::<Vec<u8>>(),
        )
        .unwrap();
        let columns = (0..8)
            .map(|index| currawong::msa::alignment_info::MsaColumn::reference(100 + index as i64))
            .collect::<Vec<currawong::msa::alignment_info::MsaColumn>>();
        let mut info = AlignmentInfo::new(
            msa.clone(),
            Array2::zeros((4, 8)),
            Array2::zeros((4, 8)),
            columns,
        );
        info.delete_gap_major_columns();
        let max_pass = info.num_pass_per_column.iter().max().copied().unwrap_or(0);
        for column in 0..info.num_columns() {
            if info.num_pass_per_column[column] != max_pass {
                continue;
            }
            let gaps = info
                .msa
                .column(column)
                .iter()
                .filter(|cell| **cell == 0)
                .count();
            assert!(
                2 * gaps < info.num_pass_per_column[column],
                "gap majority survived in column {}",
                column
            );
        }
    }
}
