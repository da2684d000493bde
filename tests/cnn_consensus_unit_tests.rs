use approx::assert_abs_diff_eq;
use currawong::consensus::feature_builder::{
    FeatureBuilder, NUM_FEATURES_WITHOUT_QSCORE,
};
use currawong::consensus::probability_calibrator::{
    ProbabilityCalibrator, SCALE_LOW_DEPTH,
};
use currawong::utils::base_utils::BaseUtils;
use currawong::utils::errors::ConsensusError;
use currawong::utils::quality_utils::QualityUtils;
use ndarray::{arr2, Array2};

// the three read, six column fixture shared by the feature tests
fn fixture_bases() -> Array2<u8> {
    arr2(&[
        [1, 2, 0, 4, 4, 3],
        [0, 2, 4, 4, 0, 3],
        [1, 2, 4, 4, 4, 2],
    ])
}

fn fixture_strands() -> Array2<u8> {
    arr2(&[
        [0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0],
        [1, 1, 1, 1, 1, 1],
    ])
}

// per column rows of the expected feature matrix:
// +del +A +C +G +T -del -A -C -G -T total
fn fixture_expected_columns() -> Array2<f32> {
    let third = 1.0f32 / 3.0;
    let two_thirds = 2.0f32 / 3.0;
    arr2(&[
        [third, third, 0.0, 0.0, 0.0, 0.0, third, 0.0, 0.0, 0.0, 3.0],
        [0.0, 0.0, two_thirds, 0.0, 0.0, 0.0, 0.0, third, 0.0, 0.0, 3.0],
        [third, 0.0, 0.0, 0.0, third, 0.0, 0.0, 0.0, 0.0, third, 3.0],
        [0.0, 0.0, 0.0, 0.0, two_thirds, 0.0, 0.0, 0.0, 0.0, third, 3.0],
        [third, 0.0, 0.0, 0.0, third, 0.0, 0.0, 0.0, 0.0, third, 3.0],
        [0.0, 0.0, 0.0, two_thirds, 0.0, 0.0, 0.0, third, 0.0, 0.0, 3.0],
    ])
}

fn assert_features_match(features: &Array2<f32>, expected_columns: &Array2<f32>) {
    assert_eq!(features.nrows(), expected_columns.ncols());
    assert_eq!(features.ncols(), expected_columns.nrows());
    for column in 0..features.ncols() {
        for feature in 0..features.nrows() {
            assert_abs_diff_eq!(
                features[[feature, column]],
                expected_columns[[column, feature]],
                epsilon = 1e-5
            );
        }
    }
}

#[test]
fn test_calculate_feature() {
    let features = FeatureBuilder::calculate_feature(&fixture_bases(), &fixture_strands());
    assert_features_match(&features, &fixture_expected_columns());
}

#[test]
fn test_calculate_feature_with_partial_reads() {
    let bases = arr2(&[
        [1, 2, 0, 4, 4, 3],
        [7, 2, 4, 4, 0, 3],
        [1, 2, 4, 4, 4, 7],
    ]);
    let third = 1.0f32 / 3.0;
    let two_thirds = 2.0f32 / 3.0;
    let expected_columns = arr2(&[
        [0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 2.0],
        [0.0, 0.0, two_thirds, 0.0, 0.0, 0.0, 0.0, third, 0.0, 0.0, 3.0],
        [third, 0.0, 0.0, 0.0, third, 0.0, 0.0, 0.0, 0.0, third, 3.0],
        [0.0, 0.0, 0.0, 0.0, two_thirds, 0.0, 0.0, 0.0, 0.0, third, 3.0],
        [third, 0.0, 0.0, 0.0, third, 0.0, 0.0, 0.0, 0.0, third, 3.0],
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0],
    ]);
    let features = FeatureBuilder::calculate_feature(&bases, &fixture_strands());
    assert_features_match(&features, &expected_columns);
}

#[test]
fn test_feature_fractions_sum_to_one_on_covered_columns() {
    let features = FeatureBuilder::calculate_feature(&fixture_bases(), &fixture_strands());
    for column in 0..features.ncols() {
        if features[[10, column]] > 0.0 {
            let total: f32 = (0..10).map(|feature| features[[feature, column]]).sum();
            assert_abs_diff_eq!(total, 1.0, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_matrix_where() {
    let values = Array2::<f32>::ones((3, 3));
    let index = arr2(&[[10u8, 0, 0], [0, 5, 0], [0, 0, 1]]);
    let masked = FeatureBuilder::matrix_where(&values, &index, -1.0);
    let expected = arr2(&[[-1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, -1.0]]);
    assert_eq!(masked, expected);
}

#[test]
fn test_create_batches() {
    let features = FeatureBuilder::calculate_feature(&fixture_bases(), &fixture_strands());
    let expected_columns = fixture_expected_columns();
    let mut expected_flat = Vec::new();
    for feature in 0..NUM_FEATURES_WITHOUT_QSCORE {
        for column in 0..6 {
            expected_flat.push(expected_columns[[column, feature]]);
        }
    }

    let clusters = vec![features.clone(), features];
    let mut batch = Vec::new();
    FeatureBuilder::create_batches(&clusters, &mut batch, NUM_FEATURES_WITHOUT_QSCORE, 6)
        .unwrap();
    assert_eq!(batch.len(), 2 * expected_flat.len());
    for (index, value) in batch.iter().enumerate() {
        assert_abs_diff_eq!(
            *value,
            expected_flat[index % expected_flat.len()],
            epsilon = 1e-5
        );
    }
}

#[test]
fn test_create_batches_right_pads_short_clusters() {
    let features = FeatureBuilder::calculate_feature(&fixture_bases(), &fixture_strands());
    let mut batch = Vec::new();
    FeatureBuilder::create_batches(
        &[features.clone()],
        &mut batch,
        NUM_FEATURES_WITHOUT_QSCORE,
        8,
    )
    .unwrap();
    assert_eq!(batch.len(), NUM_FEATURES_WITHOUT_QSCORE * 8);
    for feature in 0..NUM_FEATURES_WITHOUT_QSCORE {
        assert_eq!(batch[feature * 8 + 6], 0.0);
        assert_eq!(batch[feature * 8 + 7], 0.0);
        assert_abs_diff_eq!(batch[feature * 8], features[[feature, 0]], epsilon = 1e-6);
    }
}

#[test]
fn test_create_batches_rejects_overlong_clusters() {
    let features = FeatureBuilder::calculate_feature(&fixture_bases(), &fixture_strands());
    let mut batch = Vec::new();
    let result =
        FeatureBuilder::create_batches(&[features], &mut batch, NUM_FEATURES_WITHOUT_QSCORE, 5);
    match result {
        Err(ConsensusError::InvalidAlignment(_)) => {}
        _ => panic!("overlong cluster should be rejected"),
    }
}

#[test]
fn test_probability_to_phred_table() {
    let probabilities = [0.991, 0.995, 0.9991, 0.991, 0.9991, 0.99991];
    let scores = probabilities
        .iter()
        .map(|probability| QualityUtils::probability_to_phred(*probability))
        .collect::<Vec<u8>>();
    assert_eq!(scores, vec![20, 23, 30, 20, 30, 40]);
}

#[test]
fn test_probability_to_phred_is_monotone() {
    let mut previous = 0;
    for step in 0..1000 {
        let probability = step as f64 / 1000.0;
        let score = QualityUtils::probability_to_phred(probability);
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn test_numeric_to_dna() {
    assert_eq!(BaseUtils::numeric_to_dna(&[0, 1, 2, 0, 3, 4]), "-AC-GT");
}

#[test]
fn test_remove_gaps_with_quality() {
    let calls = [0u8, 1, 2, 0, 3, 4];
    let dna = BaseUtils::numeric_to_dna(&calls);
    let scores = [0.991, 0.995, 0.9991, 0.991, 0.9991, 0.99991]
        .iter()
        .map(|probability| QualityUtils::probability_to_phred(*probability))
        .collect::<Vec<u8>>();
    let (bases, qscores) = BaseUtils::remove_gaps_with_quality(&dna, &scores);
    assert_eq!(bases, "ACGT");
    assert_eq!(qscores, vec![23, 30, 30, 40]);
}

fn assert_softmax_close(softmax: &Array2<f32>, expected: &Array2<f32>, epsilon: f32) {
    for (actual, wanted) in softmax.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*actual, *wanted, epsilon = epsilon);
    }
}

#[test]
fn test_normalize_base_prob() {
    let mut softmax = arr2(&[
        [0.2, 0.0, 0.0, 0.0, 0.8],
        [0.8, 0.0, 0.0, 0.0, 0.2],
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [0.6, 0.0, 0.0, 0.0, 0.4],
        [0.1, 0.0, 0.0, 0.0, 0.9],
    ]);
    let num_pass = [10usize, 5, 10, 10, 10];
    ProbabilityCalibrator::normalize_base_prob(&mut softmax, &num_pass);
    let expected = arr2(&[
        [0.0476, 0.0, 0.0, 0.0, 0.9524],
        [0.8, 0.0, 0.0, 0.0, 0.2],
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [0.6, 0.0, 0.0, 0.0, 0.4],
        [0.0217, 0.0, 0.0, 0.0, 0.9783],
    ]);
    assert_softmax_close(&softmax, &expected, 1e-4);
}

#[test]
fn test_update_base_prob_where_gap_is_majority() {
    let base_pct = arr2(&[
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [0.8, 0.0, 0.0, 0.0, 0.2],
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [0.6, 0.0, 0.0, 0.0, 0.4],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]);
    let mut softmax = base_pct.clone();
    let num_pass = [10usize, 5, 10, 10, 10];
    ProbabilityCalibrator::update_base_prob_where_gap_is_majority(
        &base_pct,
        &mut softmax,
        &num_pass,
    );
    let expected = arr2(&[
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [0.6, 0.0, 0.0, 0.0, 0.4],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]);
    assert_softmax_close(&softmax, &expected, 1e-5);
}

#[test]
fn test_update_base_prob_where_base_pct_meets_min_af() {
    let base_pct = arr2(&[
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [0.8, 0.0, 0.0, 0.0, 0.2],
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [0.6, 0.0, 0.0, 0.0, 0.4],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]);
    let mut softmax = arr2(&[
        [0.1, 0.0, 0.0, 0.0, 1.0],
        [0.8, 0.0, 0.0, 0.0, 0.2],
        [0.0, 0.0, 0.0, 0.2, 1.0],
        [0.6, 0.0, 0.0, 0.0, 0.4],
        [0.1, 0.0, 0.0, 0.0, 1.0],
    ]);
    let num_pass = [10usize, 5, 10, 10, 10];
    ProbabilityCalibrator::update_base_prob_where_base_pct_meets_min_af(
        &base_pct,
        &mut softmax,
        &num_pass,
    );
    let expected = arr2(&[
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [0.8, 0.0, 0.0, 0.0, 0.2],
        [0.0, 0.0, 0.0, 0.0, 1.0],
        [0.6, 0.0, 0.0, 0.0, 0.4],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]);
    assert_softmax_close(&softmax, &expected, 1e-5);
}

#[test]
fn test_update_base_prob_where_gap_is_replaced() {
    let base_pct = arr2(&[
        [0.0, 0.5, 0.0, 0.0, 0.5],
        [0.0, 0.0, 0.0, 0.5, 0.5],
        [0.0, 0.5, 0.0, 0.5, 0.0],
        [0.0, 0.0, 0.5, 0.5, 0.0],
        [0.5, 0.0, 0.0, 0.0, 0.5],
    ]);
    let mut softmax = base_pct.clone();
    let num_pass = [2usize, 2, 2, 2, 2];
    ProbabilityCalibrator::update_base_prob_where_gap_is_replaced(
        &base_pct,
        &mut softmax,
        &num_pass,
    );
    let expected = arr2(&[
        [0.0, 0.5, 0.0, 0.0, 0.5],
        [0.0, 0.0, 0.0, 0.5, 0.5],
        [0.0, 0.5, 0.0, 0.5, 0.0],
        [0.0, 0.0, 0.5, 0.5, 0.0],
        [0.0, 0.0, 0.0, 0.0, SCALE_LOW_DEPTH],
    ]);
    assert_softmax_close(&softmax, &expected, 1e-4);
}

#[test]
fn test_update_base_prob_where_majority_base_count_is_two() {
    let base_pct = arr2(&[
        [0.0, 0.5, 0.0, 0.0, 0.5],
        [0.0, 0.0, 0.0, 0.5, 0.5],
        [0.0, 0.5, 0.0, 0.5, 0.0],
        [0.0, 0.0, 0.5, 0.5, 0.0],
        [0.5, 0.0, 0.0, 0.0, 0.5],
    ]);
    let mut softmax = base_pct.clone();
    let num_pass = [2usize, 2, 2, 2, 2];
    ProbabilityCalibrator::update_base_prob_where_majority_base_count_is_two(
        &base_pct,
        &mut softmax,
        &num_pass,
    );
    let expected = arr2(&[
        [0.0, SCALE_LOW_DEPTH, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, SCALE_LOW_DEPTH, 0.0],
        [0.0, SCALE_LOW_DEPTH, 0.0, 0.0, 0.0],
        [0.0, 0.0, SCALE_LOW_DEPTH, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, SCALE_LOW_DEPTH],
    ]);
    assert_softmax_close(&softmax, &expected, 1e-5);
}

#[test]
fn test_update_base_prob_where_majority_base_count_is_one() {
    let base_pct = arr2(&[
        [0.0, 0.5, 0.0, 0.0, 0.5],
        [0.0, 0.0, 0.0, 0.5, 0.5],
        [0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0, 0.0],
        [0.5, 0.0, 0.0, 0.0, 0.5],
    ]);
    let mut softmax = base_pct.clone();
    let num_pass = [2usize, 2, 1, 1, 2];
    ProbabilityCalibrator::update_base_prob_where_majority_base_count_is_one(
        &base_pct,
        &mut softmax,
        &num_pass,
    );
    let expected = arr2(&[
        [0.0, 0.5, 0.0, 0.0, 0.5],
        [0.0, 0.0, 0.0, 0.5, 0.5],
        [0.0, SCALE_LOW_DEPTH, 0.0, 0.0, 0.0],
        [0.0, 0.0, SCALE_LOW_DEPTH, 0.0, 0.0],
        [0.5, 0.0, 0.0, 0.0, 0.5],
    ]);
    assert_softmax_close(&softmax, &expected, 1e-5);
}
