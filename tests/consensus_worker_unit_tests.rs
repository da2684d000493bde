use std::sync::{Arc, Mutex};

use currawong::consensus::cnn_strategy::{CnnConsensusStrategy, Inferencer};
use currawong::consensus::config::ConsensusConfig;
use currawong::consensus::consensus_read::ConsensusRead;
use currawong::consensus::worker::{ConsensusSink, DeepLearningConsensusWorker};
use currawong::reads::read_record::ReadRecord;
use currawong::utils::base_utils::BaseUtils;
use currawong::utils::errors::ConsensusError;
use ndarray::Array3;
use rust_htslib::bam::record::Cigar;

// a flat softmax; the calibrators must carry the call from the MSA alone
struct UniformInferencer;

impl Inferencer for UniformInferencer {
    fn infer(&self, features: &Array3<f32>) -> Result<Array3<f32>, ConsensusError> {
        let (batch, _, max_len) = features.dim();
        Ok(Array3::from_elem(
            (batch, max_len, BaseUtils::NUM_BASE_STATES),
            0.2,
        ))
    }
}

struct FailingInferencer;

impl Inferencer for FailingInferencer {
    fn infer(&self, _features: &Array3<f32>) -> Result<Array3<f32>, ConsensusError> {
        Err(ConsensusError::InferenceFailed("model exploded".to_string()))
    }
}

struct Accumulator {
    items: Arc<Mutex<Vec<Result<ConsensusRead, ConsensusError>>>>,
}

impl ConsensusSink for Accumulator {
    fn handle_work(&mut self, item: Result<ConsensusRead, ConsensusError>) {
        self.items.lock().unwrap().push(item);
    }
}

fn collector(
    worker: &DeepLearningConsensusWorker,
) -> Arc<Mutex<Vec<Result<ConsensusRead, ConsensusError>>>> {
    let items = Arc::new(Mutex::new(Vec::new()));
    worker.add_sink(Box::new(Accumulator {
        items: Arc::clone(&items),
    }));
    items
}

fn cluster(tag: &str, sequence: &str, copies: usize) -> Vec<ReadRecord> {
    let length = sequence.len() as u32;
    (0..copies)
        .map(|_| {
            ReadRecord::new(
                100,
                100 + length as i64,
                sequence,
                vec![Cigar::Match(length)],
                vec![20; sequence.len()],
                tag,
            )
        })
        .collect()
}

fn cnn_strategy() -> CnnConsensusStrategy {
    CnnConsensusStrategy::new(Arc::new(UniformInferencer), false)
}

#[test]
fn test_batching_flushes_on_drop_in_input_order() {
    let seq_a = "ACGT".repeat(16);
    let seq_b = "GT".repeat(32);
    let items;
    {
        let worker = DeepLearningConsensusWorker::new(cnn_strategy(), 4).unwrap();
        items = collector(&worker);

        worker.handle_work(cluster("A", &seq_a, 4)).unwrap();
        // batching holds the cluster back until the batch fills or flushes
        assert_eq!(items.lock().unwrap().len(), 0);
        worker.handle_work(cluster("B", &seq_b, 4)).unwrap();
        assert_eq!(items.lock().unwrap().len(), 0);
    }
    let items = items.lock().unwrap();
    assert_eq!(items.len(), 2);

    let first = items[0].as_ref().unwrap();
    assert_eq!(first.bases, seq_a);
    assert_eq!(first.read_name, "A-0-0-4-0-4");
    assert_eq!(first.reference_start, 100);
    assert_eq!(first.cigar.0, vec![Cigar::Match(64)]);

    let second = items[1].as_ref().unwrap();
    assert_eq!(second.bases, seq_b);
    assert_eq!(second.read_name, "B-0-0-4-0-4");
}

#[test]
fn test_full_batch_dispatches_without_flush() {
    let worker = DeepLearningConsensusWorker::new(cnn_strategy(), 2).unwrap();
    let items = collector(&worker);
    worker.handle_work(cluster("A", "ACGTACGT", 3)).unwrap();
    assert_eq!(items.lock().unwrap().len(), 0);
    worker.handle_work(cluster("B", "TTGGCCAA", 3)).unwrap();
    let items = items.lock().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_ref().unwrap().read_name, "A-0-0-3-0-3");
    assert_eq!(items[1].as_ref().unwrap().read_name, "B-0-0-3-0-3");
}

#[test]
fn test_default_min_depth() {
    let worker = DeepLearningConsensusWorker::new(cnn_strategy(), 2).unwrap();
    assert_eq!(worker.min_depth(), 2);
}

#[test]
fn test_explicit_min_depth() {
    let worker = DeepLearningConsensusWorker::with_min_depth(cnn_strategy(), 2, 3).unwrap();
    assert_eq!(worker.min_depth(), 3);
}

#[test]
fn test_shallow_clusters_are_filtered_silently() {
    let worker = DeepLearningConsensusWorker::new(cnn_strategy(), 1).unwrap();
    let items = collector(&worker);
    worker.handle_work(cluster("thin", "ACGTACGT", 1)).unwrap();
    worker.flush();
    assert_eq!(items.lock().unwrap().len(), 0);
    assert_eq!(worker.num_filtered(), 1);
}

#[test]
fn test_shutdown_drains_then_rejects() {
    let worker = DeepLearningConsensusWorker::new(cnn_strategy(), 8).unwrap();
    let items = collector(&worker);
    worker.handle_work(cluster("A", "ACGTACGT", 3)).unwrap();
    worker.shutdown();
    assert_eq!(items.lock().unwrap().len(), 1);
    assert_eq!(
        worker.handle_work(cluster("B", "ACGTACGT", 3)).unwrap_err(),
        ConsensusError::WorkerShutdown
    );
    // nothing further was delivered
    assert_eq!(items.lock().unwrap().len(), 1);
}

#[test]
fn test_inference_failure_surfaces_on_every_cluster_of_the_batch() {
    let strategy = CnnConsensusStrategy::new(Arc::new(FailingInferencer), false);
    let worker = DeepLearningConsensusWorker::new(strategy, 2).unwrap();
    let items = collector(&worker);
    worker.handle_work(cluster("A", "ACGTACGT", 3)).unwrap();
    worker.handle_work(cluster("B", "ACGTACGT", 3)).unwrap();
    {
        let items = items.lock().unwrap();
        assert_eq!(items.len(), 2);
        for item in items.iter() {
            match item {
                Err(ConsensusError::InferenceFailed(_)) => {}
                other => panic!("expected InferenceFailed, got {:?}", other),
            }
        }
    }
    // the failure was fatal to that batch only
    worker.handle_work(cluster("C", "ACGTACGT", 3)).unwrap();
}

#[test]
fn test_per_cluster_errors_flow_through_the_sink_in_order() {
    let worker = DeepLearningConsensusWorker::new(cnn_strategy(), 2).unwrap();
    let items = collector(&worker);
    // cigar consumes more bases than the read carries
    let broken = vec![ReadRecord::new(
        100,
        108,
        "ACGT",
        vec![Cigar::Match(8)],
        vec![20; 4],
        "broken",
    )];
    worker.handle_work(broken).unwrap();
    worker.handle_work(cluster("B", "ACGTACGT", 3)).unwrap();
    let items = items.lock().unwrap();
    assert_eq!(items.len(), 2);
    match &items[0] {
        Err(ConsensusError::InvalidAlignment(_)) => {}
        other => panic!("expected InvalidAlignment, got {:?}", other),
    }
    assert_eq!(items[1].as_ref().unwrap().read_name, "B-0-0-3-0-3");
}

#[test]
fn test_zero_batch_size_is_a_configuration_error() {
    match DeepLearningConsensusWorker::new(cnn_strategy(), 0) {
        Err(ConsensusError::ConfigurationError(_)) => {}
        _ => panic!("zero batch size should be rejected"),
    }
}

#[test]
fn test_from_config_validates() {
    let mut config = ConsensusConfig::default();
    config.batch_size = 4;
    config.min_depth = 3;
    let worker = DeepLearningConsensusWorker::from_config(cnn_strategy(), &config).unwrap();
    assert_eq!(worker.min_depth(), 3);

    config.majority_ratio = 1.5;
    match DeepLearningConsensusWorker::from_config(cnn_strategy(), &config) {
        Err(ConsensusError::ConfigurationError(_)) => {}
        _ => panic!("majority_ratio above 1 should be rejected"),
    }
}

#[test]
fn test_single_cluster_cnn_consensus_matches_input() {
    let strategy = cnn_strategy();
    let consensus = strategy
        .build_consensus(&cluster("solo", "ACGTTGCA", 3))
        .unwrap();
    assert_eq!(consensus.bases, "ACGTTGCA");
    assert_eq!(consensus.read_name, "solo-0-0-3-0-3");
}
