use crate::consensus::cnn_strategy::CnnConsensusStrategy;
use crate::consensus::consensus_read::ConsensusRead;
use crate::consensus::majority_voting::MajorityVotingConsensus;
use crate::reads::read_record::ReadRecord;
use crate::utils::errors::ConsensusError;

/// The two ways a cluster can be collapsed, behind one capability:
/// `build_consensus(reads) -> ConsensusRead`.
pub enum ConsensusStrategy {
    MajorityVoting(MajorityVotingConsensus),
    Cnn(CnnConsensusStrategy),
}

impl ConsensusStrategy {
    pub fn build_consensus(&self, reads: &[ReadRecord]) -> Result<ConsensusRead, ConsensusError> {
        match self {
            ConsensusStrategy::MajorityVoting(voter) => voter.build_consensus(reads),
            ConsensusStrategy::Cnn(strategy) => strategy.build_consensus(reads),
        }
    }
}
