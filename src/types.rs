multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Content fingerprint of an action batch, used as the proposal key.
pub type ProposalId<M> = ManagedByteArray<M, 32>;

// ============================================================
// Proposal state: derived, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// No proposal is stored under this id.
    None,
    /// Voting is open, quorum not yet reached.
    Active,
    /// Quorum reached while the voting window is still open.
    QuorumReached,
    /// Window closed with quorum and for >= against. Executable until expiry.
    Passed,
    /// Window closed with quorum and against > for.
    Defeated,
    /// Executed. Terminal.
    Succeeded,
    /// Expiry window elapsed without execution. Terminal.
    Expired,
}

impl ProposalState {
    pub fn accepts_votes(self) -> bool {
        matches!(self, ProposalState::Active | ProposalState::QuorumReached)
    }
}

// ============================================================
// Votes
// ============================================================

#[type_abi]
#[derive(
    TopEncode,
    TopDecode,
    NestedEncode,
    NestedDecode,
    ManagedVecItem,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
)]
pub enum VoteKind {
    Against,
    For,
    Abstain,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord {
    pub cast: bool,
    pub kind: VoteKind,
    /// Membership age in days (min 1) for For/Against, 0 for Abstain.
    pub weight: u64,
}

// ============================================================
// Proposal: the stored governance record
// ============================================================

/// Counters and timestamps from which the lifecycle state is derived.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Default, PartialEq, Debug)]
pub struct VoteTally {
    /// Block timestamp of `propose`. Zero means the proposal does not exist.
    pub created_at: u64,
    pub for_votes: u64,
    pub against_votes: u64,
    /// Number of abstaining members. Carries no weight.
    pub abstain_votes: u64,
    /// Distinct voters, abstentions included.
    pub member_vote_count: u64,
    pub succeeded: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub proposer: ManagedAddress<M>,
    pub tally: VoteTally,
}

// ============================================================
// Actions
// ============================================================

/// Decoded form of a non-empty action payload: an endpoint call with raw arguments.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ActionCall<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

/// Canonical encoding input for the proposal id. Field order is part of the id format.
#[derive(TopEncode, NestedEncode)]
pub struct ProposalFingerprint<M: ManagedTypeApi> {
    pub targets: ManagedVec<M, ManagedAddress<M>>,
    pub values: ManagedVec<M, BigUint<M>>,
    pub payloads: ManagedVec<M, ManagedBuffer<M>>,
    pub description_hash: ManagedByteArray<M, 32>,
}
