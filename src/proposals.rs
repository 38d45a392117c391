multiversx_sc::imports!();

use crate::config::MAX_ACTIONS;
use crate::errors::{
    ERR_CLOCK_NOT_STARTED, ERR_DUPLICATE_PROPOSAL, ERR_INVALID_BATCH, ERR_UNKNOWN_PROPOSAL,
};
use crate::types::{Proposal, ProposalFingerprint, ProposalId, ProposalState, VoteTally};

/// Proposal store. Proposals are keyed by a hash of their content and are never removed.
#[multiversx_sc::module]
pub trait ProposalModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::membership::MembershipModule
{
    // ========================================================
    // ENDPOINT: propose
    // Any member can submit a batch of up to MAX_ACTIONS actions.
    // Identical batch + description can only be proposed once.
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        payloads: ManagedVec<ManagedBuffer>,
        description: ManagedBuffer,
    ) -> ProposalId<Self::Api> {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        self.require_valid_batch(&targets, &values, &payloads);

        let description_hash = self.crypto().keccak256(&description);
        let proposal_id = self.hash_proposal(&targets, &values, &payloads, &description_hash);

        // a zero creation time would read back as "no proposal"
        let now = self.blockchain().get_block_timestamp();
        require!(now != 0, ERR_CLOCK_NOT_STARTED);

        let mapper = self.proposals(&proposal_id);
        require!(mapper.is_empty(), ERR_DUPLICATE_PROPOSAL);

        mapper.set(Proposal {
            proposer: caller.clone(),
            tally: VoteTally {
                created_at: now,
                ..Default::default()
            },
        });
        self.proposal_ids().push(&proposal_id);

        self.proposal_created_event(
            &proposal_id,
            &caller,
            &targets,
            &values,
            &payloads,
            now,
            &description,
        );

        proposal_id
    }

    fn require_valid_batch(
        &self,
        targets: &ManagedVec<ManagedAddress>,
        values: &ManagedVec<BigUint>,
        payloads: &ManagedVec<ManagedBuffer>,
    ) {
        let len = targets.len();
        require!(
            len > 0 && len <= MAX_ACTIONS && values.len() == len && payloads.len() == len,
            ERR_INVALID_BATCH
        );
    }

    /// Proposal id: keccak256 of the canonical encoding of the batch and description hash.
    /// `execute` recomputes it from its own arguments.
    #[view(hashProposal)]
    fn hash_proposal(
        &self,
        targets: &ManagedVec<ManagedAddress>,
        values: &ManagedVec<BigUint>,
        payloads: &ManagedVec<ManagedBuffer>,
        description_hash: &ManagedByteArray<Self::Api, 32>,
    ) -> ProposalId<Self::Api> {
        let fingerprint = ProposalFingerprint {
            targets: targets.clone(),
            values: values.clone(),
            payloads: payloads.clone(),
            description_hash: description_hash.clone(),
        };
        let encoded = ManagedSerializer::<Self::Api>::new().top_encode_to_managed_buffer(&fingerprint);
        self.crypto().keccak256(&encoded)
    }

    /// Current lifecycle state. Unknown ids report `None`.
    fn proposal_state(&self, proposal_id: &ProposalId<Self::Api>) -> ProposalState {
        let mapper = self.proposals(proposal_id);
        if mapper.is_empty() {
            return ProposalState::None;
        }

        let now = self.blockchain().get_block_timestamp();
        mapper.get().tally.state(self.total_members(), now)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: &ProposalId<Self::Api>) -> Proposal<Self::Api> {
        require!(!self.proposals(proposal_id).is_empty(), ERR_UNKNOWN_PROPOSAL);
        self.proposals(proposal_id).get()
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: &ProposalId<Self::Api>) -> ProposalState {
        self.proposal_state(proposal_id)
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> usize {
        self.proposal_ids().len()
    }

    #[view(getProposalIds)]
    fn get_proposal_ids(&self, from: u64, count: u64) -> MultiValueEncoded<ProposalId<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_ids().len();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), total);

        for idx in start..end {
            // VecMapper is 1-indexed
            result.push(self.proposal_ids().get(idx + 1));
        }
        result
    }
}
