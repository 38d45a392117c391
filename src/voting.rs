multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_VOTED, ERR_MALFORMED_BATCH, ERR_VOTING_CLOSED};
use crate::lifecycle::vote_weight;
use crate::types::{ProposalId, VoteKind, VoteRecord};

/// Voting engine. Direct and signed votes both end in `apply_vote`.
#[multiversx_sc::module]
pub trait VotingModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::membership::MembershipModule
    + crate::proposals::ProposalModule
    + crate::signature::SignatureModule
{
    // ========================================================
    // ENDPOINT: castVote
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: ProposalId<Self::Api>, kind: VoteKind) {
        let caller = self.blockchain().get_caller();
        self.apply_vote(&caller, &proposal_id, kind);
    }

    // ========================================================
    // ENDPOINT: castVoteBySignature
    // Anyone may relay a vote signed offline by a member.
    // ========================================================

    #[endpoint(castVoteBySignature)]
    fn cast_vote_by_signature(
        &self,
        proposal_id: ProposalId<Self::Api>,
        kind: VoteKind,
        voter: ManagedAddress,
        r: ManagedBuffer,
        s: ManagedBuffer,
    ) {
        let signer = self.recover_signer(&proposal_id, kind, &voter, &r, &s);
        self.apply_vote(&signer, &proposal_id, kind);
    }

    // ========================================================
    // ENDPOINT: castVoteBySignatureBatch
    // Five parallel lists, one signed vote per index, applied in order.
    // Any failing element reverts the whole batch.
    // ========================================================

    #[endpoint(castVoteBySignatureBatch)]
    fn cast_vote_by_signature_batch(
        &self,
        proposal_ids: ManagedVec<ProposalId<Self::Api>>,
        kinds: ManagedVec<VoteKind>,
        voters: ManagedVec<ManagedAddress>,
        rs: ManagedVec<ManagedBuffer>,
        ss: ManagedVec<ManagedBuffer>,
    ) {
        let len = proposal_ids.len();
        require!(
            len > 0
                && kinds.len() == len
                && voters.len() == len
                && rs.len() == len
                && ss.len() == len,
            ERR_MALFORMED_BATCH
        );

        for i in 0..len {
            let proposal_id = proposal_ids.get(i);
            let kind = kinds.get(i);
            let signer = self.recover_signer(&proposal_id, kind, &voters.get(i), &rs.get(i), &ss.get(i));
            self.apply_vote(&signer, &proposal_id, kind);
        }
    }

    /// Checks eligibility, weighs the vote, updates the tally and records the ballot.
    fn apply_vote(&self, voter: &ManagedAddress, proposal_id: &ProposalId<Self::Api>, kind: VoteKind) {
        self.require_member(voter);
        require!(
            self.proposal_state(proposal_id).accepts_votes(),
            ERR_VOTING_CLOSED
        );

        let ballot = self.votes(proposal_id, voter);
        require!(ballot.is_empty(), ERR_ALREADY_VOTED);

        let now = self.blockchain().get_block_timestamp();
        let weight = vote_weight(kind, self.join_date(voter).get(), now);

        self.proposals(proposal_id)
            .update(|proposal| proposal.tally.record(kind, weight));
        ballot.set(VoteRecord {
            cast: true,
            kind,
            weight,
        });

        self.vote_cast_event(proposal_id, voter, kind, weight);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: &ProposalId<Self::Api>, voter: &ManagedAddress) -> bool {
        let ballot = self.votes(proposal_id, voter);
        !ballot.is_empty() && ballot.get().cast
    }

    #[view(getVote)]
    fn get_vote(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        voter: &ManagedAddress,
    ) -> OptionalValue<VoteRecord> {
        let ballot = self.votes(proposal_id, voter);
        if ballot.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(ballot.get())
        }
    }

    #[view(getQuorum)]
    fn get_quorum(&self) -> u64 {
        crate::lifecycle::quorum_threshold(self.total_members())
    }
}
