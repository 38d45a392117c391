multiversx_sc::imports!();

use crate::types::{ProposalId, VoteKind};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("memberJoined")]
    fn member_joined_event(&self, #[indexed] member: &ManagedAddress, timestamp: u64);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] targets: &ManagedVec<ManagedAddress>,
        #[indexed] values: &ManagedVec<BigUint>,
        #[indexed] payloads: &ManagedVec<ManagedBuffer>,
        #[indexed] timestamp: u64,
        description: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        #[indexed] kind: VoteKind,
        weight: u64,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: &ProposalId<Self::Api>);

    #[event("assetPurchased")]
    fn asset_purchased_event(
        &self,
        #[indexed] nft_contract: &ManagedAddress,
        #[indexed] nft_id: u64,
        price: &BigUint,
    );
}
