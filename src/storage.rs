multiversx_sc::imports!();

use crate::types::{Proposal, ProposalId, VoteRecord};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[storage_mapper("membershipFee")]
    fn membership_fee(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("marketplaceAddress")]
    fn marketplace_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("networkId")]
    fn network_id(&self) -> SingleValueMapper<ManagedBuffer>;

    // ── Membership registry ──

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Zero for non-members.
    #[storage_mapper("joinDate")]
    fn join_date(&self, member: &ManagedAddress) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self, id: &ProposalId<Self::Api>) -> SingleValueMapper<Proposal<Self::Api>>;

    /// Creation order, for enumeration.
    #[storage_mapper("proposalIds")]
    fn proposal_ids(&self) -> VecMapper<ProposalId<Self::Api>>;

    #[storage_mapper("votes")]
    fn votes(
        &self,
        id: &ProposalId<Self::Api>,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord>;
}
