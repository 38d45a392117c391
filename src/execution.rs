multiversx_sc::imports!();

use crate::config::BUY_NFT_COMMAND;
use crate::errors::{
    ERR_ACTION_FAILED, ERR_INSUFFICIENT_FUNDS, ERR_MARKETPLACE_BUY_FAILED, ERR_NOT_EXECUTABLE,
    ERR_ONLY_GOVERNANCE, ERR_PRICE_EXCEEDED,
};
use crate::marketplace_proxy;
use crate::types::{ActionCall, ProposalState};

/// Execution engine: runs the action batch of a `Passed` proposal exactly once.
#[multiversx_sc::module]
pub trait ExecutionModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::membership::MembershipModule
    + crate::proposals::ProposalModule
{
    // ========================================================
    // ENDPOINT: execute
    // Any member can trigger a passed proposal. The success flag is
    // written before the first call, so a re-entrant execute sees
    // `Succeeded`. Any failing action reverts the whole call,
    // flag included.
    // ========================================================

    #[endpoint(execute)]
    fn execute(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        payloads: ManagedVec<ManagedBuffer>,
        description_hash: ManagedByteArray<Self::Api, 32>,
    ) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let proposal_id = self.hash_proposal(&targets, &values, &payloads, &description_hash);
        require!(
            self.proposal_state(&proposal_id) == ProposalState::Passed,
            ERR_NOT_EXECUTABLE
        );

        let mut requested = BigUint::zero();
        for value in values.iter() {
            requested += &*value;
        }
        let available = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(requested <= available, ERR_INSUFFICIENT_FUNDS);

        self.proposals(&proposal_id)
            .update(|proposal| proposal.tally.succeeded = true);

        for i in 0..targets.len() {
            self.perform_action(&targets.get(i), &values.get(i), &payloads.get(i));
        }

        self.proposal_executed_event(&proposal_id);
    }

    // ========================================================
    // ENDPOINT: buyNft
    // Only reachable through a proposal: the caller must be the DAO.
    // ========================================================

    #[endpoint(buyNft)]
    fn buy_nft(&self, nft_contract: ManagedAddress, nft_id: u64, max_price: BigUint) {
        require!(
            self.blockchain().get_caller() == self.blockchain().get_sc_address(),
            ERR_ONLY_GOVERNANCE
        );
        self.purchase_nft(&nft_contract, nft_id, &max_price);
    }

    /// Empty payload: plain EGLD transfer. Otherwise a sync call with the decoded endpoint.
    /// Actions addressed to the DAO itself run in-process as governance commands.
    fn perform_action(&self, target: &ManagedAddress, value: &BigUint, payload: &ManagedBuffer) {
        if *target == self.blockchain().get_sc_address() {
            self.run_governance_command(payload);
            return;
        }

        if payload.is_empty() {
            if *value > 0u64 {
                self.send().direct_egld(target, value);
            }
            return;
        }

        let call = self.decode_action_call(payload);
        self.tx()
            .to(target)
            .egld(value)
            .raw_call(call.endpoint)
            .arguments_raw(ManagedArgBuffer::from(call.arguments))
            .sync_call();
    }

    fn run_governance_command(&self, payload: &ManagedBuffer) {
        let call = self.decode_action_call(payload);
        require!(
            call.endpoint == ManagedBuffer::from(BUY_NFT_COMMAND) && call.arguments.len() == 3,
            ERR_ACTION_FAILED
        );

        let nft_contract = ManagedAddress::top_decode(call.arguments.get(0).clone_value())
            .unwrap_or_else(|_| sc_panic!(ERR_ACTION_FAILED));
        let nft_id = u64::top_decode(call.arguments.get(1).clone_value())
            .unwrap_or_else(|_| sc_panic!(ERR_ACTION_FAILED));
        let max_price = BigUint::top_decode(call.arguments.get(2).clone_value())
            .unwrap_or_else(|_| sc_panic!(ERR_ACTION_FAILED));

        self.purchase_nft(&nft_contract, nft_id, &max_price);
    }

    fn decode_action_call(&self, payload: &ManagedBuffer) -> ActionCall<Self::Api> {
        ActionCall::top_decode(payload.clone()).unwrap_or_else(|_| sc_panic!(ERR_ACTION_FAILED))
    }

    fn purchase_nft(&self, nft_contract: &ManagedAddress, nft_id: u64, max_price: &BigUint) {
        let marketplace = self.marketplace_address().get();

        let price: BigUint = self
            .tx()
            .to(&marketplace)
            .typed(marketplace_proxy::MarketplaceProxy)
            .get_price(nft_contract.clone(), nft_id)
            .returns(ReturnsResult)
            .sync_call();
        require!(&price <= max_price, ERR_PRICE_EXCEEDED);

        let bought: bool = self
            .tx()
            .to(&marketplace)
            .typed(marketplace_proxy::MarketplaceProxy)
            .buy(nft_contract.clone(), nft_id)
            .egld(&price)
            .returns(ReturnsResult)
            .sync_call();
        require!(bought, ERR_MARKETPLACE_BUY_FAILED);

        self.asset_purchased_event(nft_contract, nft_id, &price);
    }
}
