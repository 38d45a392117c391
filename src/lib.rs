#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod execution;
pub mod lifecycle;
pub mod marketplace_proxy;
pub mod membership;
pub mod proposals;
pub mod signature;
pub mod storage;
pub mod types;
pub mod voting;

use config::{EXPIRY_WINDOW, MAX_ACTIONS, QUORUM_PERCENTAGE, VOTING_WINDOW};

// ============================================================
// Contract
// ============================================================

/// Membership-weighted DAO: members propose action batches, vote with weight
/// equal to their membership age in days, and execute passed batches once.
#[multiversx_sc::contract]
pub trait MembershipDao:
    storage::StorageModule
    + events::EventsModule
    + membership::MembershipModule
    + proposals::ProposalModule
    + signature::SignatureModule
    + voting::VotingModule
    + execution::ExecutionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        membership_fee: BigUint,
        marketplace_address: ManagedAddress,
        network_id: ManagedBuffer,
    ) {
        self.membership_fee().set(&membership_fee);
        self.marketplace_address().set(&marketplace_address);
        self.network_id().set(&network_id);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue5<BigUint, u64, u64, u64, usize> {
        (
            self.membership_fee().get(),
            VOTING_WINDOW,
            EXPIRY_WINDOW,
            QUORUM_PERCENTAGE,
            MAX_ACTIONS,
        )
            .into()
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }
}
