multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_MEMBER, ERR_CLOCK_NOT_STARTED, ERR_NOT_MEMBER, ERR_WRONG_FEE};

/// Membership registry: a member is an address with a nonzero join timestamp.
/// Membership is permanent.
#[multiversx_sc::module]
pub trait MembershipModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: joinDao
    // Pay the exact fee once; the join time drives vote weight.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(joinDao)]
    fn join_dao(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        require!(payment == self.membership_fee().get(), ERR_WRONG_FEE);
        require!(!self.is_member(&caller), ERR_ALREADY_MEMBER);

        let now = self.blockchain().get_block_timestamp();
        require!(now != 0, ERR_CLOCK_NOT_STARTED);
        self.join_date(&caller).set(now);
        self.members().insert(caller.clone());

        self.member_joined_event(&caller, now);
    }

    fn require_member(&self, address: &ManagedAddress) {
        require!(self.is_member(address), ERR_NOT_MEMBER);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.join_date(address).get() != 0
    }

    #[view(getJoinDate)]
    fn get_join_date(&self, address: &ManagedAddress) -> u64 {
        self.join_date(address).get()
    }

    #[view(getTotalMembers)]
    fn total_members(&self) -> u64 {
        self.members().len() as u64
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.members().iter().skip(from as usize).take(count as usize) {
            result.push(member);
        }
        result
    }
}
