#![no_std]

multiversx_sc::imports!();

/// Fixed-price NFT marketplace for the DAO's cross-contract tests.
///
/// `buy` answers `false` instead of failing when sales are closed or the
/// payment does not match the listed price, and keeps the payment.
#[multiversx_sc::contract]
pub trait MarketplaceMock {
    #[init]
    fn init(&self) {}

    #[endpoint(listNft)]
    fn list_nft(&self, nft_contract: ManagedAddress, nft_id: u64, price: BigUint) {
        self.price(&nft_contract, nft_id).set(price);
    }

    #[endpoint(setSalesOpen)]
    fn set_sales_open(&self, open: bool) {
        self.sales_closed().set(!open);
    }

    #[view(getPrice)]
    fn get_price(&self, nft_contract: ManagedAddress, nft_id: u64) -> BigUint {
        self.price(&nft_contract, nft_id).get()
    }

    #[payable("EGLD")]
    #[endpoint(buy)]
    fn buy(&self, nft_contract: ManagedAddress, nft_id: u64) -> bool {
        let payment = self.call_value().egld_value().clone_value();
        if self.sales_closed().get() || payment != self.price(&nft_contract, nft_id).get() {
            return false;
        }

        self.owner_of(&nft_contract, nft_id)
            .set(self.blockchain().get_caller());
        true
    }

    #[view(getOwnerOf)]
    #[storage_mapper("ownerOf")]
    fn owner_of(&self, nft_contract: &ManagedAddress, nft_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("price")]
    fn price(&self, nft_contract: &ManagedAddress, nft_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("salesClosed")]
    fn sales_closed(&self) -> SingleValueMapper<bool>;
}
