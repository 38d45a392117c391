// Shared whitebox harness for the Membership DAO contract.
//
// Each test gets a fresh chain at START with `member_count` members who all
// joined at START, and a mock marketplace the DAO is configured to buy from. Managed values are only built inside tx/query closures;
// results leave the closures as plain Rust values.

#![allow(dead_code)]

use multiversx_sc::contract_base::ContractBase;
use multiversx_sc::codec::TopEncode;
use multiversx_sc::types::{
    Address, BigUint, ManagedAddress, ManagedBuffer, ManagedByteArray, ManagedSerializer, ManagedVec,
};
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_buffer, rust_biguint,
    whitebox_legacy::{BlockchainStateWrapper, ContractObjWrapper},
    DebugApi,
};

use membership_dao::execution::ExecutionModule;
use membership_dao::membership::MembershipModule;
use membership_dao::proposals::ProposalModule;
use membership_dao::signature::SignatureModule;
use membership_dao::config::BUY_NFT_COMMAND;
use membership_dao::types::{ActionCall, ProposalState, VoteKind, VoteRecord};
use membership_dao::voting::VotingModule;
use membership_dao::MembershipDao;

use marketplace_mock::MarketplaceMock;

pub const WASM_PATH: &str = "output/membership-dao.wasm";
pub const MARKETPLACE_WASM_PATH: &str = "test-contracts/marketplace-mock/output/marketplace-mock.wasm";
pub const START: u64 = 1_700_000_000;
pub const DAY: u64 = 86_400;
pub const FEE: u64 = 1_000;
pub const NETWORK_ID: &[u8] = b"T";

pub type ProposalKey = [u8; 32];
pub type MarketplaceObjBuilder = fn() -> marketplace_mock::ContractObj<DebugApi>;

/// Plain-Rust description of a proposal's action batch.
#[derive(Clone)]
pub struct ActionBatch {
    pub targets: Vec<Address>,
    pub values: Vec<u64>,
    pub payloads: Vec<Vec<u8>>,
    pub description: Vec<u8>,
}

impl ActionBatch {
    pub fn transfer(to: &Address, amount: u64, description: &str) -> Self {
        ActionBatch {
            targets: vec![to.clone()],
            values: vec![amount],
            payloads: vec![Vec::new()],
            description: description.as_bytes().to_vec(),
        }
    }

    pub fn managed_targets(&self) -> ManagedVec<DebugApi, ManagedAddress<DebugApi>> {
        let mut targets = ManagedVec::new();
        for target in &self.targets {
            targets.push(managed_address!(target));
        }
        targets
    }

    pub fn managed_values(&self) -> ManagedVec<DebugApi, BigUint<DebugApi>> {
        let mut values = ManagedVec::new();
        for value in &self.values {
            values.push(managed_biguint!(*value));
        }
        values
    }

    pub fn managed_payloads(&self) -> ManagedVec<DebugApi, ManagedBuffer<DebugApi>> {
        let mut payloads = ManagedVec::new();
        for payload in &self.payloads {
            payloads.push(ManagedBuffer::new_from_bytes(payload));
        }
        payloads
    }

    pub fn managed_description(&self) -> ManagedBuffer<DebugApi> {
        ManagedBuffer::new_from_bytes(&self.description)
    }
}

pub fn managed_id(id: &ProposalKey) -> ManagedByteArray<DebugApi, 32> {
    ManagedByteArray::new_from_bytes(id)
}

fn top_encoded<T: TopEncode>(value: &T) -> ManagedBuffer<DebugApi> {
    ManagedSerializer::<DebugApi>::new().top_encode_to_managed_buffer(value)
}

pub struct DaoSetup<DaoObjBuilder>
where
    DaoObjBuilder: 'static + Copy + Fn() -> membership_dao::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub marketplace: Address,
    pub members: Vec<Address>,
    pub dao_wrapper: ContractObjWrapper<membership_dao::ContractObj<DebugApi>, DaoObjBuilder>,
    pub marketplace_wrapper:
        ContractObjWrapper<marketplace_mock::ContractObj<DebugApi>, MarketplaceObjBuilder>,
}

impl<DaoObjBuilder> DaoSetup<DaoObjBuilder>
where
    DaoObjBuilder: 'static + Copy + Fn() -> membership_dao::ContractObj<DebugApi>,
{
    pub fn new(dao_builder: DaoObjBuilder, member_count: usize) -> Self {
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_biguint!(0));
        let marketplace_wrapper = b_mock.create_sc_account(
            &rust_biguint!(0),
            Some(&owner),
            marketplace_mock::contract_obj as MarketplaceObjBuilder,
            MARKETPLACE_WASM_PATH,
        );
        b_mock
            .execute_tx(&owner, &marketplace_wrapper, &rust_biguint!(0), |sc| {
                sc.init();
            })
            .assert_ok();
        let marketplace = marketplace_wrapper.address_ref().clone();

        let dao_wrapper =
            b_mock.create_sc_account(&rust_biguint!(0), Some(&owner), dao_builder, WASM_PATH);

        b_mock
            .execute_tx(&owner, &dao_wrapper, &rust_biguint!(0), |sc| {
                sc.init(
                    managed_biguint!(FEE),
                    managed_address!(&marketplace),
                    managed_buffer!(NETWORK_ID),
                );
            })
            .assert_ok();
        b_mock.set_block_timestamp(START);

        let mut setup = DaoSetup {
            b_mock,
            owner,
            marketplace,
            members: Vec::new(),
            dao_wrapper,
            marketplace_wrapper,
        };
        for _ in 0..member_count {
            setup.add_member();
        }
        setup
    }

    pub fn add_member(&mut self) -> Address {
        let member = self.b_mock.create_user_account(&rust_biguint!(FEE));
        self.join(&member);
        self.members.push(member.clone());
        member
    }

    /// Registers an account created elsewhere (e.g. at a key-derived address).
    pub fn join(&mut self, account: &Address) {
        self.b_mock
            .execute_tx(account, &self.dao_wrapper, &rust_biguint!(FEE), |sc| {
                sc.join_dao();
            })
            .assert_ok();
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.b_mock.set_block_timestamp(timestamp);
    }

    pub fn propose(&mut self, proposer: &Address, batch: &ActionBatch) -> ProposalKey {
        let mut id = [0u8; 32];
        self.b_mock
            .execute_tx(proposer, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                id = sc
                    .propose(
                        batch.managed_targets(),
                        batch.managed_values(),
                        batch.managed_payloads(),
                        batch.managed_description(),
                    )
                    .to_byte_array();
            })
            .assert_ok();
        id
    }

    pub fn propose_fails(&mut self, proposer: &Address, batch: &ActionBatch, err: &str) {
        self.b_mock
            .execute_tx(proposer, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.propose(
                    batch.managed_targets(),
                    batch.managed_values(),
                    batch.managed_payloads(),
                    batch.managed_description(),
                );
            })
            .assert_user_error(err);
    }

    pub fn vote(&mut self, voter: &Address, id: &ProposalKey, kind: VoteKind) {
        self.b_mock
            .execute_tx(voter, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.cast_vote(managed_id(id), kind);
            })
            .assert_ok();
    }

    pub fn vote_fails(&mut self, voter: &Address, id: &ProposalKey, kind: VoteKind, err: &str) {
        self.b_mock
            .execute_tx(voter, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.cast_vote(managed_id(id), kind);
            })
            .assert_user_error(err);
    }

    pub fn execute(&mut self, caller: &Address, batch: &ActionBatch) {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                let description_hash = sc.crypto().keccak256(batch.managed_description());
                sc.execute(
                    batch.managed_targets(),
                    batch.managed_values(),
                    batch.managed_payloads(),
                    description_hash,
                );
            })
            .assert_ok();
    }

    pub fn execute_fails(&mut self, caller: &Address, batch: &ActionBatch, err: &str) {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                let description_hash = sc.crypto().keccak256(batch.managed_description());
                sc.execute(
                    batch.managed_targets(),
                    batch.managed_values(),
                    batch.managed_payloads(),
                    description_hash,
                );
            })
            .assert_user_error(err);
    }

    /// Members cast the given kinds in order, starting from `members[first]`.
    pub fn vote_all(&mut self, id: &ProposalKey, first: usize, kinds: &[VoteKind]) {
        for (offset, kind) in kinds.iter().enumerate() {
            let voter = self.members[first + offset].clone();
            self.vote(&voter, id, *kind);
        }
    }

    /// Proposes `batch` and carries it to `Passed` with five For votes
    /// from `members[0..5]`.
    pub fn pass_proposal(&mut self, batch: &ActionBatch) -> ProposalKey {
        let proposer = self.members[0].clone();
        let id = self.propose(&proposer, batch);
        self.vote_all(&id, 0, &[VoteKind::For; 5]);
        let created = self.proposal_created_at(&id);
        self.set_time(created + DAY);
        assert_eq!(self.state(&id), ProposalState::Passed);
        id
    }

    pub fn proposal_created_at(&mut self, id: &ProposalKey) -> u64 {
        let mut created_at = 0;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                created_at = sc.get_proposal(&managed_id(id)).tally.created_at;
            })
            .assert_ok();
        created_at
    }

    pub fn state(&mut self, id: &ProposalKey) -> ProposalState {
        let mut state = ProposalState::None;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                state = sc.get_proposal_state(&managed_id(id));
            })
            .assert_ok();
        state
    }

    pub fn ballot(&mut self, id: &ProposalKey, voter: &Address) -> Option<VoteRecord> {
        let mut ballot = None;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                ballot = sc.get_vote(&managed_id(id), &managed_address!(voter)).into_option();
            })
            .assert_ok();
        ballot
    }

    pub fn list_nft(&mut self, nft_contract: &Address, nft_id: u64, price: u64) {
        let owner = self.owner.clone();
        self.b_mock
            .execute_tx(&owner, &self.marketplace_wrapper, &rust_biguint!(0), |sc| {
                sc.list_nft(managed_address!(nft_contract), nft_id, managed_biguint!(price));
            })
            .assert_ok();
    }

    pub fn set_sales_open(&mut self, open: bool) {
        let owner = self.owner.clone();
        self.b_mock
            .execute_tx(&owner, &self.marketplace_wrapper, &rust_biguint!(0), |sc| {
                sc.set_sales_open(open);
            })
            .assert_ok();
    }

    pub fn nft_owner(&mut self, nft_contract: &Address, nft_id: u64) -> Option<Address> {
        let mut owner = None;
        self.b_mock
            .execute_query(&self.marketplace_wrapper, |sc| {
                let mapper = sc.owner_of(&managed_address!(nft_contract), nft_id);
                if !mapper.is_empty() {
                    owner = Some(mapper.get().to_address());
                }
            })
            .assert_ok();
        owner
    }

    /// A one-action batch asking the DAO to buy `nft_id` for at most `max_price`.
    pub fn buy_nft_batch(
        &mut self,
        nft_contract: &Address,
        nft_id: u64,
        max_price: u64,
        description: &str,
    ) -> ActionBatch {
        let mut payload = Vec::new();
        self.b_mock
            .execute_query(&self.dao_wrapper, |_sc| {
                let mut arguments = ManagedVec::new();
                arguments.push(top_encoded(&managed_address!(nft_contract)));
                arguments.push(top_encoded(&nft_id));
                arguments.push(top_encoded(&managed_biguint!(max_price)));
                let call = ActionCall::<DebugApi> {
                    endpoint: ManagedBuffer::new_from_bytes(BUY_NFT_COMMAND),
                    arguments,
                };
                payload = top_encoded(&call).to_boxed_bytes().as_slice().to_vec();
            })
            .assert_ok();

        ActionBatch {
            targets: vec![self.dao_wrapper.address_ref().clone()],
            values: vec![0],
            payloads: vec![payload],
            description: description.as_bytes().to_vec(),
        }
    }

    pub fn vote_digest(&mut self, id: &ProposalKey, kind: VoteKind) -> [u8; 32] {
        let mut digest = [0u8; 32];
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                digest = sc.vote_digest(&managed_id(id), kind).to_byte_array();
            })
            .assert_ok();
        digest
    }
}
