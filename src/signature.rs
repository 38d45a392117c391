multiversx_sc::imports!();

use crate::config::{
    BALLOT_TYPE, DIGEST_PREFIX, DOMAIN_NAME, DOMAIN_TYPE, DOMAIN_VERSION, SIGNATURE_HALF_LEN,
};
use crate::errors::ERR_INVALID_SIGNATURE;
use crate::types::{ProposalId, VoteKind};

/// Offline vote authorization.
///
/// A voter signs `getVoteDigest(proposal_id, kind)` with the ed25519 key behind
/// their address. The digest binds the DAO name, version, network id and this
/// contract's address, so a signature cannot be replayed on another deployment.
#[multiversx_sc::module]
pub trait SignatureModule: crate::storage::StorageModule {
    #[view(getVoteDigest)]
    fn vote_digest(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        kind: VoteKind,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut ballot = ManagedBuffer::new();
        ballot.append(self.hash_bytes(BALLOT_TYPE).as_managed_buffer());
        ballot.append(proposal_id.as_managed_buffer());
        ballot.append_bytes(&[kind as u8]);
        let ballot_hash = self.crypto().keccak256(&ballot);

        let mut message = ManagedBuffer::new_from_bytes(DIGEST_PREFIX);
        message.append(self.domain_separator().as_managed_buffer());
        message.append(ballot_hash.as_managed_buffer());
        self.crypto().keccak256(&message)
    }

    fn domain_separator(&self) -> ManagedByteArray<Self::Api, 32> {
        let mut domain = ManagedBuffer::new();
        domain.append(self.hash_bytes(DOMAIN_TYPE).as_managed_buffer());
        domain.append(self.hash_bytes(DOMAIN_NAME).as_managed_buffer());
        domain.append(self.hash_bytes(DOMAIN_VERSION).as_managed_buffer());
        domain.append(self.crypto().keccak256(&self.network_id().get()).as_managed_buffer());
        domain.append(self.blockchain().get_sc_address().as_managed_buffer());
        self.crypto().keccak256(&domain)
    }

    fn hash_bytes(&self, bytes: &[u8]) -> ManagedByteArray<Self::Api, 32> {
        let buffer: ManagedBuffer = ManagedBuffer::new_from_bytes(bytes);
        self.crypto().keccak256(&buffer)
    }

    /// Returns the identity that authorised `(proposal_id, kind)`.
    ///
    /// Fails on malformed signature material. A well-formed signature that
    /// does not match `signer` aborts inside the VM's ed25519 check. Whether
    /// the signer may vote is decided by the voting engine.
    fn recover_signer(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        kind: VoteKind,
        signer: &ManagedAddress,
        r: &ManagedBuffer,
        s: &ManagedBuffer,
    ) -> ManagedAddress {
        require!(
            r.len() == SIGNATURE_HALF_LEN && s.len() == SIGNATURE_HALF_LEN,
            ERR_INVALID_SIGNATURE
        );
        require!(!signer.is_zero(), ERR_INVALID_SIGNATURE);

        let mut signature = r.clone();
        signature.append(s);

        let digest = self.vote_digest(proposal_id, kind);
        self.crypto().verify_ed25519(
            signer.as_managed_buffer(),
            digest.as_managed_buffer(),
            &signature,
        );

        signer.clone()
    }
}
