// ============================================================
// Governance parameters
// ============================================================

/// Voting window: 24 hours in seconds
pub const VOTING_WINDOW: u64 = 86_400;

/// Proposals not executed within 48 hours of creation expire
pub const EXPIRY_WINDOW: u64 = 172_800;

/// Unit of membership age for vote weight
pub const ONE_DAY: u64 = 86_400;

/// Quorum: max(MIN_QUORUM, floor(total_members * QUORUM_PERCENTAGE / 100)) distinct voters
pub const QUORUM_PERCENTAGE: u64 = 25;
pub const MIN_QUORUM: u64 = 5;

/// Maximum number of actions in one proposal
pub const MAX_ACTIONS: usize = 5;

/// Each ed25519 signature half (r, s) is 32 bytes
pub const SIGNATURE_HALF_LEN: usize = 32;

// ── Vote digest domain ──

pub const DOMAIN_NAME: &[u8] = b"MembershipDao";
pub const DOMAIN_VERSION: &[u8] = b"1";
pub const DOMAIN_TYPE: &[u8] =
    b"Domain(bytes name,bytes version,bytes networkId,address verifyingContract)";
pub const BALLOT_TYPE: &[u8] = b"Ballot(bytes32 proposalId,uint8 support)";
pub const DIGEST_PREFIX: &[u8] = b"\x19\x01";

/// The single command a proposal may address to the DAO itself
pub const BUY_NFT_COMMAND: &[u8] = b"buyNft";
