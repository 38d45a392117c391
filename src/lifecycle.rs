//! Proposal lifecycle arithmetic.
//!
//! Nothing here touches storage: state, quorum and weight are recomputed
//! from the stored counters and the current block timestamp on every read.

use crate::config::{EXPIRY_WINDOW, MIN_QUORUM, ONE_DAY, QUORUM_PERCENTAGE, VOTING_WINDOW};
use crate::types::{ProposalState, VoteKind, VoteTally};

/// Minimum number of distinct voters for a proposal to resolve.
pub fn quorum_threshold(total_members: u64) -> u64 {
    let proportional = total_members.saturating_mul(QUORUM_PERCENTAGE) / 100;
    core::cmp::max(MIN_QUORUM, proportional)
}

/// Weight of a vote: whole days of membership, never below 1. Abstentions weigh nothing.
pub fn vote_weight(kind: VoteKind, joined_at: u64, now: u64) -> u64 {
    match kind {
        VoteKind::Abstain => 0,
        VoteKind::For | VoteKind::Against => {
            core::cmp::max(1, now.saturating_sub(joined_at) / ONE_DAY)
        },
    }
}

impl VoteTally {
    pub fn exists(&self) -> bool {
        self.created_at != 0
    }

    pub fn quorum_reached(&self, total_members: u64) -> bool {
        self.member_vote_count >= quorum_threshold(total_members)
    }

    /// Checks run in a fixed order: existence, success, expiry, quorum, window.
    pub fn state(&self, total_members: u64, now: u64) -> ProposalState {
        if !self.exists() {
            return ProposalState::None;
        }
        if self.succeeded {
            return ProposalState::Succeeded;
        }
        if now >= self.created_at.saturating_add(EXPIRY_WINDOW) {
            return ProposalState::Expired;
        }
        if !self.quorum_reached(total_members) {
            return ProposalState::Active;
        }
        if now < self.created_at.saturating_add(VOTING_WINDOW) {
            return ProposalState::QuorumReached;
        }

        if self.for_votes >= self.against_votes {
            ProposalState::Passed
        } else {
            ProposalState::Defeated
        }
    }

    /// Adds one vote. Abstentions only count towards participation.
    pub fn record(&mut self, kind: VoteKind, weight: u64) {
        match kind {
            VoteKind::For => self.for_votes += weight,
            VoteKind::Against => self.against_votes += weight,
            VoteKind::Abstain => self.abstain_votes += 1,
        }
        self.member_vote_count += 1;
    }
}
