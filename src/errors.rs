pub const ERR_NOT_MEMBER: &str = "Not a DAO member";
pub const ERR_ALREADY_MEMBER: &str = "Already a DAO member";
pub const ERR_WRONG_FEE: &str = "Incorrect membership fee";
pub const ERR_CLOCK_NOT_STARTED: &str = "Block timestamp not set";

pub const ERR_INVALID_BATCH: &str = "Invalid action batch";
pub const ERR_DUPLICATE_PROPOSAL: &str = "Proposal already exists";
pub const ERR_UNKNOWN_PROPOSAL: &str = "Proposal does not exist";

pub const ERR_VOTING_CLOSED: &str = "Voting is closed for this proposal";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_MALFORMED_BATCH: &str = "Malformed signature batch";
pub const ERR_INVALID_SIGNATURE: &str = "Invalid signature";

pub const ERR_NOT_EXECUTABLE: &str = "Proposal is not executable";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient funds";
pub const ERR_ACTION_FAILED: &str = "Action failed";

pub const ERR_ONLY_GOVERNANCE: &str = "Only the DAO itself can call this";
pub const ERR_PRICE_EXCEEDED: &str = "Price exceeds proposal cap";
pub const ERR_MARKETPLACE_BUY_FAILED: &str = "Marketplace purchase failed";
