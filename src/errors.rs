pub const ERR_UNAUTHORIZED: &str = "Caller is not authorized";
pub const ERR_NOT_FOUND: &str = "No proposal with such ID";
pub const ERR_INVALID_TOKEN: &str = "Invalid voting token identifier";
pub const ERR_WRONG_TOKEN: &str = "Only the voting token can be deposited";
pub const ERR_ZERO_AMOUNT: &str = "Deposit amount must be positive";
pub const ERR_NO_DEPOSIT: &str = "No tokens deposited";
pub const ERR_ALREADY_VOTED: &str = "Already voted on this proposal";
pub const ERR_VOTING_CLOSED: &str = "Proposal no longer accepts votes";
pub const ERR_ALREADY_FINISHED: &str = "Proposal is already finished";
pub const ERR_TOO_EARLY: &str = "Debating period has not ended";
pub const ERR_WITHDRAWAL_LOCKED: &str = "Last voted proposal is still open";
pub const ERR_ACTION_EXECUTION_FAILED: &str = "Proposal action execution failed";
