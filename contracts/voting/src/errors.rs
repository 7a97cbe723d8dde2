use soroban_sdk::contracterror;

/// Failures reported by the voting contract.
///
/// Every check runs before the first storage write, so a returned error
/// leaves the ledger exactly as it was before the call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum VotingError {
    /// Caller is not the administrator
    Unauthorized = 1,

    /// `initialize` has not been called yet
    NotInitialized = 2,

    /// `initialize` was already called
    AlreadyInitialized = 3,

    /// Identity has no voter record
    NotRegistered = 4,

    /// Identity already has a voter record
    AlreadyRegistered = 5,

    /// Operation is not allowed in the current workflow phase
    InvalidPhase = 6,

    /// Proposal description is empty
    EmptyProposal = 7,

    /// Proposal description exceeds `MAX_DESCRIPTION_LEN`
    ProposalTooLong = 8,

    /// No proposal at the requested position
    ProposalNotFound = 9,

    /// Voter has already cast a ballot
    AlreadyVoted = 10,

    /// Votes have not been tallied yet
    NotTallied = 11,

    /// Tally completed without any proposal to elect
    NoProposals = 12,
}
