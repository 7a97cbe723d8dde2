use soroban_sdk::{contracttype, String, Vec};

/// Workflow phases, in the only order the ballot may move through them.
///
/// The derived `Ord` follows the discriminants, so "phase >= X" checks
/// compare enum values directly.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::RegisteringVoters),
            1 => Some(Self::ProposalsRegistrationStarted),
            2 => Some(Self::ProposalsRegistrationEnded),
            3 => Some(Self::VotingSessionStarted),
            4 => Some(Self::VotingSessionEnded),
            5 => Some(Self::VotesTallied),
            _ => None,
        }
    }

    /// The phase that follows this one, `None` once votes are tallied.
    pub fn next(self) -> Option<Self> {
        Self::from_u32(self.as_u32() + 1)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::VotesTallied
    }
}

/// Per-identity voter record
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Position voted for; meaningful only when `has_voted` is set
    pub voted_proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TallyOutcome {
    /// Nothing was submitted, so nothing could win
    NoProposals,
    /// A single proposal holds the highest vote count
    Winner(u32),
    /// Several proposals share the highest vote count, ascending positions
    Draw(Vec<u32>),
}

/// Stored result of the final count
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TallyResult {
    pub outcome: TallyOutcome,
    pub max_votes: u32,
}

impl TallyResult {
    /// Single-winner view: the winner, or the lowest tied position on a draw.
    pub fn winning_id(&self) -> Option<u32> {
        match &self.outcome {
            TallyOutcome::NoProposals => None,
            TallyOutcome::Winner(id) => Some(*id),
            TallyOutcome::Draw(ids) => ids.first(),
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.outcome, TallyOutcome::Draw(_))
    }
}
