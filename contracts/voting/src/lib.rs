#![no_std]

mod access;
mod ballot;
mod contract;
mod errors;
mod events;
mod proposals;
mod storage;
mod tally;
mod types;
mod voters;
mod workflow;

pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use proposals::MAX_DESCRIPTION_LEN;
pub use tally::count_votes;
pub use types::{Proposal, TallyOutcome, TallyResult, Voter, WorkflowStatus};
