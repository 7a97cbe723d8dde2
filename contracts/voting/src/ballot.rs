use soroban_sdk::{Address, Env};

use crate::{
    access,
    errors::VotingError,
    events, proposals, storage,
    types::WorkflowStatus,
    workflow,
};

/// Records `caller`'s single ballot for the proposal at `position`.
///
/// All checks complete before either record is written, and both writes
/// land in the same invocation, so the voter flag and the proposal count
/// move together.
pub fn vote(env: &Env, caller: &Address, position: u32) -> Result<(), VotingError> {
    let mut voter = access::require_voter(env, caller)?;
    workflow::require_phase(env, WorkflowStatus::VotingSessionStarted)?;

    if voter.has_voted {
        return Err(VotingError::AlreadyVoted);
    }
    let mut proposal = proposals::get(env, position)?;

    voter.has_voted = true;
    voter.voted_proposal_id = position;
    proposal.vote_count += 1;

    storage::save_voter(env, caller, &voter);
    storage::save_proposal(env, position, &proposal);

    events::vote_cast(env, caller, position);
    Ok(())
}
