//! Final count of the ballot.
//!
//! The scan runs in two passes: the first finds the highest vote count, the
//! second collects every position holding it. One holder is a winner, more
//! than one is a draw.

use soroban_sdk::{Address, Env, Vec};

use crate::{
    access,
    errors::VotingError,
    events, proposals, storage,
    types::{TallyOutcome, TallyResult, WorkflowStatus},
    workflow,
};

/// Resolves `counts`, indexed by proposal position, into an outcome.
pub fn count_votes(env: &Env, counts: &Vec<u32>) -> TallyResult {
    let max_votes = counts.iter().max().unwrap_or(0);

    let mut leaders: Vec<u32> = Vec::new(env);
    for (position, votes) in counts.iter().enumerate() {
        if votes == max_votes {
            leaders.push_back(position as u32);
        }
    }

    let outcome = match leaders.len() {
        0 => TallyOutcome::NoProposals,
        1 => TallyOutcome::Winner(leaders.get_unchecked(0)),
        _ => TallyOutcome::Draw(leaders),
    };

    TallyResult { outcome, max_votes }
}

/// Counts the stored ballot, records the result and closes the workflow.
pub(crate) fn finalize(env: &Env) -> Result<TallyResult, VotingError> {
    workflow::require_phase(env, WorkflowStatus::VotingSessionEnded)?;

    let mut counts: Vec<u32> = Vec::new(env);
    for proposal in proposals::all(env).iter() {
        counts.push_back(proposal.vote_count);
    }
    let result = count_votes(env, &counts);

    storage::set_tally(env, &result);
    events::votes_tallied(env, &result);
    workflow::transition(
        env,
        WorkflowStatus::VotingSessionEnded,
        WorkflowStatus::VotesTallied,
    );

    Ok(result)
}

/// Single-winner tally. A draw resolves to its lowest position; `None` when
/// no proposal was submitted.
pub fn tally(env: &Env, caller: &Address) -> Result<Option<u32>, VotingError> {
    access::require_admin(env, caller)?;
    Ok(finalize(env)?.winning_id())
}

/// Draw-aware tally exposing every tied position.
pub fn tally_draw(env: &Env, caller: &Address) -> Result<TallyResult, VotingError> {
    access::require_admin(env, caller)?;
    finalize(env)
}

pub fn result(env: &Env) -> Result<TallyResult, VotingError> {
    storage::get_tally(env).ok_or(VotingError::NotTallied)
}

pub fn winning_id(env: &Env) -> Result<u32, VotingError> {
    result(env)?.winning_id().ok_or(VotingError::NoProposals)
}

/// Winning positions: one on a clear win, all tied ones on a draw.
pub fn winning_ids(env: &Env) -> Result<Vec<u32>, VotingError> {
    let result = result(env)?;
    Ok(match result.outcome {
        TallyOutcome::NoProposals => Vec::new(env),
        TallyOutcome::Winner(id) => Vec::from_array(env, [id]),
        TallyOutcome::Draw(ids) => ids,
    })
}
