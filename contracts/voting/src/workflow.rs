//! Phase machine gating every other operation.
//!
//! Exactly one `WorkflowStatus` is stored. It only moves through
//! `advance`, the named transitions built on it, the tally, and the
//! administrative `set_phase` override.

use soroban_sdk::{log, Address, Env};

use crate::{access, errors::VotingError, events, storage, tally, types::WorkflowStatus};

pub fn current(env: &Env) -> WorkflowStatus {
    storage::get_status(env)
}

/// Fails with `InvalidPhase` unless the ballot is in `required`.
pub fn require_phase(env: &Env, required: WorkflowStatus) -> Result<(), VotingError> {
    let current = current(env);
    if current != required {
        log!(env, "invalid phase: required, current", required, current);
        return Err(VotingError::InvalidPhase);
    }
    Ok(())
}

/// Writes `next` and announces the change.
pub(crate) fn transition(env: &Env, previous: WorkflowStatus, next: WorkflowStatus) {
    storage::set_status(env, next);
    events::phase_changed(env, previous, next);
}

/// Moves one phase forward. From `VotingSessionEnded` this is the tally.
pub fn advance(env: &Env, caller: &Address) -> Result<WorkflowStatus, VotingError> {
    access::require_admin(env, caller)?;
    advance_from_current(env)
}

fn advance_from_current(env: &Env) -> Result<WorkflowStatus, VotingError> {
    let previous = current(env);
    if previous == WorkflowStatus::VotingSessionEnded {
        tally::finalize(env)?;
        return Ok(WorkflowStatus::VotesTallied);
    }

    let next = previous.next().ok_or(VotingError::InvalidPhase)?;
    transition(env, previous, next);
    Ok(next)
}

/// Moves from `from` to the following phase, failing when the ballot is
/// anywhere else.
pub fn step_from(
    env: &Env,
    caller: &Address,
    from: WorkflowStatus,
) -> Result<WorkflowStatus, VotingError> {
    access::require_admin(env, caller)?;
    require_phase(env, from)?;
    advance_from_current(env)
}

/// Administrative override.
///
/// `target` must be a known phase other than `VotesTallied`, and may not
/// skip ahead more than one phase. Moving backwards resets the ballot to an
/// earlier phase; leaving `VotesTallied` drops the stored result.
pub fn set_phase(env: &Env, caller: &Address, target: u32) -> Result<WorkflowStatus, VotingError> {
    access::require_admin(env, caller)?;

    let target = WorkflowStatus::from_u32(target).ok_or(VotingError::InvalidPhase)?;
    let previous = current(env);

    if target.is_terminal() {
        log!(env, "set_phase cannot reach the tallied phase", target);
        return Err(VotingError::InvalidPhase);
    }
    if target > previous && previous.next() != Some(target) {
        log!(env, "set_phase cannot skip phases", previous, target);
        return Err(VotingError::InvalidPhase);
    }
    if target == previous {
        return Ok(previous);
    }

    if previous.is_terminal() {
        storage::clear_tally(env);
    }
    transition(env, previous, target);
    Ok(target)
}
