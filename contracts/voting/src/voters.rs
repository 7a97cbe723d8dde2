use soroban_sdk::{Address, Env};

use crate::{access, errors::VotingError, events, storage, types::Voter};

/// Adds `identity` to the electorate. Re-registering an existing voter is
/// rejected so a cast ballot can never be wiped by an overwrite.
pub fn register(env: &Env, caller: &Address, identity: &Address) -> Result<(), VotingError> {
    access::require_admin(env, caller)?;

    if storage::get_voter(env, identity).is_some() {
        return Err(VotingError::AlreadyRegistered);
    }

    let voter = Voter {
        is_registered: true,
        has_voted: false,
        voted_proposal_id: 0,
    };
    storage::save_voter(env, identity, &voter);
    events::voter_registered(env, identity);
    Ok(())
}

/// Erases the voter record. A voter whose ballot is already counted stays,
/// otherwise proposal counts would no longer match the electorate.
pub fn remove(env: &Env, caller: &Address, identity: &Address) -> Result<(), VotingError> {
    access::require_admin(env, caller)?;

    let voter = storage::get_voter(env, identity).ok_or(VotingError::NotRegistered)?;
    if voter.has_voted {
        return Err(VotingError::AlreadyVoted);
    }

    storage::remove_voter(env, identity);
    events::voter_removed(env, identity);
    Ok(())
}

/// Snapshot of the record, all fields cleared when none exists.
pub fn lookup(env: &Env, identity: &Address) -> Voter {
    storage::get_voter(env, identity).unwrap_or_default()
}
