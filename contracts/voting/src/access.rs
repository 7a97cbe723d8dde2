//! Caller checks run at the top of every gated operation.

use soroban_sdk::{Address, Env};

use crate::{errors::VotingError, storage, types::Voter};

/// Authenticates `caller` and confirms it is the stored administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<Address, VotingError> {
    let admin = storage::get_admin(env).ok_or(VotingError::NotInitialized)?;
    caller.require_auth();
    if *caller != admin {
        return Err(VotingError::Unauthorized);
    }
    Ok(admin)
}

/// Authenticates `caller` and returns its voter record.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    if !storage::has_admin(env) {
        return Err(VotingError::NotInitialized);
    }
    caller.require_auth();
    storage::get_voter(env, caller)
        .filter(|voter| voter.is_registered)
        .ok_or(VotingError::NotRegistered)
}

pub fn is_admin(env: &Env, identity: &Address) -> bool {
    storage::get_admin(env).map_or(false, |admin| admin == *identity)
}
