use soroban_sdk::{Address, Env, String, Vec};

use crate::{
    access,
    errors::VotingError,
    events, storage,
    types::{Proposal, WorkflowStatus},
    workflow,
};

/// Longest accepted proposal description, in bytes.
pub const MAX_DESCRIPTION_LEN: u32 = 256;

/// Appends a proposal at the next free position and returns that position.
pub fn submit(env: &Env, caller: &Address, description: String) -> Result<u32, VotingError> {
    access::require_voter(env, caller)?;
    workflow::require_phase(env, WorkflowStatus::ProposalsRegistrationStarted)?;

    if description.len() == 0 {
        return Err(VotingError::EmptyProposal);
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(VotingError::ProposalTooLong);
    }

    let position = storage::get_proposal_count(env);
    let proposal = Proposal {
        description,
        vote_count: 0,
    };
    storage::save_proposal(env, position, &proposal);
    storage::set_proposal_count(env, position + 1);

    events::proposal_registered(env, position);
    Ok(position)
}

pub fn get(env: &Env, position: u32) -> Result<Proposal, VotingError> {
    if position >= count(env) {
        return Err(VotingError::ProposalNotFound);
    }
    storage::get_proposal(env, position).ok_or(VotingError::ProposalNotFound)
}

pub fn count(env: &Env) -> u32 {
    storage::get_proposal_count(env)
}

/// Every proposal in position order.
pub fn all(env: &Env) -> Vec<Proposal> {
    let mut proposals = Vec::new(env);
    for position in 0..count(env) {
        if let Some(proposal) = storage::get_proposal(env, position) {
            proposals.push_back(proposal);
        }
    }
    proposals
}
