use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use crate::{
    access, ballot,
    errors::VotingError,
    events, proposals, storage, tally, voters,
    types::{Proposal, TallyResult, Voter, WorkflowStatus},
    workflow,
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Fixes the administrator and opens voter registration.
    /// Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_proposal_count(&env, 0);

        events::initialized(&env, &admin);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    pub fn is_admin(env: Env, identity: Address) -> bool {
        access::is_admin(&env, &identity)
    }

    // ── Voter registry ───────────────────────────────────────────────────────

    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        voters::register(&env, &caller, &voter)
    }

    pub fn delete_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        voters::remove(&env, &caller, &voter)
    }

    pub fn get_voter(env: Env, voter: Address) -> Voter {
        voters::lookup(&env, &voter)
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    pub fn workflow_status(env: Env) -> WorkflowStatus {
        workflow::current(&env)
    }

    /// Moves to the next phase; from `VotingSessionEnded` this tallies.
    pub fn next_workflow_status(env: Env, caller: Address) -> Result<WorkflowStatus, VotingError> {
        workflow::advance(&env, &caller)
    }

    /// Administrative override taking a raw phase code (0 to 4).
    pub fn set_workflow_status(
        env: Env,
        caller: Address,
        target: u32,
    ) -> Result<WorkflowStatus, VotingError> {
        workflow::set_phase(&env, &caller, target)
    }

    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        workflow::step_from(&env, &caller, WorkflowStatus::RegisteringVoters).map(|_| ())
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        workflow::step_from(&env, &caller, WorkflowStatus::ProposalsRegistrationStarted)
            .map(|_| ())
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        workflow::step_from(&env, &caller, WorkflowStatus::ProposalsRegistrationEnded).map(|_| ())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        workflow::step_from(&env, &caller, WorkflowStatus::VotingSessionStarted).map(|_| ())
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Registers a proposal and returns its 0-based position.
    pub fn add_proposal(env: Env, caller: Address, description: String) -> Result<u32, VotingError> {
        proposals::submit(&env, &caller, description)
    }

    pub fn get_one_proposal(env: Env, position: u32) -> Result<Proposal, VotingError> {
        proposals::get(&env, position)
    }

    pub fn get_proposals_count(env: Env) -> u32 {
        proposals::count(&env)
    }

    pub fn get_proposals(env: Env) -> Vec<Proposal> {
        proposals::all(&env)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    pub fn set_vote(env: Env, caller: Address, position: u32) -> Result<(), VotingError> {
        ballot::vote(&env, &caller, position)
    }

    // ── Tally ────────────────────────────────────────────────────────────────

    /// Closes the ballot and returns the winning position, the lowest tied
    /// position on a draw, or `None` when nothing was proposed.
    pub fn tally(env: Env, caller: Address) -> Result<Option<u32>, VotingError> {
        tally::tally(&env, &caller)
    }

    pub fn tally_votes(env: Env, caller: Address) -> Result<Option<u32>, VotingError> {
        tally::tally(&env, &caller)
    }

    /// Closes the ballot and returns the full result, draws included.
    pub fn tally_draw(env: Env, caller: Address) -> Result<TallyResult, VotingError> {
        tally::tally_draw(&env, &caller)
    }

    pub fn tally_result(env: Env) -> Result<TallyResult, VotingError> {
        tally::result(&env)
    }

    pub fn winning_proposal_id(env: Env) -> Result<u32, VotingError> {
        tally::winning_id(&env)
    }

    pub fn winning_proposal_ids(env: Env) -> Result<Vec<u32>, VotingError> {
        tally::winning_ids(&env)
    }
}
