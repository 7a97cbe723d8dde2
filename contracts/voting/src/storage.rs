use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Proposal, TallyResult, Voter, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger one day is 17,280 ledgers. Singletons live in instance
// storage and are bumped on every write; voter and proposal records live in
// persistent storage so the ballot survives a quiet voting session.
const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const RECORD_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Status,
    ProposalCount,
    Proposal(u32),
    Voter(Address),
    Tally,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

// ── Workflow status ──────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
    bump_instance(env);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, identity: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(identity.clone()))
}

pub fn save_voter(env: &Env, identity: &Address, voter: &Voter) {
    let key = DataKey::Voter(identity.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn remove_voter(env: &Env, identity: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Voter(identity.clone()));
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
    bump_instance(env);
}

pub fn get_proposal(env: &Env, position: u32) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(position))
}

pub fn save_proposal(env: &Env, position: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(position);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// ── Tally ────────────────────────────────────────────────────────────────────

pub fn get_tally(env: &Env) -> Option<TallyResult> {
    env.storage().instance().get(&DataKey::Tally)
}

pub fn set_tally(env: &Env, result: &TallyResult) {
    env.storage().instance().set(&DataKey::Tally, result);
    bump_instance(env);
}

pub fn clear_tally(env: &Env) {
    env.storage().instance().remove(&DataKey::Tally);
}
