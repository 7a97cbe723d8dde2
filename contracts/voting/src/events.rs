//! Notifications published by the voting contract.
//!
//! Each helper fires once per successful operation. Events published by a
//! call that later returns an error are discarded with the rest of its writes.

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{TallyResult, WorkflowStatus};

pub fn initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("init"),), (admin.clone(),));
}

pub fn voter_registered(env: &Env, identity: &Address) {
    env.events()
        .publish((symbol_short!("voter_reg"),), identity.clone());
}

pub fn voter_removed(env: &Env, identity: &Address) {
    env.events()
        .publish((symbol_short!("voter_del"),), identity.clone());
}

pub fn proposal_registered(env: &Env, position: u32) {
    env.events()
        .publish((symbol_short!("prop_reg"),), position);
}

pub fn vote_cast(env: &Env, identity: &Address, position: u32) {
    env.events()
        .publish((symbol_short!("voted"),), (identity.clone(), position));
}

pub fn phase_changed(env: &Env, previous: WorkflowStatus, next: WorkflowStatus) {
    env.events()
        .publish((symbol_short!("phase_chg"),), (previous, next));
}

pub fn votes_tallied(env: &Env, result: &TallyResult) {
    env.events()
        .publish((symbol_short!("tallied"),), result.clone());
}
