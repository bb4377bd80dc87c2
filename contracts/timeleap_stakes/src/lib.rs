//! # Timeleap Stakes Contract
//!
//! Keeps one `StakeRecord` per staker. Only the implementation registered
//! in the Repository may write; reads are public.
//!
//! ## Storage Layout
//!
//! | Key                   | Tier           | Lifecycle        |
//! |-----------------------|----------------|------------------|
//! | `DataKey::Repository` | `instance()`   | Entire contract  |
//! | `DataKey::Stake(addr)`| `persistent()` | Per open stake   |
//!
//! Stake records are unbounded, so they live in `persistent()` with their own
//! TTL rather than in the instance footprint.

#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};
use timeleap_errors::ContractError;
use timeleap_interfaces::require_implementation;

pub use timeleap_interfaces::StakeRecord;

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Repository,
    Stake(Address),
}

fn load_repository(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Repository)
        .ok_or(ContractError::NotInitialized)
}

fn load_stake(e: &Env, staker: &Address) -> Option<StakeRecord> {
    let key = DataKey::Stake(staker.clone());
    let storage = e.storage().persistent();
    let record: Option<StakeRecord> = storage.get(&key);
    if record.is_some() {
        storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    }
    record
}

#[contract]
pub struct Stakes;

#[contractimpl]
impl Stakes {
    pub fn initialize(e: Env, repository: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Repository) {
            return Err(ContractError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Repository, &repository);
        Ok(())
    }

    /// Store (or overwrite) the stake of `staker`.
    ///
    /// # Errors
    /// * `NotImplementation`: the repository has no implementation yet
    pub fn set_stake(e: Env, staker: Address, record: StakeRecord) -> Result<(), ContractError> {
        let repository = load_repository(&e)?;
        require_implementation(&e, &repository)?;

        let key = DataKey::Stake(staker);
        e.storage().persistent().set(&key, &record);
        e.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
        Ok(())
    }

    /// Delete and return the stake of `staker`.
    ///
    /// # Errors
    /// * `NotImplementation`: the repository has no implementation yet
    /// * `StakeNotFound`: `staker` has no stake
    pub fn remove_stake(e: Env, staker: Address) -> Result<StakeRecord, ContractError> {
        let repository = load_repository(&e)?;
        require_implementation(&e, &repository)?;

        let key = DataKey::Stake(staker);
        let record: StakeRecord = e
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::StakeNotFound)?;
        e.storage().persistent().remove(&key);
        Ok(record)
    }

    pub fn get_stake(e: Env, staker: Address) -> Option<StakeRecord> {
        load_stake(&e, &staker)
    }

    /// Staked amount of `staker`, `0` when there is no stake.
    pub fn get_stake_amount(e: Env, staker: Address) -> i128 {
        load_stake(&e, &staker).map_or(0, |record| record.amount)
    }

    /// Collateral NFT held for `staker`, if the stake carries one.
    pub fn get_staked_nft_id(e: Env, staker: Address) -> Option<u64> {
        load_stake(&e, &staker).and_then(|record| record.nft_id)
    }

    pub fn get_repository(e: Env) -> Result<Address, ContractError> {
        load_repository(&e)
    }
}
