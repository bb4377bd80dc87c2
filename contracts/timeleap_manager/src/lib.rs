//! Timeleap Manager Contract
//!
//! Entry point of the staking system. A staker locks tokens (optionally with
//! one NFT as collateral) for at least the configured minimum duration and
//! gets everything back once the unlock time has passed.
//!
//! The manager holds no assets and no stake state itself:
//! - tokens and NFTs move straight from the staker into the **Bank**, using the
//!   allowance/approval the staker granted to the manager;
//! - stake records live in the **Stakes** contract;
//! - both accept writes only from the implementation registered in the
//!   **Repository**, which must point at this contract.
//!
//! ## Key design decisions
//!
//! - **One open stake per staker**: a second stake is rejected until withdrawal.
//! - **Checks-Effects-Interactions**: the stake record is written/removed
//!   *before* any asset moves.
//! - **Overflow-safe unlock**: `staked_at.checked_add(duration)`.
//! - **Auth-gated mutations**: `staker.require_auth()` on stake/withdraw.

#![no_std]

mod events;
mod types;

pub use types::ManagerConfig;
use types::DataKey;

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};
use timeleap_errors::ContractError;
use timeleap_interfaces::{BankApiClient, NftApiClient, StakeRecord, StakesApiClient};

#[cfg(test)]
mod test_helpers;


/// One day in seconds.
pub const DAY: u64 = 86_400;
/// Minimum stake duration applied at initialization (90 days).
pub const DEFAULT_MIN_STAKE_DURATION: u64 = 90 * DAY;
/// Lower bound accepted by `set_min_stake_duration`.
pub const MIN_STAKE_DURATION_FLOOR: u64 = DAY;
/// Upper bound accepted by `set_min_stake_duration` (5 years).
pub const MIN_STAKE_DURATION_CEILING: u64 = 5 * 365 * DAY;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_config(e: &Env) -> Result<ManagerConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

fn open_stake(
    e: &Env,
    staker: &Address,
    amount: i128,
    duration: u64,
    nft_id: Option<u64>,
) -> Result<StakeRecord, ContractError> {
    staker.require_auth();
    let config = load_config(e)?;

    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if duration < config.min_stake_duration {
        return Err(ContractError::MinStakeDurationNotMet);
    }

    let stakes = StakesApiClient::new(e, &config.stakes);
    if stakes.get_stake(staker).is_some() {
        return Err(ContractError::AlreadyStaked);
    }

    let staked_at = e.ledger().timestamp();
    let unlock_at = staked_at
        .checked_add(duration)
        .ok_or(ContractError::Overflow)?;

    let record = StakeRecord {
        amount,
        duration,
        staked_at,
        unlock_at,
        nft_id,
    };
    stakes.set_stake(staker, &record);

    // The staker approved the manager; assets go directly into custody.
    let manager = e.current_contract_address();
    TokenClient::new(e, &config.token).transfer_from(&manager, staker, &config.bank, &amount);
    if let Some(nft_id) = nft_id {
        NftApiClient::new(e, &config.nft).transfer_from(&manager, staker, &config.bank, &nft_id);
    }

    Ok(record)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct Manager;

#[contractimpl]
impl Manager {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. The minimum stake duration starts at
    /// `DEFAULT_MIN_STAKE_DURATION`.
    pub fn initialize(
        e: Env,
        admin: Address,
        stakes: Address,
        bank: Address,
        token: Address,
        nft: Address,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }
        let config = ManagerConfig {
            admin,
            stakes,
            bank,
            token,
            nft,
            min_stake_duration: DEFAULT_MIN_STAKE_DURATION,
        };
        e.storage().instance().set(&DataKey::Config, &config);
        Ok(())
    }

    /// Change the minimum stake duration for stakes opened from now on.
    ///
    /// # Errors
    /// * `NotAdmin`: `admin` is not the configured admin
    /// * `InvalidDuration`: outside `[MIN_STAKE_DURATION_FLOOR, MIN_STAKE_DURATION_CEILING]`
    pub fn set_min_stake_duration(
        e: Env,
        admin: Address,
        duration: u64,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        let mut config = load_config(&e)?;
        if config.admin != admin {
            return Err(ContractError::NotAdmin);
        }
        if !(MIN_STAKE_DURATION_FLOOR..=MIN_STAKE_DURATION_CEILING).contains(&duration) {
            return Err(ContractError::InvalidDuration);
        }

        let old_value = config.min_stake_duration;
        config.min_stake_duration = duration;
        e.storage().instance().set(&DataKey::Config, &config);

        events::emit_min_duration_changed(&e, &admin, old_value, duration);
        Ok(())
    }

    // ── Stake lifecycle ────────────────────────────────────────────────────

    /// Lock `amount` tokens of `staker` for `duration` seconds.
    ///
    /// Requirements:
    /// - `amount` > 0
    /// - `duration` >= the minimum stake duration
    /// - No open stake for `staker`
    /// - `staker` has approved the manager to spend `amount`
    pub fn stake(
        e: Env,
        staker: Address,
        amount: i128,
        duration: u64,
    ) -> Result<StakeRecord, ContractError> {
        let record = open_stake(&e, &staker, amount, duration, None)?;
        events::emit_staked(&e, &staker, amount, duration);
        Ok(record)
    }

    /// Same as `stake`, additionally moving `nft_id` into custody.
    /// The staker must have approved the manager for `nft_id`.
    pub fn stake_with_nft(
        e: Env,
        staker: Address,
        amount: i128,
        duration: u64,
        nft_id: u64,
    ) -> Result<StakeRecord, ContractError> {
        let record = open_stake(&e, &staker, amount, duration, Some(nft_id))?;
        events::emit_staked_with_nft(&e, &staker, amount, duration, nft_id);
        Ok(record)
    }

    /// Return the full stake (and collateral NFT, if any) to `staker` once
    /// the unlock time has been reached.
    ///
    /// # Errors
    /// * `StakeNotFound`: `staker` has no open stake
    /// * `NotUnlocked`: ledger time is before `unlock_at`
    pub fn withdraw(e: Env, staker: Address) -> Result<StakeRecord, ContractError> {
        staker.require_auth();
        let config = load_config(&e)?;

        let stakes = StakesApiClient::new(&e, &config.stakes);
        let record = stakes
            .get_stake(&staker)
            .ok_or(ContractError::StakeNotFound)?;

        if e.ledger().timestamp() < record.unlock_at {
            return Err(ContractError::NotUnlocked);
        }

        // CEI: clear the record before releasing custody.
        stakes.remove_stake(&staker);

        let bank = BankApiClient::new(&e, &config.bank);
        bank.release_token(&config.token, &staker, &record.amount);

        match record.nft_id {
            Some(nft_id) => {
                bank.release_nft(&config.nft, &staker, &nft_id);
                events::emit_withdrawn_with_nft(&e, &staker, record.amount, nft_id);
            }
            None => events::emit_withdrawn(&e, &staker, record.amount),
        }

        Ok(record)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_config(e: Env) -> Result<ManagerConfig, ContractError> {
        load_config(&e)
    }

    pub fn get_min_stake_duration(e: Env) -> Result<u64, ContractError> {
        Ok(load_config(&e)?.min_stake_duration)
    }
}
