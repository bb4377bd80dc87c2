#![no_std]

//! # Timeleap Interfaces
//!
//! Types and client traits shared across the staking contracts so that each
//! contract can call the others without linking their implementations.
//!
//! The Manager drives Stakes, Bank and the NFT collection through the
//! `*ApiClient` types generated here. Bank and Stakes consult the Repository
//! to learn which Manager is currently allowed to mutate them.

use soroban_sdk::{contractclient, contracttype, Address, Env};
use timeleap_errors::ContractError;

/// A single open stake, as recorded by the Stakes contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    /// Staked amount in token base units.
    pub amount: i128,
    /// Lock duration requested at stake time, in seconds.
    pub duration: u64,
    /// Ledger timestamp at which the stake was opened.
    pub staked_at: u64,
    /// Pre-computed unlock: `staked_at + duration`.
    pub unlock_at: u64,
    /// Collateral NFT held by the Bank, if any.
    pub nft_id: Option<u64>,
}

#[contractclient(name = "RepositoryApiClient")]
pub trait RepositoryApi {
    fn implementation(env: Env) -> Option<Address>;
}

#[contractclient(name = "StakesApiClient")]
pub trait StakesApi {
    fn set_stake(env: Env, staker: Address, record: StakeRecord) -> Result<(), ContractError>;
    fn remove_stake(env: Env, staker: Address) -> Result<StakeRecord, ContractError>;
    fn get_stake(env: Env, staker: Address) -> Option<StakeRecord>;
}

#[contractclient(name = "BankApiClient")]
pub trait BankApi {
    fn release_token(
        env: Env,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError>;
    fn release_nft(env: Env, nft: Address, to: Address, nft_id: u64)
        -> Result<(), ContractError>;
}

#[contractclient(name = "NftApiClient")]
pub trait NftApi {
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        nft_id: u64,
    ) -> Result<(), ContractError>;
    fn owner_of(env: Env, nft_id: u64) -> Result<Address, ContractError>;
}

/// Resolve the repository's current implementation and require its auth.
///
/// When the implementation contract is the direct invoker of the current
/// call, the host satisfies `require_auth` without a signature.
pub fn require_implementation(e: &Env, repository: &Address) -> Result<Address, ContractError> {
    let implementation = RepositoryApiClient::new(e, repository)
        .implementation()
        .ok_or(ContractError::NotImplementation)?;
    implementation.require_auth();
    Ok(implementation)
}
