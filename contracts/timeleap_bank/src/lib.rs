#![no_std]

//! # Timeleap Bank Contract
//!
//! Holds the staked tokens and collateral NFTs. Deposits arrive as plain
//! transfers into the bank's address (the Manager moves them with the
//! staker's allowance); releases are only honoured for the implementation
//! currently registered in the Repository.

use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Symbol};
use timeleap_errors::ContractError;
use timeleap_interfaces::{require_implementation, NftApiClient};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    /// Repository that names the allowed implementation.
    Repository,
}

fn load_repository(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Repository)
        .ok_or(ContractError::NotInitialized)
}

#[contract]
pub struct Bank;

#[contractimpl]
impl Bank {
    /// One-time initialization. Stores the repository address.
    pub fn initialize(e: Env, repository: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Repository) {
            return Err(ContractError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Repository, &repository);
        Ok(())
    }

    /// Send `amount` of `token` held by the bank to `to`.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount <= 0`
    /// * `NotImplementation` - the repository has no implementation yet
    pub fn release_token(
        e: Env,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let repository = load_repository(&e)?;
        require_implementation(&e, &repository)?;

        let bank = e.current_contract_address();
        TokenClient::new(&e, &token).transfer(&bank, &to, &amount);

        e.events()
            .publish((Symbol::new(&e, "token_released"), to), (token, amount));
        Ok(())
    }

    /// Return the collateral NFT `nft_id` of collection `nft` to `to`.
    ///
    /// # Errors
    /// * `NotImplementation` - the repository has no implementation yet
    pub fn release_nft(e: Env, nft: Address, to: Address, nft_id: u64) -> Result<(), ContractError> {
        let repository = load_repository(&e)?;
        require_implementation(&e, &repository)?;

        let bank = e.current_contract_address();
        NftApiClient::new(&e, &nft).transfer_from(&bank, &bank, &to, &nft_id);

        e.events()
            .publish((Symbol::new(&e, "nft_released"), to), (nft, nft_id));
        Ok(())
    }

    /// Balance of `token` held in custody.
    pub fn token_balance(e: Env, token: Address) -> i128 {
        TokenClient::new(&e, &token).balance(&e.current_contract_address())
    }

    pub fn get_repository(e: Env) -> Result<Address, ContractError> {
        load_repository(&e)
    }
}
