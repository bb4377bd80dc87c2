#![no_std]

//! # Timeleap Repository Contract
//!
//! Records which Manager contract is the current implementation of the
//! staking system. Bank and Stakes read it on every state-changing call and
//! only accept calls from that address, so swapping the Manager is a single
//! `upgrade` here instead of a migration of custody and stake state.
//!
//! ## Security
//! - Admin-controlled upgrades
//! - Emits `upgraded` for every implementation change

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol};
use timeleap_errors::ContractError;

/// Storage keys for the repository contract
#[contracttype]
#[derive(Clone)]
enum DataKey {
    /// Admin address
    Admin,
    /// Current implementation (Manager) address
    Implementation,
}

#[contract]
pub struct Repository;

fn load_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

#[contractimpl]
impl Repository {
    /// Initialize the repository with an admin address.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - if called a second time
    pub fn initialize(e: Env, admin: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();
        e.storage().instance().set(&DataKey::Admin, &admin);

        e.events()
            .publish((Symbol::new(&e, "repository_initialized"),), admin);
        Ok(())
    }

    /// Register `new_implementation` as the contract Bank and Stakes obey.
    ///
    /// # Errors
    /// * `NotInitialized` - if the repository has no admin yet
    ///
    /// # Events
    /// Emits `upgraded` with `(previous, new_implementation)`
    pub fn upgrade(e: Env, new_implementation: Address) -> Result<(), ContractError> {
        let admin = load_admin(&e)?;
        admin.require_auth();

        let previous: Option<Address> = e.storage().instance().get(&DataKey::Implementation);
        e.storage()
            .instance()
            .set(&DataKey::Implementation, &new_implementation);

        e.events().publish(
            (Symbol::new(&e, "upgraded"),),
            (previous, new_implementation),
        );
        Ok(())
    }

    /// The current implementation, or `None` before the first upgrade.
    pub fn implementation(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Implementation)
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        load_admin(&e)
    }
}
