//! Mock NFT Contract
//!
//! A minimal non-fungible token with owner/approval semantics, deployed by
//! the staking test harness as the collateral collection. Token ids are
//! sequential from 0.
//!
//! ## Storage
//!
//! | Key                    | Tier           |
//! |------------------------|----------------|
//! | `Admin`, `Name`, `Symbol`, `NextId` | `instance()`   |
//! | `Owner(id)`, `Approved(id)`, `Balance(addr)` | `persistent()` |

#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Symbol};
use timeleap_errors::ContractError;


const BUMP_THRESHOLD: u32 = 17_280;
const BUMP_TARGET: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Name,
    Symbol,
    /// Id the next `mint` will assign.
    NextId,
    Owner(u64),
    Approved(u64),
    Balance(Address),
}

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env) -> Result<Address, ContractError> {
    let admin: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

fn load_owner(e: &Env, nft_id: u64) -> Result<Address, ContractError> {
    let key = DataKey::Owner(nft_id);
    let storage = e.storage().persistent();
    let owner: Address = storage.get(&key).ok_or(ContractError::NftNotFound)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Ok(owner)
}

fn save_owner(e: &Env, nft_id: u64, owner: &Address) {
    let key = DataKey::Owner(nft_id);
    e.storage().persistent().set(&key, owner);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn balance(e: &Env, owner: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

fn set_balance(e: &Env, owner: &Address, value: u32) {
    e.storage()
        .persistent()
        .set(&DataKey::Balance(owner.clone()), &value);
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    /// One-time initialization.
    pub fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Name, &name);
        e.storage().instance().set(&DataKey::Symbol, &symbol);
        e.storage().instance().set(&DataKey::NextId, &0_u64);
        Ok(())
    }

    /// Mint the next token id to `to`. Admin only.
    pub fn mint(e: Env, to: Address) -> Result<u64, ContractError> {
        require_admin(&e)?;

        let nft_id: u64 = e.storage().instance().get(&DataKey::NextId).unwrap_or(0);
        let next = nft_id.checked_add(1).ok_or(ContractError::Overflow)?;
        e.storage().instance().set(&DataKey::NextId, &next);

        save_owner(&e, nft_id, &to);
        set_balance(&e, &to, balance(&e, &to).saturating_add(1));

        e.events()
            .publish((Symbol::new(&e, "nft_minted"), to), nft_id);
        Ok(nft_id)
    }

    /// Let `spender` move `nft_id` on behalf of `owner`. Replaces any
    /// previous approval for the token.
    pub fn approve(
        e: Env,
        owner: Address,
        spender: Address,
        nft_id: u64,
    ) -> Result<(), ContractError> {
        owner.require_auth();
        if load_owner(&e, nft_id)? != owner {
            return Err(ContractError::NotTokenOwner);
        }
        e.storage()
            .persistent()
            .set(&DataKey::Approved(nft_id), &spender);

        e.events()
            .publish((Symbol::new(&e, "nft_approved"), owner), (spender, nft_id));
        Ok(())
    }

    /// Move `nft_id` from `from` to `to`. `spender` must be the owner or
    /// the approved address; the approval is cleared by the transfer.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        nft_id: u64,
    ) -> Result<(), ContractError> {
        spender.require_auth();

        let owner = load_owner(&e, nft_id)?;
        if owner != from {
            return Err(ContractError::NotTokenOwner);
        }
        if spender != owner {
            let approved: Option<Address> =
                e.storage().persistent().get(&DataKey::Approved(nft_id));
            if approved != Some(spender) {
                return Err(ContractError::NotApproved);
            }
        }

        e.storage().persistent().remove(&DataKey::Approved(nft_id));
        save_owner(&e, nft_id, &to);
        set_balance(&e, &from, balance(&e, &from).saturating_sub(1));
        set_balance(&e, &to, balance(&e, &to).saturating_add(1));

        e.events()
            .publish((Symbol::new(&e, "nft_transfer"), from, to), nft_id);
        Ok(())
    }

    pub fn owner_of(e: Env, nft_id: u64) -> Result<Address, ContractError> {
        load_owner(&e, nft_id)
    }

    pub fn get_approved(e: Env, nft_id: u64) -> Option<Address> {
        e.storage().persistent().get(&DataKey::Approved(nft_id))
    }

    pub fn balance_of(e: Env, owner: Address) -> u32 {
        balance(&e, &owner)
    }

    pub fn name(e: Env) -> Result<String, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Name)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn symbol(e: Env) -> Result<String, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Symbol)
            .ok_or(ContractError::NotInitialized)
    }
}
