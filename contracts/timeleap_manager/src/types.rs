use soroban_sdk::{contracttype, Address};

// ─── Configuration ─────────────────────────────────────────────────────────

/// Addresses the manager drives plus its tunable parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerConfig {
    /// May change `min_stake_duration`.
    pub admin: Address,
    /// Stakes contract holding the per-staker records.
    pub stakes: Address,
    /// Bank contract holding custody.
    pub bank: Address,
    /// Fungible token being staked.
    pub token: Address,
    /// Collection accepted as collateral.
    pub nft: Address,
    /// Shortest lock a stake may request, in seconds.
    pub min_stake_duration: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// ManagerConfig, written at initialization.
    Config,
}
