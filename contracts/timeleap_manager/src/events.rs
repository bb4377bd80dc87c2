use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a token-only stake is opened.
///
/// # Topics
/// * `Symbol` - "staked"
/// * `Address` - The staker
///
/// # Data
/// * `i128` - The staked amount
/// * `u64` - The lock duration in seconds
pub fn emit_staked(e: &Env, staker: &Address, amount: i128, duration: u64) {
    let topics = (Symbol::new(e, "staked"), staker.clone());
    e.events().publish(topics, (amount, duration));
}

/// Emitted when a stake with NFT collateral is opened.
///
/// # Topics
/// * `Symbol` - "staked_with_nft"
/// * `Address` - The staker
///
/// # Data
/// * `i128` - The staked amount
/// * `u64` - The lock duration in seconds
/// * `u64` - The collateral NFT id
pub fn emit_staked_with_nft(e: &Env, staker: &Address, amount: i128, duration: u64, nft_id: u64) {
    let topics = (Symbol::new(e, "staked_with_nft"), staker.clone());
    e.events().publish(topics, (amount, duration, nft_id));
}

/// Emitted when a token-only stake is withdrawn.
///
/// # Data
/// * `i128` - The amount returned to the staker
pub fn emit_withdrawn(e: &Env, staker: &Address, amount: i128) {
    let topics = (Symbol::new(e, "withdrawn"), staker.clone());
    e.events().publish(topics, amount);
}

/// Emitted when a stake with NFT collateral is withdrawn.
///
/// # Data
/// * `i128` - The amount returned to the staker
/// * `u64` - The NFT id returned to the staker
pub fn emit_withdrawn_with_nft(e: &Env, staker: &Address, amount: i128, nft_id: u64) {
    let topics = (Symbol::new(e, "withdrawn_with_nft"), staker.clone());
    e.events().publish(topics, (amount, nft_id));
}

pub fn emit_min_duration_changed(e: &Env, admin: &Address, old_value: u64, new_value: u64) {
    let topics = (Symbol::new(e, "min_duration_changed"), admin.clone());
    e.events().publish(topics, (old_value, new_value));
}
