//! Client helpers for the Timeleap staking contracts.
//!
//! [`stake`], [`stake_with_nft`] and [`unstake`] submit one Manager call
//! through any [`StakingManager`] and resolve once the transaction is final.
//! Failures come back exactly as the manager reported them.
//!
//! [`SandboxManager`] and [`Deployment`] run the same flows against the
//! contracts in a local soroban `Env`.

pub mod client;
pub mod deployment;
pub mod sandbox;
mod stake;
mod types;
mod unstake;

#[cfg(test)]
mod mock;

pub use client::{PendingTransaction, StakingManager};
pub use deployment::Deployment;
pub use sandbox::{SandboxError, SandboxManager, SandboxPending};
pub use stake::{stake, stake_with_nft};
pub use types::{StakeParams, StakeWithNftParams, TxReceipt};
pub use unstake::unstake;

pub use timeleap_errors::{ContractError, ErrorCategory, ErrorExt};
pub use timeleap_manager::{DAY, DEFAULT_MIN_STAKE_DURATION};
