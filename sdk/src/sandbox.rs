//! `StakingManager` over an in-process ledger.
//!
//! Calls go straight to a registered Manager contract in a soroban `Env`.
//! A call that returns has already been applied, so the pending handle is
//! final at submission and `wait` only reports where it landed.

use async_trait::async_trait;
use log::{debug, warn};
use soroban_sdk::{Address, Env, InvokeError};
use thiserror::Error;
use timeleap_errors::{ContractError, ErrorExt};
use timeleap_manager::ManagerClient;

use crate::client::{PendingTransaction, StakingManager};
use crate::types::TxReceipt;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SandboxError {
    /// The Manager, or a contract it called, returned a contract error.
    #[error("contract error {:?}: {}", .0, .0.description())]
    Contract(ContractError),
    /// The host aborted the call, e.g. a token transfer without allowance.
    #[error("host error: {0:?}")]
    Host(InvokeError),
    #[error("could not decode the contract return value")]
    Conversion,
}

/// Flatten the nested result of a generated `try_*` call.
fn settle<T, C>(
    result: Result<Result<T, C>, Result<ContractError, InvokeError>>,
) -> Result<T, SandboxError> {
    let error = match result {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(_)) => SandboxError::Conversion,
        Err(Ok(error)) => SandboxError::Contract(error),
        Err(Err(error)) => SandboxError::Host(error),
    };
    warn!(target: "timeleap_sdk::sandbox", "manager call failed: {error}");
    Err(error)
}

/// Manager client bound to one signer.
pub struct SandboxManager<'a> {
    env: &'a Env,
    client: ManagerClient<'a>,
    signer: Address,
}

impl<'a> SandboxManager<'a> {
    pub fn new(env: &'a Env, manager: &Address, signer: Address) -> Self {
        Self {
            env,
            client: ManagerClient::new(env, manager),
            signer,
        }
    }

    pub fn signer(&self) -> &Address {
        &self.signer
    }

    pub fn manager(&self) -> &Address {
        &self.client.address
    }

    fn applied(&self) -> SandboxPending {
        let receipt = TxReceipt {
            ledger: self.env.ledger().sequence(),
            timestamp: self.env.ledger().timestamp(),
        };
        debug!(target: "timeleap_sdk::sandbox", "applied at ledger {}", receipt.ledger);
        SandboxPending { receipt }
    }
}

/// Handle to a call that the sandbox has already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxPending {
    receipt: TxReceipt,
}

#[async_trait(?Send)]
impl PendingTransaction for SandboxPending {
    type Error = SandboxError;

    async fn wait(self) -> Result<TxReceipt, SandboxError> {
        Ok(self.receipt)
    }
}

#[async_trait(?Send)]
impl<'a> StakingManager for SandboxManager<'a> {
    type Error = SandboxError;
    type Pending = SandboxPending;

    async fn stake(&self, amount: i128, duration: u64) -> Result<SandboxPending, SandboxError> {
        settle(self.client.try_stake(&self.signer, &amount, &duration))?;
        Ok(self.applied())
    }

    async fn stake_with_nft(
        &self,
        amount: i128,
        duration: u64,
        nft_id: u64,
    ) -> Result<SandboxPending, SandboxError> {
        settle(
            self.client
                .try_stake_with_nft(&self.signer, &amount, &duration, &nft_id),
        )?;
        Ok(self.applied())
    }

    async fn withdraw(&self) -> Result<SandboxPending, SandboxError> {
        settle(self.client.try_withdraw(&self.signer))?;
        Ok(self.applied())
    }
}
