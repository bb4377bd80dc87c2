use log::debug;

use crate::client::{PendingTransaction, StakingManager};

/// Unstake the manager's signer and withdraw all staked assets.
/// Resolves once the transaction is final.
pub async fn unstake<M>(manager: &M) -> Result<(), M::Error>
where
    M: StakingManager + ?Sized,
{
    debug!(target: "timeleap_sdk::unstake", "submitting withdraw");

    let tx = manager.withdraw().await?;
    let receipt = tx.wait().await?;

    debug!(target: "timeleap_sdk::unstake", "withdraw final at ledger {}", receipt.ledger);
    Ok(())
}
