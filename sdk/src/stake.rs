use log::debug;

use crate::client::{PendingTransaction, StakingManager};
use crate::types::{StakeParams, StakeWithNftParams};

/// Stake `amount` for `duration` seconds as the manager's signer.
///
/// Resolves once the transaction is final. The signer must already have
/// approved the Manager to spend `amount`.
pub async fn stake<M>(manager: &M, params: StakeParams) -> Result<(), M::Error>
where
    M: StakingManager + ?Sized,
{
    let StakeParams { amount, duration } = params;
    debug!(target: "timeleap_sdk::stake", "submitting stake: amount={amount} duration={duration}s");

    let tx = manager.stake(amount, duration).await?;
    let receipt = tx.wait().await?;

    debug!(target: "timeleap_sdk::stake", "stake final at ledger {}", receipt.ledger);
    Ok(())
}

/// Stake with one NFT as collateral. The signer must have approved the
/// Manager for both the tokens and `nft_id`.
pub async fn stake_with_nft<M>(manager: &M, params: StakeWithNftParams) -> Result<(), M::Error>
where
    M: StakingManager + ?Sized,
{
    let StakeWithNftParams {
        amount,
        duration,
        nft_id,
    } = params;
    debug!(
        target: "timeleap_sdk::stake",
        "submitting stake with nft: amount={amount} duration={duration}s nft_id={nft_id}"
    );

    let tx = manager.stake_with_nft(amount, duration, nft_id).await?;
    let receipt = tx.wait().await?;

    debug!(target: "timeleap_sdk::stake", "stake with nft final at ledger {}", receipt.ledger);
    Ok(())
}
