use async_trait::async_trait;

use crate::types::TxReceipt;

/// A submitted transaction that has not necessarily reached finality.
#[async_trait(?Send)]
pub trait PendingTransaction {
    type Error;

    /// Resolve once the transaction is final on the ledger.
    async fn wait(self) -> Result<TxReceipt, Self::Error>;
}

/// Typed call interface of the Manager contract.
///
/// Implementors are bound to a signer: every call acts for that identity,
/// which is why none of the methods take a staker address.
#[async_trait(?Send)]
pub trait StakingManager {
    /// Failure reported by the ledger or the transport, passed to callers as is.
    type Error;
    type Pending: PendingTransaction<Error = Self::Error>;

    async fn stake(&self, amount: i128, duration: u64) -> Result<Self::Pending, Self::Error>;

    async fn stake_with_nft(
        &self,
        amount: i128,
        duration: u64,
        nft_id: u64,
    ) -> Result<Self::Pending, Self::Error>;

    async fn withdraw(&self) -> Result<Self::Pending, Self::Error>;
}
