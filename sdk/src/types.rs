/// Arguments of a token-only stake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeParams {
    /// Amount in token base units.
    pub amount: i128,
    /// Lock duration in seconds.
    pub duration: u64,
}

/// Arguments of a stake carrying one NFT as collateral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeWithNftParams {
    /// Amount in token base units.
    pub amount: i128,
    /// Lock duration in seconds.
    pub duration: u64,
    /// Id of the NFT moved into custody.
    pub nft_id: u64,
}

/// Where a transaction became final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxReceipt {
    /// Ledger sequence that included the transaction.
    pub ledger: u32,
    /// Close time of that ledger, in seconds.
    pub timestamp: u64,
}
