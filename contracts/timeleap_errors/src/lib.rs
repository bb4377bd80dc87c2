#![no_std]

use soroban_sdk::contracterror;

/// Coarse grouping of `ContractError` codes. Each category owns one
/// hundred-wide code block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    Initialization,
    Authorization,
    Staking,
    Custody,
    Arithmetic,
}

/// Errors returned by every Timeleap contract.
///
/// The numeric codes reach clients as `Error(Contract, code)` and must not
/// change once deployed. New variants go at the end of their block.
///
/// | Codes   | Category       |
/// |---------|----------------|
/// | 1-99    | Initialization |
/// | 100-199 | Authorization  |
/// | 200-299 | Staking        |
/// | 300-399 | Custody        |
/// | 700-799 | Arithmetic     |
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // Initialization
    /// `initialize` has not run. Raised by every contract.
    NotInitialized = 1,

    /// A second `initialize` call.
    AlreadyInitialized = 2,

    // Authorization
    /// The address passed as admin does not match the stored admin.
    /// Contracts: manager
    NotAdmin = 100,

    /// The repository has no implementation registered, so nobody may move
    /// custody or stake state.
    /// Contracts: bank, stakes
    NotImplementation = 101,

    /// `from` does not own the token being transferred or approved.
    /// Contracts: mock_nft
    NotTokenOwner = 102,

    /// Spender is neither the owner nor the approved address for the token.
    /// Contracts: mock_nft
    NotApproved = 103,

    // Staking
    /// Stake amount must be strictly positive.
    /// Contracts: manager, bank
    InvalidAmount = 200,

    /// Requested lock duration is below the configured minimum.
    /// Contracts: manager
    MinStakeDurationNotMet = 201,

    /// The staker already has an open stake.
    /// Contracts: manager
    AlreadyStaked = 202,

    /// No stake exists for the staker.
    /// Contracts: manager, stakes
    StakeNotFound = 203,

    /// The stake's unlock time has not been reached.
    /// Contracts: manager
    NotUnlocked = 204,

    /// Minimum stake duration is outside the allowed bounds.
    /// Contracts: manager
    InvalidDuration = 205,

    // Custody
    /// No NFT was minted with the given id.
    /// Contracts: mock_nft
    NftNotFound = 300,

    // Arithmetic
    /// Unlock time or NFT id would overflow `u64`.
    /// Contracts: manager, mock_nft
    Overflow = 700,
}

/// Metadata for client-side display of a `ContractError`.
pub trait ErrorExt {
    fn category(&self) -> ErrorCategory;

    /// Human-readable explanation, stable enough for logs.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::AlreadyInitialized | ContractError::NotInitialized => {
                ErrorCategory::Initialization
            }
            ContractError::NotAdmin
            | ContractError::NotImplementation
            | ContractError::NotTokenOwner
            | ContractError::NotApproved => ErrorCategory::Authorization,

            ContractError::InvalidAmount
            | ContractError::MinStakeDurationNotMet
            | ContractError::AlreadyStaked
            | ContractError::StakeNotFound
            | ContractError::NotUnlocked
            | ContractError::InvalidDuration => ErrorCategory::Staking,

            ContractError::NftNotFound => ErrorCategory::Custody,

            ContractError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "initialize has not been called",
            ContractError::AlreadyInitialized => "initialize was already called",
            ContractError::NotAdmin => "Address is not the configured admin",
            ContractError::NotImplementation => {
                "No implementation is registered in the repository"
            }
            ContractError::NotTokenOwner => "Address does not own the token",
            ContractError::NotApproved => "Spender is not approved for the token",
            ContractError::InvalidAmount => "Amount must be positive",
            ContractError::MinStakeDurationNotMet => {
                "Stake duration is below the minimum stake duration"
            }
            ContractError::AlreadyStaked => "Staker already has an open stake",
            ContractError::StakeNotFound => "No stake found for the staker",
            ContractError::NotUnlocked => "Stake unlock time has not been reached",
            ContractError::InvalidDuration => "Duration is outside the allowed bounds",
            ContractError::NftNotFound => "No NFT exists with the given id",
            ContractError::Overflow => "Value does not fit in u64",
        }
    }
}

#[cfg(test)]
mod test_errors;
