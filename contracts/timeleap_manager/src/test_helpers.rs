//! Shared test helpers for manager tests.

#![cfg(test)]

use crate::{Manager, ManagerClient};
use mock_nft::{MockNft, MockNftClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, String};
use timeleap_bank::{Bank, BankClient};
use timeleap_repository::{Repository, RepositoryClient};
use timeleap_stakes::{Stakes, StakesClient};

/// One day in seconds.
pub const ONE_DAY: u64 = crate::DAY;
/// Default minimum stake duration (90 days).
pub const MIN_STAKE_DURATION: u64 = crate::DEFAULT_MIN_STAKE_DURATION;
/// One whole token at 7 decimals.
pub const ONE_TOKEN: i128 = 10_000_000;
/// Balance minted to the user: 1000 tokens.
pub const USER_MINT: i128 = 1_000 * ONE_TOKEN;
/// Id of the NFT minted to the user.
pub const USER_NFT: u64 = 0;

pub struct Deployed<'a> {
    pub deployer: Address,
    pub user: Address,
    pub repository: RepositoryClient<'a>,
    pub bank: BankClient<'a>,
    pub stakes: StakesClient<'a>,
    pub manager: ManagerClient<'a>,
    pub token: TokenClient<'a>,
    pub nft: MockNftClient<'a>,
}

/// Full deployment: repository, bank, stakes, token, NFT and manager, with
/// the manager registered as implementation. The user holds `USER_MINT`
/// tokens and NFT `USER_NFT`.
///
/// Same sequence and constants as `timeleap_sdk::Deployment::deploy_mocked`,
/// which is the public copy of this fixture. Change both together.
pub fn deploy(e: &Env) -> Deployed<'_> {
    e.mock_all_auths();

    let deployer = Address::generate(e);
    let user = Address::generate(e);

    let repository = RepositoryClient::new(e, &e.register(Repository, ()));
    repository.initialize(&deployer);

    let bank = BankClient::new(e, &e.register(Bank, ()));
    bank.initialize(&repository.address);
    let stakes = StakesClient::new(e, &e.register(Stakes, ()));
    stakes.initialize(&repository.address);

    let token_id = e
        .register_stellar_asset_contract_v2(deployer.clone())
        .address();
    let nft = MockNftClient::new(e, &e.register(MockNft, ()));
    nft.initialize(
        &deployer,
        &String::from_str(e, "NFT"),
        &String::from_str(e, "NFT"),
    );

    let manager = ManagerClient::new(e, &e.register(Manager, ()));
    manager.initialize(
        &deployer,
        &stakes.address,
        &bank.address,
        &token_id,
        &nft.address,
    );

    repository.upgrade(&manager.address);

    StellarAssetClient::new(e, &token_id).mint(&user, &USER_MINT);
    nft.mint(&user);

    Deployed {
        deployer,
        user,
        repository,
        bank,
        stakes,
        manager,
        token: TokenClient::new(e, &token_id),
        nft,
    }
}

impl Deployed<'_> {
    /// Allow the manager to pull `amount` of the user's tokens.
    pub fn approve_token(&self, e: &Env, amount: i128) {
        let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
        self.token
            .approve(&self.user, &self.manager.address, &amount, &expiry_ledger);
    }

    /// Allow the manager to move the user's NFT.
    pub fn approve_nft(&self, nft_id: u64) {
        self.nft.approve(&self.user, &self.manager.address, &nft_id);
    }
}

/// Move ledger time forward by `seconds`.
pub fn advance_time(e: &Env, seconds: u64) {
    e.ledger()
        .with_mut(|li| li.timestamp = li.timestamp.saturating_add(seconds));
}
