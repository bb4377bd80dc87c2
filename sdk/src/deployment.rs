//! Local deployment of the full contract set for end-to-end runs.

use log::info;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, String};

use mock_nft::{MockNft, MockNftClient};
use timeleap_bank::{Bank, BankClient};
use timeleap_manager::{Manager, ManagerClient};
use timeleap_repository::{Repository, RepositoryClient};
use timeleap_stakes::{Stakes, StakesClient};

use crate::sandbox::SandboxManager;

/// One whole token at 7 decimals.
pub const ONE_TOKEN: i128 = 10_000_000;
/// Tokens minted to the user on deploy.
pub const USER_MINT: i128 = 1_000 * ONE_TOKEN;
/// Id of the NFT minted to the user on deploy.
pub const USER_NFT: u64 = 0;

/// Contracts and accounts of one deployment.
pub struct Deployment<'a> {
    pub env: &'a Env,
    pub deployer: Address,
    pub user: Address,
    pub repository: RepositoryClient<'a>,
    pub bank: BankClient<'a>,
    pub stakes: StakesClient<'a>,
    pub manager: ManagerClient<'a>,
    pub token: TokenClient<'a>,
    pub nft: MockNftClient<'a>,
}

impl<'a> Deployment<'a> {
    /// Deploy repository, bank, stakes, token, NFT and manager, then
    /// register the manager as implementation.
    ///
    /// Switches `env` to `mock_all_auths` before deploying, and it stays in
    /// that mode: setup and every later `SandboxManager` call are signed by
    /// the mock. The user is funded with `USER_MINT` tokens and owns NFT
    /// `USER_NFT`.
    ///
    /// Mirrors `deploy` in the manager crate's `test_helpers.rs`; keep the two
    /// in step.
    pub fn deploy_mocked(env: &'a Env) -> Self {
        env.mock_all_auths();

        let deployer = Address::generate(env);
        let user = Address::generate(env);

        let repository = RepositoryClient::new(env, &env.register(Repository, ()));
        repository.initialize(&deployer);

        let bank = BankClient::new(env, &env.register(Bank, ()));
        bank.initialize(&repository.address);
        let stakes = StakesClient::new(env, &env.register(Stakes, ()));
        stakes.initialize(&repository.address);

        let token_id = env
            .register_stellar_asset_contract_v2(deployer.clone())
            .address();
        let nft = MockNftClient::new(env, &env.register(MockNft, ()));
        nft.initialize(
            &deployer,
            &String::from_str(env, "Timeleap Pass"),
            &String::from_str(env, "TLP"),
        );

        let manager = ManagerClient::new(env, &env.register(Manager, ()));
        manager.initialize(
            &deployer,
            &stakes.address,
            &bank.address,
            &token_id,
            &nft.address,
        );
        repository.upgrade(&manager.address);

        StellarAssetClient::new(env, &token_id).mint(&user, &USER_MINT);
        nft.mint(&user);

        info!(target: "timeleap_sdk::deployment", "deployed manager {:?}", manager.address);

        Deployment {
            env,
            deployer,
            user,
            repository,
            bank,
            stakes,
            manager,
            token: TokenClient::new(env, &token_id),
            nft,
        }
    }

    /// Let the manager pull `amount` of the user's tokens.
    pub fn approve_token(&self, amount: i128) {
        let expiry_ledger = self.env.ledger().sequence().saturating_add(10_000);
        self.token
            .approve(&self.user, &self.manager.address, &amount, &expiry_ledger);
    }

    /// Let the manager move the user's NFT.
    pub fn approve_nft(&self, nft_id: u64) {
        self.nft.approve(&self.user, &self.manager.address, &nft_id);
    }

    /// Move ledger time forward by `seconds`.
    pub fn advance_time(&self, seconds: u64) {
        self.env
            .ledger()
            .with_mut(|li| li.timestamp = li.timestamp.saturating_add(seconds));
    }

    /// `StakingManager` signing as `signer`.
    pub fn manager_for(&self, signer: &Address) -> SandboxManager<'a> {
        SandboxManager::new(self.env, &self.manager.address, signer.clone())
    }
}
