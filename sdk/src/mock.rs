//! In-memory `StakingManager` used by the wrapper tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::client::{PendingTransaction, StakingManager};
use crate::types::TxReceipt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Stake(i128, u64),
    StakeWithNft(i128, u64, u64),
    Withdraw,
}

/// Opaque failure the mock reports; tests check it comes back untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revert(pub &'static str);

#[derive(Default)]
pub struct MockManager {
    calls: RefCell<Vec<Call>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    reject: Option<Revert>,
    fail_at_finality: Option<Revert>,
    finalized: Rc<Cell<bool>>,
}

impl MockManager {
    /// Transactions stay pending until the paired sender fires.
    pub fn gated(gate: oneshot::Receiver<()>) -> Self {
        Self {
            gate: RefCell::new(Some(gate)),
            ..Self::default()
        }
    }

    pub fn rejecting(reason: Revert) -> Self {
        Self {
            reject: Some(reason),
            ..Self::default()
        }
    }

    pub fn failing_at_finality(reason: Revert) -> Self {
        Self {
            fail_at_finality: Some(reason),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn finalized(&self) -> bool {
        self.finalized.get()
    }

    fn submit(&self, call: Call) -> Result<MockPending, Revert> {
        self.calls.borrow_mut().push(call);
        if let Some(reason) = &self.reject {
            return Err(reason.clone());
        }
        let ledger = self.calls.borrow().len() as u32;
        Ok(MockPending {
            gate: self.gate.borrow_mut().take(),
            outcome: match &self.fail_at_finality {
                Some(reason) => Err(reason.clone()),
                None => Ok(TxReceipt {
                    ledger,
                    timestamp: 0,
                }),
            },
            finalized: Rc::clone(&self.finalized),
        })
    }
}

pub struct MockPending {
    gate: Option<oneshot::Receiver<()>>,
    outcome: Result<TxReceipt, Revert>,
    finalized: Rc<Cell<bool>>,
}

#[async_trait(?Send)]
impl PendingTransaction for MockPending {
    type Error = Revert;

    async fn wait(self) -> Result<TxReceipt, Revert> {
        if let Some(gate) = self.gate {
            if gate.await.is_err() {
                return Err(Revert("finality channel dropped"));
            }
        }
        self.finalized.set(true);
        self.outcome
    }
}

#[async_trait(?Send)]
impl StakingManager for MockManager {
    type Error = Revert;
    type Pending = MockPending;

    async fn stake(&self, amount: i128, duration: u64) -> Result<MockPending, Revert> {
        self.submit(Call::Stake(amount, duration))
    }

    async fn stake_with_nft(
        &self,
        amount: i128,
        duration: u64,
        nft_id: u64,
    ) -> Result<MockPending, Revert> {
        self.submit(Call::StakeWithNft(amount, duration, nft_id))
    }

    async fn withdraw(&self) -> Result<MockPending, Revert> {
        self.submit(Call::Withdraw)
    }
}
