//! In-memory collaborators for simulation and tests.
//!
//! Each records what the hook asked of it and can be told to fail, so
//! hosts can replay a pool's lifecycle off-chain and observe the funds
//! the hook moved.

use std::collections::{HashMap, HashSet};

use crate::domain::{Address, Amount, BasisPoints, Currency, LpFee, PoolKey, RequestId};
use crate::error::HookError;
use crate::math::CheckedArithmetic;
use crate::traits::{CurrencyTransfer, PoolManager, RandomnessOracle, RandomnessRequest};

fn credit(
    book: &mut HashMap<(Currency, Address), Amount>,
    currency: Currency,
    recipient: Address,
    amount: Amount,
) -> Result<(), HookError> {
    let slot = book.entry((currency, recipient)).or_insert(Amount::ZERO);
    *slot = slot.safe_add(&amount)?;
    Ok(())
}

/// Pool manager keeping live fees in a map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPoolManager {
    address: Address,
    fees: HashMap<PoolKey, LpFee>,
    taken: HashMap<(Currency, Address), Amount>,
    fail_takes: bool,
}

impl InMemoryPoolManager {
    /// Creates a manager calling hooks as `address`.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    /// Overrides the live fee of `key`, as a governance action would.
    pub fn set_fee(&mut self, key: &PoolKey, fee: BasisPoints) {
        self.fees.insert(*key, LpFee::from_raw(fee.get()));
    }

    /// Makes every subsequent `take` fail.
    pub fn fail_takes(&mut self, fail: bool) {
        self.fail_takes = fail;
    }

    /// Total of `currency` taken for `recipient`.
    pub fn taken(&self, currency: Currency, recipient: Address) -> Amount {
        self.taken
            .get(&(currency, recipient))
            .copied()
            .unwrap_or(Amount::ZERO)
    }
}

impl PoolManager for InMemoryPoolManager {
    fn address(&self) -> Address {
        self.address
    }

    fn current_fee(&self, key: &PoolKey) -> Result<LpFee, HookError> {
        self.fees
            .get(key)
            .copied()
            .ok_or_else(|| HookError::PoolManager("unknown pool".to_owned()))
    }

    fn update_dynamic_fee(&mut self, key: &PoolKey, fee: LpFee) -> Result<(), HookError> {
        if !key.fee().is_dynamic() {
            return Err(HookError::PoolManager("pool fee is static".to_owned()));
        }
        self.fees.insert(*key, fee.without_override());
        Ok(())
    }

    fn take(
        &mut self,
        currency: Currency,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), HookError> {
        if self.fail_takes {
            return Err(HookError::PoolManager("settlement rejected take".to_owned()));
        }
        credit(&mut self.taken, currency, recipient, amount)
    }
}

/// A request the in-memory oracle accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordedRequest {
    /// Id handed back to the hook.
    pub id: RequestId,
    /// Request parameters.
    pub request: RandomnessRequest,
    /// Amount paid.
    pub payment: Amount,
}

/// Oracle charging a flat price and numbering requests from 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOracle {
    address: Address,
    price: Amount,
    next_id: u128,
    requests: Vec<RecordedRequest>,
}

impl InMemoryOracle {
    /// Creates a free oracle fulfilling as `address`.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    /// Sets the flat price of every request.
    #[must_use]
    pub const fn with_price(mut self, price: Amount) -> Self {
        self.price = price;
        self
    }

    /// Requests accepted so far.
    #[must_use]
    pub fn requests(&self) -> &[RecordedRequest] {
        &self.requests
    }
}

impl RandomnessOracle for InMemoryOracle {
    fn address(&self) -> Address {
        self.address
    }

    fn calculate_request_price(
        &self,
        _callback_gas_limit: u32,
        _num_words: u32,
    ) -> Result<Amount, HookError> {
        Ok(self.price)
    }

    fn request_randomness(
        &mut self,
        request: RandomnessRequest,
        payment: Amount,
    ) -> Result<RequestId, HookError> {
        if payment < self.price {
            return Err(HookError::Oracle(format!(
                "payment {payment} below price {}",
                self.price
            )));
        }
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(HookError::Overflow("request id space exhausted"))?;
        let id = RequestId::new(self.next_id);
        self.requests.push(RecordedRequest {
            id,
            request,
            payment,
        });
        Ok(id)
    }
}

/// Transfer primitive that books payouts instead of moving funds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransfer {
    paid: HashMap<(Currency, Address), Amount>,
    fail_transfers: bool,
    rejected: HashSet<Currency>,
}

impl InMemoryTransfer {
    /// Makes every subsequent transfer fail.
    pub fn fail_transfers(&mut self, fail: bool) {
        self.fail_transfers = fail;
    }

    /// Makes transfers of `currency` fail until cleared with `false`.
    pub fn reject_currency(&mut self, currency: Currency, reject: bool) {
        if reject {
            self.rejected.insert(currency);
        } else {
            self.rejected.remove(&currency);
        }
    }

    /// Total of `currency` paid to `recipient`.
    pub fn paid(&self, currency: Currency, recipient: Address) -> Amount {
        self.paid
            .get(&(currency, recipient))
            .copied()
            .unwrap_or(Amount::ZERO)
    }
}

impl CurrencyTransfer for InMemoryTransfer {
    fn transfer(
        &mut self,
        currency: Currency,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), HookError> {
        if self.fail_transfers || self.rejected.contains(&currency) {
            return Err(HookError::Transfer(format!(
                "recipient {recipient} rejected {amount} of {currency}"
            )));
        }
        credit(&mut self.paid, currency, recipient, amount)
    }
}
