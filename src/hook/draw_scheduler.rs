//! Draw cadence, oracle funding and the pending-request table.
//!
//! A draw is requested from the after-swap callback once the interval has
//! elapsed. The request id is remembered until the oracle answers; while a
//! pool has a request in flight, no further request is issued for it.

use std::collections::HashMap;

use crate::domain::{Amount, PoolKey, RequestId};
use crate::error::HookError;
use crate::math::CheckedArithmetic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DrawSchedule {
    last_draw: u64,
    in_flight: Option<RequestId>,
}

/// Decides when draws are due and tracks the requests that serve them.
///
/// # Invariants
///
/// - Every pending request maps to a pool whose `in_flight` is that
///   request.
/// - `last_draw` only moves when a draw resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawScheduler {
    interval: u64,
    oracle_balance: Amount,
    pools: HashMap<PoolKey, DrawSchedule>,
    pending: HashMap<RequestId, PoolKey>,
}

impl DrawScheduler {
    /// Creates a scheduler drawing at most once per `interval` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidConfiguration`] if `interval` is zero.
    pub fn new(interval: u64) -> Result<Self, HookError> {
        if interval == 0 {
            return Err(HookError::InvalidConfiguration(
                "draw interval must be positive",
            ));
        }
        Ok(Self {
            interval,
            oracle_balance: Amount::ZERO,
            pools: HashMap::new(),
            pending: HashMap::new(),
        })
    }

    /// Starts the draw clock of `key` at `now`.
    pub fn register(&mut self, key: &PoolKey, now: u64) {
        self.pools.insert(
            *key,
            DrawSchedule {
                last_draw: now,
                in_flight: None,
            },
        );
    }

    /// Returns `true` if a request should be issued for `key` at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::PoolNotInitialized`] for unregistered pools.
    pub fn is_due(&self, key: &PoolKey, now: u64) -> Result<bool, HookError> {
        let schedule = self.pools.get(key).ok_or(HookError::PoolNotInitialized)?;
        if schedule.in_flight.is_some() {
            return Ok(false);
        }
        Ok(now.saturating_sub(schedule.last_draw) >= self.interval)
    }

    /// Credits the prepaid oracle balance.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Overflow`] if the balance would overflow.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, HookError> {
        self.oracle_balance = self.oracle_balance.safe_add(&amount)?;
        Ok(self.oracle_balance)
    }

    /// Pays `price` out of the prepaid balance.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InsufficientOracleFunding`] if the balance is
    /// short.
    pub fn debit(&mut self, price: Amount) -> Result<(), HookError> {
        self.ensure_funded(price)?;
        self.oracle_balance = self.oracle_balance.safe_sub(&price)?;
        Ok(())
    }

    /// Checks that the prepaid balance covers `price` without spending it.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InsufficientOracleFunding`] if the balance is
    /// short.
    pub fn ensure_funded(&self, price: Amount) -> Result<(), HookError> {
        if self.oracle_balance < price {
            return Err(HookError::InsufficientOracleFunding {
                required: price,
                available: self.oracle_balance,
            });
        }
        Ok(())
    }

    /// Records a submitted request for `key` and marks the pool in flight.
    ///
    /// # Errors
    ///
    /// - [`HookError::PoolNotInitialized`] for unregistered pools.
    /// - [`HookError::Oracle`] if the oracle reused a pending id.
    pub fn record_request(&mut self, key: &PoolKey, id: RequestId) -> Result<(), HookError> {
        if self.pending.contains_key(&id) {
            return Err(HookError::Oracle(format!("request id {id} already pending")));
        }
        let schedule = self
            .pools
            .get_mut(key)
            .ok_or(HookError::PoolNotInitialized)?;
        schedule.in_flight = Some(id);
        self.pending.insert(id, *key);
        Ok(())
    }

    /// Consumes a pending request and returns the pool it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::UnknownDrawRequest`] if `id` is not pending.
    pub fn take_pending(&mut self, id: RequestId) -> Result<PoolKey, HookError> {
        self.pending
            .remove(&id)
            .ok_or(HookError::UnknownDrawRequest(id))
    }

    /// Clears the in-flight marker and restarts the clock at `now`.
    pub fn complete(&mut self, key: &PoolKey, now: u64) {
        if let Some(schedule) = self.pools.get_mut(key) {
            schedule.in_flight = None;
            schedule.last_draw = now;
        }
    }

    /// Pool a pending request was issued for.
    #[must_use]
    pub fn pending_request(&self, id: RequestId) -> Option<PoolKey> {
        self.pending.get(&id).copied()
    }

    /// The request currently in flight for `key`.
    #[must_use]
    pub fn in_flight(&self, key: &PoolKey) -> Option<RequestId> {
        self.pools.get(key).and_then(|s| s.in_flight)
    }

    /// Time of the last resolved draw, or of initialization.
    #[must_use]
    pub fn last_draw_timestamp(&self, key: &PoolKey) -> Option<u64> {
        self.pools.get(key).map(|s| s.last_draw)
    }

    /// Prepaid balance available for requests.
    pub const fn oracle_balance(&self) -> Amount {
        self.oracle_balance
    }

    /// Minimum seconds between draws.
    #[must_use]
    pub const fn interval(&self) -> u64 {
        self.interval
    }
}
