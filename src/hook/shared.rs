//! Thread-safe handle around a [`PrizeHook`].

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::domain::{
    Address, Amount, BeforeSwapOutcome, CallContext, DrawOutcome, ModifyLiquidityParams, PoolKey,
    Position, RequestId, SwapParams,
};
use crate::error::HookError;
use crate::traits::{CurrencyTransfer, LiquidityMath, PoolManager, RandomnessOracle};

use super::{PrizeHook, Removal};

/// Cloneable handle that serializes every invocation of one hook.
///
/// Hosts that receive pool-manager callbacks and oracle fulfillments on
/// different threads share the hook through this handle; each entry point
/// holds the lock for its whole duration, so invocations never
/// interleave.
#[derive(Debug)]
pub struct SharedPrizeHook<M, O, T, L> {
    inner: Arc<Mutex<PrizeHook<M, O, T, L>>>,
}

impl<M, O, T, L> Clone for SharedPrizeHook<M, O, T, L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M, O, T, L> SharedPrizeHook<M, O, T, L>
where
    M: PoolManager,
    O: RandomnessOracle,
    T: CurrencyTransfer,
    L: LiquidityMath,
{
    /// Wraps `hook` for shared use.
    pub fn new(hook: PrizeHook<M, O, T, L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(hook)),
        }
    }

    /// Locks the hook for direct access.
    pub fn lock(&self) -> MutexGuard<'_, PrizeHook<M, O, T, L>> {
        self.inner.lock()
    }

    /// See [`PrizeHook::deposit_oracle_funds`].
    ///
    /// # Errors
    ///
    /// As the wrapped call.
    pub fn deposit_oracle_funds(&self, amount: Amount) -> Result<Amount, HookError> {
        self.inner.lock().deposit_oracle_funds(amount)
    }

    /// See [`PrizeHook::on_initialize`].
    ///
    /// # Errors
    ///
    /// As the wrapped call.
    pub fn on_initialize(&self, ctx: CallContext, key: &PoolKey) -> Result<(), HookError> {
        self.inner.lock().on_initialize(ctx, key)
    }

    /// See [`PrizeHook::on_add_liquidity`].
    ///
    /// # Errors
    ///
    /// As the wrapped call.
    pub fn on_add_liquidity(
        &self,
        ctx: CallContext,
        key: &PoolKey,
        provider: Address,
        params: &ModifyLiquidityParams,
    ) -> Result<Position, HookError> {
        self.inner.lock().on_add_liquidity(ctx, key, provider, params)
    }

    /// See [`PrizeHook::on_remove_liquidity`].
    ///
    /// # Errors
    ///
    /// As the wrapped call.
    pub fn on_remove_liquidity(
        &self,
        ctx: CallContext,
        key: &PoolKey,
        provider: Address,
        params: &ModifyLiquidityParams,
    ) -> Result<Removal, HookError> {
        self.inner
            .lock()
            .on_remove_liquidity(ctx, key, provider, params)
    }

    /// See [`PrizeHook::on_before_swap`].
    ///
    /// # Errors
    ///
    /// As the wrapped call.
    pub fn on_before_swap(
        &self,
        ctx: CallContext,
        key: &PoolKey,
        params: &SwapParams,
    ) -> Result<BeforeSwapOutcome, HookError> {
        self.inner.lock().on_before_swap(ctx, key, params)
    }

    /// See [`PrizeHook::on_after_swap`].
    ///
    /// # Errors
    ///
    /// As the wrapped call.
    pub fn on_after_swap(
        &self,
        ctx: CallContext,
        key: &PoolKey,
    ) -> Result<Option<RequestId>, HookError> {
        self.inner.lock().on_after_swap(ctx, key)
    }

    /// See [`PrizeHook::on_randomness_fulfilled`].
    ///
    /// # Errors
    ///
    /// As the wrapped call.
    pub fn on_randomness_fulfilled(
        &self,
        ctx: CallContext,
        id: RequestId,
        random_words: &[u128],
    ) -> Result<DrawOutcome, HookError> {
        self.inner
            .lock()
            .on_randomness_fulfilled(ctx, id, random_words)
    }
}
