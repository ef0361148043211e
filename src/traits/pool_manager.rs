//! The exchange engine that owns pool state and drives the hook.
//!
//! The pool manager invokes the hook's callbacks around each pool
//! operation. In return the hook needs three things from it: the pool's
//! live fee, a way to set that fee, and a way to pull currency out of the
//! swap's settlement into hook custody.

use crate::domain::{Address, Amount, Currency, LpFee, PoolKey};
use crate::error::HookError;

/// Pool-manager primitives consumed by the hook.
///
/// # Errors
///
/// Implementations report their own failures as
/// [`HookError::PoolManager`]; the hook propagates them unchanged and
/// rolls back its state.
pub trait PoolManager {
    /// Identity the pool manager calls the hook with.
    #[must_use]
    fn address(&self) -> Address;

    /// The fee currently enforced for `key`, markers stripped.
    ///
    /// # Errors
    ///
    /// - [`HookError::PoolManager`] if the pool does not exist.
    fn current_fee(&self, key: &PoolKey) -> Result<LpFee, HookError>;

    /// Sets the persistent fee of a dynamic-fee pool.
    ///
    /// # Errors
    ///
    /// - [`HookError::PoolManager`] if the pool does not exist or is not
    ///   dynamic.
    fn update_dynamic_fee(&mut self, key: &PoolKey, fee: LpFee) -> Result<(), HookError>;

    /// Moves `amount` of `currency` from the swap's settlement to
    /// `recipient`.
    ///
    /// # Errors
    ///
    /// - [`HookError::PoolManager`] if the settlement cannot cover it.
    fn take(
        &mut self,
        currency: Currency,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), HookError>;
}
