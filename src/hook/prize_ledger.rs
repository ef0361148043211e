//! Per-pool, per-currency prize reserves.

use std::collections::HashMap;

use crate::domain::{Amount, BasisPoints, Currency, Payout, PoolKey, SwapParams};
use crate::error::HookError;
use crate::math::CheckedArithmetic;

/// Prize cut taken from a swap: `floor(|amount_specified| × cut / 10_000)`.
///
/// # Errors
///
/// Returns [`HookError::Overflow`] if the product does not fit in `u128`.
pub fn swap_prize_cut(params: &SwapParams, prize_cut: BasisPoints) -> Result<Amount, HookError> {
    prize_cut.apply(params.amount_specified_magnitude())
}

/// Accumulates prize reserves until a draw pays them out.
///
/// # Invariants
///
/// - Reserves only grow between draws.
/// - [`drain`](Self::drain) zeroes both currencies of a pool at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrizeLedger {
    reserves: HashMap<(PoolKey, Currency), Amount>,
}

impl PrizeLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current reserve of `currency` for `key`.
    pub fn reserve(&self, key: &PoolKey, currency: Currency) -> Amount {
        self.reserves
            .get(&(*key, currency))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Adds `amount` to the reserve and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Overflow`] if the reserve would exceed
    /// `u128::MAX`.
    pub fn credit(
        &mut self,
        key: &PoolKey,
        currency: Currency,
        amount: Amount,
    ) -> Result<Amount, HookError> {
        let slot = self.reserves.entry((*key, currency)).or_insert(Amount::ZERO);
        let total = slot.safe_add(&amount)?;
        *slot = total;
        Ok(total)
    }

    /// Zeroes both reserves of `key` and returns the non-zero ones in
    /// currency order.
    pub fn drain(&mut self, key: &PoolKey) -> Vec<Payout> {
        key.currencies()
            .into_iter()
            .filter_map(|currency| {
                let amount = self.reserves.remove(&(*key, currency))?;
                (!amount.is_zero()).then_some(Payout { currency, amount })
            })
            .collect()
    }
}
