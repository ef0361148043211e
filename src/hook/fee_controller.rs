//! Per-pool fee reduction.
//!
//! The hook enforces `live fee - prize cut` on every swap and routes the
//! difference into the prize reserve. The controller owns the pool
//! lifecycle too: a pool is known to the hook once it has been
//! initialized here.

use std::collections::HashMap;

use crate::domain::{BasisPoints, LpFee, PoolKey};
use crate::error::HookError;

/// Fee state of one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PoolFees {
    /// Last fee issued as an override, with the override marker set.
    reduced: Option<LpFee>,
}

/// Computes and records the reduced fee of every initialized pool.
///
/// # Invariants
///
/// - `prize_cut <= initial_fee`, both fixed at construction.
/// - A recorded reduced fee always carries the override marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeController {
    initial_fee: LpFee,
    prize_cut: BasisPoints,
    pools: HashMap<PoolKey, PoolFees>,
}

impl FeeController {
    /// Creates a controller for `initial_fee` with `prize_cut_percent` of
    /// it routed to prizes.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidConfiguration`] if either value exceeds
    /// 10 000 bp.
    pub fn new(
        initial_fee: BasisPoints,
        prize_cut_percent: BasisPoints,
    ) -> Result<Self, HookError> {
        if !prize_cut_percent.is_valid_percent() {
            return Err(HookError::InvalidConfiguration(
                "prize cut percent exceeds 10000 bp",
            ));
        }
        Ok(Self {
            initial_fee: LpFee::from_bps(initial_fee)?,
            prize_cut: initial_fee.portion(prize_cut_percent),
            pools: HashMap::new(),
        })
    }

    /// Fee the pool manager is told to enforce at initialization.
    #[must_use]
    pub const fn initial_fee(&self) -> LpFee {
        self.initial_fee
    }

    /// Basis points taken from every swap's fee.
    #[must_use]
    pub const fn prize_cut(&self) -> BasisPoints {
        self.prize_cut
    }

    /// Registers a pool and returns the fee to set on it.
    ///
    /// # Errors
    ///
    /// - [`HookError::InvalidPoolConfiguration`] if the key's fee lacks the
    ///   dynamic-fee marker.
    /// - [`HookError::PoolAlreadyInitialized`] on a second call for the
    ///   same key.
    pub fn initialize(&mut self, key: &PoolKey) -> Result<LpFee, HookError> {
        if !key.fee().is_dynamic() {
            return Err(HookError::InvalidPoolConfiguration(
                "pool must use the dynamic fee flag",
            ));
        }
        if self.pools.contains_key(key) {
            return Err(HookError::PoolAlreadyInitialized);
        }
        self.pools.insert(*key, PoolFees::default());
        Ok(self.initial_fee)
    }

    /// Returns `true` if `key` went through [`initialize`](Self::initialize).
    #[must_use]
    pub fn is_initialized(&self, key: &PoolKey) -> bool {
        self.pools.contains_key(key)
    }

    /// Fails with [`HookError::PoolNotInitialized`] for unknown pools.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn ensure_initialized(&self, key: &PoolKey) -> Result<(), HookError> {
        if self.is_initialized(key) {
            Ok(())
        } else {
            Err(HookError::PoolNotInitialized)
        }
    }

    /// The last override issued for `key`, if any.
    #[must_use]
    pub fn reduced_fee(&self, key: &PoolKey) -> Option<LpFee> {
        self.pools.get(key).and_then(|pool| pool.reduced)
    }

    /// Recomputes the reduced fee from the live fee.
    ///
    /// Returns the override to enforce for this swap, or `None` when the
    /// live fee already equals the recorded reduced fee.
    ///
    /// # Errors
    ///
    /// - [`HookError::PoolNotInitialized`] for unknown pools.
    /// - [`HookError::FeeUnderflow`] if `current < prize_cut`.
    pub fn recompute(
        &mut self,
        key: &PoolKey,
        current: LpFee,
    ) -> Result<Option<LpFee>, HookError> {
        let prize_cut = self.prize_cut;
        let pool = self
            .pools
            .get_mut(key)
            .ok_or(HookError::PoolNotInitialized)?;
        let current = current.bps();
        if pool.reduced.map(|fee| fee.bps()) == Some(current) {
            return Ok(None);
        }
        let reduced = current
            .checked_sub(prize_cut)
            .ok_or(HookError::FeeUnderflow { current, prize_cut })?;
        let fee = LpFee::from_bps(reduced)?.with_override();
        pool.reduced = Some(fee);
        Ok(Some(fee))
    }
}
