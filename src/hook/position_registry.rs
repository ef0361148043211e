//! Provider positions and per-pool membership.
//!
//! Each pool keeps, per provider, an ordered list of positions plus a
//! provider list in insertion order. The provider list is not
//! deduplicated: every add appends the provider once more. When a
//! provider's last position closes, every occurrence is swap-removed.

use std::collections::HashMap;

use crate::domain::{Address, Liquidity, Position, PoolKey, Tick};
use crate::error::HookError;
use crate::math::CheckedArithmetic;
use crate::traits::LiquidityMath;

/// What a liquidity removal did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Removal {
    /// No position with that exact range exists; nothing changed.
    Untracked,
    /// The position shrank and its notional was recomputed.
    Reduced,
    /// The position was closed; the provider still has others.
    Closed,
    /// The provider's last position was closed and it left the pool.
    Exited,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct PoolPositions {
    positions: HashMap<Address, Vec<Position>>,
    providers: Vec<Address>,
    position_count: usize,
}

/// Tracks every provider's positions across pools.
///
/// # Invariants
///
/// - Per pool, `position_count` equals the sum of position-list lengths.
/// - A provider appears in the provider list iff its position list is
///   non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionRegistry {
    pools: HashMap<PoolKey, PoolPositions>,
}

impl PositionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new position, valued through `math`, and returns it.
    ///
    /// # Errors
    ///
    /// - [`HookError::InvalidLiquidity`] if `liquidity` is zero.
    /// - [`HookError::InvalidTickRange`] if `tick_lower >= tick_upper`.
    /// - Any error of the liquidity math.
    pub fn add<L: LiquidityMath>(
        &mut self,
        key: &PoolKey,
        provider: Address,
        tick_lower: Tick,
        tick_upper: Tick,
        liquidity: Liquidity,
        math: &L,
    ) -> Result<Position, HookError> {
        if liquidity.is_zero() {
            return Err(HookError::InvalidLiquidity("cannot add zero liquidity"));
        }
        let notional = math.amount_for_liquidity(tick_lower, tick_upper, liquidity)?;
        let position = Position::new(tick_lower, tick_upper, liquidity, notional)?;

        let pool = self.pools.entry(*key).or_default();
        pool.positions.entry(provider).or_default().push(position);
        pool.providers.push(provider);
        pool.position_count += 1;
        Ok(position)
    }

    /// Withdraws `liquidity` from the provider's first position over
    /// exactly `[tick_lower, tick_upper)`.
    ///
    /// # Errors
    ///
    /// - [`HookError::Underflow`] if the position holds less than
    ///   `liquidity`.
    /// - Any error of the liquidity math when repricing.
    pub fn remove<L: LiquidityMath>(
        &mut self,
        key: &PoolKey,
        provider: Address,
        tick_lower: Tick,
        tick_upper: Tick,
        liquidity: Liquidity,
        math: &L,
    ) -> Result<Removal, HookError> {
        let Some(pool) = self.pools.get_mut(key) else {
            return Ok(Removal::Untracked);
        };
        let Some(list) = pool.positions.get_mut(&provider) else {
            return Ok(Removal::Untracked);
        };
        let Some(idx) = list
            .iter()
            .position(|p| p.matches_range(tick_lower, tick_upper))
        else {
            return Ok(Removal::Untracked);
        };
        let Some(position) = list.get_mut(idx) else {
            return Ok(Removal::Untracked);
        };

        let remaining = position.liquidity().safe_sub(&liquidity)?;

        if !remaining.is_zero() {
            let notional = math.amount_for_liquidity(tick_lower, tick_upper, remaining)?;
            position.reprice(remaining, notional);
            return Ok(Removal::Reduced);
        }

        list.swap_remove(idx);
        pool.position_count = pool.position_count.saturating_sub(1);
        if !list.is_empty() {
            return Ok(Removal::Closed);
        }
        pool.positions.remove(&provider);
        let mut i = 0;
        while i < pool.providers.len() {
            if pool.providers.get(i) == Some(&provider) {
                pool.providers.swap_remove(i);
            } else {
                i += 1;
            }
        }
        Ok(Removal::Exited)
    }

    /// The provider's positions in `key`, oldest first (until a close
    /// swaps the last one into its slot).
    #[must_use]
    pub fn positions(&self, key: &PoolKey, provider: &Address) -> &[Position] {
        self.pools
            .get(key)
            .and_then(|pool| pool.positions.get(provider))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The pool's provider list, with one entry per add call.
    #[must_use]
    pub fn providers(&self, key: &PoolKey) -> &[Address] {
        self.pools
            .get(key)
            .map(|pool| pool.providers.as_slice())
            .unwrap_or_default()
    }

    /// Number of open positions in `key`.
    #[must_use]
    pub fn position_count(&self, key: &PoolKey) -> usize {
        self.pools.get(key).map_or(0, |pool| pool.position_count)
    }
}
