//! Valuation of liquidity positions.
//!
//! The hook weights draw entries by each position's base-currency notional.
//! How liquidity over a tick range converts into that notional is a pure
//! function supplied by the host; [`ConcentratedLiquidityMath`] is the
//! default, and any `Fn(Tick, Tick, Liquidity) -> Result<Amount, HookError>`
//! closure works too.

use crate::domain::{Amount, Liquidity, Tick};
use crate::error::HookError;
use crate::math::amount0_for_liquidity;

/// Pure, deterministic conversion from liquidity to base notional.
pub trait LiquidityMath {
    /// Base-currency amount represented by `liquidity` over
    /// `[tick_lower, tick_upper)`.
    ///
    /// # Errors
    ///
    /// - [`HookError::InvalidTickRange`] for an empty range.
    /// - [`HookError::Overflow`] if the amount does not fit.
    fn amount_for_liquidity(
        &self,
        tick_lower: Tick,
        tick_upper: Tick,
        liquidity: Liquidity,
    ) -> Result<Amount, HookError>;
}

/// Values positions by their currency0 content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConcentratedLiquidityMath;

impl LiquidityMath for ConcentratedLiquidityMath {
    fn amount_for_liquidity(
        &self,
        tick_lower: Tick,
        tick_upper: Tick,
        liquidity: Liquidity,
    ) -> Result<Amount, HookError> {
        amount0_for_liquidity(tick_lower, tick_upper, liquidity)
    }
}

impl<F> LiquidityMath for F
where
    F: Fn(Tick, Tick, Liquidity) -> Result<Amount, HookError>,
{
    fn amount_for_liquidity(
        &self,
        tick_lower: Tick,
        tick_upper: Tick,
        liquidity: Liquidity,
    ) -> Result<Amount, HookError> {
        self(tick_lower, tick_upper, liquidity)
    }
}
