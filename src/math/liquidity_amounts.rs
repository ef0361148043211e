//! Currency amounts represented by liquidity over a tick range.
//!
//! Within `[lower, upper)` a position holding `L` liquidity is worth, in
//! currency0,
//!
//! ```text
//! amount0 = L · (1/√P(lower) − 1/√P(upper))
//! ```
//!
//! which is what the hook records as a position's base notional.

use crate::domain::{Amount, Liquidity, Tick};
use crate::error::HookError;
use crate::math::sqrt_price_at_tick;

/// `2^128` as `f64` (`u128::MAX` rounds up to it).
#[allow(clippy::cast_precision_loss)]
const U128_LIMIT: f64 = u128::MAX as f64;

/// Currency0 amount for `liquidity` spread over `[lower, upper)`, floored.
///
/// # Errors
///
/// - [`HookError::InvalidTickRange`] if `lower >= upper`.
/// - [`HookError::Overflow`] if the amount does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use prize_hook::domain::{Liquidity, Tick};
/// use prize_hook::math::amount0_for_liquidity;
///
/// let lower = Tick::new(-60).expect("valid");
/// let upper = Tick::new(60).expect("valid");
/// let amount = amount0_for_liquidity(lower, upper, Liquidity::new(1_000_000))
///     .expect("fits");
/// // ≈ 0.6% of the liquidity for a ±60 tick range.
/// assert!(amount.get() > 5_990 && amount.get() < 6_010);
/// ```
pub fn amount0_for_liquidity(
    lower: Tick,
    upper: Tick,
    liquidity: Liquidity,
) -> Result<Amount, HookError> {
    if lower >= upper {
        return Err(HookError::InvalidTickRange(
            "lower tick must be less than upper tick",
        ));
    }
    if liquidity.is_zero() {
        return Ok(Amount::ZERO);
    }
    let sp_lower = sqrt_price_at_tick(lower)?;
    let sp_upper = sqrt_price_at_tick(upper)?;

    #[allow(clippy::cast_precision_loss)]
    let raw = liquidity.get() as f64 * (1.0 / sp_lower - 1.0 / sp_upper);

    if !raw.is_finite() || raw >= U128_LIMIT {
        return Err(HookError::Overflow("amount0 for liquidity overflow"));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(Amount::new(raw.max(0.0).floor() as u128))
}
