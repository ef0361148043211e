//! Arithmetic helpers for fee, reserve and notional calculations.
//!
//! - [`CheckedArithmetic`]: `Result`-returning arithmetic on domain types.
//! - [`sqrt_price_at_tick`]: tick to sqrt-price.
//! - [`amount0_for_liquidity`]: notional value of liquidity over a range.

mod checked;
mod liquidity_amounts;
mod tick_math;

pub use checked::CheckedArithmetic;
pub use liquidity_amounts::amount0_for_liquidity;
pub use tick_math::sqrt_price_at_tick;
