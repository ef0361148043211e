//! Tick-to-sqrt-price conversion.
//!
//! Implements `√P(tick) = 1.0001^(tick / 2)`, the relationship between a
//! tick index and the square root of its price.
//!
//! # Examples
//!
//! ```
//! use prize_hook::domain::Tick;
//! use prize_hook::math::sqrt_price_at_tick;
//!
//! let sp = sqrt_price_at_tick(Tick::ZERO).expect("tick 0 is valid");
//! assert!((sp - 1.0).abs() < f64::EPSILON);
//! ```
//!
//! # Precision
//!
//! `f64` arithmetic (`powf`). Results are deterministic for a given
//! platform, which is all draw weighting requires.

use crate::domain::Tick;
use crate::error::HookError;

/// Base of the tick-price exponential: `price = BASE^tick`.
const BASE: f64 = 1.0001;

/// Computes `√(1.0001^tick)`.
///
/// # Errors
///
/// Returns [`HookError::InvalidTick`] if the result is not a finite,
/// positive number (cannot happen for ticks inside the valid range, but
/// checked anyway).
#[must_use = "this returns the computed sqrt-price and does not modify state"]
pub fn sqrt_price_at_tick(tick: Tick) -> Result<f64, HookError> {
    let sp = BASE.powf(f64::from(tick.get()) / 2.0);
    if !sp.is_finite() || sp <= 0.0 {
        return Err(HookError::InvalidTick("tick produces non-finite sqrt price"));
    }
    Ok(sp)
}
