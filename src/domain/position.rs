//! A provider's liquidity position as recorded by the hook.

use core::fmt;

use super::{Amount, Liquidity, Tick};
use crate::error::HookError;

/// One liquidity position: a tick range, the liquidity currently held in
/// it, and the cached base-currency notional used to weight draws.
///
/// # Invariants
///
/// - `tick_lower < tick_upper`.
/// - `base_notional` was derived from the current `(tick_lower,
///   tick_upper, liquidity)`; the registry recomputes it whenever the
///   liquidity changes.
///
/// # Examples
///
/// ```
/// use prize_hook::domain::{Amount, Liquidity, Position, Tick};
///
/// let lower = Tick::new(-60).expect("valid tick");
/// let upper = Tick::new(60).expect("valid tick");
/// let pos = Position::new(lower, upper, Liquidity::new(1_000), Amount::new(6))
///     .expect("valid position");
/// assert!(pos.matches_range(lower, upper));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    tick_lower: Tick,
    tick_upper: Tick,
    liquidity: Liquidity,
    base_notional: Amount,
}

impl Position {
    /// Creates a new `Position` with validated tick ordering.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidTickRange`] if `tick_lower >= tick_upper`.
    pub const fn new(
        tick_lower: Tick,
        tick_upper: Tick,
        liquidity: Liquidity,
        base_notional: Amount,
    ) -> crate::error::Result<Self> {
        if tick_lower.get() >= tick_upper.get() {
            return Err(HookError::InvalidTickRange(
                "lower tick must be less than upper tick",
            ));
        }
        Ok(Self {
            tick_lower,
            tick_upper,
            liquidity,
            base_notional,
        })
    }

    /// Returns the lower tick boundary.
    #[must_use]
    pub const fn tick_lower(&self) -> Tick {
        self.tick_lower
    }

    /// Returns the upper tick boundary.
    #[must_use]
    pub const fn tick_upper(&self) -> Tick {
        self.tick_upper
    }

    /// Returns the liquidity held.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Returns the cached base-currency notional.
    pub const fn base_notional(&self) -> Amount {
        self.base_notional
    }

    /// Returns `true` if this position covers exactly `[lower, upper)`.
    #[must_use]
    pub const fn matches_range(&self, lower: Tick, upper: Tick) -> bool {
        self.tick_lower.get() == lower.get() && self.tick_upper.get() == upper.get()
    }

    /// Replaces the liquidity and its derived notional.
    pub(crate) fn reprice(&mut self, liquidity: Liquidity, base_notional: Amount) {
        self.liquidity = liquidity;
        self.base_notional = base_notional;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position([{}, {}), liquidity={}, notional={})",
            self.tick_lower, self.tick_upper, self.liquidity, self.base_notional
        )
    }
}
