//! Liquidity units held by a position.

use core::fmt;

/// Liquidity units in a concentrated position.
///
/// Distinct from [`Amount`](super::Amount): liquidity measures depth over a
/// price range, not a quantity of a single currency. The currency value of
/// a position is derived through [`LiquidityMath`](crate::traits::LiquidityMath).
///
/// # Examples
///
/// ```
/// use prize_hook::domain::Liquidity;
///
/// let held = Liquidity::new(1_000);
/// assert_eq!(held.checked_apply_delta(-400), Some(Liquidity::new(600)));
/// assert_eq!(held.checked_apply_delta(-1_001), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Liquidity(u128);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Liquidity` from a raw `u128` value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies a signed liquidity delta as reported by the pool manager.
    ///
    /// Returns `None` if the result would be negative or overflow.
    #[must_use]
    pub const fn checked_apply_delta(&self, delta: i128) -> Option<Self> {
        if delta >= 0 {
            match self.0.checked_add(delta.unsigned_abs()) {
                Some(v) => Some(Self(v)),
                None => None,
            }
        } else {
            match self.0.checked_sub(delta.unsigned_abs()) {
                Some(v) => Some(Self(v)),
                None => None,
            }
        }
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
