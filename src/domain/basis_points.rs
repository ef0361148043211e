//! Basis-point representation for fees and fee shares.

use core::fmt;

use super::Amount;
use crate::error::HookError;

/// Denominator of every basis-point quantity (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%).
///
/// All `u32` values are representable, but only `0..=10_000` are
/// meaningful as percentages; see [`is_valid_percent`](Self::is_valid_percent).
/// Every scaling operation rounds down, so the prize cut can never exceed
/// the exact share.
///
/// # Examples
///
/// ```
/// use prize_hook::domain::{Amount, BasisPoints};
///
/// let cut = BasisPoints::new(25);
/// assert_eq!(cut.apply(Amount::new(1_000_000)).ok(), Some(Amount::new(2_500)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_DENOMINATOR
    }

    /// Computes `floor(amount * self / 10_000)`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Overflow`] if the intermediate product overflows.
    pub const fn apply(&self, amount: Amount) -> crate::error::Result<Amount> {
        match amount.get().checked_mul(self.0 as u128) {
            Some(product) => Ok(Amount::new(product / BPS_DENOMINATOR as u128)),
            None => Err(HookError::Overflow("basis points apply overflow")),
        }
    }

    /// Takes `share` of this value: `floor(self * share / 10_000)`.
    ///
    /// Used to derive the prize cut from the initial fee. The product is
    /// computed in `u64`, so no `u32` input can overflow it.
    #[must_use]
    pub const fn portion(&self, share: Self) -> Self {
        let scaled = (self.0 as u64 * share.0 as u64) / BPS_DENOMINATOR as u64;
        // Only reachable with share > 100%; clamp rather than truncate.
        if scaled > u32::MAX as u64 {
            Self(u32::MAX)
        } else {
            Self(scaled as u32)
        }
    }

    /// Checked subtraction. Returns `None` if `other > self`.
    #[must_use]
    pub const fn checked_sub(&self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
