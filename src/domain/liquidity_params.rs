//! Liquidity modifications forwarded by the pool manager.

use core::fmt;

use super::{Liquidity, Tick};
use crate::error::HookError;

/// Direction of a liquidity modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChangeType {
    /// Liquidity is being added to a range.
    Add = 0,
    /// Liquidity is being withdrawn from a range.
    Remove = 1,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add"),
            Self::Remove => write!(f, "Remove"),
        }
    }
}

/// A liquidity modification over a tick range.
///
/// `liquidity_delta` is positive when adding and negative when removing;
/// it is never zero.
///
/// # Examples
///
/// ```
/// use prize_hook::domain::{ChangeType, ModifyLiquidityParams, Tick};
///
/// let lower = Tick::new(-60).expect("valid");
/// let upper = Tick::new(60).expect("valid");
/// let params = ModifyLiquidityParams::new(lower, upper, -500).expect("valid");
/// assert_eq!(params.change_type(), ChangeType::Remove);
/// assert_eq!(params.liquidity_magnitude().get(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifyLiquidityParams {
    tick_lower: Tick,
    tick_upper: Tick,
    liquidity_delta: i128,
}

impl ModifyLiquidityParams {
    /// Creates modification parameters.
    ///
    /// # Errors
    ///
    /// - [`HookError::InvalidTickRange`] if `tick_lower >= tick_upper`.
    /// - [`HookError::InvalidLiquidity`] if `liquidity_delta` is zero.
    pub const fn new(
        tick_lower: Tick,
        tick_upper: Tick,
        liquidity_delta: i128,
    ) -> crate::error::Result<Self> {
        if tick_lower.get() >= tick_upper.get() {
            return Err(HookError::InvalidTickRange(
                "lower tick must be less than upper tick",
            ));
        }
        if liquidity_delta == 0 {
            return Err(HookError::InvalidLiquidity(
                "liquidity delta must be non-zero",
            ));
        }
        Ok(Self {
            tick_lower,
            tick_upper,
            liquidity_delta,
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

    /// Signed liquidity delta.
    #[must_use]
    pub const fn liquidity_delta(&self) -> i128 {
        self.liquidity_delta
    }

    /// Magnitude of the delta.
    #[must_use]
    pub const fn liquidity_magnitude(&self) -> Liquidity {
        Liquidity::new(self.liquidity_delta.unsigned_abs())
    }

    /// Add or remove.
    #[must_use]
    pub const fn change_type(&self) -> ChangeType {
        if self.liquidity_delta > 0 {
            ChangeType::Add
        } else {
            ChangeType::Remove
        }
    }
}

impl fmt::Display for ModifyLiquidityParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}([{}, {}), {})",
            self.change_type(),
            self.tick_lower,
            self.tick_upper,
            self.liquidity_magnitude()
        )
    }
}
