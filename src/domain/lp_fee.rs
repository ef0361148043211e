//! Pool fee word with dynamic and override marker bits.

use core::fmt;

use super::BasisPoints;
use crate::error::HookError;

/// Marker bit declaring that a pool's fee is managed by its hook.
pub const DYNAMIC_FEE_FLAG: u32 = 0x0080_0000;

/// Marker bit on a fee returned from a before-swap callback, telling the
/// pool manager to use it for the current swap only.
pub const OVERRIDE_FEE_FLAG: u32 = 0x0040_0000;

/// Mask clearing [`OVERRIDE_FEE_FLAG`].
const REMOVE_OVERRIDE_MASK: u32 = !OVERRIDE_FEE_FLAG;

/// A pool fee as the pool manager stores it: basis points in the low bits,
/// optionally tagged with [`DYNAMIC_FEE_FLAG`] (in a pool key) or
/// [`OVERRIDE_FEE_FLAG`] (in a swap override).
///
/// # Examples
///
/// ```
/// use prize_hook::domain::{BasisPoints, LpFee};
///
/// assert!(LpFee::DYNAMIC.is_dynamic());
///
/// let fee = LpFee::from_bps(BasisPoints::new(475)).expect("valid fee");
/// let tagged = fee.with_override();
/// assert!(tagged.is_override());
/// assert_eq!(tagged.bps(), BasisPoints::new(475));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpFee(u32);

impl LpFee {
    /// The fee a dynamic-fee pool carries in its key.
    pub const DYNAMIC: Self = Self(DYNAMIC_FEE_FLAG);

    /// Highest fee a pool may enforce.
    pub const MAX: BasisPoints = BasisPoints::MAX_PERCENT;

    /// Wraps a raw fee word, markers included.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Creates an untagged fee.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidConfiguration`] if `bps` exceeds 100%.
    pub const fn from_bps(bps: BasisPoints) -> crate::error::Result<Self> {
        if !bps.is_valid_percent() {
            return Err(HookError::InvalidConfiguration(
                "fee must not exceed 10000 basis points",
            ));
        }
        Ok(Self(bps.get()))
    }

    /// Returns the raw fee word.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the dynamic-fee marker is set.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.0 & DYNAMIC_FEE_FLAG != 0
    }

    /// Returns `true` if the override marker is set.
    #[must_use]
    pub const fn is_override(&self) -> bool {
        self.0 & OVERRIDE_FEE_FLAG != 0
    }

    /// Returns this fee tagged with the override marker.
    #[must_use]
    pub const fn with_override(&self) -> Self {
        Self(self.0 | OVERRIDE_FEE_FLAG)
    }

    /// Returns this fee with the override marker cleared.
    #[must_use]
    pub const fn without_override(&self) -> Self {
        Self(self.0 & REMOVE_OVERRIDE_MASK)
    }

    /// The fee in basis points, markers stripped.
    #[must_use]
    pub const fn bps(&self) -> BasisPoints {
        BasisPoints::new(self.0 & !(DYNAMIC_FEE_FLAG | OVERRIDE_FEE_FLAG))
    }
}

impl fmt::Display for LpFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dynamic() {
            return write!(f, "dynamic");
        }
        write!(f, "{}", self.bps())?;
        if self.is_override() {
            write!(f, " (override)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_marker() {
        assert!(LpFee::DYNAMIC.is_dynamic());
        assert!(!LpFee::DYNAMIC.is_override());
        assert!(!LpFee::from_raw(3_000).is_dynamic());
    }

    #[test]
    fn override_round_trip_keeps_bps() {
        let Ok(fee) = LpFee::from_bps(BasisPoints::new(475)) else {
            panic!("expected Ok");
        };
        let tagged = fee.with_override();
        assert_eq!(tagged.get(), 475 | OVERRIDE_FEE_FLAG);
        assert_eq!(tagged.without_override(), fee);
        assert_eq!(tagged.bps(), BasisPoints::new(475));
    }

    #[test]
    fn from_bps_rejects_above_max() {
        assert!(LpFee::from_bps(BasisPoints::new(10_001)).is_err());
        assert!(LpFee::from_bps(LpFee::MAX).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(LpFee::DYNAMIC.to_string(), "dynamic");
        assert_eq!(LpFee::from_raw(30).to_string(), "30bp");
        assert_eq!(LpFee::from_raw(30).with_override().to_string(), "30bp (override)");
    }
}
