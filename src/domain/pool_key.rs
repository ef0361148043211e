//! Pool identity.

use core::fmt;

use super::{Address, Currency, LpFee};
use crate::error::HookError;

/// Identifies a pool: its canonically ordered currencies, fee word, tick
/// spacing and the hook attached to it.
///
/// # Invariants
///
/// - `currency0 < currency1`: the pair is sorted and distinct.
/// - `tick_spacing > 0`.
///
/// # Examples
///
/// ```
/// use prize_hook::domain::{Address, Currency, LpFee, PoolKey};
///
/// let key = PoolKey::new(
///     Currency::new(Address::repeat(2)),
///     Currency::new(Address::repeat(1)),
///     LpFee::DYNAMIC,
///     60,
///     Address::repeat(9),
/// )
/// .expect("valid key");
/// // Currencies are sorted automatically.
/// assert_eq!(key.currency0(), Currency::new(Address::repeat(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolKey {
    currency0: Currency,
    currency1: Currency,
    fee: LpFee,
    tick_spacing: i32,
    hooks: Address,
}

impl PoolKey {
    /// Creates a canonically ordered pool key.
    ///
    /// # Errors
    ///
    /// - [`HookError::InvalidPoolConfiguration`] if both currencies are equal.
    /// - [`HookError::InvalidPoolConfiguration`] if `tick_spacing <= 0`.
    pub fn new(
        currency_a: Currency,
        currency_b: Currency,
        fee: LpFee,
        tick_spacing: i32,
        hooks: Address,
    ) -> crate::error::Result<Self> {
        if currency_a == currency_b {
            return Err(HookError::InvalidPoolConfiguration(
                "pool requires two distinct currencies",
            ));
        }
        if tick_spacing <= 0 {
            return Err(HookError::InvalidPoolConfiguration(
                "tick spacing must be positive",
            ));
        }
        let (currency0, currency1) = if currency_a < currency_b {
            (currency_a, currency_b)
        } else {
            (currency_b, currency_a)
        };
        Ok(Self {
            currency0,
            currency1,
            fee,
            tick_spacing,
            hooks,
        })
    }

    /// Returns the lower-sorted currency.
    #[must_use]
    pub const fn currency0(&self) -> Currency {
        self.currency0
    }

    /// Returns the higher-sorted currency.
    #[must_use]
    pub const fn currency1(&self) -> Currency {
        self.currency1
    }

    /// Returns the fee word the pool was created with.
    #[must_use]
    pub const fn fee(&self) -> LpFee {
        self.fee
    }

    /// Returns the tick spacing.
    #[must_use]
    pub const fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    /// Returns the address of the hook attached to the pool.
    #[must_use]
    pub const fn hooks(&self) -> Address {
        self.hooks
    }

    /// Both currencies, in pool order.
    #[must_use]
    pub const fn currencies(&self) -> [Currency; 2] {
        [self.currency0, self.currency1]
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool({}/{}, fee={}, spacing={})",
            self.currency0, self.currency1, self.fee, self.tick_spacing
        )
    }
}
