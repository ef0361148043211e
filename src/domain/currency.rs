//! Currency identity.

use core::fmt;

use super::Address;

/// A currency traded in a pool, identified by its contract address.
///
/// The zero address denotes the chain's native currency.
///
/// # Examples
///
/// ```
/// use prize_hook::domain::{Address, Currency};
///
/// let usdc = Currency::new(Address::repeat(1));
/// assert!(!usdc.is_native());
/// assert!(Currency::NATIVE.is_native());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Currency(Address);

impl Currency {
    /// The native currency.
    pub const NATIVE: Self = Self(Address::ZERO);

    /// Creates a currency from its contract address.
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Returns the contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns `true` for the native currency.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_native() {
            write!(f, "native")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
