//! Chain-agnostic account address.

use core::fmt;

/// A 32-byte account address identifying providers, collaborators and
/// the hook itself.
///
/// All 32-byte sequences are valid, so construction is infallible. The
/// all-zero address is reserved as a sentinel and never names a real
/// participant.
///
/// # Examples
///
/// ```
/// use prize_hook::domain::Address;
///
/// let addr = Address::from_bytes([7u8; 32]);
/// assert_eq!(addr.as_bytes(), [7u8; 32]);
/// assert!(!addr.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero sentinel address.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Builds an address whose every byte is `byte`.
    ///
    /// Handy for fixtures and simulations.
    #[must_use]
    pub const fn repeat(byte: u8) -> Self {
        Self([byte; 32])
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for the sentinel address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Address {
    /// Hex-encodes the first four bytes, enough to tell participants apart
    /// in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0.iter().take(4) {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "…")
    }
}
