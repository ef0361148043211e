//! Swap parameters forwarded by the pool manager.

use core::fmt;

use super::{Amount, Currency, PoolKey};
use crate::error::HookError;

/// Whether the specified amount is the swap's input or its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SwapType {
    /// The input amount is fixed; output is computed.
    ExactIn = 0,
    /// The output amount is fixed; input is computed.
    ExactOut = 1,
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn => write!(f, "ExactIn"),
            Self::ExactOut => write!(f, "ExactOut"),
        }
    }
}

/// A swap as the pool manager describes it to the before-swap callback.
///
/// `amount_specified` follows the pool manager's sign convention: negative
/// for exact-input swaps, positive for exact-output swaps. It is never zero.
///
/// # Examples
///
/// ```
/// use prize_hook::domain::{SwapParams, SwapType};
///
/// let params = SwapParams::new(true, -1_000).expect("non-zero");
/// assert_eq!(params.swap_type(), SwapType::ExactIn);
/// assert_eq!(params.amount_specified_magnitude().get(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapParams {
    zero_for_one: bool,
    amount_specified: i128,
}

impl SwapParams {
    /// Creates swap parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidConfiguration`] if `amount_specified` is zero.
    pub const fn new(zero_for_one: bool, amount_specified: i128) -> crate::error::Result<Self> {
        if amount_specified == 0 {
            return Err(HookError::InvalidConfiguration(
                "swap amount must be non-zero",
            ));
        }
        Ok(Self {
            zero_for_one,
            amount_specified,
        })
    }

    /// `true` when selling currency0 for currency1.
    #[must_use]
    pub const fn zero_for_one(&self) -> bool {
        self.zero_for_one
    }

    /// Signed specified amount.
    #[must_use]
    pub const fn amount_specified(&self) -> i128 {
        self.amount_specified
    }

    /// Magnitude of the specified amount.
    pub const fn amount_specified_magnitude(&self) -> Amount {
        Amount::from_signed_magnitude(self.amount_specified)
    }

    /// Exact-input or exact-output.
    #[must_use]
    pub const fn swap_type(&self) -> SwapType {
        if self.amount_specified < 0 {
            SwapType::ExactIn
        } else {
            SwapType::ExactOut
        }
    }

    /// The currency `amount_specified` is denominated in.
    ///
    /// Exact-input swaps specify the input currency and exact-output swaps
    /// the output currency, so this is currency0 exactly when the swap
    /// direction agrees with the swap type.
    #[must_use]
    pub const fn specified_currency(&self, key: &PoolKey) -> Currency {
        let exact_in = self.amount_specified < 0;
        if self.zero_for_one == exact_in {
            key.currency0()
        } else {
            key.currency1()
        }
    }
}

impl fmt::Display for SwapParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = if self.zero_for_one { "0->1" } else { "1->0" };
        write!(
            f,
            "Swap({dir}, {}={})",
            self.swap_type(),
            self.amount_specified_magnitude()
        )
    }
}
