//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning checked operations of
//! the domain newtypes into [`Result`]s with a specific [`HookError`]
//! variant, so ledger code can propagate with `?`.
//!
//! # Examples
//!
//! ```
//! use prize_hook::domain::Amount;
//! use prize_hook::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(100).safe_add(&Amount::new(25));
//! assert_eq!(reserve.ok(), Some(Amount::new(125)));
//! ```

use crate::domain::{Amount, Liquidity};
use crate::error::HookError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Overflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, HookError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, HookError>;

    /// Floor division.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::DivisionByZero`] if `other` is zero.
    fn safe_div_floor(&self, other: &Self) -> Result<Self, HookError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, HookError> {
        self.checked_add(other)
            .ok_or(HookError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, HookError> {
        self.checked_sub(other)
            .ok_or(HookError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_div_floor(&self, other: &Self) -> Result<Self, HookError> {
        self.checked_div_floor(other)
            .ok_or(HookError::DivisionByZero)
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, HookError> {
        self.get()
            .checked_add(other.get())
            .map(Liquidity::new)
            .ok_or(HookError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, HookError> {
        self.get()
            .checked_sub(other.get())
            .map(Liquidity::new)
            .ok_or(HookError::Underflow("liquidity subtraction underflow"))
    }

    fn safe_div_floor(&self, other: &Self) -> Result<Self, HookError> {
        if other.is_zero() {
            return Err(HookError::DivisionByZero);
        }
        Ok(Liquidity::new(self.get() / other.get()))
    }
}
