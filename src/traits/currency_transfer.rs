//! Outbound currency transfers from hook custody.

use crate::domain::{Address, Amount, Currency};
use crate::error::HookError;

/// Pays currency held by the hook to an arbitrary recipient.
///
/// Used only to pay draw winners.
pub trait CurrencyTransfer {
    /// Transfers `amount` of `currency` to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`HookError::Transfer`] if custody cannot cover the amount or the
    ///   recipient rejects it.
    fn transfer(
        &mut self,
        currency: Currency,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), HookError>;
}
