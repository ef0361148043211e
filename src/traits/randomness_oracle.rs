//! External source of unpredictable randomness.
//!
//! A request is paid for up front and answered later: the oracle invokes
//! [`PrizeHook::on_randomness_fulfilled`](crate::hook::PrizeHook::on_randomness_fulfilled)
//! with the request id it returned and one or more random words. Nothing
//! blocks in between.

use crate::domain::{Address, Amount, RequestId};
use crate::error::HookError;

/// Parameters of one randomness request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomnessRequest {
    /// Gas budget for the fulfillment callback.
    pub callback_gas_limit: u32,
    /// Confirmations the oracle waits before answering.
    pub confirmations: u16,
    /// Number of random words requested.
    pub num_words: u32,
    /// Pay the request fee in the native currency.
    pub native_payment: bool,
}

/// Randomness oracle primitives consumed by the hook.
pub trait RandomnessOracle {
    /// Identity the oracle calls the fulfillment entry point with.
    #[must_use]
    fn address(&self) -> Address;

    /// Fee charged for a request with the given callback budget and word
    /// count.
    ///
    /// # Errors
    ///
    /// - [`HookError::Oracle`] if the oracle cannot quote.
    fn calculate_request_price(
        &self,
        callback_gas_limit: u32,
        num_words: u32,
    ) -> Result<Amount, HookError>;

    /// Submits a paid request and returns its id.
    ///
    /// # Errors
    ///
    /// - [`HookError::Oracle`] if the request is rejected.
    fn request_randomness(
        &mut self,
        request: RandomnessRequest,
        payment: Amount,
    ) -> Result<RequestId, HookError>;
}
