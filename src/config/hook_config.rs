//! Configuration for the prize hook.

use crate::domain::{Amount, BasisPoints};
use crate::error::HookError;
use crate::traits::RandomnessRequest;

/// Default seconds between draws (one day).
pub const DEFAULT_DRAW_INTERVAL: u64 = 86_400;

/// Default notional per draw entry (one whole unit of an 18-decimal
/// currency).
pub const DEFAULT_UNIT_ENTRY_VALUE: Amount = Amount::new(1_000_000_000_000_000_000);

/// Default gas budget for the randomness callback.
pub const DEFAULT_CALLBACK_GAS_LIMIT: u32 = 100_000;

/// Default oracle confirmations.
pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;

/// Default number of random words per request.
pub const DEFAULT_NUM_WORDS: u32 = 1;

/// Set-once parameters of a [`PrizeHook`](crate::hook::PrizeHook).
///
/// # Derived Values
///
/// - Prize cut: `floor(initial_fee × prize_cut_percent / 10_000)` basis
///   points, removed from every swap's fee and routed to the reserve.
///
/// # Validation
///
/// - `initial_fee` and `prize_cut_percent` are at most 10 000 bp.
/// - `draw_interval`, `unit_entry_value` and `num_words` are non-zero.
///
/// # Examples
///
/// ```
/// use prize_hook::config::HookConfig;
/// use prize_hook::domain::BasisPoints;
///
/// let config = HookConfig::new(BasisPoints::new(500), BasisPoints::new(500))
///     .expect("valid config")
///     .with_draw_interval(3_600);
/// assert_eq!(config.prize_cut(), BasisPoints::new(25));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HookConfig {
    initial_fee: BasisPoints,
    prize_cut_percent: BasisPoints,
    draw_interval: u64,
    unit_entry_value: Amount,
    callback_gas_limit: u32,
    request_confirmations: u16,
    num_words: u32,
    native_payment: bool,
}

impl HookConfig {
    /// Creates a config with the given fee split and defaults for
    /// everything else.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidConfiguration`] if either value exceeds
    /// 10 000 bp.
    pub fn new(
        initial_fee: BasisPoints,
        prize_cut_percent: BasisPoints,
    ) -> Result<Self, HookError> {
        let config = Self {
            initial_fee,
            prize_cut_percent,
            draw_interval: DEFAULT_DRAW_INTERVAL,
            unit_entry_value: DEFAULT_UNIT_ENTRY_VALUE,
            callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
            request_confirmations: DEFAULT_REQUEST_CONFIRMATIONS,
            num_words: DEFAULT_NUM_WORDS,
            native_payment: true,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Builder setters do not validate; the hook calls this again on
    /// construction.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidConfiguration`] naming the first
    /// violated constraint.
    pub fn validate(&self) -> Result<(), HookError> {
        if !self.initial_fee.is_valid_percent() {
            return Err(HookError::InvalidConfiguration(
                "initial fee exceeds 10000 bp",
            ));
        }
        if !self.prize_cut_percent.is_valid_percent() {
            return Err(HookError::InvalidConfiguration(
                "prize cut percent exceeds 10000 bp",
            ));
        }
        if self.draw_interval == 0 {
            return Err(HookError::InvalidConfiguration(
                "draw interval must be positive",
            ));
        }
        if self.unit_entry_value.is_zero() {
            return Err(HookError::InvalidConfiguration(
                "unit entry value must be positive",
            ));
        }
        if self.num_words == 0 {
            return Err(HookError::InvalidConfiguration(
                "at least one random word is required",
            ));
        }
        Ok(())
    }

    /// Sets the minimum seconds between draws.
    #[must_use]
    pub const fn with_draw_interval(mut self, seconds: u64) -> Self {
        self.draw_interval = seconds;
        self
    }

    /// Sets the notional that buys one draw entry.
    #[must_use]
    pub const fn with_unit_entry_value(mut self, value: Amount) -> Self {
        self.unit_entry_value = value;
        self
    }

    /// Sets the gas budget for the randomness callback.
    #[must_use]
    pub const fn with_callback_gas_limit(mut self, gas: u32) -> Self {
        self.callback_gas_limit = gas;
        self
    }

    /// Sets the oracle confirmation count.
    #[must_use]
    pub const fn with_request_confirmations(mut self, confirmations: u16) -> Self {
        self.request_confirmations = confirmations;
        self
    }

    /// Sets the number of random words per request.
    #[must_use]
    pub const fn with_num_words(mut self, num_words: u32) -> Self {
        self.num_words = num_words;
        self
    }

    /// Chooses whether requests are paid in the native currency.
    #[must_use]
    pub const fn with_native_payment(mut self, native_payment: bool) -> Self {
        self.native_payment = native_payment;
        self
    }

    /// Returns the fee the pool starts at.
    #[must_use]
    pub const fn initial_fee(&self) -> BasisPoints {
        self.initial_fee
    }

    /// Returns the share of the initial fee routed to prizes.
    #[must_use]
    pub const fn prize_cut_percent(&self) -> BasisPoints {
        self.prize_cut_percent
    }

    /// Returns the prize cut in absolute basis points.
    #[must_use]
    pub const fn prize_cut(&self) -> BasisPoints {
        self.initial_fee.portion(self.prize_cut_percent)
    }

    /// Returns the minimum seconds between draws.
    #[must_use]
    pub const fn draw_interval(&self) -> u64 {
        self.draw_interval
    }

    /// Returns the notional that buys one draw entry.
    pub const fn unit_entry_value(&self) -> Amount {
        self.unit_entry_value
    }

    /// Returns the oracle confirmation count.
    #[must_use]
    pub const fn request_confirmations(&self) -> u16 {
        self.request_confirmations
    }

    /// Returns the callback gas budget.
    #[must_use]
    pub const fn callback_gas_limit(&self) -> u32 {
        self.callback_gas_limit
    }

    /// Returns the number of random words per request.
    #[must_use]
    pub const fn num_words(&self) -> u32 {
        self.num_words
    }

    /// Returns `true` if requests are paid in the native currency.
    #[must_use]
    pub const fn native_payment(&self) -> bool {
        self.native_payment
    }

    /// The oracle request issued for every draw.
    #[must_use]
    pub const fn randomness_request(&self) -> RandomnessRequest {
        RandomnessRequest {
            callback_gas_limit: self.callback_gas_limit,
            confirmations: self.request_confirmations,
            num_words: self.num_words,
            native_payment: self.native_payment,
        }
    }
}
