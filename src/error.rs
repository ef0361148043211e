//! Unified error types for the prize hook.
//!
//! Every fallible entry point returns [`HookError`]. An error aborts the
//! whole invocation: the hook restores its state snapshot before the
//! error reaches the caller, so no partial mutation is observable.

use thiserror::Error;

use crate::domain::{Amount, BasisPoints, RequestId};

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, HookError>;

/// All failure modes of the prize hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// The pool was not created with the dynamic-fee marker, or its key
    /// does not name this hook.
    #[error("invalid pool configuration: {0}")]
    InvalidPoolConfiguration(&'static str),

    /// The prepaid oracle balance cannot cover a randomness request.
    #[error("insufficient oracle funding: required {required}, available {available}")]
    InsufficientOracleFunding {
        /// Price quoted by the oracle.
        required: Amount,
        /// Balance held by the hook.
        available: Amount,
    },

    /// A fulfillment referenced a request id the hook never issued (or
    /// already consumed).
    #[error("unknown draw request {0}")]
    UnknownDrawRequest(RequestId),

    /// The live pool fee is lower than the prize cut.
    #[error("fee underflow: current fee {current} is below prize cut {prize_cut}")]
    FeeUnderflow {
        /// Fee read from the pool manager.
        current: BasisPoints,
        /// Immutable prize cut.
        prize_cut: BasisPoints,
    },

    /// Hook configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Entry point invoked by someone other than the trusted collaborator.
    #[error("unauthorized caller: {0}")]
    Unauthorized(&'static str),

    /// The pool has not been initialized through this hook.
    #[error("pool not initialized")]
    PoolNotInitialized,

    /// The pool was already initialized through this hook.
    #[error("pool already initialized")]
    PoolAlreadyInitialized,

    /// Liquidity parameters are malformed for the callback they reached.
    #[error("invalid liquidity: {0}")]
    InvalidLiquidity(&'static str),

    /// Tick index outside the supported range.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// Tick range with `lower >= upper`.
    #[error("invalid tick range: {0}")]
    InvalidTickRange(&'static str),

    /// Fulfillment carried no random words.
    #[error("fulfillment carried no random words")]
    MissingRandomness,

    /// Arithmetic overflow.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The pool manager rejected a call.
    #[error("pool manager: {0}")]
    PoolManager(String),

    /// The randomness oracle rejected a call.
    #[error("oracle: {0}")]
    Oracle(String),

    /// A currency transfer failed.
    #[error("transfer: {0}")]
    Transfer(String),
}
