//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use prize_hook::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, BasisPoints, BeforeSwapOutcome, CallContext, Currency, DrawOutcome,
    Liquidity, LpFee, ModifyLiquidityParams, PoolKey, Position, RequestId, SwapParams, Tick,
};

pub use crate::traits::{
    ConcentratedLiquidityMath, CurrencyTransfer, LiquidityMath, PoolManager, RandomnessOracle,
    RandomnessRequest,
};

pub use crate::math::CheckedArithmetic;

pub use crate::config::HookConfig;

pub use crate::error::{HookError, Result};

pub use crate::hook::{PrizeHook, Removal, SharedPrizeHook};
