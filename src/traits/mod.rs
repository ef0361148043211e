//! Collaborator seams.
//!
//! The hook owns its accounting state and nothing else. Everything it
//! needs from the outside world goes through these traits:
//!
//! - [`PoolManager`]: the live fee and pulling currency out of swaps.
//! - [`RandomnessOracle`]: paid, asynchronously answered randomness.
//! - [`CurrencyTransfer`]: paying winners out of hook custody.
//! - [`LiquidityMath`]: valuing positions.

mod currency_transfer;
mod liquidity_math;
mod pool_manager;
mod randomness_oracle;

pub use currency_transfer::CurrencyTransfer;
pub use liquidity_math::{ConcentratedLiquidityMath, LiquidityMath};
pub use pool_manager::PoolManager;
pub use randomness_oracle::{RandomnessOracle, RandomnessRequest};
