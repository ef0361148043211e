//! Domain value types shared by every hook component.
//!
//! Newtypes with validated constructors: addresses, currencies, amounts,
//! fees, ticks, positions, and the parameter and result types exchanged
//! with the pool manager and the randomness oracle.

mod address;
mod amount;
mod basis_points;
mod context;
mod currency;
mod hook_permissions;
mod liquidity;
mod liquidity_params;
mod lp_fee;
mod outcome;
mod pool_key;
mod position;
mod request_id;
mod swap_params;
mod tick;

pub use address::Address;
pub use amount::Amount;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use context::CallContext;
pub use currency::Currency;
pub use hook_permissions::HookPermissions;
pub use liquidity::Liquidity;
pub use liquidity_params::{ChangeType, ModifyLiquidityParams};
pub use lp_fee::{LpFee, DYNAMIC_FEE_FLAG, OVERRIDE_FEE_FLAG};
pub use outcome::{BeforeSwapOutcome, DrawOutcome, Payout};
pub use pool_key::PoolKey;
pub use position::Position;
pub use request_id::RequestId;
pub use swap_params::{SwapParams, SwapType};
pub use tick::Tick;
