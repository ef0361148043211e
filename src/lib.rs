//! # Prize Hook
//!
//! Dynamic-fee prize hook for concentrated-liquidity pools: every swap pays
//! a slightly reduced fee, the difference accrues into a per-pool prize
//! reserve, and at a fixed cadence one liquidity provider, chosen with
//! probability proportional to the value it deposited, wins the reserve.
//!
//! The crate is the hook's accounting engine. The pool manager that drives
//! it, the randomness oracle that answers draws, and the transfer
//! primitive that pays winners are collaborators behind traits, with
//! in-memory implementations for simulation.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for domain values and [`HookConfig`](config::HookConfig) |
//!
//! # Quick Start
//!
//! ```rust
//! use prize_hook::config::HookConfig;
//! use prize_hook::domain::{
//!     Address, Amount, BasisPoints, CallContext, Currency, LpFee, ModifyLiquidityParams,
//!     PoolKey, SwapParams, Tick,
//! };
//! use prize_hook::hook::PrizeHook;
//! use prize_hook::memory::{InMemoryOracle, InMemoryPoolManager, InMemoryTransfer};
//! use prize_hook::traits::ConcentratedLiquidityMath;
//!
//! let manager = Address::repeat(0x01);
//! let oracle = Address::repeat(0x02);
//! let hook_address = Address::repeat(0x40);
//!
//! // 1. A 5% fee, 5% of which (25 bp) goes to prizes.
//! let config = HookConfig::new(BasisPoints::new(500), BasisPoints::new(500))
//!     .expect("valid config");
//! let mut hook = PrizeHook::new(
//!     hook_address,
//!     config,
//!     InMemoryPoolManager::new(manager),
//!     InMemoryOracle::new(oracle),
//!     InMemoryTransfer::default(),
//!     ConcentratedLiquidityMath,
//! )
//! .expect("valid hook");
//!
//! // 2. The pool manager initializes a dynamic-fee pool naming the hook.
//! let key = PoolKey::new(
//!     Currency::new(Address::repeat(0xa0)),
//!     Currency::new(Address::repeat(0xb0)),
//!     LpFee::DYNAMIC,
//!     60,
//!     hook_address,
//! )
//! .expect("valid key");
//! hook.on_initialize(CallContext::new(manager, 0), &key).expect("initialized");
//!
//! // 3. A provider adds liquidity.
//! let lower = Tick::new(-60).expect("valid tick");
//! let upper = Tick::new(60).expect("valid tick");
//! let add = ModifyLiquidityParams::new(lower, upper, 1_000_000_000_000_000_000_000)
//!     .expect("valid params");
//! hook.on_add_liquidity(CallContext::new(manager, 1), &key, Address::repeat(0xaa), &add)
//!     .expect("position recorded");
//!
//! // 4. An exact-input swap of 1e18 currency0 pays 25 bp into the reserve.
//! let swap = SwapParams::new(true, -1_000_000_000_000_000_000).expect("valid swap");
//! let outcome = hook
//!     .on_before_swap(CallContext::new(manager, 2), &key, &swap)
//!     .expect("swap accepted");
//! assert_eq!(outcome.prize_cut(), Amount::new(2_500_000_000_000_000));
//! assert_eq!(outcome.fee_override().map(|f| f.bps()), Some(BasisPoints::new(475)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │ Pool manager │   │    Oracle    │
//! └──────┬───────┘   └──────┬───────┘
//!        │ callbacks        │ fulfill(id, words)
//!        ▼                  ▼
//! ┌─────────────────────────────────┐
//! │            PrizeHook            │  caller checks, snapshot/rollback
//! └────────────────┬────────────────┘
//!                  ▼
//! ┌─────────────────────────────────┐
//! │ FeeController    PrizeLedger    │
//! │ PositionRegistry DrawScheduler  │
//! │ EntryIndex                      │
//! └─────────────────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`PoolKey`](domain::PoolKey), [`LpFee`](domain::LpFee), etc. |
//! | [`traits`] | Collaborator seams: [`PoolManager`](traits::PoolManager), [`RandomnessOracle`](traits::RandomnessOracle), [`CurrencyTransfer`](traits::CurrencyTransfer), [`LiquidityMath`](traits::LiquidityMath) |
//! | [`config`] | [`HookConfig`](config::HookConfig) |
//! | [`hook`]   | [`PrizeHook`](hook::PrizeHook), its components and [`SharedPrizeHook`](hook::SharedPrizeHook) |
//! | [`memory`] | In-memory collaborators |
//! | [`math`]   | Checked arithmetic and liquidity valuation |
//! | [`error`]  | [`HookError`](error::HookError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod hook;
pub mod math;
pub mod memory;
pub mod prelude;
pub mod traits;
