//! The prize hook and its components.
//!
//! - [`FeeController`]: per-pool reduced fee and pool lifecycle.
//! - [`PrizeLedger`]: per-pool, per-currency prize reserves.
//! - [`PositionRegistry`]: provider positions and pool membership.
//! - [`DrawScheduler`]: draw cadence, oracle funding, pending requests.
//! - [`EntryIndex`]: weighted winner selection over the entry space.
//!
//! [`PrizeHook`] wires them to the collaborators and exposes the entry
//! points; [`SharedPrizeHook`] shares it across threads.

mod draw_scheduler;
mod fee_controller;
mod lottery_resolver;
mod position_registry;
mod prize_hook;
mod prize_ledger;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use draw_scheduler::DrawScheduler;
pub use fee_controller::FeeController;
pub use lottery_resolver::{Draw, EntryIndex};
pub use position_registry::{PositionRegistry, Removal};
pub use prize_hook::PrizeHook;
pub use prize_ledger::{swap_prize_cut, PrizeLedger};
pub use shared::SharedPrizeHook;
