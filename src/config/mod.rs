//! Hook configuration.
//!
//! [`HookConfig`] holds every set-once parameter of the hook: the fee
//! split, draw cadence, entry granularity and oracle request shape.

mod hook_config;

pub use hook_config::{
    HookConfig, DEFAULT_CALLBACK_GAS_LIMIT, DEFAULT_DRAW_INTERVAL, DEFAULT_NUM_WORDS,
    DEFAULT_REQUEST_CONFIRMATIONS, DEFAULT_UNIT_ENTRY_VALUE,
};
