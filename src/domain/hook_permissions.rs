//! Callback points a hook asks the pool manager to invoke.

/// The set of pool-lifecycle callbacks a hook subscribes to.
///
/// The pool manager consults this once when a pool naming the hook is
/// created and only routes the enabled callbacks to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HookPermissions {
    /// Called after a pool is initialized.
    pub after_initialize: bool,
    /// Called after liquidity is added.
    pub after_add_liquidity: bool,
    /// Called after liquidity is removed.
    pub after_remove_liquidity: bool,
    /// Called before each swap; may override the fee.
    pub before_swap: bool,
    /// Called after each swap.
    pub after_swap: bool,
    /// The before-swap callback returns a delta on the specified currency.
    pub before_swap_returns_delta: bool,
}

impl HookPermissions {
    /// Number of callbacks enabled.
    #[must_use]
    pub const fn enabled_count(&self) -> usize {
        self.after_initialize as usize
            + self.after_add_liquidity as usize
            + self.after_remove_liquidity as usize
            + self.before_swap as usize
            + self.after_swap as usize
            + self.before_swap_returns_delta as usize
    }
}
