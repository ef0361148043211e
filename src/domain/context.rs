//! Per-invocation environment.

/// Who is calling the hook, and when.
///
/// Every entry point receives one. `caller` is checked against the trusted
/// collaborator for that entry point; `timestamp` (seconds) drives draw
/// scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    /// Identity of the invoking collaborator.
    pub caller: super::Address,
    /// Current time in seconds.
    pub timestamp: u64,
}

impl CallContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(caller: super::Address, timestamp: u64) -> Self {
        Self { caller, timestamp }
    }
}
