//! Weighted winner selection.
//!
//! Each position buys `floor(base_notional / unit_entry_value)` entries.
//! Positions are laid end to end in provider order (each distinct
//! provider once, its positions in list order), forming one contiguous
//! entry space `[0, total)`. The random value picks an entry modulo
//! `total`; the position owning that entry wins for its provider.

use std::collections::HashSet;

use crate::domain::{Address, Amount, PoolKey};
use crate::error::HookError;
use crate::math::CheckedArithmetic;

use super::PositionRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntryRange {
    /// Exclusive upper bound of this range in the entry space.
    end: u128,
    provider: Address,
}

/// A winning draw: who won and where the random value landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Draw {
    /// Owner of the winning entry.
    pub provider: Address,
    /// `random % total_entries`.
    pub winning_entry: u128,
    /// Size of the entry space.
    pub total_entries: u128,
}

/// Cumulative entry ranges of one pool, rebuilt for every draw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryIndex {
    ranges: Vec<EntryRange>,
    total: u128,
}

impl EntryIndex {
    /// Lays out the entry space of `key`.
    ///
    /// Positions worth less than one unit get no range.
    ///
    /// # Errors
    ///
    /// - [`HookError::DivisionByZero`] if `unit_entry_value` is zero.
    /// - [`HookError::Overflow`] if the entry space exceeds `u128`.
    pub fn build(
        registry: &PositionRegistry,
        key: &PoolKey,
        unit_entry_value: Amount,
    ) -> Result<Self, HookError> {
        let mut index = Self::default();
        let mut seen = HashSet::new();
        for provider in registry.providers(key) {
            if !seen.insert(*provider) {
                continue;
            }
            for position in registry.positions(key, provider) {
                let entries = position.base_notional().safe_div_floor(&unit_entry_value)?;
                if entries.is_zero() {
                    continue;
                }
                index.total = Amount::new(index.total).safe_add(&entries)?.get();
                index.ranges.push(EntryRange {
                    end: index.total,
                    provider: *provider,
                });
            }
        }
        Ok(index)
    }

    /// Size of the entry space.
    #[must_use]
    pub const fn total_entries(&self) -> u128 {
        self.total
    }

    /// Owner of entry `entry`, if it lies inside the space.
    #[must_use]
    pub fn owner_of(&self, entry: u128) -> Option<Address> {
        let idx = self.ranges.partition_point(|r| r.end <= entry);
        self.ranges.get(idx).map(|r| r.provider)
    }

    /// Resolves a random value to a winner; `None` for an empty space.
    #[must_use]
    pub fn draw(&self, random: u128) -> Option<Draw> {
        let winning_entry = random.checked_rem(self.total)?;
        let provider = self.owner_of(winning_entry)?;
        Some(Draw {
            provider,
            winning_entry,
            total_entries: self.total,
        })
    }
}
