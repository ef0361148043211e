//! Results handed back from swap and draw callbacks.

use core::fmt;

use super::{Address, Amount, Currency, LpFee};

/// What the before-swap callback tells the pool manager.
///
/// # Invariants
///
/// `fee_override`, when present, carries the override marker bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BeforeSwapOutcome {
    fee_override: Option<LpFee>,
    prize_currency: Currency,
    prize_cut: Amount,
}

impl BeforeSwapOutcome {
    pub(crate) const fn new(
        fee_override: Option<LpFee>,
        prize_currency: Currency,
        prize_cut: Amount,
    ) -> Self {
        Self {
            fee_override,
            prize_currency,
            prize_cut,
        }
    }

    /// The fee to enforce for this swap, or `None` to keep the live fee.
    #[must_use]
    pub const fn fee_override(&self) -> Option<LpFee> {
        self.fee_override
    }

    /// Currency the prize cut was taken in.
    #[must_use]
    pub const fn prize_currency(&self) -> Currency {
        self.prize_currency
    }

    /// Amount taken into the prize reserve; the hook's delta on the
    /// specified currency.
    pub const fn prize_cut(&self) -> Amount {
        self.prize_cut
    }
}

/// A single currency payout to a draw winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Payout {
    /// Currency paid.
    pub currency: Currency,
    /// Amount paid.
    pub amount: Amount,
}

/// Result of resolving a draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DrawOutcome {
    /// A provider won and received the pool's reserves.
    Winner {
        /// The winning provider.
        provider: Address,
        /// Entry index the random value landed on.
        winning_entry: u128,
        /// Size of the entry space.
        total_entries: u128,
        /// Non-zero reserves paid out, in pool currency order.
        payouts: Vec<Payout>,
    },
    /// A provider won but some transfers failed after others succeeded.
    /// The paid reserves stay drained; the unpaid ones were credited back
    /// and roll over to the next draw.
    PartiallyPaid {
        /// The winning provider.
        provider: Address,
        /// Entry index the random value landed on.
        winning_entry: u128,
        /// Size of the entry space.
        total_entries: u128,
        /// Reserves transferred to the winner.
        paid: Vec<Payout>,
        /// Reserves whose transfer failed.
        unpaid: Vec<Payout>,
    },
    /// No provider held enough notional for a single entry; reserves roll
    /// over to the next draw.
    Skipped,
}

impl DrawOutcome {
    /// The winning provider, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Address> {
        match self {
            Self::Winner { provider, .. } | Self::PartiallyPaid { provider, .. } => {
                Some(*provider)
            }
            Self::Skipped => None,
        }
    }

    /// Returns `true` if no winner was drawn.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

impl fmt::Display for DrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner {
                provider,
                winning_entry,
                total_entries,
                payouts,
            } => write!(
                f,
                "Winner({provider}, entry {winning_entry}/{total_entries}, {} payouts)",
                payouts.len()
            ),
            Self::PartiallyPaid {
                provider,
                winning_entry,
                total_entries,
                paid,
                unpaid,
            } => write!(
                f,
                "PartiallyPaid({provider}, entry {winning_entry}/{total_entries}, {} paid, {} unpaid)",
                paid.len(),
                unpaid.len()
            ),
            Self::Skipped => write!(f, "Skipped"),
        }
    }
}
