//! Property-based tests for the hook's accounting invariants.
//!
//! 1. **Fee split**: `reduced + prize_cut == live fee` whenever an
//!    override is issued.
//! 2. **Reserve monotonicity**: reserves never shrink across swaps.
//! 3. **Registry consistency**: position count equals the sum of
//!    position lists; the provider set holds exactly the providers with
//!    open positions.
//! 4. **Deterministic draws**: the winner depends only on positions and
//!    the random value, and owns the winning entry.
//! 5. **Empty entry space**: no winner, no panic.
//! 6. **Fee underflow**: a live fee below the cut fails, never wraps.

use std::collections::HashSet;

use proptest::prelude::*;

use super::{swap_prize_cut, EntryIndex, FeeController, PositionRegistry, PrizeLedger};
use crate::domain::{
    Address, Amount, BasisPoints, Currency, Liquidity, LpFee, PoolKey, SwapParams, Tick,
};
use crate::error::HookError;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn key() -> PoolKey {
    let Ok(k) = PoolKey::new(
        Currency::new(Address::repeat(1)),
        Currency::new(Address::repeat(2)),
        LpFee::DYNAMIC,
        60,
        Address::repeat(9),
    ) else {
        panic!("valid key");
    };
    k
}

fn flat(_: Tick, _: Tick, l: Liquidity) -> Result<Amount, HookError> {
    Ok(Amount::new(l.get()))
}

fn tick(v: i32) -> Tick {
    let Ok(t) = Tick::new(v) else {
        panic!("valid tick");
    };
    t
}

fn fee(bps: u32) -> LpFee {
    let Ok(f) = LpFee::from_bps(BasisPoints::new(bps)) else {
        panic!("valid fee");
    };
    f
}

/// One registry operation: (provider, range slot, liquidity, is_add).
type Op = (u8, u8, u64, bool);

fn apply_ops(ops: &[Op]) -> PositionRegistry {
    let mut reg = PositionRegistry::new();
    for &(who, slot, amount, is_add) in ops {
        let provider = Address::repeat(who);
        let lower = tick(i32::from(slot) * 60);
        let upper = tick(i32::from(slot) * 60 + 60);
        let liquidity = Liquidity::new(u128::from(amount));
        if is_add {
            let _ = reg.add(&key(), provider, lower, upper, liquidity, &flat);
        } else {
            let _ = reg.remove(&key(), provider, lower, upper, liquidity, &flat);
        }
    }
    reg
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Small provider and range alphabets so removals often hit.
fn op_strategy() -> impl Strategy<Value = Op> {
    (1u8..=4u8, 0u8..=2u8, 1u64..=1_000u64, any::<bool>())
}

/// Non-zero specified amounts within a realistic range.
fn amount_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        (1i128..=1_000_000_000_000_000_000_000i128),
        (-1_000_000_000_000_000_000_000i128..=-1i128),
    ]
}

// ---------------------------------------------------------------------------
// Properties 1 and 6: Fee split
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_reduced_fee_plus_cut_is_live_fee(
        initial in 0u32..=10_000u32,
        percent in 0u32..=10_000u32,
        live in 0u32..=10_000u32,
    ) {
        let Ok(mut fees) = FeeController::new(BasisPoints::new(initial), BasisPoints::new(percent))
        else {
            return Err(TestCaseError::fail("valid controller"));
        };
        let k = key();
        prop_assert!(fees.initialize(&k).is_ok());
        let cut = fees.prize_cut();
        match fees.recompute(&k, fee(live)) {
            Ok(Some(reduced)) => {
                prop_assert!(reduced.is_override());
                prop_assert_eq!(reduced.bps().get() + cut.get(), live);
            }
            Ok(None) => prop_assert!(false, "first swap always issues an override"),
            Err(HookError::FeeUnderflow { current, prize_cut }) => {
                prop_assert!(live < cut.get());
                prop_assert_eq!(current.get(), live);
                prop_assert_eq!(prize_cut, cut);
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Reserve monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserves_never_shrink(
        swaps in prop::collection::vec((any::<bool>(), amount_strategy()), 1..32),
        cut in 0u32..=1_000u32,
    ) {
        let k = key();
        let mut ledger = PrizeLedger::new();
        let mut before = [Amount::ZERO, Amount::ZERO];
        for (zero_for_one, amount) in swaps {
            let Ok(params) = SwapParams::new(zero_for_one, amount) else {
                continue;
            };
            let Ok(taken) = swap_prize_cut(&params, BasisPoints::new(cut)) else {
                continue;
            };
            prop_assert!(ledger.credit(&k, params.specified_currency(&k), taken).is_ok());
            let after = [
                ledger.reserve(&k, k.currency0()),
                ledger.reserve(&k, k.currency1()),
            ];
            prop_assert!(after[0] >= before[0] && after[1] >= before[1]);
            before = after;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Registry consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_registry_counts_and_membership(
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let reg = apply_ops(&ops);
        let k = key();
        let candidates: Vec<Address> = (1u8..=4u8).map(Address::repeat).collect();

        let total: usize = candidates.iter().map(|p| reg.positions(&k, p).len()).sum();
        prop_assert_eq!(reg.position_count(&k), total);

        let listed: HashSet<Address> = reg.providers(&k).iter().copied().collect();
        let open: HashSet<Address> = candidates
            .iter()
            .copied()
            .filter(|p| !reg.positions(&k, p).is_empty())
            .collect();
        prop_assert_eq!(listed, open);
    }
}

// ---------------------------------------------------------------------------
// Properties 4 and 5: Draws
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_draw_is_deterministic_and_owned(
        ops in prop::collection::vec(op_strategy(), 0..32),
        random in any::<u128>(),
        unit in 1u128..=500u128,
    ) {
        let reg = apply_ops(&ops);
        let (Ok(first), Ok(second)) = (
            EntryIndex::build(&reg, &key(), Amount::new(unit)),
            EntryIndex::build(&reg, &key(), Amount::new(unit)),
        ) else {
            return Err(TestCaseError::fail("index build failed"));
        };
        prop_assert_eq!(first.draw(random), second.draw(random));

        match first.draw(random) {
            Some(draw) => {
                prop_assert!(draw.winning_entry < draw.total_entries);
                prop_assert_eq!(first.owner_of(draw.winning_entry), Some(draw.provider));
                prop_assert!(!reg.positions(&key(), &draw.provider).is_empty());
            }
            None => prop_assert_eq!(first.total_entries(), 0),
        }
    }

    #[test]
    fn prop_sub_unit_positions_never_win(
        ops in prop::collection::vec(op_strategy(), 0..32),
        random in any::<u128>(),
    ) {
        let reg = apply_ops(&ops);
        // Every notional is at most 1000 per add, far below this unit.
        let Ok(index) = EntryIndex::build(&reg, &key(), Amount::new(u128::MAX)) else {
            return Err(TestCaseError::fail("index build failed"));
        };
        prop_assert_eq!(index.total_entries(), 0);
        prop_assert!(index.draw(random).is_none());
    }
}
