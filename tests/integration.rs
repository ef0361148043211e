//! Integration tests driving the hook through its full lifecycle.
//!
//! The in-memory collaborators stand in for the pool manager, the
//! randomness oracle and the transfer primitive; every test goes through
//! the public entry points only.

#![allow(clippy::panic)]

use prize_hook::config::HookConfig;
use prize_hook::domain::{
    Address, Amount, BasisPoints, CallContext, Currency, DrawOutcome, Liquidity, LpFee,
    ModifyLiquidityParams, Payout, PoolKey, SwapParams, Tick,
};
use prize_hook::error::HookError;
use prize_hook::hook::{PrizeHook, Removal};
use prize_hook::memory::{InMemoryOracle, InMemoryPoolManager, InMemoryTransfer};
use prize_hook::traits::{ConcentratedLiquidityMath, LiquidityMath, PoolManager};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const HOOK: Address = Address::repeat(0x40);
const MANAGER: Address = Address::repeat(0x01);
const ORACLE: Address = Address::repeat(0x02);
const ALICE: Address = Address::repeat(0xa1);
const BOB: Address = Address::repeat(0xb2);

const E18: u128 = 1_000_000_000_000_000_000;
const DAY: u64 = 86_400;
const REQUEST_PRICE: u128 = 1_000;

type FlatMath = fn(Tick, Tick, Liquidity) -> Result<Amount, HookError>;
type Hook<L> = PrizeHook<InMemoryPoolManager, InMemoryOracle, InMemoryTransfer, L>;

/// Values a position at exactly its liquidity, so tests can state
/// notionals directly.
fn flat(_: Tick, _: Tick, liquidity: Liquidity) -> Result<Amount, HookError> {
    Ok(Amount::new(liquidity.get()))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn tick(v: i32) -> Tick {
    let Ok(t) = Tick::new(v) else {
        panic!("valid tick");
    };
    t
}

fn pool_key() -> PoolKey {
    let Ok(key) = PoolKey::new(
        Currency::new(Address::repeat(0xc0)),
        Currency::new(Address::repeat(0xc1)),
        LpFee::DYNAMIC,
        60,
        HOOK,
    ) else {
        panic!("valid key");
    };
    key
}

fn manager_at(timestamp: u64) -> CallContext {
    CallContext::new(MANAGER, timestamp)
}

fn oracle_at(timestamp: u64) -> CallContext {
    CallContext::new(ORACLE, timestamp)
}

fn config() -> HookConfig {
    let Ok(config) = HookConfig::new(BasisPoints::new(500), BasisPoints::new(500)) else {
        panic!("valid config");
    };
    config
}

fn build_hook<L: LiquidityMath>(config: HookConfig, math: L) -> Hook<L> {
    init_tracing();
    let Ok(mut hook) = PrizeHook::new(
        HOOK,
        config,
        InMemoryPoolManager::new(MANAGER),
        InMemoryOracle::new(ORACLE).with_price(Amount::new(REQUEST_PRICE)),
        InMemoryTransfer::default(),
        math,
    ) else {
        panic!("valid hook");
    };
    let Ok(()) = hook.on_initialize(manager_at(0), &pool_key()) else {
        panic!("initialize failed");
    };
    let Ok(_) = hook.deposit_oracle_funds(Amount::new(10 * REQUEST_PRICE)) else {
        panic!("deposit failed");
    };
    hook
}

fn flat_hook() -> Hook<FlatMath> {
    build_hook(config(), flat as FlatMath)
}

fn add_params(lower: i32, upper: i32, liquidity: u128) -> ModifyLiquidityParams {
    let Ok(delta) = i128::try_from(liquidity) else {
        panic!("liquidity fits i128");
    };
    let Ok(params) = ModifyLiquidityParams::new(tick(lower), tick(upper), delta) else {
        panic!("valid params");
    };
    params
}

fn remove_params(lower: i32, upper: i32, liquidity: u128) -> ModifyLiquidityParams {
    let Ok(delta) = i128::try_from(liquidity) else {
        panic!("liquidity fits i128");
    };
    let Ok(params) = ModifyLiquidityParams::new(tick(lower), tick(upper), -delta) else {
        panic!("valid params");
    };
    params
}

fn exact_in_zero_for_one(amount: i128) -> SwapParams {
    let Ok(params) = SwapParams::new(true, -amount) else {
        panic!("valid swap");
    };
    params
}

fn add<L: LiquidityMath>(hook: &mut Hook<L>, who: Address, liquidity: u128) {
    let Ok(_) = hook.on_add_liquidity(manager_at(1), &pool_key(), who, &add_params(-60, 60, liquidity))
    else {
        panic!("add failed");
    };
}

/// Runs a swap pair at `now` and returns the request id if one was issued.
fn swap<L: LiquidityMath>(hook: &mut Hook<L>, now: u64, amount: i128) -> Option<prize_hook::domain::RequestId> {
    let key = pool_key();
    let Ok(_) = hook.on_before_swap(manager_at(now), &key, &exact_in_zero_for_one(amount)) else {
        panic!("before swap failed");
    };
    let Ok(request) = hook.on_after_swap(manager_at(now), &key) else {
        panic!("after swap failed");
    };
    request
}

// ---------------------------------------------------------------------------
// End-to-end lifecycle
// ---------------------------------------------------------------------------

#[test]
fn full_lifecycle_pays_the_only_provider() {
    let mut hook = flat_hook();
    let key = pool_key();
    assert_eq!(hook.prize_cut(), BasisPoints::new(25));

    let Ok(live) = hook.pool_manager().current_fee(&key) else {
        panic!("pool registered");
    };
    assert_eq!(live.bps(), BasisPoints::new(500));

    add(&mut hook, ALICE, 100 * E18);
    assert_eq!(hook.position_count(&key), 1);
    assert_eq!(hook.providers(&key), &[ALICE]);

    // Exact-input swap of 1e18 currency0.
    let Ok(outcome) = hook.on_before_swap(manager_at(10), &key, &exact_in_zero_for_one(E18 as i128))
    else {
        panic!("swap failed");
    };
    assert_eq!(outcome.prize_currency(), key.currency0());
    assert_eq!(outcome.prize_cut(), Amount::new(2_500_000_000_000_000));
    let Some(enforced) = outcome.fee_override() else {
        panic!("override expected");
    };
    assert!(enforced.is_override());
    assert_eq!(enforced.bps(), BasisPoints::new(475));
    assert_eq!(
        enforced.bps().get() + hook.prize_cut().get(),
        live.bps().get()
    );
    assert_eq!(hook.reserve(&key, key.currency0()), Amount::new(2_500_000_000_000_000));
    assert_eq!(
        hook.pool_manager().taken(key.currency0(), HOOK),
        Amount::new(2_500_000_000_000_000)
    );
    assert_eq!(hook.on_after_swap(manager_at(10), &key), Ok(None));

    // A day later the next swap triggers a draw.
    let Some(id) = swap(&mut hook, DAY, E18 as i128) else {
        panic!("draw request expected");
    };
    assert_eq!(hook.pending_request(id), Some(key));
    assert_eq!(hook.oracle_balance(), Amount::new(9 * REQUEST_PRICE));
    assert_eq!(hook.oracle().requests().len(), 1);

    let Ok(outcome) = hook.on_randomness_fulfilled(oracle_at(DAY + 30), id, &[123_456_789]) else {
        panic!("fulfillment failed");
    };
    let DrawOutcome::Winner {
        provider,
        total_entries,
        payouts,
        ..
    } = outcome
    else {
        panic!("winner expected");
    };
    assert_eq!(provider, ALICE);
    assert_eq!(total_entries, 100);
    assert_eq!(
        payouts,
        vec![Payout {
            currency: key.currency0(),
            amount: Amount::new(5_000_000_000_000_000),
        }]
    );
    assert_eq!(hook.reserve(&key, key.currency0()), Amount::ZERO);
    assert_eq!(
        hook.transfer().paid(key.currency0(), ALICE),
        Amount::new(5_000_000_000_000_000)
    );
    assert_eq!(hook.last_draw_timestamp(&key), Some(DAY + 30));
    assert_eq!(hook.pending_request(id), None);
}

#[test]
fn reserves_accrue_in_both_currencies_and_pay_together() {
    let mut hook = flat_hook();
    let key = pool_key();
    add(&mut hook, BOB, 5 * E18);

    // Exact-in zero-for-one takes currency0; exact-in one-for-zero currency1.
    let _ = swap(&mut hook, 5, 40_000);
    let Ok(params) = SwapParams::new(false, -80_000) else {
        panic!("valid swap");
    };
    let Ok(outcome) = hook.on_before_swap(manager_at(6), &key, &params) else {
        panic!("swap failed");
    };
    assert_eq!(outcome.prize_currency(), key.currency1());
    assert_eq!(hook.reserve(&key, key.currency0()), Amount::new(100));
    assert_eq!(hook.reserve(&key, key.currency1()), Amount::new(200));

    let Some(id) = swap(&mut hook, DAY, 400) else {
        panic!("draw request expected");
    };
    let Ok(outcome) = hook.on_randomness_fulfilled(oracle_at(DAY + 1), id, &[0]) else {
        panic!("fulfillment failed");
    };
    assert_eq!(outcome.winner(), Some(BOB));
    assert_eq!(hook.transfer().paid(key.currency0(), BOB), Amount::new(101));
    assert_eq!(hook.transfer().paid(key.currency1(), BOB), Amount::new(200));
    assert_eq!(hook.reserve(&key, key.currency1()), Amount::ZERO);
}

#[test]
fn bounced_transfer_rolls_only_its_reserve_over() {
    let mut hook = flat_hook();
    let key = pool_key();
    add(&mut hook, BOB, 5 * E18);
    let _ = swap(&mut hook, 5, 40_000);
    let Ok(params) = SwapParams::new(false, -80_000) else {
        panic!("valid swap");
    };
    let Ok(_) = hook.on_before_swap(manager_at(6), &key, &params) else {
        panic!("swap failed");
    };
    let Some(id) = swap(&mut hook, DAY, 400) else {
        panic!("draw request expected");
    };

    hook.transfer_mut().reject_currency(key.currency1(), true);
    let Ok(DrawOutcome::PartiallyPaid { paid, unpaid, .. }) =
        hook.on_randomness_fulfilled(oracle_at(DAY + 1), id, &[0])
    else {
        panic!("partial payout expected");
    };
    assert_eq!(paid.len(), 1);
    assert_eq!(unpaid.len(), 1);
    assert_eq!(hook.transfer().paid(key.currency0(), BOB), Amount::new(101));
    assert_eq!(hook.reserve(&key, key.currency0()), Amount::ZERO);
    assert_eq!(hook.reserve(&key, key.currency1()), Amount::new(200));

    // The oracle retrying the same answer is refused.
    hook.transfer_mut().reject_currency(key.currency1(), false);
    assert_eq!(
        hook.on_randomness_fulfilled(oracle_at(DAY + 2), id, &[0]),
        Err(HookError::UnknownDrawRequest(id))
    );
    assert_eq!(hook.transfer().paid(key.currency0(), BOB), Amount::new(101));
    assert_eq!(hook.transfer().paid(key.currency1(), BOB), Amount::ZERO);
}

// ---------------------------------------------------------------------------
// Draw selection
// ---------------------------------------------------------------------------

#[test]
fn winner_is_weighted_by_notional() {
    let mut hook = flat_hook();
    let key = pool_key();
    add(&mut hook, ALICE, 3 * E18);
    add(&mut hook, BOB, E18);
    let _ = swap(&mut hook, 1, 40_000);

    // Entries: ALICE [0, 3), BOB [3, 4). 4 * k + 3 lands on BOB.
    let Some(id) = swap(&mut hook, DAY, 40_000) else {
        panic!("draw request expected");
    };
    let Ok(outcome) = hook.on_randomness_fulfilled(oracle_at(DAY), id, &[4 * 77 + 3, 0]) else {
        panic!("fulfillment failed");
    };
    assert_eq!(outcome.winner(), Some(BOB));

    // Next round: only the first word counts.
    let _ = swap(&mut hook, DAY + 1, 40_000);
    let Some(id) = swap(&mut hook, 2 * DAY, 40_000) else {
        panic!("draw request expected");
    };
    let Ok(outcome) = hook.on_randomness_fulfilled(oracle_at(2 * DAY), id, &[2, 3]) else {
        panic!("fulfillment failed");
    };
    assert_eq!(outcome.winner(), Some(ALICE));
    assert_eq!(hook.reserve(&key, key.currency0()), Amount::ZERO);
}

#[test]
fn default_math_weights_deeper_positions_higher() {
    let mut hook = build_hook(
        config().with_unit_entry_value(Amount::new(1_000)),
        ConcentratedLiquidityMath,
    );
    let key = pool_key();
    add(&mut hook, ALICE, 10_000_000);
    add(&mut hook, BOB, 1_000_000);

    let alice = hook.positions(&key, &ALICE);
    let bob = hook.positions(&key, &BOB);
    let (Some(a), Some(b)) = (alice.first(), bob.first()) else {
        panic!("positions recorded");
    };
    assert!(a.base_notional() > b.base_notional());
    assert!(!b.base_notional().is_zero());
}

#[test]
fn draw_without_eligible_entries_is_skipped() {
    let mut hook = flat_hook();
    let key = pool_key();
    // Below one unit of notional: no entries.
    add(&mut hook, ALICE, E18 - 1);
    let _ = swap(&mut hook, 1, 40_000);

    let Some(id) = swap(&mut hook, DAY, 40_000) else {
        panic!("draw request expected");
    };
    assert_eq!(
        hook.on_randomness_fulfilled(oracle_at(DAY + 5), id, &[42]),
        Ok(DrawOutcome::Skipped)
    );
    assert_eq!(hook.reserve(&key, key.currency0()), Amount::new(200));
    assert_eq!(hook.last_draw_timestamp(&key), Some(DAY + 5));
    assert!(hook.transfer().paid(key.currency0(), ALICE).is_zero());

    // Once ALICE tops up, the rolled-over reserve is paid at the next draw.
    add(&mut hook, ALICE, E18);
    let Some(id) = swap(&mut hook, 2 * DAY + 5, 40_000) else {
        panic!("draw request expected");
    };
    let Ok(outcome) = hook.on_randomness_fulfilled(oracle_at(2 * DAY + 5), id, &[9]) else {
        panic!("fulfillment failed");
    };
    assert_eq!(outcome.winner(), Some(ALICE));
    assert_eq!(hook.transfer().paid(key.currency0(), ALICE), Amount::new(300));
}

// ---------------------------------------------------------------------------
// Scheduling and funding
// ---------------------------------------------------------------------------

#[test]
fn one_request_in_flight_per_pool() {
    let mut hook = flat_hook();
    let key = pool_key();
    let Some(first) = swap(&mut hook, DAY, 40_000) else {
        panic!("draw request expected");
    };
    assert_eq!(swap(&mut hook, DAY + 1, 40_000), None);
    assert_eq!(swap(&mut hook, 3 * DAY, 40_000), None);
    assert_eq!(hook.draw_in_flight(&key), Some(first));
    assert_eq!(hook.oracle().requests().len(), 1);

    let Ok(_) = hook.on_randomness_fulfilled(oracle_at(3 * DAY), first, &[1]) else {
        panic!("fulfillment failed");
    };
    assert_eq!(hook.draw_in_flight(&key), None);
    assert_eq!(swap(&mut hook, 3 * DAY + 1, 40_000), None);
    assert!(swap(&mut hook, 4 * DAY, 40_000).is_some());
}

#[test]
fn request_without_funding_aborts_and_retries_later() {
    init_tracing();
    let Ok(mut hook) = PrizeHook::new(
        HOOK,
        config(),
        InMemoryPoolManager::new(MANAGER),
        InMemoryOracle::new(ORACLE).with_price(Amount::new(REQUEST_PRICE)),
        InMemoryTransfer::default(),
        flat as FlatMath,
    ) else {
        panic!("valid hook");
    };
    let key = pool_key();
    let Ok(()) = hook.on_initialize(manager_at(0), &key) else {
        panic!("initialize failed");
    };

    assert_eq!(
        hook.on_after_swap(manager_at(DAY), &key),
        Err(HookError::InsufficientOracleFunding {
            required: Amount::new(REQUEST_PRICE),
            available: Amount::ZERO,
        })
    );
    assert_eq!(hook.draw_in_flight(&key), None);
    assert!(hook.oracle().requests().is_empty());

    let Ok(_) = hook.deposit_oracle_funds(Amount::new(REQUEST_PRICE)) else {
        panic!("deposit failed");
    };
    let Ok(Some(_)) = hook.on_after_swap(manager_at(DAY + 1), &key) else {
        panic!("request expected once funded");
    };
    assert_eq!(hook.oracle_balance(), Amount::ZERO);
}

#[test]
fn unknown_and_replayed_requests_rejected() {
    let mut hook = flat_hook();
    let Some(id) = swap(&mut hook, DAY, 40_000) else {
        panic!("draw request expected");
    };
    let bogus = prize_hook::domain::RequestId::new(id.get() + 100);
    assert_eq!(
        hook.on_randomness_fulfilled(oracle_at(DAY), bogus, &[1]),
        Err(HookError::UnknownDrawRequest(bogus))
    );
    let Ok(_) = hook.on_randomness_fulfilled(oracle_at(DAY), id, &[1]) else {
        panic!("fulfillment failed");
    };
    assert_eq!(
        hook.on_randomness_fulfilled(oracle_at(DAY), id, &[1]),
        Err(HookError::UnknownDrawRequest(id))
    );
}

// ---------------------------------------------------------------------------
// Fees and access control
// ---------------------------------------------------------------------------

#[test]
fn live_fee_below_cut_aborts_swap() {
    let mut hook = flat_hook();
    let key = pool_key();
    hook.pool_manager_mut().set_fee(&key, BasisPoints::new(20));
    let result = hook.on_before_swap(manager_at(1), &key, &exact_in_zero_for_one(40_000));
    assert_eq!(
        result,
        Err(HookError::FeeUnderflow {
            current: BasisPoints::new(20),
            prize_cut: BasisPoints::new(25),
        })
    );
    assert!(hook.reserve(&key, key.currency0()).is_zero());
    assert!(hook.pool_manager().taken(key.currency0(), HOOK).is_zero());
}

#[test]
fn matching_live_fee_needs_no_override() {
    let mut hook = flat_hook();
    let key = pool_key();
    let _ = swap(&mut hook, 1, 40_000);
    hook.pool_manager_mut().set_fee(&key, BasisPoints::new(475));
    let Ok(outcome) = hook.on_before_swap(manager_at(2), &key, &exact_in_zero_for_one(40_000))
    else {
        panic!("swap failed");
    };
    assert_eq!(outcome.fee_override(), None);
    // The cut is still taken.
    assert_eq!(outcome.prize_cut(), Amount::new(100));
}

#[test]
fn static_fee_pool_cannot_attach() {
    let mut hook = flat_hook();
    let Ok(fee) = LpFee::from_bps(BasisPoints::new(30)) else {
        panic!("valid fee");
    };
    let Ok(key) = PoolKey::new(
        Currency::new(Address::repeat(0xe0)),
        Currency::new(Address::repeat(0xe1)),
        fee,
        60,
        HOOK,
    ) else {
        panic!("valid key");
    };
    assert!(matches!(
        hook.on_initialize(manager_at(0), &key),
        Err(HookError::InvalidPoolConfiguration(_))
    ));
    assert!(!hook.is_initialized(&key));
}

#[test]
fn callbacks_reject_impostors() {
    let mut hook = flat_hook();
    let key = pool_key();
    let impostor = CallContext::new(BOB, 1);
    assert!(matches!(
        hook.on_before_swap(impostor, &key, &exact_in_zero_for_one(1_000)),
        Err(HookError::Unauthorized(_))
    ));
    assert!(matches!(
        hook.on_add_liquidity(impostor, &key, BOB, &add_params(-60, 60, E18)),
        Err(HookError::Unauthorized(_))
    ));
    let Some(id) = swap(&mut hook, DAY, 40_000) else {
        panic!("draw request expected");
    };
    // The pool manager is not the oracle.
    assert!(matches!(
        hook.on_randomness_fulfilled(manager_at(DAY), id, &[1]),
        Err(HookError::Unauthorized(_))
    ));
    assert_eq!(hook.pending_request(id), Some(key));
}

// ---------------------------------------------------------------------------
// Liquidity bookkeeping
// ---------------------------------------------------------------------------

#[test]
fn withdrawals_shrink_then_close_positions() {
    let mut hook = flat_hook();
    let key = pool_key();
    add(&mut hook, ALICE, 10 * E18);
    add(&mut hook, BOB, 4 * E18);
    add(&mut hook, ALICE, 2 * E18);
    assert_eq!(hook.providers(&key), &[ALICE, BOB, ALICE]);

    let Ok(removal) =
        hook.on_remove_liquidity(manager_at(2), &key, ALICE, &remove_params(-60, 60, 4 * E18))
    else {
        panic!("remove failed");
    };
    assert_eq!(removal, Removal::Reduced);
    let Some(first) = hook.positions(&key, &ALICE).first() else {
        panic!("position expected");
    };
    assert_eq!(first.base_notional(), Amount::new(6 * E18));

    // Over-withdrawal fails and changes nothing.
    assert!(matches!(
        hook.on_remove_liquidity(manager_at(3), &key, BOB, &remove_params(-60, 60, 5 * E18)),
        Err(HookError::Underflow(_))
    ));
    assert_eq!(hook.position_count(&key), 3);

    for (expected, amount) in [(Removal::Closed, 6 * E18), (Removal::Exited, 2 * E18)] {
        let Ok(removal) =
            hook.on_remove_liquidity(manager_at(4), &key, ALICE, &remove_params(-60, 60, amount))
        else {
            panic!("remove failed");
        };
        assert_eq!(removal, expected);
    }
    assert_eq!(hook.providers(&key), &[BOB]);
    assert_eq!(hook.position_count(&key), 1);
    assert!(hook.positions(&key, &ALICE).is_empty());
}

#[test]
fn withdrawing_an_unknown_range_never_blocks() {
    let mut hook = flat_hook();
    let key = pool_key();
    add(&mut hook, ALICE, E18);
    assert_eq!(
        hook.on_remove_liquidity(manager_at(2), &key, ALICE, &remove_params(-120, 120, E18)),
        Ok(Removal::Untracked)
    );
    assert_eq!(hook.position_count(&key), 1);
}
