//! The hook itself: entry points called by the pool manager and the oracle.
//!
//! Every entry point is all-or-nothing. Internal state is snapshotted on
//! entry and restored if anything fails, so a rejected swap or fulfillment
//! leaves no trace. Calls into collaborators are made after the fallible
//! internal bookkeeping of the same invocation, so a collaborator is never
//! asked to move funds for a state change that is then rolled back by the
//! hook's own validation.

use tracing::{debug, info, warn};

use crate::config::HookConfig;
use crate::domain::{
    Address, Amount, BasisPoints, BeforeSwapOutcome, CallContext, ChangeType, Currency,
    DrawOutcome, HookPermissions, LpFee, ModifyLiquidityParams, PoolKey, Position, RequestId,
    SwapParams,
};
use crate::error::HookError;
use crate::traits::{
    ConcentratedLiquidityMath, CurrencyTransfer, LiquidityMath, PoolManager, RandomnessOracle,
};

use super::prize_ledger::swap_prize_cut;
use super::{DrawScheduler, EntryIndex, FeeController, PositionRegistry, PrizeLedger, Removal};

/// Everything the hook mutates; cloned as the rollback snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HookState {
    fees: FeeController,
    ledger: PrizeLedger,
    registry: PositionRegistry,
    scheduler: DrawScheduler,
}

/// Fee-reducing, prize-accruing lottery hook.
///
/// `M`, `O` and `T` are the pool manager, randomness oracle and transfer
/// primitive the hook talks to; `L` values positions for draw weighting.
///
/// # Examples
///
/// ```
/// use prize_hook::config::HookConfig;
/// use prize_hook::domain::{Address, BasisPoints, CallContext, Currency, LpFee, PoolKey};
/// use prize_hook::hook::PrizeHook;
/// use prize_hook::memory::{InMemoryOracle, InMemoryPoolManager, InMemoryTransfer};
/// use prize_hook::traits::ConcentratedLiquidityMath;
///
/// let hook_address = Address::repeat(0x40);
/// let manager = InMemoryPoolManager::new(Address::repeat(0x01));
/// let oracle = InMemoryOracle::new(Address::repeat(0x02));
/// let config = HookConfig::new(BasisPoints::new(500), BasisPoints::new(500))
///     .expect("valid config");
/// let mut hook = PrizeHook::new(
///     hook_address,
///     config,
///     manager,
///     oracle,
///     InMemoryTransfer::default(),
///     ConcentratedLiquidityMath,
/// )
/// .expect("valid hook");
///
/// let key = PoolKey::new(
///     Currency::new(Address::repeat(0xa0)),
///     Currency::new(Address::repeat(0xb0)),
///     LpFee::DYNAMIC,
///     60,
///     hook_address,
/// )
/// .expect("valid key");
/// let ctx = CallContext::new(Address::repeat(0x01), 1_000);
/// hook.on_initialize(ctx, &key).expect("initialized");
/// assert_eq!(hook.prize_cut(), BasisPoints::new(25));
/// ```
#[derive(Debug)]
pub struct PrizeHook<M, O, T, L = ConcentratedLiquidityMath> {
    address: Address,
    config: HookConfig,
    pool_manager: M,
    oracle: O,
    transfer: T,
    math: L,
    state: HookState,
}

impl<M, O, T, L> PrizeHook<M, O, T, L>
where
    M: PoolManager,
    O: RandomnessOracle,
    T: CurrencyTransfer,
    L: LiquidityMath,
{
    /// Creates a hook living at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidConfiguration`] if `config` fails
    /// validation.
    pub fn new(
        address: Address,
        config: HookConfig,
        pool_manager: M,
        oracle: O,
        transfer: T,
        math: L,
    ) -> Result<Self, HookError> {
        config.validate()?;
        let state = HookState {
            fees: FeeController::new(config.initial_fee(), config.prize_cut_percent())?,
            ledger: PrizeLedger::new(),
            registry: PositionRegistry::new(),
            scheduler: DrawScheduler::new(config.draw_interval())?,
        };
        info!(
            hook = %address,
            initial_fee = %config.initial_fee(),
            prize_cut = %state.fees.prize_cut(),
            draw_interval = config.draw_interval(),
            "prize hook created"
        );
        Ok(Self {
            address,
            config,
            pool_manager,
            oracle,
            transfer,
            math,
            state,
        })
    }

    /// Callbacks the pool manager must route to this hook.
    #[must_use]
    pub const fn permissions() -> HookPermissions {
        HookPermissions {
            after_initialize: true,
            after_add_liquidity: true,
            after_remove_liquidity: true,
            before_swap: true,
            after_swap: true,
            before_swap_returns_delta: true,
        }
    }

    /// Credits the prepaid balance that pays for randomness requests.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Overflow`] if the balance would overflow.
    pub fn deposit_oracle_funds(&mut self, amount: Amount) -> Result<Amount, HookError> {
        let balance = self.state.scheduler.deposit(amount)?;
        debug!(%amount, %balance, "oracle funds deposited");
        Ok(balance)
    }

    /// Registers a new pool and sets its live fee to the initial fee.
    ///
    /// # Errors
    ///
    /// - [`HookError::Unauthorized`] unless called by the pool manager.
    /// - [`HookError::InvalidPoolConfiguration`] if the pool is not
    ///   dynamic-fee or names a different hook.
    /// - [`HookError::PoolAlreadyInitialized`] on re-initialization.
    /// - Any pool-manager failure.
    pub fn on_initialize(&mut self, ctx: CallContext, key: &PoolKey) -> Result<(), HookError> {
        self.require_pool_manager(&ctx)?;
        self.atomically(|hook| {
            if key.hooks() != hook.address {
                return Err(HookError::InvalidPoolConfiguration(
                    "pool key names a different hook",
                ));
            }
            let fee = hook.state.fees.initialize(key)?;
            hook.state.scheduler.register(key, ctx.timestamp);
            hook.pool_manager.update_dynamic_fee(key, fee)?;
            info!(
                currency0 = %key.currency0(),
                currency1 = %key.currency1(),
                %fee,
                timestamp = ctx.timestamp,
                "pool initialized"
            );
            Ok(())
        })
    }

    /// Records a new liquidity position for `provider`.
    ///
    /// # Errors
    ///
    /// - [`HookError::Unauthorized`] unless called by the pool manager.
    /// - [`HookError::PoolNotInitialized`] for unknown pools.
    /// - [`HookError::InvalidLiquidity`] for a negative delta.
    /// - Any liquidity-math failure.
    pub fn on_add_liquidity(
        &mut self,
        ctx: CallContext,
        key: &PoolKey,
        provider: Address,
        params: &ModifyLiquidityParams,
    ) -> Result<Position, HookError> {
        self.require_pool_manager(&ctx)?;
        self.atomically(|hook| {
            hook.state.fees.ensure_initialized(key)?;
            if params.change_type() != ChangeType::Add {
                return Err(HookError::InvalidLiquidity(
                    "add callback received a removal",
                ));
            }
            let position = hook.state.registry.add(
                key,
                provider,
                params.tick_lower(),
                params.tick_upper(),
                params.liquidity_magnitude(),
                &hook.math,
            )?;
            debug!(
                %provider,
                %position,
                positions = hook.state.registry.position_count(key),
                "position added"
            );
            Ok(position)
        })
    }

    /// Applies a withdrawal to the provider's matching position.
    ///
    /// A withdrawal from a range the hook never recorded is logged and
    /// ignored, so it can never block a provider from exiting.
    ///
    /// # Errors
    ///
    /// - [`HookError::Unauthorized`] unless called by the pool manager.
    /// - [`HookError::PoolNotInitialized`] for unknown pools.
    /// - [`HookError::InvalidLiquidity`] for a positive delta.
    /// - [`HookError::Underflow`] if more is withdrawn than recorded.
    pub fn on_remove_liquidity(
        &mut self,
        ctx: CallContext,
        key: &PoolKey,
        provider: Address,
        params: &ModifyLiquidityParams,
    ) -> Result<Removal, HookError> {
        self.require_pool_manager(&ctx)?;
        self.atomically(|hook| {
            hook.state.fees.ensure_initialized(key)?;
            if params.change_type() != ChangeType::Remove {
                return Err(HookError::InvalidLiquidity(
                    "remove callback received an addition",
                ));
            }
            let removal = hook.state.registry.remove(
                key,
                provider,
                params.tick_lower(),
                params.tick_upper(),
                params.liquidity_magnitude(),
                &hook.math,
            )?;
            if removal == Removal::Untracked {
                warn!(%provider, %params, "withdrawal from untracked position ignored");
            } else {
                debug!(
                    %provider,
                    %params,
                    ?removal,
                    positions = hook.state.registry.position_count(key),
                    "position reduced"
                );
            }
            Ok(removal)
        })
    }

    /// Reduces the fee for this swap and takes the prize cut.
    ///
    /// # Errors
    ///
    /// - [`HookError::Unauthorized`] unless called by the pool manager.
    /// - [`HookError::PoolNotInitialized`] for unknown pools.
    /// - [`HookError::FeeUnderflow`] if the live fee is below the prize cut.
    /// - [`HookError::Overflow`] if the cut or reserve overflows.
    /// - Any pool-manager failure.
    pub fn on_before_swap(
        &mut self,
        ctx: CallContext,
        key: &PoolKey,
        params: &SwapParams,
    ) -> Result<BeforeSwapOutcome, HookError> {
        self.require_pool_manager(&ctx)?;
        self.atomically(|hook| {
            hook.state.fees.ensure_initialized(key)?;
            let current = hook.pool_manager.current_fee(key)?;
            let fee_override = hook.state.fees.recompute(key, current)?;
            if let Some(fee) = fee_override {
                debug!(live = %current, reduced = %fee, "fee override issued");
            }

            let currency = params.specified_currency(key);
            let cut = swap_prize_cut(params, hook.state.fees.prize_cut())?;
            let reserve = hook.state.ledger.credit(key, currency, cut)?;
            hook.pool_manager.take(currency, hook.address, cut)?;
            debug!(%params, %currency, %cut, %reserve, "prize accrued");

            Ok(BeforeSwapOutcome::new(fee_override, currency, cut))
        })
    }

    /// Requests randomness if the pool's draw is due.
    ///
    /// Returns the id of the request issued, if any.
    ///
    /// # Errors
    ///
    /// - [`HookError::Unauthorized`] unless called by the pool manager.
    /// - [`HookError::PoolNotInitialized`] for unknown pools.
    /// - [`HookError::InsufficientOracleFunding`] if the prepaid balance
    ///   cannot cover the request.
    /// - [`HookError::Oracle`] if the oracle returns an id that is still
    ///   pending.
    /// - Any oracle failure.
    pub fn on_after_swap(
        &mut self,
        ctx: CallContext,
        key: &PoolKey,
    ) -> Result<Option<RequestId>, HookError> {
        self.require_pool_manager(&ctx)?;
        self.atomically(|hook| {
            if !hook.state.scheduler.is_due(key, ctx.timestamp)? {
                return Ok(None);
            }
            let request = hook.config.randomness_request();
            let price = hook
                .oracle
                .calculate_request_price(request.callback_gas_limit, request.num_words)?;
            hook.state.scheduler.ensure_funded(price)?;
            let id = hook.oracle.request_randomness(request, price)?;
            // A reused id is rejected before the books change.
            hook.state.scheduler.record_request(key, id)?;
            hook.state.scheduler.debit(price)?;
            info!(
                request = %id,
                %price,
                balance = %hook.state.scheduler.oracle_balance(),
                timestamp = ctx.timestamp,
                "draw requested"
            );
            Ok(Some(id))
        })
    }

    /// Resolves a pending draw with the oracle's random words.
    ///
    /// Only the first word is used. With no eligible entries the draw is
    /// skipped: reserves stay put and the clock restarts.
    ///
    /// # Errors
    ///
    /// - [`HookError::Unauthorized`] unless called by the oracle.
    /// - [`HookError::UnknownDrawRequest`] if `id` is not pending.
    /// - [`HookError::MissingRandomness`] if `random_words` is empty.
    /// - Any transfer failure when no payout succeeded. Once one payout has
    ///   been transferred the draw resolves as
    ///   [`DrawOutcome::PartiallyPaid`] instead.
    pub fn on_randomness_fulfilled(
        &mut self,
        ctx: CallContext,
        id: RequestId,
        random_words: &[u128],
    ) -> Result<DrawOutcome, HookError> {
        if ctx.caller != self.oracle.address() {
            return Err(HookError::Unauthorized("only the randomness oracle"));
        }
        self.atomically(|hook| {
            let key = hook.state.scheduler.take_pending(id)?;
            let random = random_words
                .first()
                .copied()
                .ok_or(HookError::MissingRandomness)?;
            let index =
                EntryIndex::build(&hook.state.registry, &key, hook.config.unit_entry_value())?;
            hook.state.scheduler.complete(&key, ctx.timestamp);

            let Some(draw) = index.draw(random) else {
                info!(request = %id, timestamp = ctx.timestamp, "draw skipped: no entries");
                return Ok(DrawOutcome::Skipped);
            };

            let mut paid = Vec::new();
            let mut unpaid = Vec::new();
            let mut failure = None;
            for payout in hook.state.ledger.drain(&key) {
                match hook
                    .transfer
                    .transfer(payout.currency, draw.provider, payout.amount)
                {
                    Ok(()) => paid.push(payout),
                    Err(err) => {
                        warn!(
                            request = %id,
                            currency = %payout.currency,
                            amount = %payout.amount,
                            error = %err,
                            "prize transfer failed"
                        );
                        if failure.is_none() {
                            failure = Some(err);
                        }
                        unpaid.push(payout);
                    }
                }
            }

            match failure {
                None => {
                    info!(
                        request = %id,
                        winner = %draw.provider,
                        entry = draw.winning_entry,
                        total_entries = draw.total_entries,
                        payouts = paid.len(),
                        "draw resolved"
                    );
                    Ok(DrawOutcome::Winner {
                        provider: draw.provider,
                        winning_entry: draw.winning_entry,
                        total_entries: draw.total_entries,
                        payouts: paid,
                    })
                }
                // Nothing was paid: the whole draw can be retried.
                Some(err) if paid.is_empty() => Err(err),
                // Paid reserves must stay drained so a retry cannot pay them again.
                Some(_) => {
                    for payout in &unpaid {
                        hook.state.ledger.credit(&key, payout.currency, payout.amount)?;
                    }
                    warn!(
                        request = %id,
                        winner = %draw.provider,
                        paid = paid.len(),
                        unpaid = unpaid.len(),
                        "draw resolved with unpaid reserves rolled over"
                    );
                    Ok(DrawOutcome::PartiallyPaid {
                        provider: draw.provider,
                        winning_entry: draw.winning_entry,
                        total_entries: draw.total_entries,
                        paid,
                        unpaid,
                    })
                }
            }
        })
    }

    fn require_pool_manager(&self, ctx: &CallContext) -> Result<(), HookError> {
        if ctx.caller == self.pool_manager.address() {
            Ok(())
        } else {
            Err(HookError::Unauthorized("only the pool manager"))
        }
    }

    fn atomically<R>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<R, HookError>,
    ) -> Result<R, HookError> {
        let snapshot = self.state.clone();
        let result = op(self);
        if let Err(err) = &result {
            warn!(error = %err, "invocation aborted, state restored");
            self.state = snapshot;
        }
        result
    }
}

impl<M, O, T, L> PrizeHook<M, O, T, L> {
    /// Address the hook is deployed at.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Configuration the hook was created with.
    #[must_use]
    pub const fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Basis points diverted from every swap's fee.
    #[must_use]
    pub const fn prize_cut(&self) -> BasisPoints {
        self.state.fees.prize_cut()
    }

    /// Returns `true` once `key` has been initialized through the hook.
    #[must_use]
    pub fn is_initialized(&self, key: &PoolKey) -> bool {
        self.state.fees.is_initialized(key)
    }

    /// Last fee override issued for `key`.
    #[must_use]
    pub fn reduced_fee(&self, key: &PoolKey) -> Option<LpFee> {
        self.state.fees.reduced_fee(key)
    }

    /// Accrued prize reserve of `currency` in `key`.
    pub fn reserve(&self, key: &PoolKey, currency: Currency) -> Amount {
        self.state.ledger.reserve(key, currency)
    }

    /// Positions `provider` holds in `key`.
    #[must_use]
    pub fn positions(&self, key: &PoolKey, provider: &Address) -> &[Position] {
        self.state.registry.positions(key, provider)
    }

    /// Provider list of `key`, one entry per add.
    #[must_use]
    pub fn providers(&self, key: &PoolKey) -> &[Address] {
        self.state.registry.providers(key)
    }

    /// Open positions in `key`.
    #[must_use]
    pub fn position_count(&self, key: &PoolKey) -> usize {
        self.state.registry.position_count(key)
    }

    /// Timestamp of the last resolved draw (or initialization).
    #[must_use]
    pub fn last_draw_timestamp(&self, key: &PoolKey) -> Option<u64> {
        self.state.scheduler.last_draw_timestamp(key)
    }

    /// Pool a pending request will resolve.
    #[must_use]
    pub fn pending_request(&self, id: RequestId) -> Option<PoolKey> {
        self.state.scheduler.pending_request(id)
    }

    /// Request currently in flight for `key`.
    #[must_use]
    pub fn draw_in_flight(&self, key: &PoolKey) -> Option<RequestId> {
        self.state.scheduler.in_flight(key)
    }

    /// Prepaid oracle balance.
    pub const fn oracle_balance(&self) -> Amount {
        self.state.scheduler.oracle_balance()
    }

    /// The pool manager.
    pub const fn pool_manager(&self) -> &M {
        &self.pool_manager
    }

    /// Mutable access to the pool manager, for hosts driving it directly.
    pub fn pool_manager_mut(&mut self) -> &mut M {
        &mut self.pool_manager
    }

    /// The randomness oracle.
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Mutable access to the oracle.
    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    /// The transfer primitive.
    pub const fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Mutable access to the transfer primitive.
    pub fn transfer_mut(&mut self) -> &mut T {
        &mut self.transfer
    }
}
