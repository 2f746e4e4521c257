//! Kiosk redemption reducer.
//!
//! A two-stage mock of the physical terminal:
//! `Idle → Scanning → Confirmed → Dispensing → Idle`. The scan and
//! dispense stages are timed transitions driven by `Effect::Delay`; the
//! state-machine shape alone guarantees a single active sequence. Once a
//! timer starts it always completes - there is no cancellation, matching
//! the real terminal's behavior.

use crate::actions::StorefrontAction;
use crate::environment::StorefrontEnvironment;
use crate::providers::{OrderIdGenerator, ProductAdvisor};
use crate::reducers::notices::push_notice;
use crate::state::{KioskState, StorefrontState};
use crate::types::{NoticeKind, OrderStatus};
use shieldpoint_core::environment::Clock;
use shieldpoint_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Kiosk redemption reducer.
#[derive(Clone, Debug)]
pub struct KioskReducer<C, G, A> {
    _phantom: std::marker::PhantomData<(C, G, A)>,
}

impl<C, G, A> KioskReducer<C, G, A> {
    /// Create a new kiosk reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C, G, A> Default for KioskReducer<C, G, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G, A> Reducer for KioskReducer<C, G, A>
where
    C: Clock + Clone + 'static,
    G: OrderIdGenerator + Clone + 'static,
    A: ProductAdvisor + Clone + 'static,
{
    type State = StorefrontState;
    type Action = StorefrontAction;
    type Environment = StorefrontEnvironment<C, G, A>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match (state.kiosk.clone(), action) {
            // Scan can only start from an idle screen
            (KioskState::Idle, StorefrontAction::SimulateScan { order_id }) => {
                tracing::debug!(%order_id, "kiosk scan started");
                state.kiosk = KioskState::Scanning {
                    order_id: order_id.clone(),
                };
                smallvec![Effect::delay(
                    env.timings.scan_delay,
                    StorefrontAction::ScanResolved { order_id },
                )]
            },

            // The scan delay elapsed: resolve the lookup
            (KioskState::Scanning { order_id }, StorefrontAction::ScanResolved { order_id: resolved })
                if order_id == resolved =>
            {
                let confirmed = match state.orders.find_by_id(&resolved) {
                    Some(order) if order.status == OrderStatus::Pending => Some(order.clone()),
                    _ => None,
                };

                match confirmed {
                    Some(order) => {
                        tracing::debug!(order_id = %order.id, "kiosk scan confirmed");
                        state.kiosk = KioskState::Confirmed { order };
                        SmallVec::new()
                    },
                    None => {
                        tracing::warn!(order_id = %resolved, "scan did not match a pending order");
                        state.kiosk = KioskState::Idle;
                        smallvec![push_notice(
                            state,
                            env.timings.notice_ttl,
                            "Không tìm thấy đơn hàng hợp lệ. Vui lòng thử lại.",
                            NoticeKind::Info,
                        )]
                    },
                }
            },

            // Collect is only valid on the confirmed screen
            (KioskState::Confirmed { order }, StorefrontAction::Collect) => {
                tracing::debug!(order_id = %order.id, "kiosk dispensing");
                state.kiosk = KioskState::Dispensing { order };
                smallvec![Effect::delay(
                    env.timings.dispense_delay,
                    StorefrontAction::DispenseFinished,
                )]
            },

            // The dispense delay elapsed: hand completion to the ledger
            // and clear the confirmed order reference
            (KioskState::Dispensing { order }, StorefrontAction::DispenseFinished) => {
                tracing::debug!(order_id = %order.id, "kiosk dispense finished");
                state.kiosk = KioskState::Idle;
                let order_id = order.id;
                smallvec![Effect::Future(Box::pin(async move {
                    Some(StorefrontAction::CompleteOrder { order_id })
                }))]
            },

            // Everything else is invalid in the current state
            (_, action) => {
                tracing::debug!(?action, "kiosk action ignored in current state");
                SmallVec::new()
            },
        }
    }
}
