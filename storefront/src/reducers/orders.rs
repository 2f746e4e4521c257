//! Order ledger reducer.
//!
//! Checkout converts the cart into an immutable order (snapshot, frozen
//! total, generated id and token) and clears the cart in the same state
//! update. Completion is the only mutation an order ever sees:
//! `pending → collected`, exactly once.

use crate::actions::StorefrontAction;
use crate::environment::StorefrontEnvironment;
use crate::providers::{OrderIdGenerator, ProductAdvisor};
use crate::reducers::notices::push_notice;
use crate::state::StorefrontState;
use crate::types::{NoticeKind, Order, OrderStatus, View};
use shieldpoint_core::environment::Clock;
use shieldpoint_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Outcome of a completion attempt, resolved before any notice is pushed
enum CompletionOutcome {
    Collected,
    AlreadyCollected,
    NotFound,
}

/// Order ledger reducer.
#[derive(Clone, Debug)]
pub struct OrderReducer<C, G, A> {
    _phantom: std::marker::PhantomData<(C, G, A)>,
}

impl<C, G, A> OrderReducer<C, G, A> {
    /// Create a new order reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C, G, A> Default for OrderReducer<C, G, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G, A> Reducer for OrderReducer<C, G, A>
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
        match action {
            StorefrontAction::Checkout => {
                if state.cart.is_empty() {
                    tracing::debug!("checkout with empty cart ignored");
                    return SmallVec::new();
                }

                let now = env.clock.now();

                // Re-draw on the astronomically unlikely clash with an
                // existing order, keeping the one-to-one invariants exact.
                let mut id = env.ids.order_id();
                while state.orders.contains_id(&id) {
                    id = env.ids.order_id();
                }
                let mut token = env.ids.redemption_token(now);
                while state.orders.contains_token(&token) {
                    token = env.ids.redemption_token(now);
                }

                let order = Order {
                    id: id.clone(),
                    items: state.cart.items.clone(),
                    total: state.cart.total(),
                    placed_at: now,
                    token,
                    status: OrderStatus::Pending,
                };

                tracing::info!(order_id = %id, total = %order.total, "order placed");

                // One logical transaction: record the order, clear the
                // cart, move the user to their order history.
                state.orders.orders.insert(0, order);
                state.cart.items.clear();
                state.shell.view = View::OrderHistory;

                smallvec![push_notice(
                    state,
                    env.timings.notice_ttl,
                    "Đặt hàng thành công! Hãy tới máy để quét mã.",
                    NoticeKind::Success,
                )]
            },

            StorefrontAction::CompleteOrder { order_id } => {
                let outcome = match state
                    .orders
                    .orders
                    .iter_mut()
                    .find(|order| order.id == order_id)
                {
                    Some(order) if order.status == OrderStatus::Pending => {
                        order.status = OrderStatus::Collected;
                        CompletionOutcome::Collected
                    },
                    Some(_) => CompletionOutcome::AlreadyCollected,
                    None => CompletionOutcome::NotFound,
                };

                match outcome {
                    CompletionOutcome::Collected => {
                        tracing::info!(%order_id, "order collected");
                        smallvec![push_notice(
                            state,
                            env.timings.notice_ttl,
                            "Nhận hàng thành công!",
                            NoticeKind::Success,
                        )]
                    },
                    CompletionOutcome::AlreadyCollected => {
                        tracing::warn!(%order_id, "order already collected, completion ignored");
                        SmallVec::new()
                    },
                    CompletionOutcome::NotFound => {
                        tracing::warn!(%order_id, "completion for unknown order ignored");
                        SmallVec::new()
                    },
                }
            },

            _ => SmallVec::new(),
        }
    }
}
