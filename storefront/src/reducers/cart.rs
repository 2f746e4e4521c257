//! Cart reducer.
//!
//! The cart holds at most one entry per distinct product id; the total is
//! always derived, never stored. Invalid mutations (zero quantity, absent
//! ids) degrade to no-ops.

use crate::actions::StorefrontAction;
use crate::environment::StorefrontEnvironment;
use crate::providers::{OrderIdGenerator, ProductAdvisor};
use crate::reducers::notices::push_notice;
use crate::state::StorefrontState;
use crate::types::{CartItem, NoticeKind};
use shieldpoint_core::environment::Clock;
use shieldpoint_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Cart reducer.
#[derive(Clone, Debug)]
pub struct CartReducer<C, G, A> {
    _phantom: std::marker::PhantomData<(C, G, A)>,
}

impl<C, G, A> CartReducer<C, G, A> {
    /// Create a new cart reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C, G, A> Default for CartReducer<C, G, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G, A> Reducer for CartReducer<C, G, A>
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
            StorefrontAction::AddItem { product, quantity } => {
                if quantity == 0 {
                    tracing::debug!(product_id = %product.id, "zero-quantity add ignored");
                    return SmallVec::new();
                }

                let message = format!("Đã thêm {quantity}x {} vào giỏ!", product.name);

                if let Some(entry) = state.cart.entry_mut(&product.id) {
                    entry.quantity += quantity;
                } else {
                    state.cart.items.push(CartItem { product, quantity });
                }

                smallvec![push_notice(
                    state,
                    env.timings.notice_ttl,
                    message,
                    NoticeKind::Success,
                )]
            },

            StorefrontAction::AdjustQuantity { product_id, delta } => {
                if let Some(entry) = state.cart.entry_mut(&product_id) {
                    // Quantity can never reach 0 here; removal is explicit.
                    let adjusted = i64::from(entry.quantity) + i64::from(delta);
                    entry.quantity = u32::try_from(adjusted.max(1)).unwrap_or(u32::MAX);
                } else {
                    tracing::debug!(%product_id, "quantity adjustment for product not in cart");
                }
                SmallVec::new()
            },

            StorefrontAction::RemoveItem { product_id } => {
                let before = state.cart.items.len();
                state.cart.items.retain(|item| item.product.id != product_id);

                if state.cart.items.len() == before {
                    tracing::debug!(%product_id, "removal for product not in cart");
                    return SmallVec::new();
                }

                smallvec![push_notice(
                    state,
                    env.timings.notice_ttl,
                    "Đã xóa khỏi giỏ hàng",
                    NoticeKind::Info,
                )]
            },

            _ => SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{product_a, product_b, test_env};
    use crate::types::{Price, ProductId};
    use shieldpoint_testing::{ReducerTest, assertions};

    #[test]
    fn add_item_inserts_a_new_entry() {
        ReducerTest::new(CartReducer::new())
            .with_env(test_env())
            .given_state(StorefrontState::default())
            .when_action(StorefrontAction::AddItem {
                product: product_a(),
                quantity: 1,
            })
            .then_state(|state| {
                assert_eq!(state.cart.items.len(), 1);
                assert_eq!(state.cart.items[0].quantity, 1);
                assert_eq!(state.cart.total(), Price::from_vnd(155_000));
                assert_eq!(state.notices.entries.len(), 1);
            })
            .then_effects(assertions::assert_has_delay_effect)
            .run();
    }

    #[test]
    fn adding_the_same_product_merges_quantities() {
        let mut state = StorefrontState::default();
        state.cart.items.push(CartItem {
            product: product_a(),
            quantity: 1,
        });

        ReducerTest::new(CartReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(StorefrontAction::AddItem {
                product: product_a(),
                quantity: 1,
            })
            .then_state(|state| {
                // Still one entry per product id, quantities merged
                assert_eq!(state.cart.items.len(), 1);
                assert_eq!(state.cart.items[0].quantity, 2);
                assert_eq!(state.cart.total(), Price::from_vnd(310_000));
            })
            .run();
    }

    #[test]
    fn zero_quantity_add_is_ignored() {
        ReducerTest::new(CartReducer::new())
            .with_env(test_env())
            .given_state(StorefrontState::default())
            .when_action(StorefrontAction::AddItem {
                product: product_a(),
                quantity: 0,
            })
            .then_state(|state| {
                assert!(state.cart.is_empty());
                assert!(state.notices.entries.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn adjust_quantity_clamps_at_one() {
        let mut state = StorefrontState::default();
        state.cart.items.push(CartItem {
            product: product_a(),
            quantity: 2,
        });
        let product_id = product_a().id;

        ReducerTest::new(CartReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(StorefrontAction::AdjustQuantity {
                product_id,
                delta: -5,
            })
            .then_state(|state| {
                assert_eq!(state.cart.items[0].quantity, 1);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn adjust_quantity_for_absent_product_is_a_no_op() {
        ReducerTest::new(CartReducer::new())
            .with_env(test_env())
            .given_state(StorefrontState::default())
            .when_action(StorefrontAction::AdjustQuantity {
                product_id: ProductId::new("missing"),
                delta: 1,
            })
            .then_state(|state| {
                assert!(state.cart.is_empty());
            })
            .run();
    }

    #[test]
    fn remove_item_deletes_the_entry_and_notifies() {
        let mut state = StorefrontState::default();
        state.cart.items.push(CartItem {
            product: product_a(),
            quantity: 3,
        });
        let product_id = product_a().id;

        ReducerTest::new(CartReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(StorefrontAction::RemoveItem { product_id })
            .then_state(|state| {
                assert!(state.cart.is_empty());
                assert_eq!(state.notices.entries[0].message, "Đã xóa khỏi giỏ hàng");
            })
            .then_effects(assertions::assert_has_delay_effect)
            .run();
    }

    #[test]
    fn remove_of_absent_product_is_a_no_op() {
        let mut state = StorefrontState::default();
        state.cart.items.push(CartItem {
            product: product_b(),
            quantity: 1,
        });

        ReducerTest::new(CartReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(StorefrontAction::RemoveItem {
                product_id: ProductId::new("missing"),
            })
            .then_state(|state| {
                assert_eq!(state.cart.items.len(), 1);
                assert!(state.notices.entries.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum CartOp {
            Add { index: usize, quantity: u32 },
            Adjust { index: usize, delta: i32 },
            Remove { index: usize },
        }

        fn cart_op() -> impl Strategy<Value = CartOp> {
            prop_oneof![
                (0usize..4, 0u32..5).prop_map(|(index, quantity)| CartOp::Add { index, quantity }),
                (0usize..4, -6i32..6).prop_map(|(index, delta)| CartOp::Adjust { index, delta }),
                (0usize..4).prop_map(|index| CartOp::Remove { index }),
            ]
        }

        proptest! {
            #[test]
            fn cart_invariants_hold_for_any_action_sequence(ops in prop::collection::vec(cart_op(), 0..40)) {
                let reducer = CartReducer::new();
                let env = test_env();
                let catalog = crate::catalog::products();
                let mut state = StorefrontState::default();

                for op in ops {
                    let action = match op {
                        CartOp::Add { index, quantity } => StorefrontAction::AddItem {
                            product: catalog[index % catalog.len()].clone(),
                            quantity,
                        },
                        CartOp::Adjust { index, delta } => StorefrontAction::AdjustQuantity {
                            product_id: catalog[index % catalog.len()].id.clone(),
                            delta,
                        },
                        CartOp::Remove { index } => StorefrontAction::RemoveItem {
                            product_id: catalog[index % catalog.len()].id.clone(),
                        },
                    };
                    let _ = reducer.reduce(&mut state, action, &env);

                    // One entry per product id
                    let mut ids: Vec<_> = state.cart.items.iter().map(|i| i.product.id.clone()).collect();
                    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                    let len_before = ids.len();
                    ids.dedup();
                    prop_assert_eq!(ids.len(), len_before);

                    // Quantities never fall below 1
                    prop_assert!(state.cart.items.iter().all(|i| i.quantity >= 1));

                    // Total always equals the recomputed sum
                    let expected = state
                        .cart
                        .items
                        .iter()
                        .map(|i| i.product.price.vnd() * i64::from(i.quantity))
                        .sum::<i64>();
                    prop_assert_eq!(state.cart.total().vnd(), expected);
                }
            }
        }
    }
}
