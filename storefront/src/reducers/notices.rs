//! Ephemeral notice reducer.
//!
//! Notices are pushed by the cart, order and kiosk reducers through
//! [`push_notice`]; each push schedules its own removal by id, so expiry
//! never relies on list positions or captured indices.

use crate::actions::StorefrontAction;
use crate::environment::StorefrontEnvironment;
use crate::providers::{OrderIdGenerator, ProductAdvisor};
use crate::state::StorefrontState;
use crate::types::NoticeKind;
use shieldpoint_core::environment::Clock;
use shieldpoint_core::{SmallVec, effect::Effect, reducer::Reducer};
use std::time::Duration;

/// Push a notice and return the effect that expires it
///
/// The returned `Delay` effect feeds [`StorefrontAction::NoticeExpired`]
/// back after `ttl`.
pub(crate) fn push_notice(
    state: &mut StorefrontState,
    ttl: Duration,
    message: impl Into<String>,
    kind: NoticeKind,
) -> Effect<StorefrontAction> {
    let id = state.notices.push(message, kind);
    Effect::delay(ttl, StorefrontAction::NoticeExpired { id })
}

/// Notice expiry reducer.
#[derive(Clone, Debug)]
pub struct NoticeReducer<C, G, A> {
    _phantom: std::marker::PhantomData<(C, G, A)>,
}

impl<C, G, A> NoticeReducer<C, G, A> {
    /// Create a new notice reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C, G, A> Default for NoticeReducer<C, G, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G, A> Reducer for NoticeReducer<C, G, A>
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
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            StorefrontAction::NoticeExpired { id } => {
                state.notices.remove(id);
                SmallVec::new()
            },
            _ => SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_env;
    use crate::types::NoticeId;
    use shieldpoint_testing::{ReducerTest, assertions};

    #[test]
    fn expiry_removes_the_notice() {
        let mut state = StorefrontState::default();
        let id = state.notices.push("Đã thêm 1x Durex vào giỏ!", NoticeKind::Success);

        ReducerTest::new(NoticeReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(StorefrontAction::NoticeExpired { id })
            .then_state(|state| {
                assert!(state.notices.entries.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn expiry_of_unknown_id_is_a_no_op() {
        let mut state = StorefrontState::default();
        state.notices.push("still here", NoticeKind::Info);

        ReducerTest::new(NoticeReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(StorefrontAction::NoticeExpired { id: NoticeId(99) })
            .then_state(|state| {
                assert_eq!(state.notices.entries.len(), 1);
            })
            .run();
    }

    #[test]
    fn push_notice_schedules_expiry_for_its_own_id() {
        let mut state = StorefrontState::default();
        let effect = push_notice(
            &mut state,
            Duration::from_millis(20),
            "test",
            NoticeKind::Info,
        );

        let pushed_id = state.notices.entries[0].id;
        let Effect::Delay { action, .. } = effect else {
            unreachable!("push_notice must schedule a Delay effect")
        };
        assert!(matches!(*action, StorefrontAction::NoticeExpired { id } if id == pushed_id));
    }
}
