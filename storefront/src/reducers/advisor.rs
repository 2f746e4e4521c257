//! AI consultant reducer - the recommendation gateway.
//!
//! One best-effort request per question. The effect closes over the
//! injected advisor; whatever goes wrong inside the call (network, API
//! error, malformed response) is converted to the fixed fallback text
//! before it re-enters the dispatcher, so no failure ever escapes this
//! boundary.

use crate::actions::StorefrontAction;
use crate::advisor::FALLBACK_ADVICE;
use crate::environment::StorefrontEnvironment;
use crate::providers::{OrderIdGenerator, ProductAdvisor};
use crate::state::StorefrontState;
use shieldpoint_core::environment::Clock;
use shieldpoint_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// AI consultant reducer.
#[derive(Clone, Debug)]
pub struct AdvisorReducer<C, G, A> {
    _phantom: std::marker::PhantomData<(C, G, A)>,
}

impl<C, G, A> AdvisorReducer<C, G, A> {
    /// Create a new advisor reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C, G, A> Default for AdvisorReducer<C, G, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G, A> Reducer for AdvisorReducer<C, G, A>
where
    C: Clock + Clone + 'static,
    G: OrderIdGenerator + Clone + 'static,
    A: ProductAdvisor + Clone + Send + Sync + 'static,
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
            StorefrontAction::AskAdvisor { query } => {
                let query = query.trim().to_string();
                if query.is_empty() {
                    tracing::debug!("blank advisor question ignored");
                    return SmallVec::new();
                }
                if state.advisor.pending {
                    tracing::debug!("advice request already in flight, question ignored");
                    return SmallVec::new();
                }

                state.advisor.pending = true;
                let advisor = env.advisor.clone();

                smallvec![Effect::Future(Box::pin(async move {
                    let text = match advisor.advise(&query).await {
                        Ok(text) => text,
                        Err(error) => {
                            tracing::warn!(%error, "advice call failed, using fallback");
                            FALLBACK_ADVICE.to_string()
                        },
                    };
                    Some(StorefrontAction::AdviceReceived { text })
                }))]
            },

            StorefrontAction::AdviceReceived { text } => {
                state.advisor.pending = false;
                state.advisor.response = Some(text);
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
    use shieldpoint_testing::{ReducerTest, assertions};

    #[test]
    fn a_question_marks_the_panel_pending_and_calls_out() {
        ReducerTest::new(AdvisorReducer::new())
            .with_env(test_env())
            .given_state(StorefrontState::default())
            .when_action(StorefrontAction::AskAdvisor {
                query: "Tôi muốn tìm loại mỏng nhất".to_string(),
            })
            .then_state(|state| {
                assert!(state.advisor.pending);
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn a_blank_question_is_ignored() {
        ReducerTest::new(AdvisorReducer::new())
            .with_env(test_env())
            .given_state(StorefrontState::default())
            .when_action(StorefrontAction::AskAdvisor {
                query: "   ".to_string(),
            })
            .then_state(|state| {
                assert!(!state.advisor.pending);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn a_question_while_pending_is_ignored() {
        let mut state = StorefrontState::default();
        state.advisor.pending = true;

        ReducerTest::new(AdvisorReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(StorefrontAction::AskAdvisor {
                query: "second question".to_string(),
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn received_advice_lands_in_state() {
        let mut state = StorefrontState::default();
        state.advisor.pending = true;

        ReducerTest::new(AdvisorReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(StorefrontAction::AdviceReceived {
                text: "Hãy thử Sagami Original 0.01".to_string(),
            })
            .then_state(|state| {
                assert!(!state.advisor.pending);
                assert_eq!(
                    state.advisor.response.as_deref(),
                    Some("Hãy thử Sagami Original 0.01")
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
