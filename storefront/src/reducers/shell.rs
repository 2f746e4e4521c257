//! Navigation shell reducer.
//!
//! Pure state updates only: view selection and the catalog search query.
//! The shell consumes the other components' state and owns no business
//! logic of its own.

use crate::actions::StorefrontAction;
use crate::environment::StorefrontEnvironment;
use crate::providers::{OrderIdGenerator, ProductAdvisor};
use crate::state::StorefrontState;
use shieldpoint_core::environment::Clock;
use shieldpoint_core::{SmallVec, effect::Effect, reducer::Reducer};

/// Navigation shell reducer.
#[derive(Clone, Debug)]
pub struct ShellReducer<C, G, A> {
    _phantom: std::marker::PhantomData<(C, G, A)>,
}

impl<C, G, A> ShellReducer<C, G, A> {
    /// Create a new shell reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C, G, A> Default for ShellReducer<C, G, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G, A> Reducer for ShellReducer<C, G, A>
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
            StorefrontAction::Navigate { view } => {
                state.shell.view = view;
            },
            StorefrontAction::SearchChanged { query } => {
                state.shell.search_query = query;
            },
            _ => {},
        }
        SmallVec::new()
    }
}
