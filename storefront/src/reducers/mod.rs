//! Storefront reducers.
//!
//! Pure reducer functions: `(State, Action, Environment) → Effects`.
//! The root [`StorefrontReducer`] routes each action to the sub-reducer
//! owning that slice of the flow.

pub mod advisor;
pub mod cart;
pub mod kiosk;
pub mod notices;
pub mod orders;
pub mod shell;

use crate::actions::StorefrontAction;
use crate::environment::StorefrontEnvironment;
use crate::providers::{OrderIdGenerator, ProductAdvisor};
use crate::state::StorefrontState;
use shieldpoint_core::environment::Clock;
use shieldpoint_core::{SmallVec, effect::Effect, reducer::Reducer};

// Re-export
pub use advisor::AdvisorReducer;
pub use cart::CartReducer;
pub use kiosk::KioskReducer;
pub use notices::NoticeReducer;
pub use orders::OrderReducer;
pub use shell::ShellReducer;

/// Unified storefront reducer.
///
/// Combines the cart, order ledger, kiosk, advisor, shell and notice
/// reducers into the single dispatcher the store runs. Routes actions to
/// the appropriate sub-reducer based on action type.
#[derive(Clone, Debug)]
pub struct StorefrontReducer<C, G, A>
where
    C: Clock + Clone + 'static,
    G: OrderIdGenerator + Clone + 'static,
    A: ProductAdvisor + Clone + 'static,
{
    cart: CartReducer<C, G, A>,
    orders: OrderReducer<C, G, A>,
    kiosk: KioskReducer<C, G, A>,
    advisor: AdvisorReducer<C, G, A>,
    shell: ShellReducer<C, G, A>,
    notices: NoticeReducer<C, G, A>,
}

impl<C, G, A> StorefrontReducer<C, G, A>
where
    C: Clock + Clone + 'static,
    G: OrderIdGenerator + Clone + 'static,
    A: ProductAdvisor + Clone + 'static,
{
    /// Create a new unified storefront reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cart: CartReducer::new(),
            orders: OrderReducer::new(),
            kiosk: KioskReducer::new(),
            advisor: AdvisorReducer::new(),
            shell: ShellReducer::new(),
            notices: NoticeReducer::new(),
        }
    }
}

impl<C, G, A> Default for StorefrontReducer<C, G, A>
where
    C: Clock + Clone + 'static,
    G: OrderIdGenerator + Clone + 'static,
    A: ProductAdvisor + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G, A> Reducer for StorefrontReducer<C, G, A>
where
    C: Clock + Clone + Send + Sync + 'static,
    G: OrderIdGenerator + Clone + Send + Sync + 'static,
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
        // Route to the appropriate sub-reducer based on action type
        match action {
            // Cart actions
            StorefrontAction::AddItem { .. }
            | StorefrontAction::AdjustQuantity { .. }
            | StorefrontAction::RemoveItem { .. } => self.cart.reduce(state, action, env),

            // Order ledger actions
            StorefrontAction::Checkout | StorefrontAction::CompleteOrder { .. } => {
                self.orders.reduce(state, action, env)
            },

            // Kiosk actions
            StorefrontAction::SimulateScan { .. }
            | StorefrontAction::ScanResolved { .. }
            | StorefrontAction::Collect
            | StorefrontAction::DispenseFinished => self.kiosk.reduce(state, action, env),

            // Advisor actions
            StorefrontAction::AskAdvisor { .. } | StorefrontAction::AdviceReceived { .. } => {
                self.advisor.reduce(state, action, env)
            },

            // Shell actions
            StorefrontAction::Navigate { .. } | StorefrontAction::SearchChanged { .. } => {
                self.shell.reduce(state, action, env)
            },

            // Notice actions
            StorefrontAction::NoticeExpired { .. } => self.notices.reduce(state, action, env),
        }
    }
}
