//! # Shield Point Storefront
//!
//! A click-and-collect storefront: browse the catalog, fill a cart, check
//! out into a QR-coded order, then redeem it at a simulated vending kiosk.
//! An AI consultant answers free-text product questions through a single
//! best-effort Gemini call.
//!
//! All state is in-memory and process-lifetime; every mutation flows
//! through one reducer-driven dispatcher (the [`shieldpoint_runtime`]
//! Store).
//!
//! ## Architecture
//!
//! - [`state::StorefrontState`]: the whole application state, owned data
//! - [`actions::StorefrontAction`]: commands and effect-feedback events
//! - [`reducers::StorefrontReducer`]: pure business logic
//! - [`environment::StorefrontEnvironment`]: injected clock, id generator
//!   and advisor
//!
//! ## Example
//!
//! ```no_run
//! use shieldpoint_core::environment::SystemClock;
//! use shieldpoint_runtime::Store;
//! use shieldpoint_storefront::config::Timings;
//! use shieldpoint_storefront::mocks::CannedAdvisor;
//! use shieldpoint_storefront::providers::RandomIdGenerator;
//! use shieldpoint_storefront::{
//!     StorefrontAction, StorefrontEnvironment, StorefrontReducer, StorefrontState, catalog,
//! };
//!
//! # async fn example() -> Result<(), shieldpoint_runtime::StoreError> {
//! let env = StorefrontEnvironment::new(
//!     SystemClock,
//!     RandomIdGenerator::new(),
//!     CannedAdvisor::new("Hãy thử loại siêu mỏng."),
//!     Timings::default(),
//! );
//! let store = Store::new(StorefrontState::default(), StorefrontReducer::new(), env);
//!
//! let product = catalog::products()[0].clone();
//! store
//!     .send(StorefrontAction::AddItem {
//!         product,
//!         quantity: 1,
//!     })
//!     .await?;
//! store.send(StorefrontAction::Checkout).await?;
//!
//! let placed = store.state(|s| s.orders.orders.len()).await;
//! assert_eq!(placed, 1);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod advisor;
pub mod catalog;
pub mod config;
pub mod environment;
pub mod error;
pub mod mocks;
pub mod providers;
pub mod reducers;
pub mod state;
pub mod types;

pub use actions::StorefrontAction;
pub use environment::StorefrontEnvironment;
pub use reducers::StorefrontReducer;
pub use state::StorefrontState;
