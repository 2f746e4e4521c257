//! # Shield Point Testing
//!
//! Testing utilities and helpers for the Shield Point storefront.
//!
//! This crate provides:
//! - Mock implementations of environment traits (fixed clock)
//! - A fluent Given-When-Then harness for reducer tests
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use shieldpoint_testing::{ReducerTest, test_clock};
//!
//! ReducerTest::new(StorefrontReducer::new())
//!     .with_env(test_environment())
//!     .given_state(StorefrontState::default())
//!     .when_action(StorefrontAction::Checkout)
//!     .then_state(|state| assert!(state.cart.items.is_empty()))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use shieldpoint_core::environment::Clock;

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, so order timestamps and redemption
    /// tokens are reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use shieldpoint_testing::mocks::FixedClock;
    /// use shieldpoint_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

mod reducer_test;

pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
