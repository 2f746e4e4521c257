//! Storefront providers.
//!
//! Traits for the external dependencies the reducers need: id generation
//! for orders and the AI product advisor. Providers are interfaces, not
//! implementations: production wires [`RandomIdGenerator`] and the Gemini
//! advisor, tests wire the deterministic doubles in [`crate::mocks`].

use crate::error::AdvisorError;
use crate::types::{OrderId, RedemptionToken};
use chrono::{DateTime, Utc};
use std::future::Future;

/// Characters used in generated ids and token stems.
///
/// Uppercase alphanumerics only, so ids read well on the kiosk screen and
/// tokens stay URL/QR-safe without escaping.
const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates order ids and redemption tokens
///
/// Values must be practically collision-free within the ledger's lifetime;
/// the ledger additionally re-draws on the (astronomically unlikely) case
/// of a clash with an existing order.
pub trait OrderIdGenerator: Send + Sync {
    /// A fresh order id (8 uppercase alphanumeric characters)
    fn order_id(&self) -> OrderId;

    /// A fresh redemption token: `TSC-<stem>-<unix-millis>`
    fn redemption_token(&self, now: DateTime<Utc>) -> RedemptionToken;
}

/// The AI product advisor
///
/// A single best-effort request per invocation: no retry, no caching, no
/// rate limiting. Callers at the gateway boundary map every error to a
/// fixed fallback message.
pub trait ProductAdvisor: Send + Sync {
    /// Ask for advice on a free-text question
    fn advise(&self, query: &str) -> impl Future<Output = Result<String, AdvisorError>> + Send;
}

/// Production id generator backed by the thread-local RNG
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    /// Create a new random id generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn random_stem(len: usize) -> String {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| char::from(ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())]))
            .collect()
    }
}

impl OrderIdGenerator for RandomIdGenerator {
    fn order_id(&self) -> OrderId {
        OrderId::new(Self::random_stem(8))
    }

    fn redemption_token(&self, now: DateTime<Utc>) -> RedemptionToken {
        RedemptionToken::new(format!(
            "TSC-{}-{}",
            Self::random_stem(6),
            now.timestamp_millis()
        ))
    }
}
