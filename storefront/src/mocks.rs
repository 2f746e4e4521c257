//! Test doubles for the storefront providers.
//!
//! Deterministic implementations used by unit and integration tests (and
//! by the demo binary when no API key is configured).

use crate::error::AdvisorError;
use crate::providers::{OrderIdGenerator, ProductAdvisor};
use crate::types::{OrderId, RedemptionToken};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Deterministic id generator: `ORD00001`, `ORD00002`, ...
///
/// Tokens follow the production shape (`TSC-<stem>-<millis>`) with a
/// sequential stem, so uniqueness assertions are exact.
#[derive(Clone, Debug, Default)]
pub struct SequentialIdGenerator {
    counter: Arc<AtomicU64>,
}

impl SequentialIdGenerator {
    /// Create a generator starting at 1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl OrderIdGenerator for SequentialIdGenerator {
    fn order_id(&self) -> OrderId {
        OrderId::new(format!("ORD{:05}", self.next()))
    }

    fn redemption_token(&self, now: DateTime<Utc>) -> RedemptionToken {
        RedemptionToken::new(format!(
            "TSC-{:06}-{}",
            self.next(),
            now.timestamp_millis()
        ))
    }
}

/// Advisor that always answers with a canned reply
#[derive(Clone, Debug)]
pub struct CannedAdvisor {
    reply: String,
}

impl CannedAdvisor {
    /// Create an advisor returning the given reply
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl ProductAdvisor for CannedAdvisor {
    async fn advise(&self, _query: &str) -> Result<String, AdvisorError> {
        Ok(self.reply.clone())
    }
}

/// Advisor whose every call fails
///
/// Exercises the gateway's fallback path.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingAdvisor;

impl ProductAdvisor for FailingAdvisor {
    async fn advise(&self, _query: &str) -> Result<String, AdvisorError> {
        Err(AdvisorError::CallFailed("simulated outage".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_never_repeat() {
        let ids = SequentialIdGenerator::new();
        let a = ids.order_id();
        let b = ids.order_id();
        assert_ne!(a, b);
        assert_eq!(a.as_str(), "ORD00001");
        assert_eq!(b.as_str(), "ORD00002");
    }

    #[tokio::test]
    async fn canned_advisor_echoes_reply() {
        let advisor = CannedAdvisor::new("dùng loại mỏng");
        let result = advisor.advise("question").await;
        assert!(matches!(result, Ok(text) if text == "dùng loại mỏng"));
    }

    #[tokio::test]
    async fn failing_advisor_always_errors() {
        let advisor = FailingAdvisor;
        assert!(advisor.advise("question").await.is_err());
    }
}
