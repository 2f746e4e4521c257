//! Storefront configuration.
//!
//! Timings for the simulated hardware and the notice TTL live here so
//! production runs with human-scale delays while tests run in
//! milliseconds. Configuration values are provided by the application,
//! not hardcoded in reducers.

use std::time::Duration;

/// Timings for every scheduled transition in the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Simulated camera delay between scan start and lookup resolution.
    ///
    /// Default: 1.5 seconds
    pub scan_delay: Duration,

    /// Simulated motor delay between collect and dispense completion.
    ///
    /// Default: 3 seconds
    pub dispense_delay: Duration,

    /// How long a notice stays on screen before self-expiring.
    ///
    /// Default: 3 seconds
    pub notice_ttl: Duration,
}

impl Timings {
    /// Set the scan delay.
    #[must_use]
    pub const fn with_scan_delay(mut self, delay: Duration) -> Self {
        self.scan_delay = delay;
        self
    }

    /// Set the dispense delay.
    #[must_use]
    pub const fn with_dispense_delay(mut self, delay: Duration) -> Self {
        self.dispense_delay = delay;
        self
    }

    /// Set the notice TTL.
    #[must_use]
    pub const fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    /// Millisecond-scale timings for tests
    #[must_use]
    pub const fn fast() -> Self {
        Self {
            scan_delay: Duration::from_millis(10),
            dispense_delay: Duration::from_millis(10),
            notice_ttl: Duration::from_millis(20),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            scan_delay: Duration::from_millis(1500),
            dispense_delay: Duration::from_millis(3000),
            notice_ttl: Duration::from_millis(3000),
        }
    }
}

/// Top-level storefront configuration
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Gemini model used by the product advisor.
    ///
    /// Default: [`shieldpoint_gemini::DEFAULT_MODEL`]
    pub gemini_model: String,

    /// Scheduled-transition timings.
    pub timings: Timings,
}

impl StorefrontConfig {
    /// Load configuration from the environment
    ///
    /// Reads `GEMINI_MODEL` when set; everything else uses defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.gemini_model = model;
        }
        config
    }

    /// Set the timings.
    #[must_use]
    pub const fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            gemini_model: shieldpoint_gemini::DEFAULT_MODEL.to_string(),
            timings: Timings::default(),
        }
    }
}
