//! Core domain types for the Shield Point storefront.
//!
//! This module defines the data model: catalog products, cart entries,
//! orders with their redemption tokens, ephemeral notices, and the named
//! views of the presentation shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Third-party endpoint that renders a redemption token as a QR image.
const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=";

/// Unique identifier for a catalog product
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new `ProductId` from a string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a placed order
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new `OrderId` from a string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque, URL-safe value embedded in the scannable QR code.
///
/// The kiosk uses this to locate an order. Exactly one order exists per
/// token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedemptionToken(String);

impl RedemptionToken {
    /// Creates a new token from a string
    ///
    /// The value must be URL-safe; generators only use `A–Z`, `0–9` and `-`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RedemptionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price in Vietnamese đồng (smallest currency unit, no decimals)
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Price(i64);

impl Price {
    /// Creates a price from a đồng amount, clamping negatives to zero
    #[must_use]
    pub const fn from_vnd(vnd: i64) -> Self {
        Self(if vnd < 0 { 0 } else { vnd })
    }

    /// Returns the amount in đồng
    #[must_use]
    pub const fn vnd(&self) -> i64 {
        self.0
    }

    /// Price of `quantity` units at this unit price
    #[must_use]
    pub const fn times(&self, quantity: u32) -> Price {
        Price(self.0 * quantity as i64)
    }

    /// Sum of two prices
    #[must_use]
    pub const fn plus(&self, other: Price) -> Price {
        Price(self.0 + other.0)
    }
}

impl fmt::Display for Price {
    /// Formats with dot thousands grouping, the way the shop prints prices:
    /// `155.000đ`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "{grouped}đ")
    }
}

/// An immutable catalog product
///
/// Products are defined by the catalog source and never mutated; their
/// lifetime is the process lifetime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Unit price
    pub price: Price,
    /// Short marketing description
    pub description: String,
    /// Category label
    pub category: String,
    /// Image URL
    pub image: String,
    /// Feature bullet points
    pub features: Vec<String>,
}

/// A cart entry: a product plus a quantity (always ≥ 1)
///
/// At most one entry exists per distinct product id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product being bought
    pub product: Product,
    /// How many units (never below 1)
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: unit price × quantity
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Status of an order in its lifecycle
///
/// The transition is monotonic: `Pending → Collected`, never reversed,
/// never skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed, waiting to be collected at the kiosk
    Pending,
    /// Dispensed and picked up
    Collected,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Collected => write!(f, "collected"),
        }
    }
}

/// An order: an immutable snapshot of the cart at checkout time
///
/// All fields are write-once except `status`, which moves through
/// [`OrderStatus`] via the kiosk redemption flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique opaque identifier, generated at checkout
    pub id: OrderId,
    /// Deep copy of the cart at checkout time
    pub items: Vec<CartItem>,
    /// Total frozen at checkout
    pub total: Price,
    /// Creation instant
    pub placed_at: DateTime<Utc>,
    /// Scannable token for kiosk lookup
    pub token: RedemptionToken,
    /// Current lifecycle status
    pub status: OrderStatus,
}

impl Order {
    /// URL of a QR image rendering this order's redemption token
    ///
    /// The token charset is URL-safe, so the value embeds verbatim.
    #[must_use]
    pub fn qr_image_url(&self) -> String {
        format!("{QR_ENDPOINT}{}", self.token)
    }
}

/// Identifier for an ephemeral notice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoticeId(pub u64);

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of an ephemeral notice, controls presentation only
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// Positive confirmation (added to cart, order placed, collected)
    Success,
    /// Neutral information (removed from cart, scan failed)
    Info,
}

/// A user-facing notification that expires after a fixed interval
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// Monotonic identifier, used for scheduled removal
    pub id: NoticeId,
    /// Message text
    pub message: String,
    /// Presentation kind
    pub kind: NoticeKind,
}

/// Named views of the presentation shell
///
/// Navigation is a pure in-memory selection; there is no URL or history
/// persistence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    /// Landing page with the AI consultant
    #[default]
    Home,
    /// Product catalog with search
    Catalog,
    /// The in-progress cart
    Cart,
    /// Placed orders with their QR codes
    OrderHistory,
    /// The simulated vending kiosk
    Kiosk,
}
