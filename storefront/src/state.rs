//! Storefront state types.
//!
//! The whole application state is one owned struct passed through the
//! single dispatcher. Sub-states are plain data; derived values (totals,
//! badge counts, scan candidates) are recomputed on read and never cached.

use crate::types::{
    CartItem, Notice, NoticeId, NoticeKind, Order, OrderId, OrderStatus, Price, ProductId,
    RedemptionToken, View,
};
use serde::{Deserialize, Serialize};

/// Root storefront state
///
/// This is the state managed by the storefront reducer: the cart, the order
/// ledger, the kiosk screen, ephemeral notices, the AI consultant panel and
/// the navigation shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontState {
    /// In-progress, pre-checkout selection
    pub cart: CartState,
    /// Placed orders, most recent first
    pub orders: OrderLedger,
    /// Simulated vending kiosk screen
    pub kiosk: KioskState,
    /// Ephemeral notifications
    pub notices: NoticeState,
    /// AI consultant panel
    pub advisor: AdvisorState,
    /// Navigation and catalog search
    pub shell: ShellState,
}

/// The user's cart: at most one entry per distinct product id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Cart entries in insertion order
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Derived total: Σ price × quantity, recomputed on every read
    #[must_use]
    pub fn total(&self) -> Price {
        self.items
            .iter()
            .fold(Price::from_vnd(0), |sum, item| sum.plus(item.line_total()))
    }

    /// Total number of units across all entries (the cart badge)
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Whether the cart holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a mutable entry by product id
    pub fn entry_mut(&mut self, product_id: &ProductId) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| &item.product.id == product_id)
    }
}

/// The in-memory order ledger
///
/// Orders are prepended at placement, never deleted, and iterate in
/// reverse-chronological placement order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLedger {
    /// All placed orders, most recent first
    pub orders: Vec<Order>,
}

impl OrderLedger {
    /// Look up an order by id
    #[must_use]
    pub fn find_by_id(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Look up an order by redemption token
    #[must_use]
    pub fn find_by_token(&self, token: &RedemptionToken) -> Option<&Order> {
        self.orders.iter().find(|o| &o.token == token)
    }

    /// Orders still waiting to be collected - the kiosk's scan candidates
    #[must_use]
    pub fn pending_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .collect()
    }

    /// Whether an id is already taken
    #[must_use]
    pub fn contains_id(&self, id: &OrderId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Whether a token is already taken
    #[must_use]
    pub fn contains_token(&self, token: &RedemptionToken) -> bool {
        self.find_by_token(token).is_some()
    }
}

/// The kiosk's two-stage redemption state machine
///
/// `Idle → Scanning → Confirmed → Dispensing → Idle`. The shape itself
/// guarantees only one scan/dispense sequence runs at a time; no locking
/// is involved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum KioskState {
    /// Waiting for a scan
    #[default]
    Idle,
    /// Scan in progress (simulated camera delay)
    Scanning {
        /// Order id being scanned
        order_id: OrderId,
    },
    /// Order recognized, waiting for the collect button
    Confirmed {
        /// Snapshot of the recognized order
        order: Order,
    },
    /// Hardware dispensing (simulated motor delay)
    Dispensing {
        /// The order being dispensed
        order: Order,
    },
}

/// Ephemeral notification queue
///
/// Each pushed notice schedules its own removal by id after a fixed TTL,
/// so no timer closure captures list positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoticeState {
    /// Live notices in display order
    pub entries: Vec<Notice>,
    /// Next id to assign (monotonic)
    pub next_id: u64,
}

impl NoticeState {
    /// Append a notice and return the id its expiry is keyed on
    pub fn push(&mut self, message: impl Into<String>, kind: NoticeKind) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a notice by id; unknown ids are ignored
    pub fn remove(&mut self, id: NoticeId) {
        self.entries.retain(|n| n.id != id);
    }
}

/// AI consultant panel state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisorState {
    /// A request is in flight
    pub pending: bool,
    /// The last advice text shown (or the fallback)
    pub response: Option<String>,
}

/// Navigation shell state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellState {
    /// Currently selected view
    pub view: View,
    /// Catalog search query
    pub search_query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_total_is_zero() {
        let cart = CartState::default();
        assert_eq!(cart.total(), Price::from_vnd(0));
        assert_eq!(cart.unit_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn notice_ids_are_monotonic() {
        let mut notices = NoticeState::default();
        let a = notices.push("one", NoticeKind::Success);
        let b = notices.push("two", NoticeKind::Info);
        assert!(b.0 > a.0);
        assert_eq!(notices.entries.len(), 2);
    }

    #[test]
    fn notice_removal_ignores_unknown_ids() {
        let mut notices = NoticeState::default();
        let id = notices.push("one", NoticeKind::Success);
        notices.remove(NoticeId(id.0 + 100));
        assert_eq!(notices.entries.len(), 1);
        notices.remove(id);
        assert!(notices.entries.is_empty());
    }

    #[test]
    fn kiosk_defaults_to_idle() {
        assert_eq!(KioskState::default(), KioskState::Idle);
    }
}
