//! Storefront actions.
//!
//! One enum unifies every input to the dispatcher: user commands (add to
//! cart, checkout, scan) and the events that effects feed back (a scan
//! delay elapsing, advice arriving, a notice expiring).

use crate::types::{NoticeId, OrderId, Product, ProductId, View};
use serde::{Deserialize, Serialize};

/// All possible inputs to the storefront reducer
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum StorefrontAction {
    //
    // ── Cart ────────────────────────────────────────────────────────────
    //
    /// Command: add a product to the cart (merging with an existing entry)
    AddItem {
        /// Product to add
        product: Product,
        /// How many units; zero is ignored
        quantity: u32,
    },
    /// Command: adjust an entry's quantity by a delta, clamped at 1
    AdjustQuantity {
        /// Entry to adjust
        product_id: ProductId,
        /// Signed change (+1 / -1 from the stepper buttons)
        delta: i32,
    },
    /// Command: remove an entry entirely
    RemoveItem {
        /// Entry to remove
        product_id: ProductId,
    },

    //
    // ── Orders ──────────────────────────────────────────────────────────
    //
    /// Command: convert the cart into a pending order
    Checkout,
    /// Command: mark a pending order collected (issued by the kiosk flow)
    CompleteOrder {
        /// Order to complete
        order_id: OrderId,
    },

    //
    // ── Kiosk ───────────────────────────────────────────────────────────
    //
    /// Command: start the simulated scan of a pending order
    SimulateScan {
        /// Order id encoded in the scanned QR
        order_id: OrderId,
    },
    /// Event: the scan delay elapsed, resolve the lookup
    ScanResolved {
        /// Order id that was being scanned
        order_id: OrderId,
    },
    /// Command: the collect button on the confirmed screen
    Collect,
    /// Event: the dispense delay elapsed
    DispenseFinished,

    //
    // ── AI consultant ───────────────────────────────────────────────────
    //
    /// Command: ask the product advisor a free-text question
    AskAdvisor {
        /// The user's question
        query: String,
    },
    /// Event: advice text arrived (or the fallback, on any failure)
    AdviceReceived {
        /// Text to display
        text: String,
    },

    //
    // ── Shell ───────────────────────────────────────────────────────────
    //
    /// Command: switch the visible view
    Navigate {
        /// Target view
        view: View,
    },
    /// Command: the catalog search box changed
    SearchChanged {
        /// New query text
        query: String,
    },

    //
    // ── Notices ─────────────────────────────────────────────────────────
    //
    /// Event: a notice's display interval elapsed
    NoticeExpired {
        /// Notice to drop
        id: NoticeId,
    },
}
