//! Cart store: the single source of truth for the shopping cart.

use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use verge_vr_core::ProductId;

use crate::notify::{Notifier, Severity};
use crate::render::{CartRenderer, CartView};
use crate::storage::{KeyValueStorage, storage_keys};

use super::CartLineItem;

/// Snapshot of the cart for display: the ordered lines plus derived totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Line items in insertion order.
    pub lines: Vec<CartLineItem>,
    /// Sum of unit price × quantity across all lines. Unrounded; rendering
    /// rounds to two decimals at the boundary.
    pub total: Decimal,
    /// Sum of quantity across all lines (the badge number).
    pub item_count: u32,
}

impl DisplayState {
    /// The empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: Decimal::ZERO,
            item_count: 0,
        }
    }
}

/// Owns the canonical cart state and keeps storage and UI in sync with it.
///
/// Collaborators are injected at construction: a [`KeyValueStorage`] for
/// persistence, a [`CartRenderer`] for the three UI surfaces (item list,
/// count badge, footer total), and a [`Notifier`] for transient
/// confirmations. Every mutation re-reads the persisted cart before
/// applying itself - storage, not memory, is authoritative, so state
/// written by another execution context is picked up rather than
/// clobbered with a stale copy. Cross-context writes are still
/// last-writer-wins; there is no merging.
///
/// All operations are synchronous and run to completion within the calling
/// event handler.
pub struct CartStore<S, R, N> {
    storage: S,
    renderer: R,
    notifier: N,
}

impl<S, R, N> CartStore<S, R, N>
where
    S: KeyValueStorage,
    R: CartRenderer,
    N: Notifier,
{
    /// Create a cart store with its collaborators.
    pub const fn new(storage: S, renderer: R, notifier: N) -> Self {
        Self {
            storage,
            renderer,
            notifier,
        }
    }

    /// Get a reference to the storage collaborator.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Get a reference to the renderer collaborator.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a reference to the notifier collaborator.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Add one unit of a product to the cart.
    ///
    /// If the product is already in the cart its quantity goes up by one
    /// and the captured name/price are left untouched; otherwise a new
    /// line is appended at the end with quantity 1. The updated cart is
    /// persisted in full, all UI surfaces are redrawn, and a confirmation
    /// naming the product is emitted.
    ///
    /// Callers must pass a non-empty `product_id` and `name` and a
    /// `price_display` containing a parseable non-negative decimal; these
    /// are trusted internal inputs, not validated here.
    #[instrument(skip_all, fields(product = %product_id))]
    pub fn add_item(&self, product_id: &ProductId, name: &str, price_display: &str) {
        let mut lines = self.load();

        match lines.iter_mut().find(|line| &line.id == product_id) {
            Some(line) => {
                line.quantity += 1;
                debug!(quantity = line.quantity, "incremented existing cart line");
            }
            None => {
                lines.push(CartLineItem::new(product_id.clone(), name, price_display));
                debug!("appended new cart line");
            }
        }

        self.persist(&lines);
        self.redraw();
        self.notifier
            .notify(&format!("{name} added to cart!"), Severity::Success);
    }

    /// Remove a product from the cart entirely, whatever its quantity.
    ///
    /// Removing a product that is not in the cart is a no-op; the
    /// unchanged cart is still persisted and the UI still redrawn.
    #[instrument(skip_all, fields(product = %product_id))]
    pub fn remove_item(&self, product_id: &ProductId) {
        let mut lines = self.load();
        lines.retain(|line| &line.id != product_id);

        self.persist(&lines);
        self.redraw();
        self.notifier
            .notify("Item removed from cart", Severity::Info);
    }

    /// Current display snapshot: loads from storage and computes the
    /// derived totals. Pure read, no side effects.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        let lines = self.load();
        let total = lines.iter().map(CartLineItem::line_total).sum();
        let item_count = lines.iter().map(|line| line.quantity).sum();

        DisplayState {
            lines,
            total,
            item_count,
        }
    }

    /// Redraw every cart UI surface from the current persisted state.
    ///
    /// Called internally after each mutation; also called by the embedding
    /// UI once at page load to paint the rehydrated cart.
    pub fn redraw(&self) {
        let view = CartView::from(&self.display_state());
        self.renderer.redraw(&view);
    }

    /// Load the persisted cart, failing closed to empty.
    ///
    /// Storage being unavailable or holding unreadable content is
    /// indistinguishable from a fresh cart; both are logged and yield the
    /// empty list rather than an error.
    fn load(&self) -> Vec<CartLineItem> {
        let raw = match self.storage.read(storage_keys::CART) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "cart storage unavailable, treating cart as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(lines) => lines,
            Err(e) => {
                warn!(error = %e, "persisted cart is unreadable, treating cart as empty");
                Vec::new()
            }
        }
    }

    /// Persist the full cart, overwriting the previous value.
    ///
    /// Persistence failures are logged and swallowed: the cart is an
    /// auxiliary feature and must never take the page down with it.
    fn persist(&self, lines: &[CartLineItem]) {
        match serde_json::to_string(lines) {
            Ok(raw) => {
                if let Err(e) = self.storage.write(storage_keys::CART, &raw) {
                    warn!(error = %e, "failed to persist cart");
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to serialize cart");
            }
        }
    }
}
