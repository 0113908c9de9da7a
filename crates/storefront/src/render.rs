//! Cart UI rendering.
//!
//! Three surfaces show cart state: the dropdown item list, the nav count
//! badge, and the dropdown footer with the order total. The cart store
//! hands a [`CartView`] to its [`CartRenderer`] after every mutation;
//! rendering is unconditional and fire-and-forget, with no dirty-checking.
//!
//! [`HtmlRenderer`] is the production implementation: it renders the three
//! askama partials and retains the latest fragments for the embedding UI
//! to swap into the page.

use std::sync::{Mutex, PoisonError};

use askama::Template;
use tracing::warn;

use verge_vr_core::format_usd;

use crate::cart::DisplayState;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    /// Product id, used by the remove control.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Units of this product.
    pub quantity: u32,
    /// Formatted line total (unit price × quantity).
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Items in insertion order.
    pub items: Vec<CartItemView>,
    /// Formatted order total.
    pub subtotal: String,
    /// Badge number: total units across all items.
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_usd(rust_decimal::Decimal::ZERO),
            item_count: 0,
        }
    }
}

impl From<&DisplayState> for CartView {
    fn from(state: &DisplayState) -> Self {
        Self {
            items: state
                .lines
                .iter()
                .map(|line| CartItemView {
                    id: line.id.as_str().to_owned(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    line_price: format_usd(line.line_total()),
                })
                .collect(),
            subtotal: format_usd(state.total),
            item_count: state.item_count,
        }
    }
}

/// Redraws the cart UI surfaces from a view.
///
/// Implementations must not call back into the cart store.
pub trait CartRenderer {
    /// Re-render the item list, count badge, and footer total.
    fn redraw(&self, cart: &CartView);
}

impl<T: CartRenderer + ?Sized> CartRenderer for std::sync::Arc<T> {
    fn redraw(&self, cart: &CartView) {
        (**self).redraw(cart);
    }
}

/// Cart item list fragment template.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartView,
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
struct CartCountTemplate {
    count: u32,
}

/// Cart footer fragment template.
#[derive(Template)]
#[template(path = "partials/cart_footer.html")]
struct CartFooterTemplate<'a> {
    cart: &'a CartView,
}

/// Rendered HTML fragments for the three cart surfaces.
#[derive(Debug, Default, Clone)]
struct Surfaces {
    items: String,
    count: String,
    footer: String,
}

/// Renderer that produces HTML fragments via askama templates.
///
/// The latest fragments are retained and exposed through accessors; the
/// embedding UI reads them after a mutation and swaps them into the page.
/// A template failure leaves the previous fragment in place and is logged,
/// never propagated - a failed redraw must not take the page down.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    surfaces: Mutex<Surfaces>,
}

impl HtmlRenderer {
    /// Create a renderer with empty surfaces (nothing rendered yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest item list fragment.
    #[must_use]
    pub fn items_html(&self) -> String {
        self.lock().items.clone()
    }

    /// Latest count badge fragment.
    #[must_use]
    pub fn count_html(&self) -> String {
        self.lock().count.clone()
    }

    /// Latest footer fragment.
    #[must_use]
    pub fn footer_html(&self) -> String {
        self.lock().footer.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Surfaces> {
        self.surfaces.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartRenderer for HtmlRenderer {
    fn redraw(&self, cart: &CartView) {
        let items = CartItemsTemplate { cart }.render();
        let count = CartCountTemplate {
            count: cart.item_count,
        }
        .render();
        let footer = CartFooterTemplate { cart }.render();

        let mut surfaces = self.lock();

        match items {
            Ok(html) => surfaces.items = html,
            Err(e) => warn!(error = %e, "failed to render cart item list"),
        }
        match count {
            Ok(html) => surfaces.count = html,
            Err(e) => warn!(error = %e, "failed to render cart count badge"),
        }
        match footer {
            Ok(html) => surfaces.footer = html,
            Err(e) => warn!(error = %e, "failed to render cart footer"),
        }
    }
}
