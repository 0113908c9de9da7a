//! Static product catalog and search suggestions.
//!
//! The landing page sells a fixed lineup; there is no product service to
//! query. The catalog here is the add-to-cart data source (name and price
//! are captured from it at add time) and backs the nav search box's
//! suggestion dropdown.

use verge_vr_core::ProductId;

/// Queries shorter than this produce no suggestions.
pub const MIN_QUERY_LEN: usize = 3;

/// Maximum number of suggestions shown at once.
pub const MAX_SUGGESTIONS: usize = 5;

/// A product as presented on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Stable identifier, the cart's uniqueness key.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display price, `"US$ <amount>"` form.
    pub price: &'static str,
}

impl Product {
    /// The product's id as a typed [`ProductId`].
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        ProductId::new(self.id)
    }
}

/// The full product lineup, in page order.
pub const PRODUCTS: &[Product] = &[
    Product {
        id: "vision-pro",
        name: "Apple Vision Pro",
        price: "US$ 3499.00",
    },
    Product {
        id: "psvr2",
        name: "PlayStation VR2",
        price: "US$ 549.00",
    },
    Product {
        id: "meta-quest-3",
        name: "Meta Quest 3",
        price: "US$ 499.00",
    },
    Product {
        id: "htc-vive",
        name: "HTC Vive",
        price: "US$ 999.00",
    },
    Product {
        id: "valve-index",
        name: "Valve Index",
        price: "US$ 999.00",
    },
    Product {
        id: "touch-controllers",
        name: "Touch Controllers",
        price: "US$ 69.00",
    },
    Product {
        id: "sense-controllers",
        name: "Sense Controllers",
        price: "US$ 89.00",
    },
    Product {
        id: "vr-stand",
        name: "VR Stand",
        price: "US$ 29.99",
    },
    Product {
        id: "vr-play-mat",
        name: "VR Play Mat",
        price: "US$ 49.99",
    },
    Product {
        id: "lens-protector",
        name: "Lens Protector",
        price: "US$ 19.99",
    },
];

/// Look up a product by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Search suggestions for the nav search box.
///
/// Case-insensitive substring match over product names, capped at
/// [`MAX_SUGGESTIONS`]. Queries shorter than [`MIN_QUERY_LEN`] characters
/// yield nothing (the dropdown stays hidden while the user is still
/// typing the first couple of characters).
#[must_use]
pub fn suggestions(query: &str) -> Vec<&'static str> {
    suggest_from(PRODUCTS.iter().map(|p| p.name), query)
}

fn suggest_from<'a>(names: impl Iterator<Item = &'a str>, query: &str) -> Vec<&'a str> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let query = query.to_lowercase();
    names
        .filter(|name| name.to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .collect()
}
