//! The product record as the catalog stores it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::Entity;

use crate::draft::ProductDraft;
use crate::money::Price;

/// Stock at or below this count is flagged as "low" by display surfaces.
///
/// Purely presentational; no invariant is enforced on the stock value itself.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Category labels the catalog ships with.
///
/// The category set is open: validation trims the label but does not check
/// membership. Callers that want a closed picker can offer these.
pub const KNOWN_CATEGORIES: [&str; 5] = ["electronics", "books", "clothing", "food", "other"];

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A stored product.
///
/// `id`, `sku` and `created_at` are set once at creation and never change
/// under edits; everything else is editable through a [`ProductDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Price,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether display surfaces should flag this product as low on stock.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_THRESHOLD
    }

    /// Open an edit session: render the editable fields into the string-typed
    /// working copy an edit form holds.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price.to_display(),
            stock: self.stock.to_string(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
