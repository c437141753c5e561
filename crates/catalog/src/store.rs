//! Persistence seam for the edit surface.
//!
//! The real catalog store lives in a backend elsewhere; this module defines
//! the contract it must satisfy and an in-memory implementation for tests and
//! development. [`commit_edit`] is the one behavioral coupling between
//! validation and persistence: an invalid draft must never reach the store.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockbook_core::{DomainError, DomainResult};

use crate::draft::{FieldError, NormalizedDraft, ProductDraft, ValidationResult};
use crate::product::{Product, ProductId};

/// Fields needed to create a product. The SKU is fixed at creation and
/// immutable afterwards, so it travels next to the editable fields rather
/// than inside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    #[serde(flatten)]
    pub fields: NormalizedDraft,
}

/// Storage contract the edit surface depends on.
///
/// Implementations decide where products live; callers only ever hand them
/// validated, normalized records.
pub trait ProductStore {
    fn get(&self, id: ProductId) -> Option<Product>;

    fn list(&self) -> Vec<Product>;

    /// Create a product. Fails with [`DomainError::Conflict`] when the SKU is
    /// already taken.
    fn insert(&mut self, new: NewProduct) -> DomainResult<Product>;

    /// Apply validated changes to an existing product, preserving `id`, `sku`
    /// and `created_at`. Fails with [`DomainError::NotFound`] for an unknown
    /// id.
    fn update(&mut self, id: ProductId, changes: NormalizedDraft) -> DomainResult<Product>;

    /// Delete a product. Fails with [`DomainError::NotFound`] for an unknown
    /// id.
    fn remove(&mut self, id: ProductId) -> DomainResult<()>;
}

/// In-memory product store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: HashMap<ProductId, Product>,
    next_id: i64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn get(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    fn list(&self) -> Vec<Product> {
        let mut items: Vec<Product> = self.products.values().cloned().collect();
        items.sort_by_key(|p| p.id.0);
        items
    }

    fn insert(&mut self, new: NewProduct) -> DomainResult<Product> {
        if self.products.values().any(|p| p.sku == new.sku) {
            return Err(DomainError::conflict(format!(
                "sku {:?} already exists",
                new.sku
            )));
        }

        self.next_id += 1;
        let product = Product {
            id: ProductId::new(self.next_id),
            sku: new.sku,
            name: new.fields.name,
            description: new.fields.description,
            category: new.fields.category,
            price: new.fields.price,
            stock: new.fields.stock,
            created_at: Utc::now(),
        };
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    fn update(&mut self, id: ProductId, changes: NormalizedDraft) -> DomainResult<Product> {
        let product = self.products.get_mut(&id).ok_or(DomainError::NotFound)?;

        // id, sku and created_at are creation-time facts; edits never touch them.
        product.name = changes.name;
        product.description = changes.description;
        product.category = changes.category;
        product.price = changes.price;
        product.stock = changes.stock;

        Ok(product.clone())
    }

    fn remove(&mut self, id: ProductId) -> DomainResult<()> {
        self.products
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }
}

/// Failure of an edit commit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The draft failed validation; the store was not touched.
    #[error("draft rejected with {} field error(s)", .0.len())]
    Rejected(Vec<FieldError>),

    /// The draft was valid but the store refused the update.
    #[error(transparent)]
    Store(#[from] DomainError),
}

/// Save an edit session: validate the draft and, only when it is valid,
/// persist the normalized record.
///
/// On `Invalid` the store is never invoked; the field errors come back for
/// the form to render and the user retries by re-editing.
pub fn commit_edit<S: ProductStore>(
    store: &mut S,
    id: ProductId,
    draft: &ProductDraft,
) -> Result<Product, EditError> {
    match draft.validate() {
        ValidationResult::Invalid(errors) => {
            tracing::warn!("edit of product {id} rejected: {} field error(s)", errors.len());
            Err(EditError::Rejected(errors))
        }
        ValidationResult::Valid(normalized) => {
            tracing::debug!("edit of product {id} validated, persisting");
            Ok(store.update(id, normalized)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;

    fn widget_fields() -> NormalizedDraft {
        NormalizedDraft {
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            category: "electronics".to_string(),
            price: Price::from_cents(1999),
            stock: 5,
        }
    }

    fn seeded_store() -> (InMemoryProductStore, Product) {
        let mut store = InMemoryProductStore::new();
        let product = store
            .insert(NewProduct {
                sku: "SKU-001".to_string(),
                fields: widget_fields(),
            })
            .unwrap();
        (store, product)
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let (mut store, first) = seeded_store();
        let second = store
            .insert(NewProduct {
                sku: "SKU-002".to_string(),
                fields: widget_fields(),
            })
            .unwrap();
        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn insert_rejects_duplicate_sku() {
        let (mut store, _) = seeded_store();
        let err = store
            .insert(NewProduct {
                sku: "SKU-001".to_string(),
                fields: widget_fields(),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn update_preserves_creation_time_facts() {
        let (mut store, product) = seeded_store();
        let mut changes = widget_fields();
        changes.name = "Updated Widget".to_string();
        changes.price = Price::from_cents(3999);
        changes.stock = 75;

        let updated = store.update(product.id, changes).unwrap();
        assert_eq!(updated.id, product.id);
        assert_eq!(updated.sku, product.sku);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.name, "Updated Widget");
        assert_eq!(updated.price, Price::from_cents(3999));
        assert_eq!(updated.stock, 75);
    }

    #[test]
    fn update_of_unknown_id_is_not_found() {
        let mut store = InMemoryProductStore::new();
        let err = store.update(ProductId::new(99_999), widget_fields()).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn remove_deletes_and_then_misses() {
        let (mut store, product) = seeded_store();
        store.remove(product.id).unwrap();
        assert_eq!(store.get(product.id), None);
        assert_eq!(store.remove(product.id), Err(DomainError::NotFound));
    }

    #[test]
    fn commit_edit_persists_a_valid_draft() {
        let (mut store, product) = seeded_store();
        let mut draft = product.to_draft();
        draft.price = "29.99".to_string();
        draft.stock = "12".to_string();

        let saved = commit_edit(&mut store, product.id, &draft).unwrap();
        assert_eq!(saved.price, Price::from_cents(2999));
        assert_eq!(saved.stock, 12);
        assert_eq!(store.get(product.id).unwrap(), saved);
    }

    #[test]
    fn commit_edit_never_touches_the_store_for_an_invalid_draft() {
        let (mut store, product) = seeded_store();
        let before = store.list();

        let mut draft = product.to_draft();
        draft.name = "   ".to_string();
        draft.price = "invalid".to_string();

        let err = commit_edit(&mut store, product.id, &draft).unwrap_err();
        match err {
            EditError::Rejected(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, ["name", "price"]);
            }
            EditError::Store(e) => panic!("expected Rejected, got store error {e:?}"),
        }
        assert_eq!(store.list(), before);
    }

    #[test]
    fn commit_edit_surfaces_store_failures_for_valid_drafts() {
        let mut store = InMemoryProductStore::new();
        let draft = ProductDraft {
            name: "Widget".to_string(),
            description: None,
            category: "electronics".to_string(),
            price: "19.99".to_string(),
            stock: "5".to_string(),
        };

        let err = commit_edit(&mut store, ProductId::new(42), &draft).unwrap_err();
        assert_eq!(err, EditError::Store(DomainError::NotFound));
    }

    #[test]
    fn new_product_serializes_flat() {
        let new = NewProduct {
            sku: "SKU-001".to_string(),
            fields: widget_fields(),
        };
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["sku"], "SKU-001");
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], 1999);
    }
}
