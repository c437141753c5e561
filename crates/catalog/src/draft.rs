//! Draft validation: from form-held strings to a storage-ready record.
//!
//! An edit form holds every field as text. Validation is the single gate
//! between that working copy and anything persistent: it either normalizes
//! the draft into typed fields, or reports every violated rule scoped to its
//! field so the form can render errors in place.

use serde::{Deserialize, Serialize};

use crate::money::Price;

/// The editable fields of a product, as an edit form holds them.
///
/// Numeric fields are strings here on purpose: they are whatever the user
/// typed, and stay that way until [`ProductDraft::validate`] accepts them.
/// Discarded on cancel; never persisted directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: String,
    pub stock: String,
}

/// Why a single field was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A mandatory text field was blank or whitespace-only after trimming.
    EmptyRequiredField,
    /// A numeric field could not be parsed as the expected type.
    InvalidNumericFormat,
}

/// A validation failure scoped to one named field.
///
/// This is data for the edit surface to render next to the field, not an
/// error type that propagates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    fn empty(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::EmptyRequiredField,
        }
    }

    fn numeric(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::InvalidNumericFormat,
        }
    }
}

/// A draft that passed validation: trimmed text, typed numerics.
///
/// This is the record shape the persistence collaborator accepts; `id`,
/// `sku` and `created_at` are not here because edits never change them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDraft {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Price,
    pub stock: i64,
}

/// Outcome of validating a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    Valid(NormalizedDraft),
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn into_result(self) -> Result<NormalizedDraft, Vec<FieldError>> {
        match self {
            Self::Valid(normalized) => Ok(normalized),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

impl ProductDraft {
    /// Validate and normalize this draft.
    ///
    /// Pure: no side effects, same draft gives the same result. All violated
    /// rules are reported together, in field order (`name`, `price`,
    /// `stock`):
    ///
    /// - `name` must be non-empty after trimming.
    /// - `price` must parse via [`Price::to_cents`].
    /// - `stock` must parse as an integer. Negative stock is accepted; range
    ///   policy belongs to downstream business rules, not the form contract.
    ///
    /// On success the text fields come back trimmed, and a description that
    /// trims to nothing collapses to `None`.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::empty("name"));
        }

        let price = match Price::to_cents(&self.price) {
            Ok(price) => Some(price),
            Err(_) => {
                errors.push(FieldError::numeric("price"));
                None
            }
        };

        let stock = match self.stock.trim().parse::<i64>() {
            Ok(stock) => Some(stock),
            Err(_) => {
                errors.push(FieldError::numeric("stock"));
                None
            }
        };

        match (price, stock) {
            (Some(price), Some(stock)) if errors.is_empty() => {
                let description = self
                    .description
                    .as_deref()
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(str::to_string);

                ValidationResult::Valid(NormalizedDraft {
                    name: name.to_string(),
                    description,
                    category: self.category.trim().to_string(),
                    price,
                    stock,
                })
            }
            // A missing numeric always pushed an error, so `errors` is
            // non-empty on this arm.
            _ => ValidationResult::Invalid(errors),
        }
    }
}
