//! Product catalog domain module.
//!
//! This crate contains the business rules behind the product editing surface,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage engine): price conversion between stored cents and display
//! dollars, draft validation, and the validate-then-persist commit flow over
//! a storage seam.

pub mod draft;
pub mod money;
pub mod product;
pub mod store;

pub use draft::{FieldError, FieldErrorKind, NormalizedDraft, ProductDraft, ValidationResult};
pub use money::{Price, PriceError};
pub use product::{KNOWN_CATEGORIES, LOW_STOCK_THRESHOLD, Product, ProductId};
pub use store::{EditError, InMemoryProductStore, NewProduct, ProductStore, commit_edit};
