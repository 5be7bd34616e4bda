//! Product catalog — the SKUs consumers scan against.

use tracing::info;

use crate::record::{Product, ProductStatus};
use crate::state::ConsoleState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    NotFound(String),
    #[error("duplicate sku: {0}")]
    DuplicateSku(String),
}

impl crate::event::ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_PRODUCT_NOT_FOUND",
            Self::DuplicateSku(_) => "E_PRODUCT_DUPLICATE_SKU",
        }
    }
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Add a product to the catalog.
///
/// # Errors
///
/// Returns `DuplicateSku` if the sku is already present.
pub async fn add(state: &ConsoleState, product: Product) -> Result<Product, CatalogError> {
    let mut inner = state.inner.write().await;
    if inner.products.iter().any(|p| p.sku == product.sku) {
        return Err(CatalogError::DuplicateSku(product.sku));
    }
    inner.products.push(product.clone());
    inner.version += 1;
    info!(sku = %product.sku, "product added");
    Ok(product)
}

// =============================================================================
// READ SIDE
// =============================================================================

/// All products in catalog order.
pub async fn list(state: &ConsoleState) -> Vec<Product> {
    let inner = state.inner.read().await;
    inner.products.clone()
}

/// Products whose status is active.
pub async fn list_active(state: &ConsoleState) -> Vec<Product> {
    let inner = state.inner.read().await;
    inner
        .products
        .iter()
        .filter(|p| p.status == ProductStatus::Active)
        .cloned()
        .collect()
}

/// Case-insensitive substring search over name, sku, and category.
pub async fn search(state: &ConsoleState, query: &str) -> Vec<Product> {
    let query = query.trim().to_lowercase();
    let inner = state.inner.read().await;
    inner
        .products
        .iter()
        .filter(|p| {
            query.is_empty()
                || p.name.to_lowercase().contains(&query)
                || p.sku.to_lowercase().contains(&query)
                || p.category.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Fetch one product by sku.
///
/// # Errors
///
/// Returns `NotFound` if the sku matches nothing.
pub async fn get(state: &ConsoleState, sku: &str) -> Result<Product, CatalogError> {
    let inner = state.inner.read().await;
    inner
        .products
        .iter()
        .find(|p| p.sku == sku)
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(sku.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
