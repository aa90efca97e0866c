//! Catalog queries: filtering and ordering over the product sequence.

use crate::Ledger;
use crate::product::Product;

/// Catalog filter.
///
/// `search` is a case-insensitive substring match against name and category;
/// `category` is an exact match. Both conditions combine with AND. An empty
/// filter selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Catalog ordering. Text keys sort ascending and case-insensitively;
/// numeric keys sort descending (largest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    Name,
    Category,
    Quantity,
    Price,
}

impl ProductSort {
    fn apply(self, products: &mut [&Product]) {
        match self {
            ProductSort::Name => {
                products.sort_by_cached_key(|product| product.name().to_lowercase());
            }
            ProductSort::Category => {
                products.sort_by_cached_key(|product| product.category().to_lowercase());
            }
            ProductSort::Quantity => {
                products.sort_by(|a, b| b.quantity().cmp(&a.quantity()));
            }
            ProductSort::Price => {
                products.sort_by(|a, b| b.price().cmp(&a.price()));
            }
        }
    }
}

fn matches(product: &Product, needle: Option<&str>, category: Option<&str>) -> bool {
    if let Some(needle) = needle {
        if !product.name().to_lowercase().contains(needle)
            && !product.category().to_lowercase().contains(needle)
        {
            return false;
        }
    }
    if let Some(category) = category {
        if product.category() != category {
            return false;
        }
    }
    true
}

impl Ledger {
    /// Select and order catalog entries for display.
    ///
    /// Sorting is stable: products that compare equal keep their creation
    /// order, and `sort: None` returns the filtered products in creation
    /// order as-is.
    pub fn query_products(
        &self,
        filter: &ProductFilter,
        sort: Option<ProductSort>,
    ) -> Vec<&Product> {
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut selected: Vec<&Product> = self
            .products()
            .iter()
            .filter(|product| matches(product, needle.as_deref(), filter.category.as_deref()))
            .collect();
        if let Some(sort) = sort {
            sort.apply(&mut selected);
        }
        selected
    }
}
