//! Product catalog and category filtering.
//!
//! The catalog is independent of the cart: it only decides which product
//! cards are visible for the selected category. Adding a product to the cart
//! goes through [`Product::line_item`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use renu_core::{CategoryId, LineItem, Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};

/// Filter value that shows every product.
const ALL_CATEGORIES: &str = "all";

/// A product card in the storefront grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: CategoryId,
}

impl Product {
    /// The line item added to the cart for one unit of this product.
    #[must_use]
    pub fn line_item(&self) -> LineItem {
        LineItem::new(
            self.id.clone(),
            self.name.clone(),
            self.price,
            self.image.clone(),
        )
    }
}

/// Which products the grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Only products tagged with this category.
    Category(CategoryId),
}

impl CategoryFilter {
    /// Whether `product` is visible under this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => &product.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    /// Exactly `"all"` selects everything; anything else is a category tag.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(Self::All)
        } else {
            Ok(Self::Category(CategoryId::new(s)))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Category(category) => write!(f, "{category}"),
        }
    }
}

/// The full product list, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in display order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an array of products.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every product.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Look up a product by id, failing with `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::NotFound` if no product has this id.
    pub fn require(&self, id: &str) -> Result<&Product> {
        self.get(id)
            .ok_or_else(|| StorefrontError::NotFound(format!("product {id}")))
    }

    /// Products visible under `filter`, in display order.
    pub fn visible<'a>(&'a self, filter: &'a CategoryFilter) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| filter.matches(p))
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&CategoryId> {
        let mut seen: Vec<&CategoryId> = Vec::new();
        for product in &self.products {
            if !seen.contains(&&product.category) {
                seen.push(&product.category);
            }
        }
        seen
    }
}
