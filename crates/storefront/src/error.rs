//! Unified error handling for the storefront cart.
//!
//! Provides a unified `StorefrontError` type. Store mutations never surface
//! errors to the view; this type is what hosts see from the fallible
//! entry points (`persist`, `restore`, configuration, ordering).

use thiserror::Error;

use crate::config::ConfigError;
use crate::order::OrderError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Key-value storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Cart could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Order could not be composed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Configuration is missing or invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A cart template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl StorefrontError {
    /// Short message suitable for a toast.
    ///
    /// Internal failures are not spelled out to shoppers.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Order(OrderError::EmptyCart) => "Your cart is empty!".to_string(),
            Self::NotFound(_) => "That product is no longer available".to_string(),
            Self::Storage(_) | Self::Serialization(_) => "Could not save your cart".to_string(),
            Self::Order(_) | Self::Config(_) | Self::Template(_) => {
                "Something went wrong".to_string()
            }
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::NotFound("p9".to_string());
        assert_eq!(err.to_string(), "Not found: p9");

        let err = StorefrontError::from(OrderError::EmptyCart);
        assert_eq!(err.to_string(), "Order error: your cart is empty");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            StorefrontError::from(OrderError::EmptyCart).user_message(),
            "Your cart is empty!"
        );
        assert_eq!(
            StorefrontError::NotFound("p9".to_string()).user_message(),
            "That product is no longer available"
        );
    }
}
