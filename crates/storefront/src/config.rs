//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `RENU_SHOP_NAME` - Greeting name in the order message (default: RENU DESIGN CHOICE)
//! - `RENU_ORDER_PHONE` - Messaging destination number, digits only (default: 94760218766)
//! - `RENU_ORDER_BASE_URL` - Messaging link base (default: <https://wa.me>)
//! - `RENU_CART_STORAGE_KEY` - Key of the persisted cart (default: cart)
//! - `RENU_CURRENCY_SYMBOL` - Currency prefix for display (default: Rs.)
//! - `RENU_TOAST_DURATION_MS` - Toast lifetime in milliseconds (default: 3000)
//! - `RENU_STORAGE_PATH` - JSON file backing the cart; in-memory storage when unset

use std::path::PathBuf;
use std::time::Duration;

use renu_core::DEFAULT_CURRENCY_SYMBOL;
use thiserror::Error;
use url::Url;

const DEFAULT_SHOP_NAME: &str = "RENU DESIGN CHOICE";
const DEFAULT_ORDER_PHONE: &str = "94760218766";
const DEFAULT_ORDER_BASE_URL: &str = "https://wa.me";
const DEFAULT_STORAGE_KEY: &str = "cart";
const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront cart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Shop name used in the order greeting
    pub shop_name: String,
    /// Messaging destination number
    pub order_phone: String,
    /// Base URL of the messaging link
    pub order_base_url: Url,
    /// Storage key for the serialized cart
    pub storage_key: String,
    /// Currency prefix for prices
    pub currency_symbol: String,
    /// How long a toast stays visible
    pub toast_duration: Duration,
    /// File backing the cart; `None` keeps it in memory
    pub storage_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            order_phone: DEFAULT_ORDER_PHONE.to_string(),
            order_base_url: default_base_url(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            storage_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let order_phone = get_or("RENU_ORDER_PHONE", DEFAULT_ORDER_PHONE);
        validate_phone(&order_phone, "RENU_ORDER_PHONE")?;

        let order_base_url = parse_base_url(
            &get_or("RENU_ORDER_BASE_URL", DEFAULT_ORDER_BASE_URL),
            "RENU_ORDER_BASE_URL",
        )?;

        let storage_key = get_or("RENU_CART_STORAGE_KEY", DEFAULT_STORAGE_KEY);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "RENU_CART_STORAGE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let toast_ms = lookup("RENU_TOAST_DURATION_MS")
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidEnvVar("RENU_TOAST_DURATION_MS".to_string(), e.to_string())
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_TOAST_DURATION_MS);

        Ok(Self {
            shop_name: get_or("RENU_SHOP_NAME", DEFAULT_SHOP_NAME),
            order_phone,
            order_base_url,
            storage_key,
            currency_symbol: get_or("RENU_CURRENCY_SYMBOL", DEFAULT_CURRENCY_SYMBOL),
            toast_duration: Duration::from_millis(toast_ms),
            storage_path: lookup("RENU_STORAGE_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn default_base_url() -> Url {
    Url::parse(DEFAULT_ORDER_BASE_URL).expect("default order base URL is valid")
}

/// The destination is placed in the URL path, so only digits are allowed.
fn validate_phone(phone: &str, var_name: &str) -> Result<(), ConfigError> {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must contain digits only (got '{phone}')"),
        ));
    }
    Ok(())
}

/// Parse a messaging base URL; it must be able to carry path segments.
fn parse_base_url(raw: &str, var_name: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must be a hierarchical URL such as https://wa.me".to_string(),
        ));
    }
    if url.query().is_some() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not carry a query string".to_string(),
        ));
    }
    Ok(url)
}
