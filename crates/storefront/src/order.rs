//! Order hand-off.
//!
//! Turns the cart into an itemized message and a `wa.me` link that opens a
//! chat with the shop, pre-filled with that message. The whole message is
//! percent-encoded so names containing `&`, `#` or `?` survive the trip.

use renu_core::Cart;
use thiserror::Error;
use url::Url;

use crate::config::StorefrontConfig;

/// Errors that stop an order from being composed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Nothing to order.
    #[error("your cart is empty")]
    EmptyCart,

    /// The configured base URL cannot carry the destination path.
    #[error("invalid order link base: {0}")]
    InvalidBaseUrl(String),
}

/// The itemized order text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage(String);

impl OrderMessage {
    /// The message as plain text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Link that opens the messaging channel with the order pre-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLink(Url);

impl OrderLink {
    /// The link as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The link as a parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}

/// Renders carts into order messages for one shop.
#[derive(Debug, Clone)]
pub struct OrderComposer {
    shop_name: String,
    currency_symbol: String,
    base_url: Url,
    phone: String,
}

impl OrderComposer {
    /// Build a composer from explicit parts.
    #[must_use]
    pub fn new(
        shop_name: impl Into<String>,
        currency_symbol: impl Into<String>,
        base_url: Url,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            shop_name: shop_name.into(),
            currency_symbol: currency_symbol.into(),
            base_url,
            phone: phone.into(),
        }
    }

    /// Build a composer from storefront configuration.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(
            config.shop_name.clone(),
            config.currency_symbol.clone(),
            config.order_base_url.clone(),
            config.order_phone.clone(),
        )
    }

    /// Itemized order text for `cart`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] if the cart has no lines.
    pub fn compose(&self, cart: &Cart) -> Result<OrderMessage, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let symbol = self.currency_symbol.as_str();
        let mut text = format!(
            "Hello {},\n\nI would like to order the following items:\n\n",
            self.shop_name
        );
        for item in cart {
            text.push_str(&format!(
                "• {} - {} x {} = {}\n",
                item.name,
                item.unit_price.display_with(symbol),
                item.quantity,
                item.subtotal().display_with(symbol),
            ));
        }
        text.push_str(&format!(
            "\n*Total Amount: {}*\n\n",
            cart.total_amount().display_with(symbol)
        ));
        text.push_str("Please confirm my order and provide payment details.\n\n");
        text.push_str("Thank you!");

        Ok(OrderMessage(text))
    }

    /// Link that opens the chat with `message` pre-filled.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidBaseUrl`] if the base URL cannot take a
    /// path segment.
    pub fn link(&self, message: &OrderMessage) -> Result<OrderLink, OrderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| OrderError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(&self.phone);
        url.set_query(Some(&format!(
            "text={}",
            urlencoding::encode(message.as_str())
        )));
        Ok(OrderLink(url))
    }

    /// Compose the message and wrap it in a link.
    ///
    /// # Errors
    ///
    /// See [`OrderComposer::compose`] and [`OrderComposer::link`].
    pub fn order_link(&self, cart: &Cart) -> Result<OrderLink, OrderError> {
        let message = self.compose(cart)?;
        self.link(&message)
    }
}
