//! Cart sidebar rendering.
//!
//! [`HtmlCartView`] turns each cart change into HTML fragments for the count
//! badge, the line-item list and the total, using askama templates. The host
//! page swaps those fragments into place; remove buttons carry the product id
//! in `data-id` and the host routes clicks back to the store.

mod sidebar;
mod toast;

use std::collections::VecDeque;
use std::time::Duration;

use askama::Template;
use renu_core::{Cart, LineItem};

use crate::cart::{CartEvent, CartView};
use crate::config::StorefrontConfig;

pub use sidebar::Sidebar;
pub use toast::Toast;

/// Toasts kept until the host drains them; older ones are dropped first.
pub const MAX_QUEUED_TOASTS: usize = 5;

/// Cart line display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemDisplay {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl CartItemDisplay {
    fn from_line(line: &LineItem, symbol: &str) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            image: line.image.clone(),
            quantity: line.quantity.get(),
            price: line.unit_price.display_with(symbol),
            line_price: line.subtotal().display_with(symbol),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartDisplay {
    pub items: Vec<CartItemDisplay>,
    pub total: String,
    pub item_count: u64,
}

impl CartDisplay {
    /// Display data for `cart`, prices prefixed with `symbol`.
    #[must_use]
    pub fn from_cart(cart: &Cart, symbol: &str) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|line| CartItemDisplay::from_line(line, symbol))
                .collect(),
            total: cart.total_amount().display_with(symbol),
            item_count: cart.total_quantity(),
        }
    }
}

/// Cart items fragment template.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartDisplay,
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
struct CartCountTemplate {
    count: u64,
}

/// Cart total fragment template.
#[derive(Template)]
#[template(path = "partials/cart_total.html")]
struct CartTotalTemplate<'a> {
    total: &'a str,
}

/// Rendered HTML fragments for the cart sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartFragments {
    pub count_badge: String,
    pub items: String,
    pub total: String,
}

/// HTML view of the cart sidebar.
#[derive(Debug, Clone)]
pub struct HtmlCartView {
    currency_symbol: String,
    toast_duration: Duration,
    display: CartDisplay,
    fragments: CartFragments,
    toasts: VecDeque<Toast>,
    sidebar: Sidebar,
}

impl HtmlCartView {
    /// Create a view; nothing is rendered until the first cart change.
    #[must_use]
    pub fn new(currency_symbol: impl Into<String>, toast_duration: Duration) -> Self {
        let currency_symbol = currency_symbol.into();
        Self {
            display: CartDisplay::from_cart(&Cart::new(), &currency_symbol),
            currency_symbol,
            toast_duration,
            fragments: CartFragments::default(),
            toasts: VecDeque::new(),
            sidebar: Sidebar::default(),
        }
    }

    /// Create a view using the configured currency and toast lifetime.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.currency_symbol.clone(), config.toast_duration)
    }

    /// Latest display data.
    #[must_use]
    pub const fn display(&self) -> &CartDisplay {
        &self.display
    }

    /// Latest rendered fragments.
    #[must_use]
    pub const fn fragments(&self) -> &CartFragments {
        &self.fragments
    }

    /// Queue a transient notification.
    ///
    /// At most [`MAX_QUEUED_TOASTS`] are held; the oldest is dropped to make
    /// room.
    pub fn toast(&mut self, message: impl Into<String>) {
        if self.toasts.len() >= MAX_QUEUED_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast::new(message, self.toast_duration));
    }

    /// Toasts waiting to be shown, oldest first.
    ///
    /// The host should drain this after each render and display the result.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain(..).collect()
    }

    /// Sidebar open/closed state.
    #[must_use]
    pub const fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Mutable sidebar state.
    pub const fn sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    fn render_fragments(display: &CartDisplay) -> askama::Result<CartFragments> {
        Ok(CartFragments {
            count_badge: CartCountTemplate {
                count: display.item_count,
            }
            .render()?,
            items: CartItemsTemplate { cart: display }.render()?,
            total: CartTotalTemplate {
                total: &display.total,
            }
            .render()?,
        })
    }
}

impl CartView for HtmlCartView {
    fn render(&mut self, cart: &Cart, event: &CartEvent) {
        let display = CartDisplay::from_cart(cart, &self.currency_symbol);
        match Self::render_fragments(&display) {
            Ok(fragments) => self.fragments = fragments,
            // Keep the previous fragments on screen
            Err(e) => tracing::error!("Failed to render cart: {e}"),
        }
        self.display = display;

        if let CartEvent::Added { item } = event {
            self.toast(format!("{} added to cart!", item.name));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use renu_core::Price;

    use super::*;

    fn view() -> HtmlCartView {
        HtmlCartView::new("Rs.", Duration::from_secs(3))
    }

    fn cart_with(items: &[LineItem]) -> Cart {
        let mut cart = Cart::new();
        for item in items {
            cart.add(item.clone());
        }
        cart
    }

    #[test]
    fn test_empty_cart_placeholder() {
        let mut view = view();
        view.render(&Cart::new(), &CartEvent::Restored);

        let fragments = view.fragments();
        assert!(fragments.items.contains("Your cart is empty"));
        assert!(fragments.count_badge.contains(">0<"));
        assert!(fragments.total.contains("Rs. 0"));
        assert!(view.take_toasts().is_empty());
    }

    #[test]
    fn test_items_rendered_with_remove_affordance() {
        let lamp = LineItem::new("p1", "Lamp", Price::new(1500), "lamp.jpg");
        let cart = cart_with(&[lamp.clone(), lamp]);

        let mut view = view();
        view.render(&cart, &CartEvent::Added { item: cart.items()[0].clone() });

        let fragments = view.fragments();
        assert!(fragments.items.contains("Lamp"));
        assert!(fragments.items.contains("Rs. 1,500 x 2"));
        assert!(fragments.items.contains(r#"data-id="p1""#));
        assert!(fragments.count_badge.contains(">2<"));
        assert!(fragments.total.contains("Rs. 3,000"));
        assert!(!fragments.items.contains("Your cart is empty"));

        assert_eq!(view.display().items[0].line_price, "Rs. 3,000");
    }

    #[test]
    fn test_added_event_queues_toast() {
        let lamp = LineItem::new("p1", "Lamp", Price::new(1500), "lamp.jpg");
        let cart = cart_with(&[lamp.clone()]);

        let mut view = view();
        view.render(&cart, &CartEvent::Added { item: lamp });
        view.render(&Cart::new(), &CartEvent::Cleared);

        let toasts = view.take_toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message(), "Lamp added to cart!");
        assert_eq!(toasts[0].duration(), Duration::from_secs(3));
        assert!(view.take_toasts().is_empty());
    }

    #[test]
    fn test_item_names_are_escaped() {
        let item = LineItem::new("p1", "<script>alert(1)</script>", Price::new(10), "x.jpg");
        let cart = cart_with(&[item]);

        let mut view = view();
        view.render(&cart, &CartEvent::Restored);
        assert!(!view.fragments().items.contains("<script>"));
    }

    #[test]
    fn test_custom_currency_symbol() {
        let item = LineItem::new("p1", "Lamp", Price::new(1500), "lamp.jpg");
        let mut view = HtmlCartView::new("LKR", Duration::from_secs(1));
        view.render(&cart_with(&[item]), &CartEvent::Restored);
        assert!(view.fragments().total.contains("LKR 1,500"));
    }

    #[test]
    fn test_toast_queue_is_bounded() {
        let mut view = view();
        for n in 0..MAX_QUEUED_TOASTS + 3 {
            view.toast(format!("toast {n}"));
        }

        let toasts = view.take_toasts();
        assert_eq!(toasts.len(), MAX_QUEUED_TOASTS);
        assert_eq!(toasts[0].message(), "toast 3");
        assert_eq!(
            toasts[MAX_QUEUED_TOASTS - 1].message(),
            format!("toast {}", MAX_QUEUED_TOASTS + 2)
        );
    }
}
