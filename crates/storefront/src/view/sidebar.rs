//! Cart sidebar open/closed state.

/// Whether the cart sidebar is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    /// Whether the sidebar is open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip between open and closed. Bound to the cart icon and close button.
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Handle a click anywhere on the page.
    ///
    /// An open sidebar closes when the click lands outside both the sidebar
    /// and the cart icon. Returns whether the sidebar closed.
    pub const fn click_outside(&mut self, in_sidebar: bool, on_cart_icon: bool) -> bool {
        if self.open && !in_sidebar && !on_cart_icon {
            self.open = false;
            return true;
        }
        false
    }
}
