//! Plain-text rendering of command results for the terminal front end.

use pfc_core::Variant;

use crate::commands::{CartResponse, MenuItem, ProductDetails};

/// Menu cards, one block per product, in catalog order.
pub fn render_menu(items: &[MenuItem], currency: &str) -> String {
    if items.is_empty() {
        return "The menu is empty. Try `reload`.".to_string();
    }

    let mut lines = Vec::new();
    for item in items {
        let marker = if item.is_veg { "[veg]" } else { "[non-veg]" };
        lines.push(format!("{} {}  (id: {})", marker, item.title, item.id));
        if !item.description.is_empty() {
            lines.push(format!("    {}", item.description));
        }
        let portions: Vec<String> = Variant::ALL
            .iter()
            .map(|&variant| {
                format!(
                    "@{}{} {}  [- {} +]",
                    currency,
                    item.price(variant),
                    variant,
                    item.quantity(variant)
                )
            })
            .collect();
        lines.push(format!("    {}", portions.join("    ")));
    }
    lines.join("\n")
}

/// The "Know More" popup.
pub fn render_details(details: &ProductDetails) -> String {
    let mut lines = vec![details.title.clone()];
    if !details.image.is_empty() {
        lines.push(format!("  image: {}", details.image));
    }
    if !details.detailed_description.is_empty() {
        lines.push(format!("  {}", details.detailed_description));
    }
    if !details.special_items.is_empty() {
        lines.push(format!("  Add Special Items: {}", details.special_items.join(", ")));
    }
    lines.join("\n")
}

/// The order summary popup; just a notice when the cart is empty.
pub fn render_cart(cart: &CartResponse, currency: &str) -> String {
    if !cart.has_items {
        return "Your cart is empty.".to_string();
    }

    let mut lines = vec!["Your Cart".to_string()];
    lines.extend(cart.lines.iter().map(|line| {
        format!(
            "  {}  x{}  Price: {}{}",
            line.label, line.quantity, currency, line.line_price_display
        )
    }));
    lines.push(format!("Subtotal: {}{}", currency, cart.display.subtotal));
    lines.push(format!("Tax: {}{}", currency, cart.display.tax));
    lines.push(format!("Grand Total: {}{}", currency, cart.display.grand_total));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{change_quantity, get_cart, list_products, load_products};
    use crate::state::SessionState;
    use pfc_core::Product;

    fn session() -> SessionState {
        let session = SessionState::default();
        let mut fries = Product::new("f1", "Masala Fries", 59.5, 99.5);
        fries.is_veg = true;
        fries.description = "Fries with house masala".to_string();
        load_products(
            &session,
            vec![Product::new("w1", "Peri Peri Wings", 50.0, 90.0), fries],
        );
        session
    }

    #[test]
    fn test_render_menu() {
        let session = session();
        change_quantity(&session, "f1", Variant::Full, 2).unwrap();

        let text = render_menu(&list_products(&session), "$");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[non-veg] Peri Peri Wings  (id: w1)");
        assert_eq!(lines[1], "    @$50 Half  [- 0 +]    @$90 Full  [- 0 +]");
        assert_eq!(lines[2], "[veg] Masala Fries  (id: f1)");
        assert_eq!(lines[3], "    Fries with house masala");
        assert_eq!(lines[4], "    @$59.5 Half  [- 0 +]    @$99.5 Full  [- 2 +]");
    }

    #[test]
    fn test_render_cart() {
        let session = session();
        assert_eq!(render_cart(&get_cart(&session), "$"), "Your cart is empty.");

        change_quantity(&session, "w1", Variant::Half, 2).unwrap();
        let text = render_cart(&get_cart(&session), "$");

        assert_eq!(
            text,
            "Your Cart\n  Peri Peri Wings (Half)  x2  Price: $100\nSubtotal: $100\nTax: $5.00\nGrand Total: $105.00"
        );
    }

    #[test]
    fn test_render_details() {
        let details = ProductDetails {
            id: "w1".to_string(),
            title: "Peri Peri Wings".to_string(),
            image: String::new(),
            detailed_description: "Crisp fried wings.".to_string(),
            special_items: vec!["Extra Dip".to_string(), "Cheese".to_string()],
        };

        assert_eq!(
            render_details(&details),
            "Peri Peri Wings\n  Crisp fried wings.\n  Add Special Items: Extra Dip, Cheese"
        );
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let details = ProductDetails {
            id: "f1".to_string(),
            title: "Masala Fries".to_string(),
            image: "https://img/fries.jpg".to_string(),
            detailed_description: String::new(),
            special_items: Vec::new(),
        };
        assert_eq!(
            render_details(&details),
            "Masala Fries\n  image: https://img/fries.jpg"
        );

        let menu = render_menu(&list_products(&session()), "₹");
        assert!(menu.ends_with("[- 0 +]"));
        assert_eq!(menu.lines().count(), 5);
        assert_eq!(render_menu(&[], "₹"), "The menu is empty. Try `reload`.");
    }
}
