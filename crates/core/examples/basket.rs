//! Basket to Order Example
//!
//! Builds a basket, edits a line, and prints the order payload that would be sent to the
//! loyalty service.

use anyhow::Result;
use jiff::Zoned;
use rust_decimal_macros::dec;

use cardloyalty::prelude::*;

/// Basket to Order Example
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let mut basket = Basket::new();

    basket.add_item(
        LineItem::new("84", "Potatoes", dec!(5), dec!(30.00), dec!(25.00))
            .with_group("7", "Vegetables"),
    )?;
    basket.add_item(
        LineItem::new("97", "Carrots", dec!(2), dec!(50.00), dec!(40.00))
            .with_group("7", "Vegetables"),
    )?;

    println!("Total: {}", basket.total());
    println!("Total with discounts: {}", basket.total_discounted());

    basket.update_quantity("84", dec!(6))?;
    basket.update_price("84", dec!(35.00))?;
    basket.update_discounted_price("84", dec!(30.00))?;

    let order = Order::new("example-guid", "001", Zoned::now().datetime(), &basket);

    println!("{}", serde_json::to_string_pretty(&order.export())?);

    Ok(())
}
