//! Basket

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{amounts::round_amount, items::LineItem};

/// Errors related to basket mutation.
///
/// A failed operation never changes the basket.
#[derive(Debug, Error, PartialEq)]
pub enum BasketError {
    /// A line item with this product id is already in the basket.
    #[error("Item {0} is already in the basket")]
    DuplicateItem(String),

    /// No line item with this product id is in the basket.
    #[error("Item {0} not found")]
    ItemNotFound(String),

    /// Quantities must be strictly positive.
    #[error("Invalid quantity {0}")]
    InvalidQuantity(Decimal),

    /// Price is below the allowed minimum for the operation.
    #[error("Invalid price {0}")]
    InvalidPrice(Decimal),
}

/// Line items keyed by product id, kept in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Basket {
    items: Vec<LineItem>,
    index: FxHashMap<String, usize>,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line item. Prices are stored rounded to two places.
    ///
    /// # Errors
    ///
    /// - [`BasketError::DuplicateItem`]: the product id is already present.
    /// - [`BasketError::InvalidQuantity`]: quantity is zero or negative.
    /// - [`BasketError::InvalidPrice`]: either price is negative.
    pub fn add_item(&mut self, mut item: LineItem) -> Result<(), BasketError> {
        if self.contains_item(&item.product_id) {
            return Err(BasketError::DuplicateItem(item.product_id));
        }

        if item.quantity <= Decimal::ZERO {
            return Err(BasketError::InvalidQuantity(item.quantity));
        }

        if let Some(price) = [item.unit_price, item.unit_price_discounted]
            .into_iter()
            .find(|price| *price < Decimal::ZERO)
        {
            return Err(BasketError::InvalidPrice(price));
        }

        item.unit_price = round_amount(item.unit_price);
        item.unit_price_discounted = round_amount(item.unit_price_discounted);

        self.index.insert(item.product_id.clone(), self.items.len());
        self.items.push(item);

        Ok(())
    }

    /// Remove a line item, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::ItemNotFound`] if the product is not in the basket.
    pub fn remove_item(&mut self, product_id: &str) -> Result<LineItem, BasketError> {
        let position = self
            .index
            .remove(product_id)
            .ok_or_else(|| BasketError::ItemNotFound(product_id.to_string()))?;

        let removed = self.items.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        Ok(removed)
    }

    /// Check if the basket holds the product.
    pub fn contains_item(&self, product_id: &str) -> bool {
        self.index.contains_key(product_id)
    }

    /// Get a line item by product id.
    pub fn get_item(&self, product_id: &str) -> Option<&LineItem> {
        self.index
            .get(product_id)
            .and_then(|&position| self.items.get(position))
    }

    /// Iterate over the line items in insertion order.
    pub fn list_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Set a new quantity for a line item.
    ///
    /// # Errors
    ///
    /// - [`BasketError::ItemNotFound`]: the product is not in the basket.
    /// - [`BasketError::InvalidQuantity`]: quantity is zero or negative.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: Decimal,
    ) -> Result<(), BasketError> {
        let item = self.get_item_mut(product_id)?;

        if quantity <= Decimal::ZERO {
            return Err(BasketError::InvalidQuantity(quantity));
        }

        item.quantity = quantity;

        Ok(())
    }

    /// Set a new unit price for a line item.
    ///
    /// Unlike [`Basket::add_item`], a zero price is rejected here and the price is stored as given.
    ///
    /// # Errors
    ///
    /// - [`BasketError::ItemNotFound`]: the product is not in the basket.
    /// - [`BasketError::InvalidPrice`]: price is zero or negative.
    pub fn update_price(&mut self, product_id: &str, price: Decimal) -> Result<(), BasketError> {
        let item = self.get_item_mut(product_id)?;

        item.unit_price = positive_price(price)?;

        Ok(())
    }

    /// Set a new discounted unit price for a line item.
    ///
    /// # Errors
    ///
    /// - [`BasketError::ItemNotFound`]: the product is not in the basket.
    /// - [`BasketError::InvalidPrice`]: price is zero or negative.
    pub fn update_discounted_price(
        &mut self,
        product_id: &str,
        price: Decimal,
    ) -> Result<(), BasketError> {
        let item = self.get_item_mut(product_id)?;

        item.unit_price_discounted = positive_price(price)?;

        Ok(())
    }

    /// Sum of every line's full price, each line rounded before summing.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::total).sum()
    }

    /// Sum of every line's discounted price, each line rounded before summing.
    pub fn total_discounted(&self) -> Decimal {
        self.items.iter().map(LineItem::total_discounted).sum()
    }

    /// Get the number of line items in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn get_item_mut(&mut self, product_id: &str) -> Result<&mut LineItem, BasketError> {
        self.index
            .get(product_id)
            .and_then(|&position| self.items.get_mut(position))
            .ok_or_else(|| BasketError::ItemNotFound(product_id.to_string()))
    }
}

fn positive_price(price: Decimal) -> Result<Decimal, BasketError> {
    if price > Decimal::ZERO {
        Ok(price)
    } else {
        Err(BasketError::InvalidPrice(price))
    }
}
