//! CardLoyalty prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    amounts::round_amount,
    basket::{Basket, BasketError},
    items::LineItem,
    order::{Order, OrderAdjustments, OrderCancellation, OrderPayload},
};
