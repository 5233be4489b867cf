//! CardLoyalty
//!
//! Shopping basket and order payloads for the CardLoyalty loyalty-program service.

pub mod amounts;
pub mod basket;
pub mod items;
pub mod order;
pub mod prelude;
