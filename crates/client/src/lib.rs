//! CardLoyalty Client
//!
//! Async client for the CardLoyalty loyalty-program API.
//!
//! [`CardLoyaltyClient`] talks to the service over HTTP and implements [`LoyaltyApi`], one
//! method per endpoint. [`LoyaltyService`] sits on top and speaks in baskets and orders from the
//! [`cardloyalty`] crate.

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod lookup;
pub mod models;
pub mod service;

pub use api::{LoyaltyApi, MockLoyaltyApi};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use errors::{ApiErrorDetail, ApiErrors, ClientError, NO_UPDATES_ERROR_ID};
pub use http::CardLoyaltyClient;
pub use lookup::ClientLookup;
pub use service::LoyaltyService;
