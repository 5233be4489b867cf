//! Typed request and response bodies of the loyalty service.

mod de;

pub mod clients;
pub mod envelope;
pub mod messages;
pub mod organisation;
pub mod tags;
pub mod templates;
pub mod transactions;

pub use clients::*;
pub use envelope::*;
pub use messages::*;
pub use organisation::*;
pub use tags::*;
pub use templates::*;
pub use transactions::*;
