//! Today's stock movements as seen by the resolvers.
//!
//! The event source upstream filters events to the current business day; this
//! crate only models them. Nothing here expires or persists events.

pub mod day;
pub mod event;
pub mod sale;
pub mod transfer;

pub use day::DayEvents;
pub use event::Event;
pub use sale::SaleEvent;
pub use transfer::TransferEvent;
