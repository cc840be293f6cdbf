//! Inventory units and their availability for today's actions.
//!
//! This crate contains the availability rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage, no caching).

pub mod availability;
pub mod unit;

pub use availability::{
    Availability, AvailabilityKey, BlockReason, UnitAvailability, has_active_transfer, resolve,
    resolve_all,
};
pub use unit::{SizeDescriptor, SizeRef, Unit};
