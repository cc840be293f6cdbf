//! `stockdesk-core` — shared building blocks for the stock desk resolvers.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the boundary error type, identity traits, identifier newtypes and the
//! lenient field readers used when records arrive from the backing store.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;
pub mod wire;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ColorId, UnitId};
pub use value_object::ValueObject;
