//! Prices for inventory units.
//!
//! This crate resolves the price to charge and the number of price labels to
//! print for a unit of a given size, from a selling-point price list with a
//! fallback to the general catalog. Pure, deterministic domain logic (no IO).

pub mod label_plan;
pub mod price_list;
pub mod pricing;

pub use label_plan::{LabelKind, LabelPlan, LabelPrice};
pub use price_list::{CatalogEntry, PriceException, PriceList, PriceListEntry, PriceSource};
pub use pricing::{
    PriceInfo, PriceOrigin, ResolvedPrice, find_entry, match_price, resolve_price,
    resolve_price_with_origin,
};
