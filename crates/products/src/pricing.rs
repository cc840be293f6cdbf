//! Price resolution for a unit of a given size.
//!
//! Resolution runs in two stages: the selling point's dedicated price list is
//! scanned first, and only when nothing matches there is the general catalog
//! scanned with the same rules.
//!
//! Within one source an entry matches by code (the unit's barcode) first, and
//! by full name only when no code matches. Both comparisons trim whitespace and
//! are exact otherwise. Sources are scanned in stored order and the first match
//! wins; entries are never re-sorted or indexed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use stockdesk_core::ValueObject;
use stockdesk_core::wire::non_blank;
use stockdesk_inventory::Unit;

use crate::price_list::{CatalogEntry, PriceList, PriceSource};

/// Price facts for one unit and size.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    pub regular_price: Option<Decimal>,
    pub discount_price: Option<Decimal>,
    pub size_exception_price: Option<Decimal>,
    pub has_discount: bool,
}

impl ValueObject for PriceInfo {}

impl PriceInfo {
    /// Two labels (regular + discounted) only for a discount without a size
    /// exception. A size exception always collapses to one label.
    pub fn label_count(&self) -> usize {
        if self.prints_discount() { 2 } else { 1 }
    }

    pub fn prints_discount(&self) -> bool {
        self.has_discount && self.size_exception_price.is_none()
    }

    /// Price shown on a single label.
    pub fn display_price(&self) -> Option<Decimal> {
        self.size_exception_price.or(self.regular_price)
    }
}

/// Which source produced a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceOrigin {
    PriceList,
    Catalog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPrice {
    pub origin: PriceOrigin,
    #[serde(flatten)]
    pub info: PriceInfo,
}

/// Find the entry for `item`: first code match, else first name match.
pub fn find_entry<'a, E: PriceSource>(item: &Unit, entries: &'a [E]) -> Option<&'a E> {
    let by_code = non_blank(item.barcode.as_deref())
        .and_then(|barcode| entries.iter().find(|e| e.match_code() == Some(barcode)));

    by_code.or_else(|| {
        non_blank(item.full_name.as_deref())
            .and_then(|name| entries.iter().find(|e| e.match_name() == Some(name)))
    })
}

/// Single-stage resolution against one source.
pub fn match_price<E: PriceSource>(
    item: Option<&Unit>,
    size: Option<&str>,
    entries: &[E],
) -> Option<PriceInfo> {
    let entry = find_entry(item?, entries)?;

    let size_exception_price = size
        .filter(|s| !s.is_empty())
        .and_then(|s| entry.exception_for(s))
        .and_then(|exception| exception.value);

    let discount_price = entry.discount();
    let has_discount = discount_price.is_some_and(|d| d > Decimal::ZERO);

    trace!(
        code = ?entry.code(),
        size = ?size,
        exception = ?size_exception_price,
        "price entry matched"
    );

    Some(PriceInfo {
        regular_price: entry.price(),
        discount_price,
        size_exception_price,
        has_discount,
    })
}

/// Two-stage resolution: dedicated price list, then the general catalog.
pub fn resolve_price(
    item: Option<&Unit>,
    size: Option<&str>,
    price_list: Option<&PriceList>,
    catalog: Option<&[CatalogEntry]>,
) -> Option<PriceInfo> {
    resolve_price_with_origin(item, size, price_list, catalog).map(|resolved| resolved.info)
}

/// Like [`resolve_price`], also reporting which source matched.
pub fn resolve_price_with_origin(
    item: Option<&Unit>,
    size: Option<&str>,
    price_list: Option<&PriceList>,
    catalog: Option<&[CatalogEntry]>,
) -> Option<ResolvedPrice> {
    if let Some(info) = price_list.and_then(|list| match_price(item, size, &list.items)) {
        return Some(ResolvedPrice {
            origin: PriceOrigin::PriceList,
            info,
        });
    }

    let resolved = match_price(item, size, catalog.unwrap_or_default()).map(|info| ResolvedPrice {
        origin: PriceOrigin::Catalog,
        info,
    });

    debug!(
        unit_id = ?item.and_then(|u| u.id.as_ref()),
        found = resolved.is_some(),
        "price list missed, used catalog"
    );
    resolved
}
