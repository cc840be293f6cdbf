use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_core::wire::{lenient_amount, lenient_text, non_blank, null_as_empty};
use stockdesk_inventory::SizeRef;
use stockdesk_inventory::unit::lenient_size;

/// Per-size price override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceException {
    #[serde(default, deserialize_with = "lenient_size")]
    pub size: Option<SizeRef>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub value: Option<Decimal>,
}

impl PriceException {
    pub fn new(size: impl Into<String>, value: Decimal) -> Self {
        Self {
            size: Some(SizeRef::label_of(size)),
            value: Some(value),
        }
    }

    /// Exact, case-sensitive comparison of size labels. Empty sizes never match.
    pub fn applies_to(&self, size: &str) -> bool {
        !size.is_empty() && self.size.as_ref().and_then(SizeRef::label) == Some(size)
    }
}

/// Entry of a selling point's dedicated price list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceListEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub discount_price: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price_exceptions: Vec<PriceException>,
}

/// A selling point's price list document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceList {
    #[serde(default, deserialize_with = "lenient_text")]
    pub selling_point: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<PriceListEntry>,
}

/// Entry of the general goods catalog, used when no price list entry matches.
///
/// Same shape as [`PriceListEntry`], but the store names the discount field
/// `discount_price`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: Option<Decimal>,
    #[serde(rename = "discount_price", default, deserialize_with = "lenient_amount")]
    pub discount_price: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price_exceptions: Vec<PriceException>,
}

/// Common read access to price list and catalog entries.
///
/// Matching and exception lookup are written once against this trait so both
/// sources behave identically.
pub trait PriceSource {
    fn code(&self) -> Option<&str>;
    fn full_name(&self) -> Option<&str>;
    fn price(&self) -> Option<Decimal>;
    fn discount(&self) -> Option<Decimal>;
    fn price_exceptions(&self) -> &[PriceException];

    /// Trimmed code; blank codes never match.
    fn match_code(&self) -> Option<&str> {
        non_blank(self.code())
    }

    /// Trimmed full name; blank names never match.
    fn match_name(&self) -> Option<&str> {
        non_blank(self.full_name())
    }

    /// First exception (in stored order) applying to `size`.
    fn exception_for(&self, size: &str) -> Option<&PriceException> {
        self.price_exceptions().iter().find(|e| e.applies_to(size))
    }
}

impl PriceSource for PriceListEntry {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    fn price(&self) -> Option<Decimal> {
        self.price
    }

    fn discount(&self) -> Option<Decimal> {
        self.discount_price
    }

    fn price_exceptions(&self) -> &[PriceException] {
        &self.price_exceptions
    }
}

impl PriceSource for CatalogEntry {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    fn price(&self) -> Option<Decimal> {
        self.price
    }

    fn discount(&self) -> Option<Decimal> {
        self.discount_price
    }

    fn price_exceptions(&self) -> &[PriceException] {
        &self.price_exceptions
    }
}
