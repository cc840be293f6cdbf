use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::wire::{lenient_text, lenient_timestamp};

use crate::event::Event;

/// Event: a unit with the given barcode was sold today.
///
/// No unit identity survives a sale, only the barcode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleEvent {
    #[serde(default, deserialize_with = "lenient_text")]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub selling_point: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SaleEvent {
    pub fn for_barcode(barcode: impl Into<String>) -> Self {
        Self {
            barcode: Some(barcode.into()),
            ..Self::default()
        }
    }

    /// True when this sale was recorded against `barcode`. Sales without a
    /// barcode match nothing.
    pub fn matches_barcode(&self, barcode: &str) -> bool {
        self.barcode.as_deref() == Some(barcode)
    }
}

impl Event for SaleEvent {
    fn event_type(&self) -> &'static str {
        "stock.barcode.sold"
    }

    fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}
