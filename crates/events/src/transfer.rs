use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::UnitId;
use stockdesk_core::wire::{lenient_ref, lenient_text, lenient_timestamp};

use crate::event::Event;

/// Event: a specific unit was moved between locations today.
///
/// Transfers are unit-exact: `product_id` names the physical unit, not the
/// barcode group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransferEvent {
    #[serde(rename = "productId", default, deserialize_with = "lenient_ref")]
    pub product_id: Option<UnitId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub transfer_from: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub transfer_to: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TransferEvent {
    pub fn for_unit(product_id: impl Into<UnitId>) -> Self {
        Self {
            product_id: Some(product_id.into()),
            ..Self::default()
        }
    }

    /// True when this transfer names exactly the given unit.
    pub fn concerns(&self, unit_id: Option<&UnitId>) -> bool {
        match (self.product_id.as_ref(), unit_id) {
            (Some(moved), Some(unit)) => moved == unit,
            _ => false,
        }
    }
}

impl Event for TransferEvent {
    fn event_type(&self) -> &'static str {
        "stock.unit.transferred"
    }

    fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}
