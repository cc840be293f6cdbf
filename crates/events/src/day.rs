use chrono::{DateTime, Utc};

use crate::event::Event;
use crate::sale::SaleEvent;
use crate::transfer::TransferEvent;

/// Borrowed view over today's transfers and sales.
///
/// Absent collections are treated as empty. Both slices keep the order the
/// event source delivered them in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayEvents<'a> {
    pub transfers: &'a [TransferEvent],
    pub sales: &'a [SaleEvent],
}

impl<'a> DayEvents<'a> {
    pub fn new(transfers: Option<&'a [TransferEvent]>, sales: Option<&'a [SaleEvent]>) -> Self {
        Self {
            transfers: transfers.unwrap_or_default(),
            sales: sales.unwrap_or_default(),
        }
    }

    pub fn of(transfers: &'a [TransferEvent], sales: &'a [SaleEvent]) -> Self {
        Self { transfers, sales }
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty() && self.sales.is_empty()
    }

    /// Latest business time across all events that carry a timestamp.
    pub fn last_occurred_at(&self) -> Option<DateTime<Utc>> {
        let transfers = self.transfers.iter().filter_map(|t| t.occurred_at());
        let sales = self.sales.iter().filter_map(|s| s.occurred_at());
        transfers.chain(sales).max()
    }
}
