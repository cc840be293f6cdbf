use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use stockdesk_core::wire::null_as_empty;
use stockdesk_core::{DomainError, DomainResult, Entity, UnitId};
use stockdesk_events::{DayEvents, SaleEvent, TransferEvent};
use stockdesk_inventory::Unit;
use stockdesk_labels::ColorEntry;
use stockdesk_products::{CatalogEntry, PriceList};

/// Everything the resolvers read, as one document. Every key is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub units: Vec<Unit>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transfers: Vec<TransferEvent>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sales: Vec<SaleEvent>,
    #[serde(default)]
    pub price_list: Option<PriceList>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub catalog: Vec<CatalogEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub colors: Vec<ColorEntry>,
}

impl Snapshot {
    pub fn from_json(text: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let snapshot = Self::from_json(&text)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

        tracing::info!(
            units = snapshot.units.len(),
            transfers = snapshot.transfers.len(),
            sales = snapshot.sales.len(),
            price_list = snapshot.price_list.is_some(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn events(&self) -> DayEvents<'_> {
        DayEvents::of(&self.transfers, &self.sales)
    }

    /// First unit carrying `id`, in snapshot order.
    pub fn unit(&self, id: &UnitId) -> DomainResult<&Unit> {
        self.units
            .iter()
            .find(|unit| unit.id() == Some(id))
            .ok_or_else(|| DomainError::not_found(format!("unit {id}")))
    }
}
