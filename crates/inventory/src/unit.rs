use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use stockdesk_core::wire::{lenient_amount, lenient_ref, lenient_text, ref_id_from_value, text_from_value};
use stockdesk_core::{ColorId, Entity, UnitId, ValueObject};

/// Keys a structured size record may carry its display text under.
const SIZE_LABEL_KEYS: [&str; 3] = ["Roz_Opis", "name", "label"];

/// Structured size record (size dictionary entry populated into the unit).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SizeDescriptor {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "Roz_Opis")]
    pub label: Option<String>,
}

/// A size as stored: either the display text itself or a structured record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SizeRef {
    Label(String),
    Structured(SizeDescriptor),
}

impl ValueObject for SizeRef {}

impl SizeRef {
    pub fn label_of(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    /// Canonical display text, compared verbatim against price exceptions.
    pub fn label(&self) -> Option<&str> {
        match self {
            SizeRef::Label(text) => Some(text.as_str()),
            SizeRef::Structured(descriptor) => descriptor.label.as_deref(),
        }
    }

    /// Normalize any stored shape; unknown shapes yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) | Value::Number(_) => text_from_value(value).map(SizeRef::Label),
            Value::Object(map) => Some(SizeRef::Structured(SizeDescriptor {
                id: map.get("_id").and_then(ref_id_from_value),
                label: SIZE_LABEL_KEYS
                    .iter()
                    .find_map(|key| map.get(*key).and_then(text_from_value)),
            })),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for SizeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        SizeRef::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("size must be a string or a size record"))
    }
}

pub fn lenient_size<'de, D>(deserializer: D) -> Result<Option<SizeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(SizeRef::from_value))
}

/// A single physical inventory unit.
///
/// Units sharing a barcode are interchangeable; `id` tells them apart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "UnitRecord")]
pub struct Unit {
    #[serde(rename = "_id")]
    pub id: Option<UnitId>,
    pub barcode: Option<String>,
    pub full_name: Option<String>,
    pub size: Option<SizeRef>,
    pub price: Option<Decimal>,
    /// Color reference, normalized from an id or a populated color record.
    pub color: Option<ColorId>,
}

/// Unit as stored. Records may carry both `_id` and its `id` virtual; `_id`
/// wins when both are readable.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnitRecord {
    #[serde(rename = "_id", default, deserialize_with = "lenient_ref")]
    store_id: Option<UnitId>,
    #[serde(default, deserialize_with = "lenient_ref")]
    id: Option<UnitId>,
    #[serde(default, deserialize_with = "lenient_text")]
    barcode: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_size")]
    size: Option<SizeRef>,
    #[serde(default, deserialize_with = "lenient_amount")]
    price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_ref")]
    color: Option<ColorId>,
}

impl From<UnitRecord> for Unit {
    fn from(record: UnitRecord) -> Self {
        Self {
            id: record.store_id.or(record.id),
            barcode: record.barcode,
            full_name: record.full_name,
            size: record.size,
            price: record.price,
            color: record.color,
        }
    }
}

impl Unit {
    pub fn new(id: impl Into<UnitId>, barcode: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            barcode: Some(barcode.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_size(mut self, size: SizeRef) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<ColorId>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Barcode as stored; an empty barcode counts as absent.
    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref().filter(|b| !b.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or_default()
    }

    pub fn size_label(&self) -> Option<&str> {
        self.size.as_ref().and_then(SizeRef::label)
    }
}

impl Entity for Unit {
    type Id = UnitId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}
