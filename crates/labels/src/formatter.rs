use serde::{Deserialize, Serialize};

use stockdesk_core::ValueObject;
use stockdesk_inventory::Unit;

use crate::color::{ColorEntry, color_name_pattern, resolve_color};

/// Name printed on a label, plus the color that shaped it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelName {
    pub processed_name: String,
    pub color_info: Option<ColorEntry>,
}

impl ValueObject for LabelName {}

/// Build the printable name for `item`.
///
/// When a color resolves, every occurrence of its name is removed from the
/// unit's name and its code is appended. Without a color, or with a color that
/// has no name, the name is kept as stored.
pub fn format_label_name(item: Option<&Unit>, colors: &[ColorEntry]) -> LabelName {
    let Some(item) = item else {
        return LabelName::default();
    };

    let name = item.display_name();
    let Some(color) = resolve_color(item, colors) else {
        return LabelName {
            processed_name: name.to_string(),
            color_info: None,
        };
    };

    let stripped = match color.name() {
        Some(color_name) => strip_color_name(name, color_name),
        None => name.to_string(),
    };

    let processed_name = match color.code() {
        Some(code) if stripped.is_empty() => code.to_string(),
        Some(code) => format!("{stripped} {code}"),
        None => stripped,
    };

    LabelName {
        processed_name,
        color_info: Some(color.clone()),
    }
}

/// Remove every case-insensitive occurrence of `color_name` from `name`.
///
/// Each occurrence and the whitespace around it collapse to a single space;
/// the result is trimmed. Matching is plain substring matching, so a color
/// name inside a longer word is removed too. A blank color name removes
/// nothing and leaves `name` as is.
pub fn strip_color_name(name: &str, color_name: &str) -> String {
    match color_name_pattern(color_name) {
        Some(re) => re.replace_all(name, " ").trim().to_string(),
        None => name.to_string(),
    }
}
