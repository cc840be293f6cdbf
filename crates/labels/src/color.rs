use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use stockdesk_core::wire::{lenient_ref, lenient_text, non_blank};
use stockdesk_core::{ColorId, ValueObject};
use stockdesk_inventory::Unit;

/// Color dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ColorRecord")]
pub struct ColorEntry {
    #[serde(rename = "_id")]
    pub id: Option<ColorId>,
    #[serde(rename = "Kol_Kod")]
    pub code: Option<String>,
    #[serde(rename = "Kol_Opis")]
    pub name: Option<String>,
}

/// Dictionary record as stored, under either the dictionary column names or
/// their plain aliases. The dictionary names win when both are readable.
#[derive(Deserialize)]
struct ColorRecord {
    #[serde(rename = "_id", default, deserialize_with = "lenient_ref")]
    store_id: Option<ColorId>,
    #[serde(default, deserialize_with = "lenient_ref")]
    id: Option<ColorId>,
    #[serde(rename = "Kol_Kod", default, deserialize_with = "lenient_text")]
    kol_kod: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    code: Option<String>,
    #[serde(rename = "Kol_Opis", default, deserialize_with = "lenient_text")]
    kol_opis: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
}

impl From<ColorRecord> for ColorEntry {
    fn from(record: ColorRecord) -> Self {
        Self {
            id: record.store_id.or(record.id),
            code: record.kol_kod.or(record.code),
            name: record.kol_opis.or(record.name),
        }
    }
}

impl ValueObject for ColorEntry {}

impl ColorEntry {
    pub fn new(id: impl Into<ColorId>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            code: Some(code.into()),
            name: Some(name.into()),
        }
    }

    pub fn code(&self) -> Option<&str> {
        non_blank(self.code.as_deref())
    }

    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn name_pattern(&self) -> Option<Regex> {
        self.name().and_then(color_name_pattern)
    }
}

/// Case-insensitive pattern for one occurrence of `color_name` together with
/// the whitespace around it. The name scan and name rewriting both use it.
///
/// `None` for a blank name.
pub fn color_name_pattern(color_name: &str) -> Option<Regex> {
    let needle = color_name.trim();
    if needle.is_empty() {
        return None;
    }

    let pattern = format!(r"\s*{}\s*", regex::escape(needle));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|err| warn!(error = %err, "color pattern rejected"))
        .ok()
}

/// Resolve the color printed for `item`.
///
/// A color reference on the unit wins when it points at an entry with a code.
/// Otherwise the first entry (in dictionary order) whose name occurs anywhere in
/// the unit's name, ignoring case, is used. Colors without a name never match.
pub fn resolve_color<'a>(item: &Unit, colors: &'a [ColorEntry]) -> Option<&'a ColorEntry> {
    let referenced = item
        .color
        .as_ref()
        .and_then(|id| colors.iter().find(|c| c.id.as_ref() == Some(id)))
        .filter(|c| c.code().is_some());

    if referenced.is_some() {
        trace!(color = ?item.color, "color resolved by reference");
        return referenced;
    }

    let haystack = item.display_name();
    let scanned = colors
        .iter()
        .find(|c| c.name_pattern().is_some_and(|re| re.is_match(haystack)));

    trace!(found = scanned.is_some(), "color resolved by name scan");
    scanned
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn palette() -> Vec<ColorEntry> {
        vec![
            ColorEntry::new("c1", "21", "ZŁOTY"),
            ColorEntry::new("c2", "07", "CZARNY"),
            ColorEntry::new("c3", "", "BIAŁY"),
        ]
    }

    #[test]
    fn reads_dictionary_record() {
        let entry: ColorEntry = serde_json::from_value(json!({
            "_id": "c1", "Kol_Kod": 21, "Kol_Opis": "ZŁOTY"
        }))
        .unwrap();
        assert_eq!(entry, ColorEntry::new("c1", "21", "ZŁOTY"));
    }

    #[test]
    fn reads_record_carrying_column_names_and_aliases() {
        let entry: ColorEntry = serde_json::from_value(json!({
            "_id": "c1", "id": "c1",
            "Kol_Kod": "21", "code": "99",
            "Kol_Opis": "ZŁOTY", "name": "Gold"
        }))
        .unwrap();
        assert_eq!(entry, ColorEntry::new("c1", "21", "ZŁOTY"));

        let entry: ColorEntry =
            serde_json::from_value(json!({ "id": "c2", "code": 7, "name": "CZARNY" })).unwrap();
        assert_eq!(entry, ColorEntry::new("c2", "7", "CZARNY"));
    }

    #[test]
    fn name_scan_uses_the_rewriting_pattern() {
        let colors = vec![ColorEntry::new("c1", "21", "ZŁOTY")];
        let pattern = colors[0].name_pattern().unwrap();

        for name in ["Amanda złoty", "Amanda ZŁOTY", "Amanda Złoty mat", "Amanda zloty"] {
            let item = Unit::new("u-1", "1").with_name(name);
            assert_eq!(resolve_color(&item, &colors).is_some(), pattern.is_match(name), "{name}");
        }
    }

    #[test]
    fn reference_wins_over_name() {
        let item = Unit::new("u-1", "1").with_name("Amanda ZŁOTY").with_color("c2");
        let colors = palette();
        assert_eq!(resolve_color(&item, &colors).and_then(|c| c.code()), Some("07"));
    }

    #[test]
    fn reference_without_code_falls_back_to_name_scan() {
        let item = Unit::new("u-1", "1").with_name("Amanda czarny").with_color("c3");
        let colors = palette();
        assert_eq!(resolve_color(&item, &colors).and_then(|c| c.code()), Some("07"));
    }

    #[test]
    fn unknown_reference_falls_back_to_name_scan() {
        let item = Unit::new("u-1", "1").with_name("Amanda złoty").with_color("missing");
        let colors = palette();
        assert_eq!(resolve_color(&item, &colors).and_then(|c| c.code()), Some("21"));
    }

    #[test]
    fn first_listed_color_wins() {
        let colors = vec![
            ColorEntry::new("a", "1", "ZŁOTY"),
            ColorEntry::new("b", "2", "ZŁOTY MAT"),
        ];
        let item = Unit::new("u-1", "1").with_name("Top ZŁOTY MAT");
        assert_eq!(resolve_color(&item, &colors).and_then(|c| c.code()), Some("1"));
    }

    #[test]
    fn empty_names_never_match() {
        let colors = vec![ColorEntry::new("a", "1", ""), ColorEntry::new("b", "2", "  ")];
        let item = Unit::new("u-1", "1").with_name("Amanda");
        assert_eq!(resolve_color(&item, &colors), None);
    }

    #[test]
    fn substring_inside_longer_word_matches() {
        let colors = vec![ColorEntry::new("a", "5", "ZŁOTA")];
        let item = Unit::new("u-1", "1").with_name("Bluzka ZŁOTAWY");
        assert!(resolve_color(&item, &colors).is_some());
    }
}
