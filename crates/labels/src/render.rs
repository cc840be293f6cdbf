use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_inventory::Unit;
use stockdesk_products::{LabelKind, LabelPlan, PriceInfo};

use crate::color::ColorEntry;
use crate::formatter::format_label_name;

/// One label ready for the printer template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintableLabel {
    pub name: String,
    pub size: Option<String>,
    pub price: Option<String>,
    pub kind: LabelKind,
}

/// Amount with two decimal places, e.g. `149.90`.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Render the labels to print for `item` in `size`.
///
/// With resolved price facts the label plan decides between one and two
/// labels. Without them a single label carries the unit's own catalog price,
/// if it has one.
pub fn render_labels(
    item: Option<&Unit>,
    size: Option<&str>,
    price: Option<&PriceInfo>,
    colors: &[ColorEntry],
) -> Vec<PrintableLabel> {
    let name = format_label_name(item, colors).processed_name;
    let size = size.filter(|s| !s.is_empty()).map(str::to_string);

    let plan = match price {
        Some(info) => LabelPlan::from_price(info),
        None => LabelPlan::single(item.and_then(|u| u.price)),
    };

    plan.labels
        .into_iter()
        .map(|label| PrintableLabel {
            name: name.clone(),
            size: size.clone(),
            price: label.amount.map(format_amount),
            kind: label.kind,
        })
        .collect()
}
