//! How many price labels to print for a unit, and with which amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_core::ValueObject;

use crate::pricing::PriceInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    Regular,
    Discounted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPrice {
    pub kind: LabelKind,
    pub amount: Option<Decimal>,
}

/// Ordered list of labels to print; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPlan {
    pub labels: Vec<LabelPrice>,
}

impl ValueObject for LabelPlan {}

impl LabelPlan {
    /// Regular + discounted labels for a discount without a size exception,
    /// otherwise one label with the size exception or regular price.
    pub fn from_price(info: &PriceInfo) -> Self {
        let labels = if info.prints_discount() {
            vec![
                LabelPrice {
                    kind: LabelKind::Regular,
                    amount: info.regular_price,
                },
                LabelPrice {
                    kind: LabelKind::Discounted,
                    amount: info.discount_price,
                },
            ]
        } else {
            vec![LabelPrice {
                kind: LabelKind::Regular,
                amount: info.display_price(),
            }]
        };
        Self { labels }
    }

    /// One label carrying a raw price (or none) when no price source matched.
    pub fn single(amount: Option<Decimal>) -> Self {
        Self {
            labels: vec![LabelPrice {
                kind: LabelKind::Regular,
                amount,
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
