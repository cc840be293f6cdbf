use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::Serialize;

use stockdesk_core::{DomainResult, UnitId};
use stockdesk_inventory::{UnitAvailability, resolve_all};
use stockdesk_labels::{PrintableLabel, format_amount, render_labels};
use stockdesk_products::{ResolvedPrice, resolve_price_with_origin};

use crate::args::{Command, OutputFormat};
use crate::snapshot::Snapshot;

/// Price facts for one unit, as reported by `stockdesk price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceReport {
    pub unit_id: UnitId,
    pub size: Option<String>,
    pub resolved: Option<ResolvedPrice>,
    pub label_count: usize,
    pub display_price: Option<Decimal>,
}

/// Run `command` against `snapshot` and render its output.
pub fn execute(command: &Command, format: OutputFormat, snapshot: &Snapshot) -> anyhow::Result<String> {
    match command {
        Command::Availability => {
            let verdicts = resolve_all(&snapshot.units, &snapshot.events());
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&verdicts)?),
                OutputFormat::Human => Ok(availability_lines(snapshot, &verdicts)),
            }
        }
        Command::Price { unit } => {
            let report = price_report(snapshot, unit)?;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
                OutputFormat::Human => Ok(price_line(&report)),
            }
        }
        Command::Labels { unit } => {
            let labels = labels_for(snapshot, unit)?;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&labels)?),
                OutputFormat::Human => Ok(label_lines(&labels)),
            }
        }
    }
}

pub fn price_report(snapshot: &Snapshot, unit_id: &UnitId) -> DomainResult<PriceReport> {
    let unit = snapshot.unit(unit_id)?;
    let size = unit.size_label();
    let resolved = resolve_price_with_origin(
        Some(unit),
        size,
        snapshot.price_list.as_ref(),
        Some(snapshot.catalog.as_slice()),
    );

    Ok(PriceReport {
        unit_id: unit_id.clone(),
        size: size.map(str::to_string),
        label_count: resolved.as_ref().map_or(1, |r| r.info.label_count()),
        display_price: resolved
            .as_ref()
            .map_or(unit.price, |r| r.info.display_price()),
        resolved,
    })
}

pub fn labels_for(snapshot: &Snapshot, unit_id: &UnitId) -> DomainResult<Vec<PrintableLabel>> {
    let unit = snapshot.unit(unit_id)?;
    let size = unit.size_label();
    let info = resolve_price_with_origin(
        Some(unit),
        size,
        snapshot.price_list.as_ref(),
        Some(snapshot.catalog.as_slice()),
    )
    .map(|resolved| resolved.info);

    Ok(render_labels(Some(unit), size, info.as_ref(), &snapshot.colors))
}

fn availability_lines(snapshot: &Snapshot, verdicts: &[UnitAvailability]) -> String {
    let mut out = String::new();
    if let Some(at) = snapshot.events().last_occurred_at() {
        let _ = writeln!(out, "# events up to {}", at.to_rfc3339());
    }
    for verdict in verdicts {
        let id = verdict.unit_id.as_ref().map_or("-", UnitId::as_str);
        let barcode = verdict.barcode.as_deref().unwrap_or("-");
        let _ = writeln!(out, "{id}\t{barcode}\t{}", verdict.availability.reason);
    }
    out
}

fn price_line(report: &PriceReport) -> String {
    let origin = report
        .resolved
        .as_ref()
        .map_or("unpriced".to_string(), |r| format!("{:?}", r.origin));
    let price = report.display_price.map_or("-".to_string(), format_amount);
    format!(
        "{}\t{}\t{}\t{} label(s)\t{}",
        report.unit_id,
        report.size.as_deref().unwrap_or("-"),
        price,
        report.label_count,
        origin
    )
}

fn label_lines(labels: &[PrintableLabel]) -> String {
    labels
        .iter()
        .map(|label| {
            format!(
                "{}\t{}\t{}\t{:?}",
                label.name,
                label.size.as_deref().unwrap_or("-"),
                label.price.as_deref().unwrap_or("-"),
                label.kind
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
