//! Availability rules: which units can no longer be acted on today.
//!
//! Two kinds of events block a unit:
//!
//! - **transfer**: unit-exact. A transfer naming the unit's id blocks it, and
//!   nothing else is evaluated for that unit.
//! - **sale**: barcode-level. A sale carries no unit identity, so it is assigned
//!   to the *first available* unit of the barcode group, scanning the pool in
//!   the order the caller supplied and skipping transferred units.
//!
//! The rules are a pure function of their inputs. Nothing is cached: callers
//! rendering large lists may memoize on [`AvailabilityKey`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use stockdesk_core::{Entity, UnitId, ValueObject};
use stockdesk_events::{DayEvents, Event, TransferEvent};

use crate::unit::Unit;

/// Why a unit is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockReason {
    Transfer,
    Sale,
    #[serde(rename = "none")]
    NotBlocked,
}

impl BlockReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockReason::Transfer => "transfer",
            BlockReason::Sale => "sale",
            BlockReason::NotBlocked => "none",
        }
    }
}

impl core::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability verdict for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub is_blocked: bool,
    pub reason: BlockReason,
}

impl ValueObject for Availability {}

impl Availability {
    pub const AVAILABLE: Availability = Availability {
        is_blocked: false,
        reason: BlockReason::NotBlocked,
    };

    pub fn blocked(reason: BlockReason) -> Self {
        Self {
            is_blocked: reason != BlockReason::NotBlocked,
            reason,
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::AVAILABLE
    }
}

/// Verdict for one unit of a batch, in pool order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitAvailability {
    pub unit_id: Option<UnitId>,
    pub barcode: Option<String>,
    #[serde(flatten)]
    pub availability: Availability,
}

/// Composite memoization key for callers that cache verdicts.
///
/// Events are append-only within a day, so the event counts change whenever a
/// verdict could change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AvailabilityKey {
    pub unit_id: Option<UnitId>,
    pub transfers: usize,
    pub sales: usize,
}

impl AvailabilityKey {
    pub fn new(unit: &Unit, events: &DayEvents<'_>) -> Self {
        Self {
            unit_id: unit.id.clone(),
            transfers: events.transfers.len(),
            sales: events.sales.len(),
        }
    }
}

/// Resolve whether `unit` is blocked for today's actions.
///
/// `pool` is the full candidate list of units sharing the unit's context, in
/// display order. The unit need not be part of the pool: the transfer check
/// uses its own record, and the sale scan simply never selects it.
pub fn resolve(unit: Option<&Unit>, events: &DayEvents<'_>, pool: &[Unit]) -> Availability {
    let Some(unit) = unit else {
        return Availability::AVAILABLE;
    };

    if let Some(transfer) = transfer_of(unit, events.transfers) {
        trace!(
            unit_id = ?unit.id,
            event_type = transfer.event_type(),
            "unit blocked by transfer"
        );
        return Availability::blocked(BlockReason::Transfer);
    }

    if is_sale_assigned(unit, events, pool) {
        trace!(unit_id = ?unit.id, barcode = ?unit.barcode, "unit blocked by sale");
        return Availability::blocked(BlockReason::Sale);
    }

    Availability::AVAILABLE
}

/// Pre-action guard: may this unit still be transferred, sold or written off?
///
/// Same predicate as [`resolve`]; a unit that is blocked for any reason has an
/// action recorded against it today.
pub fn has_active_transfer(unit: Option<&Unit>, events: &DayEvents<'_>, pool: &[Unit]) -> bool {
    resolve(unit, events, pool).is_blocked
}

/// Resolve every unit of `pool` against the pool itself.
pub fn resolve_all(pool: &[Unit], events: &DayEvents<'_>) -> Vec<UnitAvailability> {
    let verdicts: Vec<UnitAvailability> = pool
        .iter()
        .map(|unit| UnitAvailability {
            unit_id: unit.id.clone(),
            barcode: unit.barcode.clone(),
            availability: resolve(Some(unit), events, pool),
        })
        .collect();

    tracing::debug!(
        units = pool.len(),
        blocked = verdicts.iter().filter(|v| v.availability.is_blocked).count(),
        "resolved availability"
    );
    verdicts
}

fn transfer_of<'a>(unit: &Unit, transfers: &'a [TransferEvent]) -> Option<&'a TransferEvent> {
    transfers.iter().find(|t| t.concerns(unit.id()))
}

fn is_transferred(unit: &Unit, transfers: &[TransferEvent]) -> bool {
    transfer_of(unit, transfers).is_some()
}

/// True when a sale exists for the unit's barcode and the unit is the first
/// non-transferred unit of that barcode in pool order.
///
/// Only the existence of a sale is checked: any number of sales for one barcode
/// block exactly one unit.
fn is_sale_assigned(unit: &Unit, events: &DayEvents<'_>, pool: &[Unit]) -> bool {
    let Some(barcode) = unit.barcode() else {
        return false;
    };

    if !events.sales.iter().any(|sale| sale.matches_barcode(barcode)) {
        return false;
    }

    pool.iter()
        .find(|candidate| {
            candidate.barcode() == Some(barcode) && !is_transferred(candidate, events.transfers)
        })
        .is_some_and(|first_available| first_available.same_entity(unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_events::SaleEvent;

    fn units(barcode: &str, n: usize) -> Vec<Unit> {
        (0..n).map(|i| Unit::new(format!("u-{i}"), barcode)).collect()
    }

    fn verdict(unit: &Unit, transfers: &[TransferEvent], sales: &[SaleEvent], pool: &[Unit]) -> Availability {
        resolve(Some(unit), &DayEvents::of(transfers, sales), pool)
    }

    #[test]
    fn unit_without_events_is_available() {
        let pool = units("123", 3);
        let result = verdict(&pool[1], &[], &[], &pool);
        assert_eq!(result, Availability::AVAILABLE);
        assert_eq!(result.reason.as_str(), "none");
    }

    #[test]
    fn missing_unit_is_available() {
        let pool = units("123", 2);
        let sales = vec![SaleEvent::for_barcode("123")];
        let events = DayEvents::of(&[], &sales);
        assert_eq!(resolve(None, &events, &pool), Availability::AVAILABLE);
    }

    #[test]
    fn absent_event_collections_are_treated_as_empty() {
        let pool = units("123", 2);
        let events = DayEvents::new(None, None);
        assert_eq!(resolve(Some(&pool[0]), &events, &pool), Availability::AVAILABLE);
    }

    #[test]
    fn transfer_blocks_exact_unit_only() {
        let pool = units("123", 3);
        let transfers = vec![TransferEvent::for_unit("u-1")];

        assert_eq!(
            verdict(&pool[1], &transfers, &[], &pool),
            Availability::blocked(BlockReason::Transfer)
        );
        assert!(!verdict(&pool[0], &transfers, &[], &pool).is_blocked);
        assert!(!verdict(&pool[2], &transfers, &[], &pool).is_blocked);
    }

    #[test]
    fn transfer_takes_priority_over_sale() {
        let pool = units("123", 2);
        let transfers = vec![TransferEvent::for_unit("u-0")];
        let sales = vec![SaleEvent::for_barcode("123")];

        let first = verdict(&pool[0], &transfers, &sales, &pool);
        assert_eq!(first.reason, BlockReason::Transfer);

        // The sale moves on to the next available unit.
        let second = verdict(&pool[1], &transfers, &sales, &pool);
        assert_eq!(second.reason, BlockReason::Sale);
    }

    #[test]
    fn sale_blocks_first_available_unit_only() {
        let pool = units("123", 3);
        let sales = vec![SaleEvent::for_barcode("123")];

        assert_eq!(verdict(&pool[0], &[], &sales, &pool).reason, BlockReason::Sale);
        assert_eq!(verdict(&pool[1], &[], &sales, &pool), Availability::AVAILABLE);
        assert_eq!(verdict(&pool[2], &[], &sales, &pool), Availability::AVAILABLE);
    }

    #[test]
    fn multiple_sales_still_block_one_unit() {
        let pool = units("123", 3);
        let sales = vec![SaleEvent::for_barcode("123"), SaleEvent::for_barcode("123")];
        let events = DayEvents::of(&[], &sales);

        let blocked = resolve_all(&pool, &events)
            .into_iter()
            .filter(|v| v.availability.is_blocked)
            .count();
        assert_eq!(blocked, 1);
    }

    #[test]
    fn sale_follows_pool_order() {
        let mut pool = units("123", 3);
        pool.reverse();
        let sales = vec![SaleEvent::for_barcode("123")];

        assert_eq!(verdict(&pool[0], &[], &sales, &pool).reason, BlockReason::Sale);
        assert_eq!(pool[0].id, Some(UnitId::new("u-2")));
    }

    #[test]
    fn sale_for_other_barcode_does_not_block() {
        let pool = units("123", 2);
        let sales = vec![SaleEvent::for_barcode("999")];
        assert_eq!(verdict(&pool[0], &[], &sales, &pool), Availability::AVAILABLE);
    }

    #[test]
    fn units_of_other_barcodes_are_skipped_in_the_scan() {
        let mut pool = units("999", 1);
        pool.extend(units("123", 1).into_iter().map(|u| Unit {
            id: Some(UnitId::new("v-0")),
            ..u
        }));
        let sales = vec![SaleEvent::for_barcode("123")];

        assert_eq!(verdict(&pool[1], &[], &sales, &pool).reason, BlockReason::Sale);
        assert_eq!(verdict(&pool[0], &[], &sales, &pool), Availability::AVAILABLE);
    }

    #[test]
    fn unit_without_barcode_is_never_sale_blocked() {
        let unit = Unit {
            id: Some(UnitId::new("u-0")),
            ..Unit::default()
        };
        let pool = vec![unit.clone()];
        let sales = vec![SaleEvent::default(), SaleEvent::for_barcode("")];

        assert_eq!(verdict(&unit, &[], &sales, &pool), Availability::AVAILABLE);
    }

    #[test]
    fn sale_events_without_barcode_are_ignored() {
        let pool = units("123", 1);
        let sales = vec![SaleEvent::default()];
        assert_eq!(verdict(&pool[0], &[], &sales, &pool), Availability::AVAILABLE);
    }

    #[test]
    fn unit_outside_pool_is_still_transfer_checked() {
        let pool = units("123", 2);
        let outsider = Unit::new("x-1", "123");
        let transfers = vec![TransferEvent::for_unit("x-1")];
        let sales = vec![SaleEvent::for_barcode("123")];

        assert_eq!(verdict(&outsider, &transfers, &sales, &pool).reason, BlockReason::Transfer);

        let untouched = Unit::new("x-2", "123");
        assert_eq!(verdict(&untouched, &[], &sales, &pool), Availability::AVAILABLE);
    }

    #[test]
    fn all_transferred_units_absorb_no_sale() {
        let pool = units("123", 3);
        let transfers: Vec<TransferEvent> = (0..3).map(|i| TransferEvent::for_unit(format!("u-{i}"))).collect();
        let sales = vec![SaleEvent::for_barcode("123")];
        let events = DayEvents::of(&transfers, &sales);

        let verdicts = resolve_all(&pool, &events);
        assert!(verdicts.iter().all(|v| v.availability.reason == BlockReason::Transfer));
    }

    #[test]
    fn has_active_transfer_matches_resolve() {
        let pool = units("123", 3);
        let transfers = vec![TransferEvent::for_unit("u-0")];
        let sales = vec![SaleEvent::for_barcode("123")];
        let events = DayEvents::of(&transfers, &sales);

        for unit in &pool {
            assert_eq!(
                has_active_transfer(Some(unit), &events, &pool),
                resolve(Some(unit), &events, &pool).is_blocked
            );
        }
        assert!(!has_active_transfer(Some(&pool[2]), &events, &pool));
    }

    #[test]
    fn availability_key_tracks_event_counts() {
        let pool = units("123", 1);
        let sales = vec![SaleEvent::for_barcode("123")];
        let before = AvailabilityKey::new(&pool[0], &DayEvents::new(None, None));
        let after = AvailabilityKey::new(&pool[0], &DayEvents::of(&[], &sales));
        assert_ne!(before, after);
        assert_eq!(after.sales, 1);
    }

    #[test]
    fn verdict_serializes_for_the_ui() {
        let json = serde_json::to_value(Availability::blocked(BlockReason::Sale)).unwrap();
        assert_eq!(json, serde_json::json!({ "isBlocked": true, "reason": "sale" }));

        let json = serde_json::to_value(Availability::AVAILABLE).unwrap();
        assert_eq!(json, serde_json::json!({ "isBlocked": false, "reason": "none" }));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: with the first K units transferred and one sale, exactly
            /// the unit at index K is sale-blocked.
            #[test]
            fn sale_lands_on_first_untransferred_unit(
                (n, k) in (1usize..20).prop_flat_map(|n| (Just(n), 0..n))
            ) {
                let pool = units("123", n);
                let transfers: Vec<TransferEvent> =
                    (0..k).map(|i| TransferEvent::for_unit(format!("u-{i}"))).collect();
                let sales = vec![SaleEvent::for_barcode("123")];
                let events = DayEvents::of(&transfers, &sales);

                let verdicts = resolve_all(&pool, &events);
                for (i, v) in verdicts.iter().enumerate() {
                    let expected = if i < k {
                        BlockReason::Transfer
                    } else if i == k {
                        BlockReason::Sale
                    } else {
                        BlockReason::NotBlocked
                    };
                    prop_assert_eq!(v.availability.reason, expected);
                }
            }

            /// Property: the number of sale-blocked units never exceeds the number
            /// of sales, and is at most one per barcode.
            #[test]
            fn sale_blocking_is_capped(
                n in 1usize..15,
                sales_count in 0usize..5,
                transferred in prop::collection::vec(any::<bool>(), 15)
            ) {
                let pool = units("123", n);
                let transfers: Vec<TransferEvent> = (0..n)
                    .filter(|i| transferred[*i])
                    .map(|i| TransferEvent::for_unit(format!("u-{i}")))
                    .collect();
                let sales: Vec<SaleEvent> = (0..sales_count).map(|_| SaleEvent::for_barcode("123")).collect();
                let events = DayEvents::of(&transfers, &sales);

                let sale_blocked = resolve_all(&pool, &events)
                    .iter()
                    .filter(|v| v.availability.reason == BlockReason::Sale)
                    .count();
                prop_assert!(sale_blocked <= sales_count.min(1));
                if sales_count > 0 && transfers.len() < n {
                    prop_assert_eq!(sale_blocked, 1);
                }
            }

            /// Property: resolving twice yields identical verdicts.
            #[test]
            fn resolve_is_deterministic(n in 1usize..10, sold in any::<bool>()) {
                let pool = units("123", n);
                let sales: Vec<SaleEvent> = if sold { vec![SaleEvent::for_barcode("123")] } else { Vec::new() };
                let events = DayEvents::of(&[], &sales);

                prop_assert_eq!(resolve_all(&pool, &events), resolve_all(&pool, &events));
            }
        }
    }
}
