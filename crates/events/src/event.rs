use chrono::{DateTime, Utc};

/// A stock movement recorded today.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **scan-ordered** (the order supplied by the event source is significant)
/// - **day-scoped** (the caller supplies only today's events)
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "stock.unit.transferred").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time), if the record carries it.
    fn occurred_at(&self) -> Option<DateTime<Utc>>;
}
