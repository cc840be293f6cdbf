//! Printable label text.
//!
//! Builds the name printed on a price label (with the color name replaced by
//! its dictionary code) and combines it with the label plan from
//! `stockdesk-products` into printable records. Rendering to a printer format
//! happens elsewhere.

pub mod color;
pub mod formatter;
pub mod render;

pub use color::{ColorEntry, color_name_pattern, resolve_color};
pub use formatter::{LabelName, format_label_name, strip_color_name};
pub use render::{PrintableLabel, format_amount, render_labels};
