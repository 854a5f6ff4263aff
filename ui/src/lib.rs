//! Presentational components for the admin panel.

mod cards;
pub mod charts;
pub mod format;

pub use cards::{PLACEHOLDER_IMAGE, StatCard, SummaryItem, TopProductPanel, image_source};
pub use charts::{BarChart, ChartCard, Datum, LineChart, PieChart, Slice, ValueFormat};
