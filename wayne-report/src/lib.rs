//! Core types for the Wayne admin pages.
//!
//! - `counter`: report counters parsed from DOM attributes
//! - `dataset` / `chart_config`: the bar chart data and its Chart.js configuration
//! - `render`: the report chart renderer over a `ChartHost`
//! - `confirm`: the confirmation gate over a `ConfirmDialog`
//! - `settings`: defaults and JSON overrides

pub mod chart_config;
pub mod confirm;
pub mod counter;
pub mod dataset;
pub mod render;
pub mod settings;

#[cfg(test)]
mod test_log;

pub use chart_config::ChartConfig;
pub use confirm::{confirm_action, ConfirmDialog};
pub use counter::Counter;
pub use dataset::{AttributeSource, ChartDataset};
pub use render::{render_report_chart, ChartHost, RenderOutcome};
pub use settings::ChartSettings;
