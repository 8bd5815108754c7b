//! Chart.js configuration model.
//!
//! Field names serialize to the camelCase keys `new Chart(ctx, config)` expects.

use crate::counter::Counter;
use crate::dataset::ChartDataset;
use crate::settings::ChartSettings;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<Counter>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: ValueAxis,
    pub x: CategoryAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    pub begin_at_zero: bool,
    pub precision: u32,
    pub title: TextBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAxis {
    pub title: TextBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: TextBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

/// A `{ display, text }` pair, used for axis titles and the chart title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub display: bool,
    pub text: String,
}

impl TextBlock {
    fn shown(text: &str) -> Self {
        Self {
            display: true,
            text: text.to_string(),
        }
    }
}

impl ChartConfig {
    /// Build the single-series bar chart for the report page.
    pub fn bar_chart(dataset: &ChartDataset, settings: &ChartSettings) -> Self {
        let series = BarDataset {
            label: settings.dataset_label.clone(),
            data: dataset.values(),
            background_color: dataset
                .entries
                .iter()
                .map(|e| e.category.background_color.clone())
                .collect(),
            border_color: dataset
                .entries
                .iter()
                .map(|e| e.category.border_color.clone())
                .collect(),
            border_width: settings.border_width,
        };

        Self {
            chart_type: "bar".to_string(),
            data: ChartData {
                labels: dataset.labels(),
                datasets: vec![series],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: true,
                scales: Scales {
                    y: ValueAxis {
                        begin_at_zero: true,
                        precision: 0,
                        title: TextBlock::shown(&settings.y_axis_title),
                    },
                    x: CategoryAxis {
                        title: TextBlock::shown(&settings.x_axis_title),
                    },
                },
                plugins: Plugins {
                    legend: Legend { display: false },
                    title: TextBlock::shown(&settings.title),
                },
            },
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
