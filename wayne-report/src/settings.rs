//! Chart and confirmation settings.
//!
//! `Default` reproduces the report page as the server templates expect it.
//! Every field can be overridden from JSON; omitted fields keep their default.

use serde::{Deserialize, Serialize};

/// DOM id of the report chart canvas.
pub const DEFAULT_CONTAINER_ID: &str = "dataChart";

/// Selector used by the opt-in confirmation binding.
pub const DEFAULT_CONFIRM_SELECTOR: &str = ".delete-button";

/// Attribute holding a per-button confirmation message.
pub const CONFIRM_MESSAGE_ATTRIBUTE: &str = "data-confirm-message";

/// Message shown when a bound button has no `data-confirm-message`.
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Tem certeza?";

/// One bar of the report chart: where its value comes from and how it is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// DOM attribute holding the counter (e.g. `data-total-alertas`)
    pub attribute: String,
    /// X-axis label
    pub label: String,
    /// Bar fill color
    pub background_color: String,
    /// Bar border color
    pub border_color: String,
}

impl CategorySpec {
    fn new(attribute: &str, label: &str, rgb: (u8, u8, u8)) -> Self {
        let (r, g, b) = rgb;
        Self {
            attribute: attribute.to_string(),
            label: label.to_string(),
            background_color: format!("rgba({}, {}, {}, 0.7)", r, g, b),
            border_color: format!("rgba({}, {}, {}, 1)", r, g, b),
        }
    }
}

/// Settings for the report bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub container_id: String,
    pub categories: Vec<CategorySpec>,
    pub dataset_label: String,
    pub border_width: u32,
    pub title: String,
    pub y_axis_title: String,
    pub x_axis_title: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            categories: vec![
                CategorySpec::new("data-total-alertas", "Total Alertas", (52, 152, 219)),
                CategorySpec::new("data-alertas-criticos", "Alertas Críticos", (231, 76, 60)),
                CategorySpec::new("data-total-recursos", "Recursos", (46, 204, 113)),
                CategorySpec::new("data-total-usuarios", "Usuários", (155, 89, 182)),
                CategorySpec::new("data-total-areas", "Áreas", (241, 196, 15)),
            ],
            dataset_label: "Quantidade".to_string(),
            border_width: 1,
            title: "Visão Geral dos Dados do Sistema".to_string(),
            y_axis_title: "Contagem".to_string(),
            x_axis_title: "Categorias".to_string(),
        }
    }
}

impl ChartSettings {
    /// Parse settings from JSON, filling omitted fields from `Default`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let trimmed = json.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let settings = ChartSettings::default();
        let labels: Vec<&str> = settings.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Total Alertas", "Alertas Críticos", "Recursos", "Usuários", "Áreas"]
        );
        assert_eq!(settings.categories[1].background_color, "rgba(231, 76, 60, 0.7)");
        assert_eq!(settings.categories[1].border_color, "rgba(231, 76, 60, 1)");
        assert_eq!(settings.container_id, "dataChart");
    }

    #[test]
    fn test_from_json_overrides_merge_with_defaults() {
        let settings =
            ChartSettings::from_json(r#"{"container_id": "reportChart", "title": "Resumo"}"#)
                .unwrap();
        assert_eq!(settings.container_id, "reportChart");
        assert_eq!(settings.title, "Resumo");
        assert_eq!(settings.categories.len(), 5);
        assert_eq!(settings.y_axis_title, "Contagem");
    }

    #[test]
    fn test_from_json_empty_is_default() {
        assert_eq!(ChartSettings::from_json("  ").unwrap(), ChartSettings::default());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(ChartSettings::from_json("{not json").is_err());
        assert!(ChartSettings::from_json(r#"{"border_width": "thick"}"#).is_err());
    }
}
