//! Report chart rendering over an abstract page host.

use crate::chart_config::ChartConfig;
use crate::dataset::{AttributeSource, ChartDataset};
use crate::settings::ChartSettings;

/// The page the chart is drawn into.
pub trait ChartHost {
    type Container: AttributeSource;

    /// Look up the chart container by DOM id.
    fn find_container(&self, id: &str) -> Option<Self::Container>;

    /// Hand the configuration to the charting library.
    fn construct_chart(
        &self,
        container: &Self::Container,
        config: &ChartConfig,
    ) -> anyhow::Result<()>;
}

/// What happened when the renderer ran.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// No element with the configured id; nothing was constructed.
    ContainerMissing,
    /// A chart was constructed from this dataset.
    Rendered(ChartDataset),
    /// The charting library rejected the configuration.
    Failed(String),
}

/// Read the counters from the chart container and construct the bar chart.
///
/// A missing container is a soft failure: one warning, no chart, no error.
pub fn render_report_chart<H: ChartHost>(host: &H, settings: &ChartSettings) -> RenderOutcome {
    let Some(container) = host.find_container(&settings.container_id) else {
        log::warn!(
            "Chart container '{}' not found; report chart will not be rendered.",
            settings.container_id
        );
        return RenderOutcome::ContainerMissing;
    };

    let dataset = ChartDataset::read(&container, settings);
    if dataset.nan_count() > 0 {
        log::info!(
            "Report chart: {} of {} counters are not numbers",
            dataset.nan_count(),
            dataset.entries.len()
        );
    }

    let config = ChartConfig::bar_chart(&dataset, settings);
    match host.construct_chart(&container, &config) {
        Ok(()) => RenderOutcome::Rendered(dataset),
        Err(e) => {
            log::error!("Report chart construction failed: {:#}", e);
            RenderOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::Counter;
    use crate::test_log;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakePage {
        elements: HashMap<String, HashMap<String, String>>,
        constructed: RefCell<Vec<ChartConfig>>,
        library_error: Option<String>,
    }

    impl FakePage {
        fn with_canvas(id: &str, attrs: &[(&str, &str)]) -> Self {
            let attrs = attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            let mut elements = HashMap::new();
            elements.insert(id.to_string(), attrs);
            Self {
                elements,
                ..Self::default()
            }
        }
    }

    impl ChartHost for FakePage {
        type Container = HashMap<String, String>;

        fn find_container(&self, id: &str) -> Option<Self::Container> {
            self.elements.get(id).cloned()
        }

        fn construct_chart(
            &self,
            _container: &Self::Container,
            config: &ChartConfig,
        ) -> anyhow::Result<()> {
            if let Some(msg) = &self.library_error {
                anyhow::bail!("{}", msg);
            }
            self.constructed.borrow_mut().push(config.clone());
            Ok(())
        }
    }

    const SAMPLE: [(&str, &str); 5] = [
        ("data-total-alertas", "10"),
        ("data-alertas-criticos", "3"),
        ("data-total-recursos", "7"),
        ("data-total-usuarios", "5"),
        ("data-total-areas", "2"),
    ];

    #[test]
    fn test_missing_container_warns_once() {
        test_log::init();
        test_log::clear();
        let page = FakePage::default();

        let outcome = render_report_chart(&page, &ChartSettings::default());

        assert_eq!(outcome, RenderOutcome::ContainerMissing);
        assert!(page.constructed.borrow().is_empty());
        let warnings = test_log::records_at(log::Level::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("dataChart"));
    }

    #[test]
    fn test_container_under_other_id_is_missing() {
        let page = FakePage::with_canvas("otherChart", &SAMPLE);
        let outcome = render_report_chart(&page, &ChartSettings::default());
        assert_eq!(outcome, RenderOutcome::ContainerMissing);
        assert!(page.constructed.borrow().is_empty());
    }

    #[test]
    fn test_present_container_builds_ordered_series() {
        let page = FakePage::with_canvas("dataChart", &SAMPLE);

        let outcome = render_report_chart(&page, &ChartSettings::default());

        let constructed = page.constructed.borrow();
        assert_eq!(constructed.len(), 1);
        let series = &constructed[0].data.datasets[0];
        let values: Vec<Option<i64>> = series.data.iter().map(Counter::value).collect();
        assert_eq!(values, vec![Some(10), Some(3), Some(7), Some(5), Some(2)]);
        assert_eq!(
            constructed[0].data.labels,
            vec!["Total Alertas", "Alertas Críticos", "Recursos", "Usuários", "Áreas"]
        );
        assert!(matches!(outcome, RenderOutcome::Rendered(ref d) if d.nan_count() == 0));
    }

    #[test]
    fn test_malformed_attribute_is_nan_in_series() {
        let mut attrs = SAMPLE;
        attrs[3] = ("data-total-usuarios", "cinco");
        let page = FakePage::with_canvas("dataChart", &attrs);

        render_report_chart(&page, &ChartSettings::default());

        let constructed = page.constructed.borrow();
        let data = &constructed[0].data.datasets[0].data;
        assert_eq!(data[3], Counter::NotANumber);
        assert_eq!(data[0], Counter::Value(10));
        assert_eq!(data[4], Counter::Value(2));
    }

    #[test]
    fn test_custom_container_id() {
        let page = FakePage::with_canvas("reportChart", &SAMPLE);
        let settings = ChartSettings {
            container_id: "reportChart".to_string(),
            ..ChartSettings::default()
        };
        assert!(matches!(
            render_report_chart(&page, &settings),
            RenderOutcome::Rendered(_)
        ));
    }

    #[test]
    fn test_library_error_is_not_propagated() {
        test_log::init();
        test_log::clear();
        let page = FakePage {
            library_error: Some("Chart is not defined".to_string()),
            ..FakePage::with_canvas("dataChart", &SAMPLE)
        };

        let outcome = render_report_chart(&page, &ChartSettings::default());

        assert_eq!(outcome, RenderOutcome::Failed("Chart is not defined".to_string()));
        assert_eq!(test_log::records_at(log::Level::Error).len(), 1);
    }
}
