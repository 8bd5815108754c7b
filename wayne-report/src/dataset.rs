use crate::counter::Counter;
use crate::settings::{CategorySpec, ChartSettings};
use std::collections::HashMap;

/// Anything that can answer "what is the value of attribute X".
///
/// Implemented over `web_sys::Element` in the browser and over plain maps in tests.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

/// One category of the chart with its parsed counter.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetEntry {
    pub category: CategorySpec,
    pub value: Counter,
}

/// The counters read from the chart container, in category order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub entries: Vec<DatasetEntry>,
}

impl ChartDataset {
    /// Read every configured category attribute from `source`.
    /// Missing or non-numeric attributes become `Counter::NotANumber`.
    pub fn read<S: AttributeSource + ?Sized>(source: &S, settings: &ChartSettings) -> Self {
        let entries = settings
            .categories
            .iter()
            .map(|category| {
                let raw = source.attribute(&category.attribute);
                DatasetEntry {
                    category: category.clone(),
                    value: Counter::from_attribute(raw.as_deref()),
                }
            })
            .collect();
        Self { entries }
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.category.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<Counter> {
        self.entries.iter().map(|e| e.value).collect()
    }

    /// Number of slots that did not parse.
    pub fn nan_count(&self) -> usize {
        self.entries.iter().filter(|e| e.value.is_nan()).count()
    }
}
