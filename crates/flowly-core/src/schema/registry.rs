use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::chart::Series;

/// Named sample series, looked up by the canned answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetRegistry {
    datasets: IndexMap<String, Series>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON object of `name -> [{ "name": .., "value": .. }]`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read dataset registry: {}", path))?;
        let registry: DatasetRegistry = serde_json::from_str(&raw)
            .with_context(|| format!("parse dataset registry: {}", path))?;
        Ok(registry)
    }

    pub fn insert(&mut self, name: impl Into<String>, series: Series) -> Option<Series> {
        self.datasets.insert(name.into(), series)
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.datasets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
