use indexmap::IndexSet;
use serde::Serialize;

use crate::error::CoreError;
use crate::filter::compose::apply_filters;
use crate::filter::state::FilterState;
use crate::model::visualization::VisualizationItem;

/// Ordered collection of visualizations with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Library {
    items: Vec<VisualizationItem>,
}

impl Library {
    /// Keeps the first occurrence of a repeated id.
    pub fn new(items: Vec<VisualizationItem>) -> Self {
        let mut seen = IndexSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[VisualizationItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&VisualizationItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item`; its id must not be taken.
    pub fn add(&mut self, item: VisualizationItem) -> Result<(), CoreError> {
        if self.get(&item.id).is_some() {
            return Err(CoreError::DuplicateId(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Flips `is_saved` on the matching item and returns the new value.
    pub fn toggle_saved(&mut self, id: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.is_saved = !item.is_saved;
        Some(item.is_saved)
    }

    /// Removes the matching item. An unknown id leaves the library unchanged.
    pub fn remove(&mut self, id: &str) -> Option<VisualizationItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn favorites(&self) -> Vec<VisualizationItem> {
        self.items.iter().filter(|item| item.is_saved).cloned().collect()
    }

    /// First `limit` items in collection order. No timestamps are tracked, so
    /// this is a placeholder for real recency.
    pub fn recent(&self, limit: usize) -> Vec<VisualizationItem> {
        self.items.iter().take(limit).cloned().collect()
    }

    /// Distinct tags in first-seen order.
    pub fn all_tags(&self) -> Vec<String> {
        let tags: IndexSet<&String> = self.items.iter().flat_map(|item| item.tags.iter()).collect();
        tags.into_iter().cloned().collect()
    }

    pub fn filter(&self, state: &FilterState) -> Vec<VisualizationItem> {
        apply_filters(&self.items, state)
    }
}

impl From<Vec<VisualizationItem>> for Library {
    fn from(items: Vec<VisualizationItem>) -> Self {
        Self::new(items)
    }
}
