use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::chart::ChartType;

/// Chart type dimension: `"all"` or one exact chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChartTypeFilter {
    #[default]
    All,
    Only(ChartType),
}

impl ChartTypeFilter {
    pub fn accepts(&self, chart_type: ChartType) -> bool {
        match self {
            ChartTypeFilter::All => true,
            ChartTypeFilter::Only(t) => *t == chart_type,
        }
    }
}

impl fmt::Display for ChartTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartTypeFilter::All => f.write_str("all"),
            ChartTypeFilter::Only(t) => t.fmt(f),
        }
    }
}

impl FromStr for ChartTypeFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ChartTypeFilter::All),
            other => other.parse().map(ChartTypeFilter::Only),
        }
    }
}

impl From<ChartTypeFilter> for String {
    fn from(f: ChartTypeFilter) -> Self {
        f.to_string()
    }
}

impl TryFrom<String> for ChartTypeFilter {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Active filters of one view. Dimensions combine with AND; the tag and
/// dashboard selections are OR within themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub search_term: String,
    pub selected_tags: IndexSet<String>,
    pub selected_dashboards: IndexSet<String>,
    pub chart_type_filter: ChartTypeFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.selected_tags.insert(tag.into());
        self
    }

    pub fn with_dashboard(mut self, dashboard: impl Into<String>) -> Self {
        self.selected_dashboards.insert(dashboard.into());
        self
    }

    pub fn with_chart_type(mut self, filter: ChartTypeFilter) -> Self {
        self.chart_type_filter = filter;
        self
    }

    /// Selects the tag, or deselects it when already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.selected_tags, tag);
    }

    pub fn toggle_dashboard(&mut self, dashboard: &str) {
        toggle(&mut self.selected_dashboards, dashboard);
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.selected_tags.is_empty()
            && self.selected_dashboards.is_empty()
            && self.chart_type_filter == ChartTypeFilter::All
    }
}

fn toggle(set: &mut IndexSet<String>, value: &str) {
    // shift_remove keeps the remaining selection order
    if !set.shift_remove(value) {
        set.insert(value.to_string());
    }
}
