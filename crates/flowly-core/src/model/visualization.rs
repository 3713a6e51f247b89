use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::model::chart::{ChartType, Series};

/// Answer to a recognized query. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub chart_type: ChartType,
    pub series: Series,
    pub explanation: String,
}

/// A chart in the user's library, as shown on the browsing and saved-items pages.
///
/// `tags` and `dashboards` are matched by exact, case-sensitive equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub chart_type: ChartType,
    pub series: Series,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default)]
    pub tags: IndexSet<String>,
    #[serde(default)]
    pub dashboards: IndexSet<String>,
}

impl From<VisualizationResult> for VisualizationItem {
    fn from(r: VisualizationResult) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            chart_type: r.chart_type,
            series: r.series,
            is_saved: false,
            tags: IndexSet::new(),
            dashboards: IndexSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub visualizations_count: u32,
}
