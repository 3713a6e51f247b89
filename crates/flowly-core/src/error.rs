use thiserror::Error;

use crate::agents::intent::Intent;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("unknown chart type '{0}'")]
    UnknownChartType(String),

    #[error("answer for intent '{intent:?}' references missing dataset '{dataset}'")]
    MissingDataset { intent: Intent, dataset: String },

    #[error("visualization '{0}' already exists")]
    DuplicateId(String),
}
