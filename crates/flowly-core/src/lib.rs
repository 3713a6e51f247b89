//! Query and filter logic behind the Flowly dashboard.
//!
//! [`agents`] turns free text into a canned chart through an ordered keyword
//! table; [`filter`] narrows a visualization library by search term, tags,
//! dashboards and chart type. Nothing here renders or persists.

pub mod agents;
pub mod error;
pub mod filter;
pub mod model;
pub mod schema;

pub use agents::answer::{classify_and_resolve, Answers, QueryOutcome, FALLBACK_MESSAGE};
pub use agents::intent::{classify, Intent, IntentClassifier, KeywordClassifier};
pub use error::CoreError;
pub use filter::collection::Library;
pub use filter::compose::apply_filters;
pub use filter::state::{ChartTypeFilter, FilterState};
pub use model::chart::{ChartType, DataPoint, Series};
pub use model::visualization::{Dashboard, VisualizationItem, VisualizationResult};
