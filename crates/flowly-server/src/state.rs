use std::time::Duration;

use flowly_core::agents::conversation::Conversation;
use flowly_core::schema::registry::DatasetRegistry;
use flowly_core::schema::{datasets, library};
use flowly_core::{Answers, Dashboard, IntentClassifier, KeywordClassifier, Library, VisualizationItem};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::session::{InMemorySession, SessionStore};

/// Mutable per-process state. One lock, since every request is a discrete
/// user action.
pub struct Workspace {
    pub library: Library,
    pub conversation: Conversation,
    pub session: Box<dyn SessionStore>,
}

pub struct AppState {
    pub classifier: Box<dyn IntentClassifier + Send + Sync>,
    pub answers: Answers,
    pub templates: Vec<VisualizationItem>,
    pub dashboards: Vec<Dashboard>,
    pub query_latency: Duration,
    pub recent_limit: usize,
    pub workspace: Mutex<Workspace>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let registry = match &config.datasets_path {
            Some(path) => DatasetRegistry::load(path)?,
            None => datasets::builtin(),
        };
        let items = match &config.library_path {
            Some(path) => library::load_items(path)?,
            None => library::sample_visualizations(&registry),
        };
        tracing::info!(
            datasets = registry.len(),
            items = items.len(),
            "loaded dashboard data"
        );

        Ok(Self {
            classifier: Box::new(KeywordClassifier::default()),
            templates: library::templates(&registry),
            dashboards: library::dashboards(),
            answers: Answers::new(registry)?,
            query_latency: config.query_latency,
            recent_limit: config.recent_limit,
            workspace: Mutex::new(Workspace {
                library: Library::new(items),
                conversation: Conversation::new(),
                session: Box::new(InMemorySession::default()),
            }),
        })
    }
}
