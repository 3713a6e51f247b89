#![allow(dead_code)]

use flowly_core::schema::library;
use flowly_core::schema::registry::DatasetRegistry;
use flowly_core::VisualizationItem;

pub fn fixture_path(rel: &str) -> String {
    let crate_root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    crate_root
        .join("tests/fixtures")
        .join(rel)
        .to_string_lossy()
        .into_owned()
}

pub fn load_items(name: &str) -> Vec<VisualizationItem> {
    library::load_items(&fixture_path(&format!("library/{}", name))).expect("load library fixture")
}

pub fn load_registry(name: &str) -> DatasetRegistry {
    DatasetRegistry::load(&fixture_path(&format!("datasets/{}", name))).expect("load dataset fixture")
}

pub fn ids(items: &[VisualizationItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}
