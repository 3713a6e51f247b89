pub mod datasets;
pub mod library;
pub mod registry;
