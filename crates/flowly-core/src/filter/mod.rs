pub mod collection;
pub mod compose;
pub mod state;
