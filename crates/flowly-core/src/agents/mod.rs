pub mod answer;
pub mod conversation;
pub mod intent;
