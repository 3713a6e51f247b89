pub mod chart;
pub mod visualization;
