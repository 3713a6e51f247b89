use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Area,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [ChartType::Bar, ChartType::Line, ChartType::Area, ChartType::Pie];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownChartType(s.to_string()))
    }
}

/// One category label and its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }
}

// Order is the display/category order.
pub type Series = Vec<DataPoint>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_chart_types() {
        for t in ChartType::ALL {
            assert_eq!(t.as_str().parse::<ChartType>().unwrap(), t);
        }
    }

    #[test]
    fn rejects_arbitrary_strings() {
        let err = "Bar".parse::<ChartType>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownChartType(s) if s == "Bar"));
        assert!("scatter".parse::<ChartType>().is_err());
    }
}
