use crate::model::chart::{DataPoint, Series};
use crate::schema::registry::DatasetRegistry;

pub const SALES: &str = "sales";
pub const WEEK_SALES: &str = "week_sales";
pub const TRAFFIC: &str = "traffic";
pub const DISTRIBUTION: &str = "distribution";
pub const CONVERSION: &str = "conversion";
pub const CUSTOMERS: &str = "customers";
pub const REVENUE: &str = "revenue";

fn series(points: &[(&str, f64)]) -> Series {
    points.iter().map(|(name, value)| DataPoint::new(*name, *value)).collect()
}

/// The sample series shipped with the dashboard.
pub fn builtin() -> DatasetRegistry {
    let mut reg = DatasetRegistry::new();

    reg.insert(
        SALES,
        series(&[
            ("一月", 4000.0),
            ("二月", 3000.0),
            ("三月", 2000.0),
            ("四月", 2780.0),
            ("五月", 1890.0),
            ("六月", 2390.0),
        ]),
    );
    reg.insert(
        WEEK_SALES,
        series(&[
            ("周一", 2400.0),
            ("周二", 1800.0),
            ("周三", 3200.0),
            ("周四", 2900.0),
            ("周五", 3800.0),
            ("周六", 1200.0),
            ("周日", 800.0),
        ]),
    );
    reg.insert(
        TRAFFIC,
        series(&[
            ("周一", 1200.0),
            ("周二", 1400.0),
            ("周三", 1600.0),
            ("周四", 1200.0),
            ("周五", 1500.0),
            ("周六", 800.0),
            ("周日", 600.0),
        ]),
    );
    reg.insert(
        DISTRIBUTION,
        series(&[
            ("产品A", 400.0),
            ("产品B", 300.0),
            ("产品C", 300.0),
            ("产品D", 200.0),
            ("产品E", 100.0),
        ]),
    );
    reg.insert(
        CONVERSION,
        series(&[("访问", 5000.0), ("浏览", 3500.0), ("加购", 2200.0), ("付款", 1200.0)]),
    );
    reg.insert(
        CUSTOMERS,
        series(&[("华北", 2400.0), ("华东", 4500.0), ("华南", 3000.0), ("西部", 1500.0)]),
    );
    reg.insert(
        REVENUE,
        series(&[("一季度", 12000.0), ("二季度", 19000.0), ("三季度", 15000.0), ("四季度", 21000.0)]),
    );

    reg
}
