use anyhow::Context;
use indexmap::IndexSet;

use crate::model::chart::ChartType;
use crate::model::visualization::{Dashboard, VisualizationItem};
use crate::schema::datasets;
use crate::schema::registry::DatasetRegistry;

struct Sample<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    chart_type: ChartType,
    dataset: &'a str,
    is_saved: bool,
    tags: &'a [&'a str],
    dashboards: &'a [&'a str],
}

impl Sample<'_> {
    fn build(&self, reg: &DatasetRegistry) -> VisualizationItem {
        VisualizationItem {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            chart_type: self.chart_type,
            series: reg.get(self.dataset).cloned().unwrap_or_default(),
            is_saved: self.is_saved,
            tags: to_set(self.tags),
            dashboards: to_set(self.dashboards),
        }
    }
}

fn to_set(values: &[&str]) -> IndexSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

const VISUALIZATIONS: &[Sample<'static>] = &[
    Sample {
        id: "1",
        title: "月度销售趋势",
        description: "过去6个月的销售数据",
        chart_type: ChartType::Line,
        dataset: datasets::SALES,
        is_saved: true,
        tags: &["销售", "趋势", "月度"],
        dashboards: &["销售概览", "月度报告"],
    },
    Sample {
        id: "2",
        title: "产品销售分布",
        description: "各产品销售占比",
        chart_type: ChartType::Pie,
        dataset: datasets::DISTRIBUTION,
        is_saved: true,
        tags: &["销售", "产品", "分布"],
        dashboards: &["产品分析", "销售概览"],
    },
    Sample {
        id: "3",
        title: "每周网站流量",
        description: "过去一周的网站访问量",
        chart_type: ChartType::Bar,
        dataset: datasets::TRAFFIC,
        is_saved: false,
        tags: &["流量", "网站", "周度"],
        dashboards: &[],
    },
    Sample {
        id: "4",
        title: "销售转化漏斗",
        description: "用户转化流程分析",
        chart_type: ChartType::Area,
        dataset: datasets::CONVERSION,
        is_saved: true,
        tags: &["转化", "漏斗", "用户"],
        dashboards: &["用户分析"],
    },
    Sample {
        id: "5",
        title: "区域客户分布",
        description: "不同地区客户数量",
        chart_type: ChartType::Pie,
        dataset: datasets::CUSTOMERS,
        is_saved: false,
        tags: &["客户", "区域", "分布"],
        dashboards: &[],
    },
    Sample {
        id: "6",
        title: "季度收入走势",
        description: "各季度收入数据",
        chart_type: ChartType::Bar,
        dataset: datasets::REVENUE,
        is_saved: false,
        tags: &["收入", "季度", "趋势"],
        dashboards: &[],
    },
];

const TEMPLATES: &[Sample<'static>] = &[
    Sample {
        id: "t1",
        title: "销售仪表板模板",
        description: "综合销售指标分析模板",
        chart_type: ChartType::Bar,
        dataset: datasets::SALES,
        is_saved: false,
        tags: &["模板", "销售", "仪表板"],
        dashboards: &[],
    },
    Sample {
        id: "t2",
        title: "客户分析模板",
        description: "客户数据分析模板",
        chart_type: ChartType::Pie,
        dataset: datasets::CUSTOMERS,
        is_saved: false,
        tags: &["模板", "客户", "分析"],
        dashboards: &[],
    },
    Sample {
        id: "t3",
        title: "网站流量模板",
        description: "网站流量监控模板",
        chart_type: ChartType::Line,
        dataset: datasets::TRAFFIC,
        is_saved: false,
        tags: &["模板", "流量", "监控"],
        dashboards: &[],
    },
];

/// Sample library shown on first start. Series come from `reg`; a name the
/// registry lacks yields an empty series.
pub fn sample_visualizations(reg: &DatasetRegistry) -> Vec<VisualizationItem> {
    VISUALIZATIONS.iter().map(|s| s.build(reg)).collect()
}

pub fn templates(reg: &DatasetRegistry) -> Vec<VisualizationItem> {
    TEMPLATES.iter().map(|s| s.build(reg)).collect()
}

pub fn dashboards() -> Vec<Dashboard> {
    [
        ("d1", "销售概览", "销售核心指标一览", 5),
        ("d2", "用户分析", "用户行为与转化分析", 3),
        ("d3", "产品分析", "产品性能与分布分析", 4),
        ("d4", "月度报告", "每月数据综合报告", 6),
    ]
    .into_iter()
    .map(|(id, name, description, count)| Dashboard {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        visualizations_count: count,
    })
    .collect()
}

pub fn load_items(path: &str) -> anyhow::Result<Vec<VisualizationItem>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read visualization library: {}", path))?;
    let items = serde_json::from_str(&raw)
        .with_context(|| format!("parse visualization library: {}", path))?;
    Ok(items)
}
