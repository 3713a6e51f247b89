use std::time::{SystemTime, UNIX_EPOCH};

use crate::agents::intent::{Intent, IntentClassifier, KeywordClassifier};
use crate::error::CoreError;
use crate::model::chart::ChartType;
use crate::model::visualization::VisualizationResult;
use crate::schema::datasets;
use crate::schema::registry::DatasetRegistry;

/// Shown when no rule matches.
pub const FALLBACK_MESSAGE: &str =
    "抱歉，我暂时无法理解您的查询。请尝试询问关于销售趋势、产品分布、网站流量或转化漏斗的问题。";

/// Canned payload for one intent.
#[derive(Debug, Clone, Copy)]
pub struct AnswerTemplate {
    pub intent: Intent,
    pub title: &'static str,
    pub description: &'static str,
    pub chart_type: ChartType,
    pub dataset: &'static str,
    pub explanation: &'static str,
}

pub const DEFAULT_ANSWERS: &[AnswerTemplate] = &[
    AnswerTemplate {
        intent: Intent::SalesTrendWeekly,
        title: "周度销售趋势",
        description: "过去一周的销售趋势数据",
        chart_type: ChartType::Line,
        dataset: datasets::WEEK_SALES,
        explanation: "分析显示周中期(周三至周五)的销售表现最好，周五达到峰值，而周末销售显著下降。建议关注周末销售策略，并分析周五销售成功的因素。",
    },
    AnswerTemplate {
        intent: Intent::SalesTrendMonthly,
        title: "月度销售趋势",
        description: "过去半年的月度销售数据",
        chart_type: ChartType::Line,
        dataset: datasets::SALES,
        explanation: "数据显示销售额呈现下降后回升的趋势。一月销售表现最佳，随后三个月逐渐下滑，从五月开始有所回升。建议分析一月的成功策略，并研究二至四月销售下滑的原因。",
    },
    AnswerTemplate {
        intent: Intent::ProductDistribution,
        title: "产品销售分布",
        description: "各产品销售占比分析",
        chart_type: ChartType::Pie,
        dataset: datasets::DISTRIBUTION,
        explanation: "产品销售分布显示，产品A的销售占比最高，接近30%，产品B和产品C各占约20%，而产品E的销售比例最低，约为8%。建议重点关注产品A的成功因素，同时考虑优化产品E的销售策略。",
    },
    AnswerTemplate {
        intent: Intent::WebsiteTraffic,
        title: "网站流量分析",
        description: "过去一周的网站访问量统计",
        chart_type: ChartType::Bar,
        dataset: datasets::TRAFFIC,
        explanation: "网站流量数据显示，周三的访问量最高，达到1600访问量，周末流量明显降低，周日仅有600访问量。建议在工作日，特别是周三，安排重要的内容发布或营销活动，以充分利用高流量时段。",
    },
    AnswerTemplate {
        intent: Intent::ConversionFunnel,
        title: "用户转化漏斗",
        description: "用户从访问到购买的转化流程分析",
        chart_type: ChartType::Area,
        dataset: datasets::CONVERSION,
        explanation: "转化漏斗显示，从初始访问到最终付款，转化率约为24%。最大的转化损失发生在浏览到加购环节，建议优化产品展示和加购体验，以提高这一环节的转化率。",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Visualization {
        intent: Intent,
        result: VisualizationResult,
    },
    Unrecognized,
}

impl QueryOutcome {
    pub fn intent(&self) -> Intent {
        match self {
            QueryOutcome::Visualization { intent, .. } => *intent,
            QueryOutcome::Unrecognized => Intent::Unrecognized,
        }
    }

    /// Assistant reply text: the explanation, or the fallback message.
    pub fn message(&self) -> &str {
        match self {
            QueryOutcome::Visualization { result, .. } => &result.explanation,
            QueryOutcome::Unrecognized => FALLBACK_MESSAGE,
        }
    }

    pub fn visualization(&self) -> Option<&VisualizationResult> {
        match self {
            QueryOutcome::Visualization { result, .. } => Some(result),
            QueryOutcome::Unrecognized => None,
        }
    }

    pub fn into_visualization(self) -> Option<VisualizationResult> {
        match self {
            QueryOutcome::Visualization { result, .. } => Some(result),
            QueryOutcome::Unrecognized => None,
        }
    }
}

/// Answer table bound to a dataset registry.
///
/// Construction checks that every template's dataset exists, so `resolve`
/// never has to fail.
#[derive(Debug, Clone)]
pub struct Answers {
    templates: &'static [AnswerTemplate],
    registry: DatasetRegistry,
}

impl Answers {
    pub fn new(registry: DatasetRegistry) -> Result<Self, CoreError> {
        Self::with_templates(DEFAULT_ANSWERS, registry)
    }

    pub fn with_templates(
        templates: &'static [AnswerTemplate],
        registry: DatasetRegistry,
    ) -> Result<Self, CoreError> {
        if let Some(t) = templates.iter().find(|t| !registry.contains(t.dataset)) {
            return Err(CoreError::MissingDataset {
                intent: t.intent,
                dataset: t.dataset.to_string(),
            });
        }
        Ok(Self { templates, registry })
    }

    pub fn builtin() -> Result<Self, CoreError> {
        Self::new(datasets::builtin())
    }

    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }

    pub fn resolve(&self, intent: Intent, id: impl Into<String>) -> Option<VisualizationResult> {
        let t = self.templates.iter().find(|t| t.intent == intent)?;
        let series = self.registry.get(t.dataset)?.clone();

        Some(VisualizationResult {
            id: id.into(),
            title: t.title.to_string(),
            description: t.description.to_string(),
            chart_type: t.chart_type,
            series,
            explanation: t.explanation.to_string(),
        })
    }

    pub fn answer(
        &self,
        classifier: &dyn IntentClassifier,
        query: &str,
        id: impl Into<String>,
    ) -> QueryOutcome {
        let intent = classifier.classify(query);
        match self.resolve(intent, id) {
            Some(result) => QueryOutcome::Visualization { intent, result },
            None => QueryOutcome::Unrecognized,
        }
    }
}

/// Classify with the default rules and resolve against `answers`.
pub fn classify_and_resolve(answers: &Answers, query: &str, id: impl Into<String>) -> QueryOutcome {
    answers.answer(&KeywordClassifier::default(), query, id)
}

/// Millisecond timestamps, bumped when two ids land in the same millisecond.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}
