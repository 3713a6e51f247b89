use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SalesTrendWeekly,
    SalesTrendMonthly,
    ProductDistribution,
    WebsiteTraffic,
    ConversionFunnel,
    Unrecognized,
}

/// Maps free text to an [`Intent`]. A real NLU service would plug in here.
pub trait IntentClassifier {
    fn classify(&self, query: &str) -> Intent;
}

/// One classification rule: every group must match, and a group matches when
/// the query contains any of its keywords.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub intent: Intent,
    pub groups: &'static [&'static [&'static str]],
}

impl KeywordRule {
    fn matches(&self, query: &str) -> bool {
        self.groups
            .iter()
            .all(|group| group.iter().any(|kw| query.contains(kw)))
    }
}

/// Evaluated top to bottom, first match wins. The weekly sales rule has to stay
/// ahead of the monthly one, and both ahead of traffic.
pub const DEFAULT_RULES: &[KeywordRule] = &[
    KeywordRule {
        intent: Intent::SalesTrendWeekly,
        groups: &[&["销售"], &["趋势"], &["周"]],
    },
    KeywordRule {
        intent: Intent::SalesTrendMonthly,
        groups: &[&["销售"], &["趋势"]],
    },
    KeywordRule {
        intent: Intent::ProductDistribution,
        groups: &[&["产品"], &["分布", "占比"]],
    },
    KeywordRule {
        intent: Intent::WebsiteTraffic,
        groups: &[&["流量", "访问"]],
    },
    KeywordRule {
        intent: Intent::ConversionFunnel,
        groups: &[&["转化", "漏斗"]],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    rules: &'static [KeywordRule],
}

impl KeywordClassifier {
    pub fn new(rules: &'static [KeywordRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [KeywordRule] {
        self.rules
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, query: &str) -> Intent {
        // Keywords are stored lowercase.
        let q = query.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&q))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Unrecognized)
    }
}

/// Classify with the default rule table.
pub fn classify(query: &str) -> Intent {
    KeywordClassifier::default().classify(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATIN_RULES: &[KeywordRule] = &[KeywordRule {
        intent: Intent::WebsiteTraffic,
        groups: &[&["traffic"]],
    }];

    #[test]
    fn empty_query_is_unrecognized() {
        assert_eq!(classify(""), Intent::Unrecognized);
        assert_eq!(classify("   "), Intent::Unrecognized);
    }

    #[test]
    fn matching_is_unanchored() {
        assert_eq!(classify("产品类别分布情况"), Intent::ProductDistribution);
    }

    #[test]
    fn latin_keywords_match_case_insensitively() {
        let c = KeywordClassifier::new(LATIN_RULES);
        assert_eq!(c.classify("Show me TRAFFIC"), Intent::WebsiteTraffic);
        assert_eq!(c.classify("show me visits"), Intent::Unrecognized);
    }

    #[test]
    fn every_default_intent_is_reachable() {
        let c = KeywordClassifier::default();
        assert_eq!(c.rules().len(), 5);
        assert!(c.rules().iter().all(|r| r.intent != Intent::Unrecognized));
    }
}
