//! Name-based volume classification.

use crate::category::BodyPartCategory;

/// How a classification rule matches a volume name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePattern {
    Exact(String),
    Prefix(String),
}

impl NamePattern {
    pub fn exact(name: impl Into<String>) -> Self {
        Self::Exact(name.into())
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Exact(exact) => name == exact,
            NamePattern::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

/// Ordered list of name rules. The first matching rule decides the category.
#[derive(Debug, Clone)]
pub struct VolumeClassifier {
    rules: Vec<(NamePattern, BodyPartCategory)>,
}

impl Default for VolumeClassifier {
    fn default() -> Self {
        use BodyPartCategory::*;

        let rules = vec![
            (NamePattern::exact("aibu_hit_kokan"), Crotch),
            (NamePattern::exact("aibu_hit_ana"), Crotch),
            (NamePattern::prefix("aibu_hit_siri"), Groin),
            (NamePattern::prefix("aibu_reaction_waist"), Groin),
            (NamePattern::prefix("cf_hit_bust"), Breast),
            (NamePattern::exact("aibu_reaction_legL"), LegLeft),
            (NamePattern::exact("aibu_reaction_legR"), LegRight),
            (NamePattern::prefix("cf_hit_wrist"), Forearm),
            (NamePattern::prefix("cf_hit_arm"), UpperArm),
            (NamePattern::prefix("aibu_reaction_thigh"), Thigh),
            (NamePattern::exact("cf_hit_spine01"), Torso),
            (NamePattern::exact("cf_hit_spine03"), Torso),
            (NamePattern::exact("cf_hit_berry"), Torso),
        ];
        Self { rules }
    }
}

impl VolumeClassifier {
    /// A classifier with no rules at all.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. It is tried after every existing rule.
    pub fn with_rule(mut self, pattern: NamePattern, category: BodyPartCategory) -> Self {
        self.rules.push((pattern, category));
        self
    }

    pub fn classify(&self, name: &str) -> Option<BodyPartCategory> {
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches(name))
            .map(|(_, category)| *category)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
