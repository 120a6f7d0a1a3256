//! BenchmarkGroup - captions for score ranges of grouped indicators.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::indicator::{BenchmarkScores, IndicatorIdent};

/// A named group of indicators whose scores are labeled by range.
///
/// Each threshold is the lowest score its caption applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkGroup {
    name: String,
    indicators: Vec<IndicatorIdent>,
    thresholds: BTreeMap<i32, String>,
}

/// Group name and caption resolved for one indicator score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupResult {
    pub name: String,
    pub caption: Option<String>,
}

impl BenchmarkGroup {
    pub fn new(
        name: impl Into<String>,
        indicators: Vec<IndicatorIdent>,
        thresholds: BTreeMap<i32, String>,
    ) -> Self {
        Self {
            name: name.into(),
            indicators,
            thresholds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, ident: &IndicatorIdent) -> bool {
        self.indicators.contains(ident)
    }

    /// Caption of the highest threshold not above `score`, `None` when the
    /// score is below every threshold.
    pub fn caption_for(&self, score: f64) -> Option<&str> {
        let mut caption = None;
        for (threshold, label) in &self.thresholds {
            if score < f64::from(*threshold) {
                break;
            }
            caption = Some(label.as_str());
        }
        caption
    }

    /// Resolves the group caption of every scored indicator that belongs to
    /// one of `groups`. The first matching group wins.
    pub fn group_scores(
        groups: &[BenchmarkGroup],
        scores: &BenchmarkScores,
    ) -> BTreeMap<IndicatorIdent, GroupResult> {
        scores
            .iter()
            .filter_map(|(ident, score)| {
                let group = groups.iter().find(|group| group.contains(ident))?;
                Some((
                    ident.clone(),
                    GroupResult {
                        name: group.name.clone(),
                        caption: group.caption_for(*score).map(str::to_string),
                    },
                ))
            })
            .collect()
    }
}
