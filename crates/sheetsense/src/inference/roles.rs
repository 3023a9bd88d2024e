//! Column role inference: suggests which columns hold names and phones.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::input::Row;
use crate::mapping::{Mapping, Role};

use super::rules::{RoleRule, RoleRules};

/// Score of one column for one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnScore {
    /// Column index.
    pub column: usize,
    /// Fraction of body cells matching the role's value pattern.
    pub pattern: f64,
    /// 1.0 when the header names the role, else 0.0.
    pub header_boost: f64,
    /// `pattern + weight * header_boost`.
    pub combined: f64,
}

/// Suggests a partial [`Mapping`] for the built-in roles.
pub struct RoleInferencer {
    rules: RoleRules,
}

impl RoleInferencer {
    /// Create a new inferencer with the default rule table.
    pub fn new() -> Self {
        Self {
            rules: RoleRules::default(),
        }
    }

    /// Create with a custom rule table.
    pub fn with_rules(rules: RoleRules) -> Self {
        Self { rules }
    }

    /// Score every column of `header` for one rule over all body rows.
    pub fn score_columns(&self, rule: &RoleRule, header: &[String], body: &[Row]) -> Vec<ColumnScore> {
        header
            .iter()
            .enumerate()
            .map(|(column, name)| {
                let pattern = pattern_score(rule, body, column);
                let header_boost = rule.header_boost(name);
                ColumnScore {
                    column,
                    pattern,
                    header_boost,
                    combined: pattern + self.rules.header_boost_weight * header_boost,
                }
            })
            .collect()
    }

    /// Suggest a mapping. Roles are assigned greedily in rule order; a column
    /// taken by one role is no longer a candidate for the next.
    pub fn infer(&self, header: &[String], body: &[Row]) -> Mapping {
        let candidates: BTreeSet<usize> = (0..header.len()).collect();

        let (mapping, _) = self.rules.rules.iter().fold(
            (Mapping::new(), candidates),
            |(mapping, remaining), rule| self.assign(rule, header, body, mapping, remaining),
        );

        mapping
    }

    /// One reducer step: pick the best remaining column for `rule`.
    fn assign(
        &self,
        rule: &RoleRule,
        header: &[String],
        body: &[Row],
        mut mapping: Mapping,
        remaining: BTreeSet<usize>,
    ) -> (Mapping, BTreeSet<usize>) {
        let scores = self.score_columns(rule, header, body);
        let best = best_candidate(&scores, &remaining);

        match best {
            Some(score) if score.combined >= rule.threshold => {
                tracing::debug!(role = %rule.role, column = score.column, score = score.combined, "assigned role");
                mapping.set(rule.role, Some(score.column));
                let remaining = remaining.into_iter().filter(|&c| c != score.column).collect();
                (mapping, remaining)
            }
            other => {
                tracing::debug!(
                    role = %rule.role,
                    best = ?other.map(|s| s.combined),
                    threshold = rule.threshold,
                    "role left unassigned"
                );
                (mapping, remaining)
            }
        }
    }
}

impl Default for RoleInferencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest combined score among the remaining columns; the lowest index wins ties.
fn best_candidate(scores: &[ColumnScore], remaining: &BTreeSet<usize>) -> Option<ColumnScore> {
    scores
        .iter()
        .filter(|s| remaining.contains(&s.column))
        .fold(None, |best: Option<ColumnScore>, s| match best {
            Some(b) if b.combined >= s.combined => Some(b),
            _ => Some(*s),
        })
}

/// Fraction of body rows whose cell at `column` matches the rule's pattern.
/// Missing cells count as non-matching.
fn pattern_score(rule: &RoleRule, body: &[Row], column: usize) -> f64 {
    if body.is_empty() {
        return 0.0;
    }
    let hits = body
        .iter()
        .filter(|row| row.get(column).is_some_and(|cell| rule.matches_value(cell)))
        .count();
    hits as f64 / body.len() as f64
}
