//! Per-source category summaries.
//!
//! The hand-off format for downstream comparison across knowledgebases: for
//! one source, the count and proportion of descriptors in each category.
//! Rendering a cross-source chart stays outside this crate.

use crate::classify::Category;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Count and proportion for one category within one source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    /// The category label.
    pub category: Category,
    /// Number of descriptors assigned to it.
    pub count: usize,
    /// `count / total` for the source; 0.0 when the source is empty.
    pub proportion: f64,
}

/// Classification summary for one knowledgebase source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Label of the source the descriptors came from.
    pub source: String,
    /// Total descriptors classified for this source.
    pub total: usize,
    /// Per-category rows, in category order.
    pub categories: Vec<CategoryCount>,
}

impl CategorySummary {
    /// Summarize a `classify_many` grouping for one source.
    pub fn from_groups(
        source: impl Into<String>,
        groups: &BTreeMap<Category, Vec<String>>,
    ) -> Self {
        let total: usize = groups.values().map(|v| v.len()).sum();
        let categories = groups
            .iter()
            .map(|(category, descriptors)| CategoryCount {
                category: *category,
                count: descriptors.len(),
                proportion: if total == 0 {
                    0.0
                } else {
                    descriptors.len() as f64 / total as f64
                },
            })
            .collect();

        CategorySummary {
            source: source.into(),
            total,
            categories,
        }
    }
}

impl fmt::Display for CategorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} descriptors)", self.source, self.total)?;
        for row in &self.categories {
            writeln!(
                f,
                "  {:<10} {:>6}  {:>6.1}%",
                row.category,
                row.count,
                row.proportion * 100.0
            )?;
        }
        Ok(())
    }
}
