//! Parallel batch classification.
//!
//! Classification of one descriptor is independent of every other, so batches
//! fan out over a rayon pool with no coordination beyond collecting results.
//! Enable with the `parallel` feature.

use rayon::prelude::*;

use crate::classify::{Category, Classification, Classifier};
use std::collections::BTreeMap;

/// Classify a batch of descriptors in parallel.
///
/// Order is preserved: `result[i]` corresponds to `descriptors[i]`.
pub fn classify_parallel<S: AsRef<str> + Sync>(
    classifier: &Classifier,
    descriptors: &[S],
) -> Vec<Classification> {
    descriptors
        .par_iter()
        .map(|d| classifier.classify(d.as_ref()))
        .collect()
}

/// Classify a batch in parallel and group descriptors by category.
///
/// Produces the same grouping as [`Classifier::classify_many`]; the parallel
/// map is followed by a sequential fan-in, so per-category order follows the
/// input order.
pub fn classify_many_parallel<S: AsRef<str> + Sync>(
    classifier: &Classifier,
    descriptors: &[S],
) -> BTreeMap<Category, Vec<String>> {
    let mut groups: BTreeMap<Category, Vec<String>> = BTreeMap::new();
    for result in classify_parallel(classifier, descriptors) {
        groups
            .entry(result.category)
            .or_default()
            .push(result.descriptor);
    }
    groups
}
