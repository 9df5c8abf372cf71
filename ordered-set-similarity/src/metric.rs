use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::{
    compound_ordered_set_similarity, displacement_similarity, jaccard_similarity,
    kendall_similarity, ordered_set_similarity, positional_overlap_similarity,
};

/// Names one of the similarity functions, so the metric can be chosen at runtime.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumIs,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SimilarityMetric {
    /// Set overlap only.
    Jaccard,
    /// Order agreement of shared pairs only.
    Kendall,
    /// Position shift of shared elements only.
    Displacement,
    /// All three components, each computed on its own.
    Compound,
    /// All three components in one pass. Same value as `Compound`.
    #[default]
    OrderedSet,
    /// Jaccard and displacement, without the Kendall factor.
    PositionalOverlap,
}

impl SimilarityMetric {
    pub fn score<T>(self, x: &[T], y: &[T]) -> f64
    where
        T: Eq + Hash,
    {
        match self {
            SimilarityMetric::Jaccard => jaccard_similarity(x, y),
            SimilarityMetric::Kendall => kendall_similarity(x, y),
            SimilarityMetric::Displacement => displacement_similarity(x, y),
            SimilarityMetric::Compound => compound_ordered_set_similarity(x, y),
            SimilarityMetric::OrderedSet => ordered_set_similarity(x, y),
            SimilarityMetric::PositionalOverlap => positional_overlap_similarity(x, y),
        }
    }

    /// Whether the metric multiplies in the Kendall factor.
    pub fn includes_kendall(self) -> bool {
        matches!(
            self,
            SimilarityMetric::Kendall | SimilarityMetric::Compound | SimilarityMetric::OrderedSet
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_round_trip() {
        for metric in SimilarityMetric::iter() {
            let name = metric.to_string();
            assert_eq!(SimilarityMetric::from_str(&name).unwrap(), metric);
        }
        assert_eq!(SimilarityMetric::OrderedSet.to_string(), "ordered-set");
        assert!(SimilarityMetric::from_str("cosine").is_err());
    }

    #[test]
    fn default_is_one_pass_composite() {
        assert!(SimilarityMetric::default().is_ordered_set());
    }

    #[test]
    fn dispatches_to_the_named_function() {
        let x = [1, 3, 2, 4, 5];
        let y = [1, 2, 3, 4, 5];
        assert_eq!(SimilarityMetric::Jaccard.score(&x, &y), 1.0);
        assert_eq!(SimilarityMetric::Kendall.score(&x, &y), 0.9);
        assert_eq!(SimilarityMetric::Displacement.score(&x, &y), 0.92);
        assert_eq!(SimilarityMetric::PositionalOverlap.score(&x, &y), 0.92);
        assert_eq!(
            SimilarityMetric::Compound.score(&x, &y),
            SimilarityMetric::OrderedSet.score(&x, &y)
        );
    }

    #[test]
    fn all_metrics_agree_on_empty_input() {
        for metric in SimilarityMetric::iter() {
            assert_eq!(metric.score::<u64>(&[], &[]), 1.0, "{metric}");
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&SimilarityMetric::PositionalOverlap).unwrap();
        assert_eq!(json, "\"positional-overlap\"");
    }
}
