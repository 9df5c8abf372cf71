use std::{cmp::Ordering, hash::Hash};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{metric::SimilarityMetric, SimilarityError};

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingSettings {
    /// The metric every candidate is scored with.
    pub metric: SimilarityMetric,
    /// Candidates scoring below this are left out of the ranking.
    /// Must be within [0, 1].
    pub min_score: f64,
    /// The maximum number of candidates to return.
    /// `None` returns every candidate that passes `min_score`.
    pub limit: Option<usize>,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            metric: SimilarityMetric::default(),
            min_score: 0.0,
            limit: None,
        }
    }
}

impl RankingSettings {
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(SimilarityError::InvalidMinScore(self.min_score));
        }
        if self.limit == Some(0) {
            return Err(SimilarityError::ZeroLimit);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Position of the candidate in the slice passed to [`rank_candidates`].
    pub index: usize,
    pub score: f64,
}

/// Score every candidate against `reference` and return them best first.
///
/// Candidates are scored in parallel. Equal scores keep the order of the input, so the
/// result does not depend on how the work was split between threads.
pub fn rank_candidates<T, C>(
    reference: &[T],
    candidates: &[C],
    settings: &RankingSettings,
) -> Result<Vec<ScoredCandidate>, SimilarityError>
where
    T: Eq + Hash + Sync,
    C: AsRef<[T]> + Sync,
{
    settings.validate()?;

    log::debug!(
        "Ranking {} candidates with {} (min score {})",
        candidates.len(),
        settings.metric,
        settings.min_score
    );

    let mut ranked: Vec<ScoredCandidate> = candidates
        .par_iter()
        .enumerate()
        .map(|(index, candidate)| ScoredCandidate {
            index,
            score: settings.metric.score(reference, candidate.as_ref()),
        })
        .filter(|candidate| candidate.score >= settings.min_score)
        .collect();

    ranked.par_sort_unstable_by(compare_best_first);

    if let Some(limit) = settings.limit {
        ranked.truncate(limit);
    }

    log::debug!("{} candidates ranked", ranked.len());
    Ok(ranked)
}

fn compare_best_first(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Vec<u32>> {
        vec![
            vec![5, 4, 3, 2, 1],
            vec![1, 2, 3, 4, 5],
            vec![],
            vec![1, 3, 2, 4, 5],
            vec![1, 2, 3, 4, 5],
            vec![9, 8],
        ]
    }

    #[test]
    fn ranks_best_first() {
        let reference = vec![1, 2, 3, 4, 5];
        let ranked = rank_candidates(
            &reference,
            &candidates(),
            &RankingSettings {
                metric: SimilarityMetric::PositionalOverlap,
                ..Default::default()
            },
        )
        .unwrap();

        let order: Vec<usize> = ranked.iter().map(|c| c.index).collect();
        // Equal scores keep their input order.
        assert_eq!(order, vec![1, 4, 3, 0, 2, 5]);
        assert_eq!(ranked[0].score, 1.0);
        assert_eq!(ranked[2].score, 0.92);
        assert_eq!(ranked[3].score, 0.52);
    }

    #[test]
    fn min_score_and_limit() {
        let reference = vec![1, 2, 3, 4, 5];
        let settings = RankingSettings {
            metric: SimilarityMetric::OrderedSet,
            min_score: 0.5,
            limit: Some(2),
        };
        let ranked = rank_candidates(&reference, &candidates(), &settings).unwrap();
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| c.score == 1.0));

        let settings = RankingSettings {
            limit: None,
            ..settings
        };
        let ranked = rank_candidates(&reference, &candidates(), &settings).unwrap();
        // Identical twice, plus the single swap at 0.828.
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[2].index, 3);
    }

    #[test]
    fn empty_candidates() {
        let reference = vec![1, 2, 3];
        let none: Vec<Vec<u32>> = vec![];
        let ranked = rank_candidates(&reference, &none, &RankingSettings::default()).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn rejects_invalid_settings() {
        let reference = vec![1, 2, 3];
        for min_score in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let settings = RankingSettings {
                min_score,
                ..Default::default()
            };
            assert!(matches!(
                rank_candidates(&reference, &candidates(), &settings),
                Err(SimilarityError::InvalidMinScore(_))
            ));
        }

        let settings = RankingSettings {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SimilarityError::ZeroLimit));
    }

    #[test]
    fn accepts_slices_as_candidates() {
        let reference = ["a", "b", "c"];
        let first: &[&str] = &["c", "b", "a"];
        let second: &[&str] = &["a", "b", "c"];
        let ranked =
            rank_candidates(&reference, &[first, second], &RankingSettings::default()).unwrap();
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[1].score, 0.0);
    }
}
