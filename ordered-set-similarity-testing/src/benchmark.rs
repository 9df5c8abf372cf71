use std::time::Instant;

use anyhow::Context;
use ordered_set_similarity::{rank_candidates, RankingSettings, SimilarityMetric};
use rayon::prelude::*;
use strum::IntoEnumIterator;

use crate::{
    checks::assert_consistent_scores,
    random::{DeterministicRandomProvider, RandomProvider},
    results::{BenchmarkResults, BenchmarkResultsBuilder, RankedList},
};

#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub seed: u64,
    pub comparisons: usize,
    pub max_len: usize,
    /// Values are drawn from `0..max_value`. Zero gives only empty lists.
    pub max_value: u32,
    pub metric: SimilarityMetric,
    /// Number of best and worst candidates to report.
    pub top: usize,
    pub check_consistency: bool,
}

/// Score one random reference list against `comparisons` random candidates.
pub fn run(config: &BenchmarkConfig) -> anyhow::Result<BenchmarkResults> {
    log::info!("Seed: {}", config.seed);
    // We use a separate random provider for the reference and the candidates.
    // Both are seeded with the base random provider, which is seeded with the seed.
    // This keeps the reference the same when only the number of comparisons changes.
    let base_random_provider = DeterministicRandomProvider::new(config.seed);
    let reference_random_provider =
        DeterministicRandomProvider::new(base_random_provider.random_u64());
    let candidate_random_provider =
        DeterministicRandomProvider::new(base_random_provider.random_u64());

    let reference = reference_random_provider.random_list(config.max_len, config.max_value);
    log::info!("Reference ({} items): {:?}", reference.len(), reference);

    let candidates: Vec<Vec<u32>> = (0..config.comparisons)
        .map(|_| candidate_random_provider.random_list(config.max_len, config.max_value))
        .collect();

    let mut results = BenchmarkResultsBuilder::new(config.seed, config.metric, reference.clone());
    results.add_candidates(candidates.len());

    if config.check_consistency {
        log::info!("Checking consistency of {} candidates", candidates.len());
        // If anything is inconsistent, this panics.
        candidates
            .par_iter()
            .for_each(|candidate| assert_consistent_scores(&reference, candidate));
        results.checked_candidates(candidates.len());
    }

    let start = Instant::now();
    let ranked = rank_candidates(
        &reference,
        &candidates,
        &RankingSettings {
            metric: config.metric,
            ..Default::default()
        },
    )
    .context("Ranking candidates failed")?;
    let ranking_time = start.elapsed();
    log::info!(
        "Comparing similarity of {} candidates took {:?}",
        candidates.len(),
        ranking_time
    );

    for metric in SimilarityMetric::iter() {
        let mean_score = mean_score(metric, &reference, &candidates);
        log::debug!("Mean {} score: {:.6}", metric, mean_score);
        results.add_metric_mean(metric, mean_score);
    }

    let to_ranked_list = |index: usize, score: f64| RankedList {
        score,
        list: candidates[index].clone(),
    };
    let top = config.top.min(ranked.len());
    let best: Vec<RankedList> = ranked[..top]
        .iter()
        .map(|c| to_ranked_list(c.index, c.score))
        .collect();
    let worst: Vec<RankedList> = ranked[ranked.len() - top..]
        .iter()
        .map(|c| to_ranked_list(c.index, c.score))
        .collect();

    log_ranked_lists("Best", &best);
    log::info!("...");
    log_ranked_lists("Worst", &worst);

    results.set_extremes(best, worst);
    Ok(results.build(ranking_time.as_millis()))
}

fn mean_score(metric: SimilarityMetric, reference: &[u32], candidates: &[Vec<u32>]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let scores: Vec<f64> = candidates
        .par_iter()
        .map(|candidate| metric.score(reference, candidate))
        .collect();
    // Summed in order, so the mean does not depend on how rayon split the work.
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn log_ranked_lists(label: &str, lists: &[RankedList]) {
    log::info!("{} {} candidates:", label, lists.len());
    for ranked in lists {
        log::info!("{:.6}\t{:?}", ranked.score, ranked.list);
    }
}
