use ordered_set_similarity::SimilarityMetric;
use serde::Serialize;

/// This struct is used to collect the results of a benchmark run.
/// This should never be returned to the application, but instead be used `build` to create a `BenchmarkResults` struct.
pub(crate) struct BenchmarkResultsBuilder {
    seed: u64,
    metric: SimilarityMetric,
    reference: Vec<u32>,
    /// Number of candidates that were generated.
    total_candidates: usize,
    /// Number of candidates that went through the consistency checks.
    total_checked: usize,
    metric_means: Vec<MetricSummary>,
    best: Vec<RankedList>,
    worst: Vec<RankedList>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: SimilarityMetric,
    pub mean_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedList {
    pub score: f64,
    pub list: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResults {
    pub seed: u64,
    /// The metric the candidates were ranked with.
    pub metric: SimilarityMetric,
    pub reference: Vec<u32>,
    /// Number of candidates that were generated.
    pub total_candidates: usize,
    /// Number of candidates that went through the consistency checks.
    pub total_checked: usize,
    /// Time in milliseconds it took to rank all candidates.
    pub ranking_time_ms: u128,
    /// The mean score of all candidates, for every metric.
    pub metric_means: Vec<MetricSummary>,
    /// The highest scoring candidates, best first.
    pub best: Vec<RankedList>,
    /// The lowest scoring candidates, best first.
    pub worst: Vec<RankedList>,
}

impl BenchmarkResultsBuilder {
    pub fn new(seed: u64, metric: SimilarityMetric, reference: Vec<u32>) -> Self {
        Self {
            seed,
            metric,
            reference,
            total_candidates: 0,
            total_checked: 0,
            metric_means: Vec::new(),
            best: Vec::new(),
            worst: Vec::new(),
        }
    }

    pub fn add_candidates(&mut self, count: usize) {
        self.total_candidates += count;
    }

    pub fn checked_candidates(&mut self, count: usize) {
        self.total_checked += count;
    }

    pub fn add_metric_mean(&mut self, metric: SimilarityMetric, mean_score: f64) {
        self.metric_means.push(MetricSummary { metric, mean_score });
    }

    pub fn set_extremes(&mut self, best: Vec<RankedList>, worst: Vec<RankedList>) {
        self.best = best;
        self.worst = worst;
    }

    /// Build the benchmark results.
    /// The ranking_time_ms parameter is the time it took to rank all candidates.
    pub fn build(self, ranking_time_ms: u128) -> BenchmarkResults {
        BenchmarkResults {
            seed: self.seed,
            metric: self.metric,
            reference: self.reference,
            total_candidates: self.total_candidates,
            total_checked: self.total_checked,
            ranking_time_ms,
            metric_means: self.metric_means,
            best: self.best,
            worst: self.worst,
        }
    }
}
