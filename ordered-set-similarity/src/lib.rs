//! Similarity between two ordered sets, such as ranked lists or top-N results.
//!
//! The score combines three components, each in [0, 1]:
//! - [`jaccard_similarity`]: how many elements the slices share,
//! - [`kendall_similarity`]: whether shared pairs appear in the same relative order,
//! - [`displacement_similarity`]: how far shared elements moved.
//!
//! [`ordered_set_similarity`] multiplies all three. [`positional_overlap_similarity`] is a
//! cheaper metric that leaves out the Kendall factor.
//!
//! Repeated elements are collapsed, keeping the last position they appear at.

mod composite;
mod displacement;
mod error;
pub mod index;
mod jaccard;
pub mod kendall;
pub mod metric;
pub mod ranking;


pub use composite::{
    compound_ordered_set_similarity, ordered_set_similarity, positional_overlap_similarity,
};
pub use displacement::displacement_similarity;
pub use error::SimilarityError;
pub use jaccard::jaccard_similarity;
pub use kendall::{kendall_similarity, kendall_tau_distance, normalised_kendall_tau_distance};
pub use metric::SimilarityMetric;
pub use ranking::{rank_candidates, RankingSettings, ScoredCandidate};
