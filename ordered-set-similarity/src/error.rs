#[derive(Debug, Clone, PartialEq)]
pub enum SimilarityError {
    InvalidMinScore(f64),
    ZeroLimit,
}

impl std::fmt::Display for SimilarityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimilarityError::InvalidMinScore(score) => {
                write!(f, "Minimum score must be within [0, 1], got {}", score)
            }
            SimilarityError::ZeroLimit => write!(f, "Ranking limit must be at least 1"),
        }
    }
}

impl std::error::Error for SimilarityError {}
