use thiserror::Error;

use crate::dists::Variant;

/// Failures raised while building a distribution or collecting samples.
///
/// Evaluating a density or cumulative function outside the domain of a
/// distribution is not an error, those functions return 0 instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistError {
    #[error("randvar: missing parameter `{key}` for the {variant} distribution")]
    MissingParameter { variant: Variant, key: &'static str },
    #[error("randvar: invalid argument: {0}")]
    InvalidArgument(String),
    #[error("randvar: unknown distribution `{0}`")]
    UnknownVariant(String),
}
