use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Two distinct releases normalize to the same version, so no strict
    /// ascending order exists
    #[error("Unable to order releases: {first_url} and {second_url} both resolve to version {version}")]
    OrderingInconsistency {
        version: String,
        first_url: String,
        second_url: String,
    },
}
