use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("Malformed response: {0}")]
    Protocol(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
