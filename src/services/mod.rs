pub mod list;

use thiserror::Error;

use crate::pokeapi::errors::ApiError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Pokemon API error: {0}")]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
