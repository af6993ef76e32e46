//! Query layer for the external GraphQL Pokemon API.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::pokemon::PokemonSummary;
use crate::pokeapi::errors::ApiResult;

pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock;

/// Variables of the paginated listing query, rebuilt on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonListQuery {
    pub take: u32,
    pub offset: u32,
    pub take_flavor_texts: u32,
}

impl PokemonListQuery {
    pub fn page(page: u32, per_page: u32) -> Self {
        let page = if page == 0 { 1 } else { page };

        Self {
            take: per_page,
            offset: (page - 1).saturating_mul(per_page),
            take_flavor_texts: 1,
        }
    }
}

#[async_trait]
pub trait PokemonReader: Send + Sync {
    async fn list_pokemon(&self, query: PokemonListQuery) -> ApiResult<Vec<PokemonSummary>>;
}
