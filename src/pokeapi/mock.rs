//! Mock Pokemon API implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::pokemon::PokemonSummary;
use crate::pokeapi::errors::ApiResult;
use crate::pokeapi::{PokemonListQuery, PokemonReader};

mock! {
    pub PokeApi {}

    #[async_trait]
    impl PokemonReader for PokeApi {
        async fn list_pokemon(&self, query: PokemonListQuery) -> ApiResult<Vec<PokemonSummary>>;
    }
}
