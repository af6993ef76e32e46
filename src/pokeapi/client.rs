//! GraphQL HTTP client for the Pokemon API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::domain::pokemon::PokemonSummary;
use crate::pokeapi::errors::{ApiError, ApiResult};
use crate::pokeapi::{PokemonListQuery, PokemonReader};

pub const GET_ALL_POKEMON_QUERY: &str = "query GetAllPokemon($take: Int, $offset: Int, $takeFlavorTexts: Int) { getAllPokemon(take: $take, offset: $offset, takeFlavorTexts: $takeFlavorTexts) { key } }";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Standard GraphQL request envelope.
#[derive(Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
struct GetAllPokemonData {
    #[serde(rename = "getAllPokemon")]
    pokemon: Vec<PokemonSummary>,
}

/// GraphQL implementation of [`PokemonReader`].
#[derive(Debug, Clone)]
pub struct GraphqlPokemonClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GraphqlPokemonClient {
    pub fn new(endpoint: impl Into<String>) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }
}

#[async_trait]
impl PokemonReader for GraphqlPokemonClient {
    async fn list_pokemon(&self, query: PokemonListQuery) -> ApiResult<Vec<PokemonSummary>> {
        log::debug!(
            "Requesting pokemon page: take={} offset={}",
            query.take,
            query.offset
        );

        let request = GraphqlRequest {
            query: GET_ALL_POKEMON_QUERY,
            variables: query,
            operation_name: "GetAllPokemon",
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let envelope: GraphqlResponse<GetAllPokemonData> = response.json().await?;

        if let Some(error) = envelope.errors.first() {
            return Err(ApiError::Graphql(error.message.clone()));
        }

        envelope
            .data
            .map(|data| data.pokemon)
            .ok_or_else(|| ApiError::Protocol("response contained no data".to_string()))
    }
}
