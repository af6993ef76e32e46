use crate::dto::list::ListPageData;
use crate::pagination::{DEFAULT_PAGE_SIZE, PageNav};
use crate::pokeapi::{PokemonListQuery, PokemonReader};
use crate::services::ServiceResult;

/// Loads one page of the Pokemon listing.
pub async fn load_list_page<R>(api: &R, page: u32) -> ServiceResult<ListPageData>
where
    R: PokemonReader + ?Sized,
{
    let page = if page == 0 { 1 } else { page };

    let pokemon = api
        .list_pokemon(PokemonListQuery::page(page, DEFAULT_PAGE_SIZE))
        .await?;

    Ok(ListPageData {
        pokemon,
        nav: PageNav::new(page),
    })
}

#[cfg(test)]
mod tests {
    use mockall::predicate;

    use super::*;
    use crate::domain::pokemon::PokemonSummary;
    use crate::pokeapi::errors::ApiError;
    use crate::pokeapi::mock::MockPokeApi;
    use crate::services::ServiceError;

    #[tokio::test]
    async fn requests_offset_for_page() {
        let mut api = MockPokeApi::new();
        api.expect_list_pokemon()
            .with(predicate::eq(PokemonListQuery::page(3, DEFAULT_PAGE_SIZE)))
            .times(1)
            .returning(|_| {
                Ok(vec![PokemonSummary {
                    key: "bulbasaur".to_string(),
                }])
            });

        let data = load_list_page(&api, 3).await.unwrap();

        assert_eq!(data.nav.page, 3);
        assert_eq!(data.nav.prev_url, "/2");
        assert_eq!(data.nav.next_url, "/4");
        assert_eq!(data.pokemon.len(), 1);
    }

    #[tokio::test]
    async fn absent_page_defaults_to_first() {
        let mut api = MockPokeApi::new();
        api.expect_list_pokemon()
            .with(predicate::function(|q: &PokemonListQuery| q.offset == 0))
            .times(1)
            .returning(|_| Ok(vec![]));

        let data = load_list_page(&api, 1).await.unwrap();

        assert_eq!(data.nav.prev_url, "/");
        assert_eq!(data.nav.next_url, "/2");
    }

    #[tokio::test]
    async fn propagates_api_errors() {
        let mut api = MockPokeApi::new();
        api.expect_list_pokemon()
            .returning(|_| Err(ApiError::Graphql("boom".to_string())));

        let result = load_list_page(&api, 1).await;

        assert!(matches!(result, Err(ServiceError::Api(_))));
    }
}
