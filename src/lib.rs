use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::pokeapi::PokemonReader;
use crate::pokeapi::client::GraphqlPokemonClient;
use crate::routes::list::{show_index, show_page};

pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod pokeapi;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    // One shared GraphQL client; handlers see it through the reader trait.
    let pokeapi = GraphqlPokemonClient::new(&server_config.graphql_url)
        .map_err(|e| std::io::Error::other(format!("Failed to build GraphQL client: {e}")))?;
    let pokeapi: Arc<dyn PokemonReader> = Arc::new(pokeapi);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(show_index)
            .service(show_page)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(pokeapi.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
