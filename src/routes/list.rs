use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::pokeapi::PokemonReader;
use crate::routes::render_template;
use crate::services::list::load_list_page;

#[get("/")]
pub async fn show_index(
    api: web::Data<dyn PokemonReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_list_page(api.get_ref(), &tera, 1).await
}

#[get("/{page}")]
pub async fn show_page(
    page: web::Path<u32>,
    api: web::Data<dyn PokemonReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_list_page(api.get_ref(), &tera, page.into_inner()).await
}

async fn render_list_page(api: &dyn PokemonReader, tera: &Tera, page: u32) -> HttpResponse {
    let data = match load_list_page(api, page).await {
        Ok(data) => data,
        Err(e) => {
            // A failed fetch shows the same placeholder as a pending one.
            log::error!("Failed to load pokemon list: {e}");
            return render_template(tera, "pokemon/loading.html", &Context::new());
        }
    };

    let mut context = Context::new();
    context.insert("pokemon", &data.pokemon);
    context.insert("nav", &data.nav);

    render_template(tera, "pokemon/list.html", &context)
}
