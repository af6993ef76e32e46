use crate::domain::pokemon::PokemonSummary;
use crate::pagination::PageNav;

/// Data required to render the listing template.
#[derive(Debug)]
pub struct ListPageData {
    /// Records of the current page, at most one page worth.
    pub pokemon: Vec<PokemonSummary>,
    /// Previous/next navigation derived from the current page.
    pub nav: PageNav,
}
