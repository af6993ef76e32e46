use serde::{Deserialize, Serialize};

/// One Pokemon entry as returned by the listing query.
///
/// Only the key is consumed: it is the render key, the link label and the
/// detail-route parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub key: String,
}
