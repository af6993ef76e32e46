use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Previous/next navigation for a listing page.
///
/// The previous link of the first page targets the root path, which renders
/// page 1. The next link is unconditional: this view has no knowledge of the
/// total record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageNav {
    pub page: u32,
    pub prev_url: String,
    pub next_url: String,
}

impl PageNav {
    pub fn new(current_page: u32) -> Self {
        let page = if current_page == 0 { 1 } else { current_page };

        let prev_url = if page > 1 {
            format!("/{}", page - 1)
        } else {
            "/".to_string()
        };
        let next_url = format!("/{}", page.saturating_add(1));

        Self {
            page,
            prev_url,
            next_url,
        }
    }
}
