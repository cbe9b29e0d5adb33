use serde::{Deserialize, Serialize};

/// Lightweight pointer to a full Pokémon record, as returned by the index
/// endpoint. Lives for one page-fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub detail_url: String,
}

/// Fully resolved Pokémon record.
///
/// `sprite_url` is optional because the upstream `sprites.front_default`
/// field is nullable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub base_experience: i64,
    pub height: i64,
    pub weight: i64,
    pub abilities: Vec<String>,
    pub sprite_url: Option<String>,
}

/// One fetched, bounded slice of the full catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page_number: u32,
    pub items: Vec<Pokemon>,
    pub total_page_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Listing,
    SingleResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Renderable application state. Replaced as a whole snapshot on every
/// transition, never mutated field-by-field in place.
///
/// Exactly one of `current_page` / `searched` is meaningful for the current
/// `mode`, and `error_message` is mutually exclusive with the success
/// payload of the operation that set it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub current_page: Option<Page>,
    pub searched: Option<Pokemon>,
    pub error_message: Option<String>,
    pub query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: ViewMode::Listing,
            current_page: None,
            searched: None,
            error_message: None,
            query: String::new(),
        }
    }
}
