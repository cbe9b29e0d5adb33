use shared::domain::{Pokemon, Theme, ViewMode, ViewState};

/// Paints one state snapshot as plain text. Presentation only; every
/// decision about what is visible was already made by the controller.
pub fn render(state: &ViewState, theme: Theme) -> String {
    let marker = match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    let mut out = format!("== pokédex ({marker}) ==\n");
    if let Some(message) = &state.error_message {
        out.push_str(&format!("!! {message}\n"));
    }
    match state.mode {
        ViewMode::SingleResult => {
            if let Some(pokemon) = &state.searched {
                out.push_str(&render_detail(pokemon));
            }
        }
        ViewMode::Listing => {
            if let Some(page) = &state.current_page {
                out.push_str(&format!(
                    "page {}/{}\n",
                    page.page_number, page.total_page_count
                ));
                for pokemon in &page.items {
                    out.push_str(&format!(
                        "  {:<16} xp {}\n",
                        pokemon.name, pokemon.base_experience
                    ));
                }
            } else {
                out.push_str("no page loaded yet\n");
            }
        }
    }
    out
}

fn render_detail(pokemon: &Pokemon) -> String {
    let mut out = format!("{}\n", pokemon.name);
    out.push_str(&format!("  base experience: {}\n", pokemon.base_experience));
    out.push_str(&format!(
        "  height: {}  weight: {}\n",
        pokemon.height, pokemon.weight
    ));
    out.push_str(&format!("  abilities: {}\n", pokemon.abilities.join(", ")));
    if let Some(sprite) = &pokemon.sprite_url {
        out.push_str(&format!("  sprite: {sprite}\n"));
    }
    out
}
