//! Menu browsing commands

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::state::AppState;
use crate::views::{render_menu, MenuView};

/// One category selector button
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryView {
    pub name: String,
    /// True for exactly one category: the selected one
    pub active: bool,
}

#[tauri::command]
pub fn get_categories(state: State<'_, AppState>) -> Result<Vec<CategoryView>, String> {
    let session = state.session.lock().map_err(|e| e.to_string())?;
    Ok(state
        .catalog
        .category_names()
        .map(|name| CategoryView {
            name: name.to_string(),
            active: name == session.selected_category,
        })
        .collect())
}

/// Menu grid for the currently selected category; the first render after
/// startup calls this.
#[tauri::command]
pub fn get_menu(state: State<'_, AppState>) -> Result<MenuView, String> {
    let session = state.session.lock().map_err(|e| e.to_string())?;
    Ok(render_menu(
        &state.catalog,
        &session.cart,
        &session.selected_category,
    ))
}

/// Switch categories and return the re-rendered menu grid
#[tauri::command]
pub fn select_category(state: State<'_, AppState>, name: String) -> Result<MenuView, String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    session
        .select_category(&state.catalog, &name)
        .map_err(|e| e.to_string())?;
    log::debug!("category selected: {}", name);
    Ok(render_menu(
        &state.catalog,
        &session.cart,
        &session.selected_category,
    ))
}
