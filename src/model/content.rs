//! Content state: the cocktail lists the grid can show

use super::cocktail::Cocktail;
use super::favorites::Favorites;
use super::types::ViewMode;

#[derive(Clone, Debug, Default)]
pub struct ContentState {
    /// Random cocktails from the last load or refresh
    pub cocktails: Vec<Cocktail>,
    pub search_results: Vec<Cocktail>,
    pub favorites: Favorites,
    pub is_loading: bool,
    pub is_searching: bool,
}

impl ContentState {
    /// The list the grid shows in the given mode
    pub fn visible(&self, mode: ViewMode) -> &[Cocktail] {
        match mode {
            ViewMode::Browse => &self.cocktails,
            ViewMode::Search => &self.search_results,
            ViewMode::Favorites => self.favorites.as_slice(),
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }
}
