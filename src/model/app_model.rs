//! Main application model with state management

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::cocktail::Cocktail;
use super::content::ContentState;
use super::favorites::Favorites;
use super::types::{Theme, UiState, ViewMode};

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    pub should_quit: Arc<Mutex<bool>>,
    /// Latest issued search token; responses carrying an older one are stale
    search_token: AtomicU64,
}

impl AppModel {
    pub fn new(theme: Theme, favorites: Favorites, show_splash: bool) -> Self {
        let ui_state = UiState {
            theme,
            show_splash,
            ..UiState::default()
        };
        let content_state = ContentState {
            favorites,
            ..ContentState::default()
        };
        Self {
            ui_state: Arc::new(Mutex::new(ui_state)),
            content_state: Arc::new(Mutex::new(content_state)),
            should_quit: Arc::new(Mutex::new(false)),
            search_token: AtomicU64::new(0),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    // ========================================================================
    // Theme & splash
    // ========================================================================

    /// Flip the theme and return the new value
    pub async fn toggle_theme(&self) -> Theme {
        let mut state = self.ui_state.lock().await;
        state.theme = state.theme.toggled();
        state.theme
    }

    pub async fn is_splash_visible(&self) -> bool {
        self.ui_state.lock().await.show_splash
    }

    pub async fn splash_finished(&self) -> bool {
        self.ui_state.lock().await.splash.is_finished()
    }

    /// One-shot: once hidden the splash never comes back
    pub async fn hide_splash(&self) {
        self.ui_state.lock().await.show_splash = false;
    }

    // ========================================================================
    // Modes & query
    // ========================================================================

    /// Flip search mode; favorites view is always turned off.
    /// Leaving search drops the query and any cached results.
    pub async fn toggle_search_mode(&self) -> ViewMode {
        let mut ui = self.ui_state.lock().await;
        ui.mode = if ui.mode == ViewMode::Search {
            ViewMode::Browse
        } else {
            ViewMode::Search
        };
        ui.grid_selected = 0;
        let mode = ui.mode;
        if mode != ViewMode::Search {
            ui.search_query.clear();
            drop(ui);
            self.reset_search().await;
        }
        mode
    }

    /// Flip favorites view; search mode is always turned off and the query cleared
    pub async fn toggle_favorites(&self) -> ViewMode {
        let mut ui = self.ui_state.lock().await;
        let was_search = ui.mode == ViewMode::Search;
        ui.mode = if ui.mode == ViewMode::Favorites {
            ViewMode::Browse
        } else {
            ViewMode::Favorites
        };
        ui.search_query.clear();
        ui.grid_selected = 0;
        let mode = ui.mode;
        drop(ui);
        if was_search {
            self.reset_search().await;
        }
        mode
    }

    /// Back to browse mode with an empty query
    pub async fn reset_modes(&self) {
        let mut ui = self.ui_state.lock().await;
        let was_search = ui.mode == ViewMode::Search;
        ui.mode = ViewMode::Browse;
        ui.search_query.clear();
        ui.grid_selected = 0;
        drop(ui);
        if was_search {
            self.reset_search().await;
        }
    }

    pub async fn update_search_query(&self, query: String) {
        self.ui_state.lock().await.search_query = query;
    }

    /// Returns the query after the edit
    pub async fn append_to_search(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
        state.search_query.clone()
    }

    /// Returns the query after the edit
    pub async fn backspace_search(&self) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
        state.search_query.clone()
    }

    // ========================================================================
    // Search tokens
    // ========================================================================

    /// Issue a new search token, superseding every earlier one
    pub fn issue_search_token(&self) -> u64 {
        self.search_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current_search(&self, token: u64) -> bool {
        self.search_token.load(Ordering::SeqCst) == token
    }

    /// Store results only if `token` is still the latest. Returns whether they were applied.
    pub async fn apply_search_results(&self, token: u64, results: Vec<Cocktail>) -> bool {
        let mut content = self.content_state.lock().await;
        if !self.is_current_search(token) {
            return false;
        }
        content.search_results = results;
        content.is_searching = false;
        drop(content);
        self.ui_state.lock().await.grid_selected = 0;
        true
    }

    pub async fn set_searching(&self, searching: bool) {
        self.content_state.lock().await.is_searching = searching;
    }

    pub async fn clear_search_results(&self) {
        let mut content = self.content_state.lock().await;
        content.search_results.clear();
        content.is_searching = false;
    }

    /// Invalidate pending searches and drop cached results
    async fn reset_search(&self) {
        self.issue_search_token();
        self.clear_search_results().await;
    }

    // ========================================================================
    // Cocktail lists
    // ========================================================================

    pub async fn set_loading(&self, loading: bool) {
        self.content_state.lock().await.is_loading = loading;
    }

    pub async fn set_cocktails(&self, cocktails: Vec<Cocktail>) {
        let mut content = self.content_state.lock().await;
        content.cocktails = cocktails;
        content.is_loading = false;
        drop(content);

        let mut ui = self.ui_state.lock().await;
        if ui.mode == ViewMode::Browse {
            ui.grid_selected = 0;
        }
    }

    /// Toggle membership by id. Returns the resulting set for persisting.
    pub async fn toggle_favorite(&self, cocktail: &Cocktail) -> Favorites {
        let mut content = self.content_state.lock().await;
        let now_favorite = content.favorites.toggle(cocktail);
        tracing::debug!(id = %cocktail.id, now_favorite, "Favorite toggled");
        content.favorites.clone()
    }

    // ========================================================================
    // Selection & grid cursor
    // ========================================================================

    pub async fn show_details(&self, cocktail: Cocktail) {
        self.ui_state.lock().await.selected_cocktail = Some(cocktail);
    }

    pub async fn close_details(&self) {
        self.ui_state.lock().await.selected_cocktail = None;
    }

    pub async fn selected_cocktail(&self) -> Option<Cocktail> {
        self.ui_state.lock().await.selected_cocktail.clone()
    }

    pub async fn set_grid_columns(&self, columns: usize) {
        self.ui_state.lock().await.grid_columns = columns.max(1);
    }

    /// Move the grid cursor by `delta` cards, clamped to the visible list
    pub async fn move_grid_cursor(&self, delta: isize) {
        let mut ui = self.ui_state.lock().await;
        let len = self.content_state.lock().await.visible(ui.mode).len();
        if len == 0 {
            ui.grid_selected = 0;
            return;
        }
        let current = ui.grid_selected.min(len - 1) as isize;
        ui.grid_selected = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    pub async fn move_grid_row(&self, down: bool) {
        let columns = self.ui_state.lock().await.grid_columns as isize;
        self.move_grid_cursor(if down { columns } else { -columns }).await;
    }

    /// The card under the grid cursor in the current mode
    pub async fn focused_cocktail(&self) -> Option<Cocktail> {
        let ui = self.ui_state.lock().await;
        let content = self.content_state.lock().await;
        let visible = content.visible(ui.mode);
        visible
            .get(ui.grid_selected.min(visible.len().saturating_sub(1)))
            .cloned()
    }

    // ========================================================================
    // Errors & overlays
    // ========================================================================

    /// The latest error replaces any previous one
    pub async fn set_error(&self, message: String) {
        self.ui_state.lock().await.error_message = Some(message);
    }

    pub async fn clear_error(&self) {
        self.ui_state.lock().await.error_message = None;
    }

    #[cfg(test)]
    pub async fn error_message(&self) -> Option<String> {
        self.ui_state.lock().await.error_message.clone()
    }

    pub async fn toggle_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = !state.show_help_popup;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}
