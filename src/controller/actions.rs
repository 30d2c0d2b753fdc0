//! Favorites, theme, mode, selection and splash actions

use crate::model::{save_favorites, save_theme, Cocktail};
use super::AppController;

impl AppController {
    /// Add or remove `cocktail` and write the whole set to the store
    pub async fn toggle_favorite(&self, cocktail: &Cocktail) {
        let favorites = self.model.toggle_favorite(cocktail).await;
        if let Err(e) = save_favorites(self.preferences.as_ref(), &favorites) {
            tracing::warn!(error = %e, "Could not persist favorites");
            self.model
                .set_error(format!("Could not save favorites: {}", e))
                .await;
        }
    }

    pub async fn toggle_theme(&self) {
        let theme = self.model.toggle_theme().await;
        tracing::debug!(theme = theme.as_str(), "Theme toggled");
        if let Err(e) = save_theme(self.preferences.as_ref(), theme) {
            tracing::warn!(error = %e, "Could not persist theme");
            self.model
                .set_error(format!("Could not save theme: {}", e))
                .await;
        }
    }

    pub async fn toggle_search_mode(&self) {
        let mode = self.model.toggle_search_mode().await;
        tracing::debug!(?mode, "Search mode toggled");
    }

    pub async fn toggle_favorites(&self) {
        let mode = self.model.toggle_favorites().await;
        tracing::debug!(?mode, "Favorites view toggled");
    }

    pub async fn show_details(&self, cocktail: Cocktail) {
        tracing::debug!(id = %cocktail.id, "Showing details");
        self.model.show_details(cocktail).await;
    }

    pub async fn close_details(&self) {
        self.model.close_details().await;
    }

    pub async fn on_splash_complete(&self) {
        if self.model.is_splash_visible().await {
            tracing::debug!("Splash complete");
        }
        self.model.hide_splash().await;
    }
}
