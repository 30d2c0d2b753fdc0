//! Random cocktail loading, refresh and home navigation

use futures::future::join_all;

use super::AppController;

impl AppController {
    /// Load `random_batch` random cocktails concurrently and replace the grid list.
    ///
    /// Each draw is independent: failures set the error but the successful
    /// draws still land, in call order. Never fails.
    pub async fn fetch_cocktails(&self) {
        tracing::debug!(count = self.random_batch, "Fetching random cocktails");
        self.model.clear_error().await;
        self.model.set_loading(true).await;

        let draws = (0..self.random_batch).map(|_| self.recipes.random_cocktail());
        let results = join_all(draws).await;

        let mut cocktails = Vec::with_capacity(results.len());
        let mut failures = 0usize;
        for result in results {
            match result {
                Ok(Some(cocktail)) => cocktails.push(cocktail),
                Ok(None) => tracing::warn!("Random draw returned no drink"),
                Err(e) => {
                    failures += 1;
                    tracing::error!(error = %e, "Random cocktail draw failed");
                    self.model.set_error(Self::format_error(&e)).await;
                }
            }
        }

        tracing::info!(loaded = cocktails.len(), failures, "Random cocktails loaded");
        self.model.set_cocktails(cocktails).await;
    }

    /// User-triggered reload of the random list
    pub async fn refresh(&self) {
        tracing::info!("Refreshing cocktails");
        self.fetch_cocktails().await;
    }

    /// Leave search and favorites, clear the query, reload the random list
    pub async fn go_home(&self) {
        self.model.reset_modes().await;
        self.fetch_cocktails().await;
    }
}
