//! Debounced search

use super::AppController;

impl AppController {
    /// Record the new query and schedule a search once input has settled.
    ///
    /// Every call issues a fresh token, so only the last keystroke inside the
    /// debounce window reaches the API.
    pub async fn on_search_input(&self, query: String) {
        self.model.update_search_query(query.clone()).await;
        self.schedule_search(query);
    }

    fn schedule_search(&self, query: String) {
        let token = self.model.issue_search_token();
        let controller = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(controller.debounce).await;
            if controller.model.is_current_search(token) {
                controller.perform_search(&query, token).await;
            }
        });
    }

    /// Run one search for `query` on behalf of `token`.
    ///
    /// Blank queries clear the results without a remote call. Results and
    /// errors are dropped when a newer token has been issued meanwhile.
    pub async fn perform_search(&self, query: &str, token: u64) {
        let query = query.trim();
        if query.is_empty() {
            if self.model.is_current_search(token) {
                self.model.clear_search_results().await;
            }
            return;
        }

        tracing::debug!(query, token, "Performing search");
        self.model.set_searching(true).await;
        self.model.clear_error().await;

        match self.recipes.search_cocktails(query).await {
            Ok(results) => {
                let matches = results.len();
                if self.model.apply_search_results(token, results).await {
                    tracing::info!(query, matches, "Search completed successfully");
                } else {
                    tracing::debug!(query, token, "Discarding stale search response");
                }
            }
            Err(e) => {
                tracing::error!(query, error = %e, "Search failed");
                if self.model.is_current_search(token) {
                    self.model.set_searching(false).await;
                    self.model.set_error(Self::format_error(&e)).await;
                }
            }
        }
    }
}
