//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! drives recipe API calls and writes preferences through to the store.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `browse`: Random cocktail loading, refresh and home navigation
//! - `search`: Debounced search with request tokens
//! - `actions`: Favorites, theme, modes, selection and splash

mod input;
mod browse;
mod search;
mod actions;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::model::{AppModel, PreferenceStore, RecipeSource};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    recipes: Arc<dyn RecipeSource>,
    preferences: Arc<dyn PreferenceStore>,
    random_batch: usize,
    debounce: Duration,
}

impl AppController {
    pub fn new(
        model: Arc<AppModel>,
        recipes: Arc<dyn RecipeSource>,
        preferences: Arc<dyn PreferenceStore>,
        config: &AppConfig,
    ) -> Self {
        Self {
            model,
            recipes,
            preferences,
            random_batch: config.random_batch.max(1),
            debounce: config.debounce,
        }
    }

    /// Per-frame housekeeping: ends the splash once its timeline has played
    pub async fn tick(&self) {
        if self.model.is_splash_visible().await && self.model.splash_finished().await {
            self.on_splash_complete().await;
        }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        let http_error = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<reqwest::Error>());

        match http_error {
            Some(e) if e.is_timeout() => {
                "The cocktail API took too long to answer. Try again.".to_string()
            }
            Some(e) if e.is_connect() => {
                "Could not reach the cocktail API. Check your connection.".to_string()
            }
            Some(e) if e.status().is_some_and(|s| s.as_u16() == 429) => {
                "Rate limited by the cocktail API. Please wait a moment.".to_string()
            }
            Some(e) if e.status().is_some() => format!(
                "The cocktail API answered with an error ({}).",
                e.status().map(|s| s.as_u16()).unwrap_or_default()
            ),
            Some(e) if e.is_decode() => {
                "The cocktail API sent a response we could not read.".to_string()
            }
            _ => format!("Error: {}", error),
        }
    }
}
