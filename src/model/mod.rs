//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (theme, view mode, splash timeline, UI state)
//! - `cocktail`: Cocktail records and the API response envelope
//! - `favorites`: Favorites set
//! - `content`: Cocktail lists shown by the grid
//! - `preferences`: Local preference store (theme, favorites)
//! - `cocktail_client`: Recipe API client
//! - `app_model`: Main application model with state management methods

mod types;
mod cocktail;
mod favorites;
mod content;
mod preferences;
mod cocktail_client;
mod app_model;

pub use types::{SplashPhase, SplashTimeline, Theme, UiState, ViewMode};

pub use cocktail::Cocktail;

pub use favorites::Favorites;

pub use content::ContentState;

pub use preferences::{
    load_favorites, load_theme, save_favorites, save_theme,
    JsonFileStore, MemoryStore, PreferenceStore,
};

pub use cocktail_client::{CocktailClient, RecipeSource};

pub use app_model::AppModel;

#[cfg(test)]
pub(crate) use cocktail::sample;
