//! Core type definitions for the application

use std::time::{Duration, Instant};

use super::cocktail::Cocktail;

/// Color theme, persisted as `"light"` / `"dark"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to the light theme
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Which list the grid shows. Search and favorites are never active together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Browse,
    Search,
    Favorites,
}

/// Phase of the splash timeline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SplashPhase {
    /// Title slides in; progress in `0.0..=1.0`
    Entrance(f64),
    /// Loading bar fills; progress in `0.0..=1.0`
    Loading(f64),
    /// Content fades out; progress in `0.0..=1.0`
    Exit(f64),
    Finished,
}

/// Fixed, non-interactive splash animation
#[derive(Clone, Copy, Debug)]
pub struct SplashTimeline {
    started_at: Instant,
}

impl SplashTimeline {
    pub const ENTRANCE: Duration = Duration::from_millis(800);
    pub const LOADING: Duration = Duration::from_millis(2000);
    pub const EXIT: Duration = Duration::from_millis(500);

    pub fn start() -> Self {
        Self { started_at: Instant::now() }
    }

    pub fn phase(&self) -> SplashPhase {
        Self::phase_at(self.started_at.elapsed())
    }

    pub fn phase_at(elapsed: Duration) -> SplashPhase {
        fn ratio(part: Duration, total: Duration) -> f64 {
            (part.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
        }

        if elapsed < Self::ENTRANCE {
            return SplashPhase::Entrance(ratio(elapsed, Self::ENTRANCE));
        }
        let elapsed = elapsed - Self::ENTRANCE;
        if elapsed < Self::LOADING {
            return SplashPhase::Loading(ratio(elapsed, Self::LOADING));
        }
        let elapsed = elapsed - Self::LOADING;
        if elapsed < Self::EXIT {
            return SplashPhase::Exit(ratio(elapsed, Self::EXIT));
        }
        SplashPhase::Finished
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == SplashPhase::Finished
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub theme: Theme,
    pub mode: ViewMode,
    pub search_query: String,
    pub selected_cocktail: Option<Cocktail>,
    pub grid_selected: usize,
    pub grid_columns: usize,
    pub error_message: Option<String>,
    pub show_splash: bool,
    pub splash: SplashTimeline,
    pub show_help_popup: bool,
}

impl UiState {
    pub fn is_search_mode(&self) -> bool {
        self.mode == ViewMode::Search
    }

    pub fn is_favorites_view(&self) -> bool {
        self.mode == ViewMode::Favorites
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            mode: ViewMode::default(),
            search_query: String::new(),
            selected_cocktail: None,
            grid_selected: 0,
            grid_columns: 1,
            error_message: None,
            show_splash: true,
            splash: SplashTimeline::start(),
            show_help_popup: false,
        }
    }
}
