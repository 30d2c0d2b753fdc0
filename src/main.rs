mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::{AppConfig, Cli};
use controller::AppController;
use model::{AppModel, CocktailClient, JsonFileStore, MemoryStore, PreferenceStore};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== cocktail-tui starting ===");
    tracing::debug!(?config, "Configuration resolved");

    let preferences = open_preferences(&config);
    let theme = model::load_theme(preferences.as_ref());
    let favorites = model::load_favorites(preferences.as_ref());
    tracing::info!(theme = theme.as_str(), favorites = favorites.len(), "Preferences loaded");

    let recipes = Arc::new(CocktailClient::new(
        config.api_base.clone(),
        config.request_timeout,
    )?);

    let model = Arc::new(AppModel::new(theme, favorites, config.show_splash));
    let controller = AppController::new(model.clone(), recipes, preferences, &config);

    // Initial load runs while the splash plays
    let controller_for_init = controller.clone();
    tokio::spawn(async move {
        controller_for_init.fetch_cocktails().await;
    });

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
        return Err(err.into());
    }

    tracing::info!("cocktail-tui shutting down");
    Ok(())
}

fn open_preferences(config: &AppConfig) -> Arc<dyn PreferenceStore> {
    if config.ephemeral {
        tracing::info!("Using in-memory preferences");
        return Arc::new(MemoryStore::new());
    }

    match JsonFileStore::open(&config.data_dir) {
        Ok(store) => {
            tracing::info!(path = %store.path().display(), "Using preference file");
            Arc::new(store)
        }
        Err(e) => {
            // A broken file should not keep the app from starting
            tracing::warn!(error = ?e, "Could not open preferences, falling back to memory");
            Arc::new(MemoryStore::new())
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        controller.tick().await;

        let size = terminal.size()?;
        model.set_grid_columns(AppView::grid_columns(size.width)).await;

        // Get current state
        let (ui_state, content_state, should_quit) = (
            model.get_ui_state().await,
            model.get_content_state().await,
            model.should_quit().await,
        );

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &ui_state, &content_state);
        })?;

        // Short poll keeps the splash animation smooth
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
