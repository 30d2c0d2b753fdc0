use super::*;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;

use anyhow::anyhow;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{sample, Cocktail, Favorites, MemoryStore, Theme, ViewMode};

enum Draw {
    Drink(Cocktail),
    NoDrink,
    Fail(&'static str),
}

struct SearchReply {
    delay: Duration,
    result: Result<Vec<Cocktail>, &'static str>,
}

#[derive(Default)]
struct FakeRecipes {
    draws: StdMutex<VecDeque<Draw>>,
    replies: HashMap<String, SearchReply>,
    random_calls: AtomicUsize,
    search_calls: StdMutex<Vec<String>>,
}

impl FakeRecipes {
    fn with_draws(draws: Vec<Draw>) -> Self {
        Self {
            draws: StdMutex::new(draws.into()),
            ..Self::default()
        }
    }

    fn reply(mut self, query: &str, delay_ms: u64, result: Result<Vec<Cocktail>, &'static str>) -> Self {
        self.replies.insert(
            query.to_string(),
            SearchReply { delay: Duration::from_millis(delay_ms), result },
        );
        self
    }

    fn queue_draws(&self, draws: Vec<Draw>) {
        self.draws.lock().unwrap().extend(draws);
    }

    fn searches(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeSource for FakeRecipes {
    async fn random_cocktail(&self) -> anyhow::Result<Option<Cocktail>> {
        self.random_calls.fetch_add(1, Ordering::SeqCst);
        match self.draws.lock().unwrap().pop_front() {
            Some(Draw::Drink(cocktail)) => Ok(Some(cocktail)),
            Some(Draw::NoDrink) => Ok(None),
            Some(Draw::Fail(msg)) => Err(anyhow!(msg)),
            None => Err(anyhow!("no response queued")),
        }
    }

    async fn search_cocktails(&self, query: &str) -> anyhow::Result<Vec<Cocktail>> {
        self.search_calls.lock().unwrap().push(query.to_string());
        let Some(reply) = self.replies.get(query) else {
            return Ok(vec![]);
        };
        tokio::time::sleep(reply.delay).await;
        reply.result.clone().map_err(|msg| anyhow!(msg))
    }
}

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Err(anyhow!("disk full"))
    }
}

fn mojito() -> Cocktail {
    sample("1", "Mojito")
}

fn margarita() -> Cocktail {
    sample("2", "Margarita")
}

fn daiquiri() -> Cocktail {
    sample("3", "Daiquiri")
}

fn config() -> AppConfig {
    AppConfig {
        random_batch: 3,
        debounce: Duration::from_millis(500),
        ..AppConfig::default()
    }
}

fn controller_with(
    recipes: FakeRecipes,
    store: Arc<dyn PreferenceStore>,
) -> (AppController, Arc<FakeRecipes>) {
    let recipes = Arc::new(recipes);
    let model = Arc::new(AppModel::new(Theme::Light, Favorites::default(), false));
    let controller = AppController::new(model, recipes.clone(), store, &config());
    (controller, recipes)
}

fn controller(recipes: FakeRecipes) -> (AppController, Arc<FakeRecipes>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let (controller, recipes) = controller_with(recipes, store.clone());
    (controller, recipes, store)
}

fn ids(cocktails: &[Cocktail]) -> Vec<&str> {
    cocktails.iter().map(|c| c.id.as_str()).collect()
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn test_fetch_cocktails_keeps_call_order() {
    let (controller, recipes, _) = controller(FakeRecipes::with_draws(vec![
        Draw::Drink(mojito()),
        Draw::Drink(margarita()),
        Draw::Drink(daiquiri()),
    ]));

    controller.fetch_cocktails().await;

    let content = controller.model.get_content_state().await;
    assert_eq!(ids(&content.cocktails), ["1", "2", "3"]);
    assert!(!content.is_loading);
    assert_eq!(recipes.random_calls.load(Ordering::SeqCst), 3);
    assert!(controller.model.error_message().await.is_none());
}

#[tokio::test]
async fn test_partial_failure_keeps_successful_draws() {
    let (controller, _, _) = controller(FakeRecipes::with_draws(vec![
        Draw::Drink(mojito()),
        Draw::Fail("API Error"),
        Draw::NoDrink,
    ]));

    controller.fetch_cocktails().await;

    let content = controller.model.get_content_state().await;
    assert_eq!(ids(&content.cocktails), ["1"]);
    assert_eq!(controller.model.error_message().await.as_deref(), Some("Error: API Error"));
}

#[tokio::test]
async fn test_rejected_draws_set_error_without_escaping() {
    let (controller, _, _) = controller(FakeRecipes::with_draws(vec![
        Draw::Fail("API Error"),
        Draw::Fail("API Error"),
        Draw::Fail("API Error"),
    ]));

    controller.fetch_cocktails().await;

    assert!(controller.model.error_message().await.is_some());
    assert!(controller.model.get_content_state().await.cocktails.is_empty());
}

#[tokio::test]
async fn test_refresh_replaces_list_and_clears_error() {
    let (controller, recipes, _) =
        controller(FakeRecipes::with_draws(vec![Draw::Fail("down"), Draw::Drink(mojito()), Draw::NoDrink]));
    controller.fetch_cocktails().await;
    assert!(controller.model.error_message().await.is_some());

    recipes.queue_draws(vec![
        Draw::Drink(daiquiri()),
        Draw::Drink(margarita()),
        Draw::Drink(mojito()),
    ]);
    controller.refresh().await;

    let content = controller.model.get_content_state().await;
    assert_eq!(ids(&content.cocktails), ["3", "2", "1"]);
    assert_eq!(recipes.random_calls.load(Ordering::SeqCst), 6);
    assert!(controller.model.error_message().await.is_none());
}

#[tokio::test]
async fn test_search_results_and_null_drinks() {
    let recipes = FakeRecipes::default()
        .reply("Mojito", 0, Ok(vec![mojito()]))
        .reply("NonExistentCocktail", 0, Ok(vec![]));
    let (controller, recipes, _) = controller(recipes);
    controller.toggle_search_mode().await;

    let token = controller.model.issue_search_token();
    controller.perform_search("Mojito", token).await;
    assert_eq!(controller.model.get_content_state().await.search_results, vec![mojito()]);

    let token = controller.model.issue_search_token();
    controller.perform_search("NonExistentCocktail", token).await;
    let content = controller.model.get_content_state().await;
    assert!(content.search_results.is_empty());
    assert!(!content.is_searching);
    assert!(controller.model.error_message().await.is_none());
    assert_eq!(recipes.searches(), ["Mojito", "NonExistentCocktail"]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_sends_only_the_settled_query() {
    let recipes = FakeRecipes::default().reply("Mojito", 0, Ok(vec![mojito()]));
    let (controller, recipes, _) = controller(recipes);
    controller.toggle_search_mode().await;

    for query in ["M", "Mo", "Moj", "Mojito"] {
        controller.on_search_input(query.to_string()).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(recipes.searches().is_empty());

    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(recipes.searches(), ["Mojito"]);
    assert_eq!(controller.model.get_content_state().await.search_results, vec![mojito()]);
    assert_eq!(controller.model.get_ui_state().await.search_query, "Mojito");
}

#[tokio::test(start_paused = true)]
async fn test_blank_query_clears_results_without_remote_call() {
    let recipes = FakeRecipes::default().reply("Mojito", 0, Ok(vec![mojito()]));
    let (controller, recipes, _) = controller(recipes);
    controller.toggle_search_mode().await;

    controller.on_search_input("Mojito".to_string()).await;
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(controller.model.get_content_state().await.search_results.len(), 1);

    controller.on_search_input("   ".to_string()).await;
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(recipes.searches(), ["Mojito"]);
    assert!(controller.model.get_content_state().await.search_results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_late_stale_response_does_not_overwrite_newer_results() {
    let recipes = FakeRecipes::default()
        .reply("Mar", 1000, Ok(vec![mojito(), daiquiri()]))
        .reply("Margarita", 10, Ok(vec![margarita()]));
    let (controller, _, _) = controller(recipes);

    let slow_token = controller.model.issue_search_token();
    let slow = controller.clone();
    let slow_task = tokio::spawn(async move { slow.perform_search("Mar", slow_token).await });

    let fast_token = controller.model.issue_search_token();
    controller.perform_search("Margarita", fast_token).await;
    slow_task.await.unwrap();

    assert_eq!(controller.model.get_content_state().await.search_results, vec![margarita()]);
}

#[tokio::test]
async fn test_search_failure_sets_error() {
    let recipes = FakeRecipes::default().reply("Boom", 0, Err("API Error"));
    let (controller, _, _) = controller(recipes);

    let token = controller.model.issue_search_token();
    controller.perform_search("Boom", token).await;

    assert_eq!(controller.model.error_message().await.as_deref(), Some("Error: API Error"));
    assert!(!controller.model.get_content_state().await.is_searching);
}

#[tokio::test]
async fn test_toggle_favorite_writes_full_set_every_time() {
    let (controller, _, store) = controller(FakeRecipes::default());

    controller.toggle_favorite(&mojito()).await;
    controller.toggle_favorite(&margarita()).await;
    controller.toggle_favorite(&mojito()).await;

    let favorites = controller.model.get_content_state().await.favorites;
    assert_eq!(ids(favorites.as_slice()), ["2"]);

    let writes = store.writes();
    assert_eq!(writes.len(), 3);
    assert!(writes.iter().all(|(key, _)| key == "favorites"));
    let persisted: Vec<Cocktail> = serde_json::from_str(&writes[1].1).unwrap();
    assert_eq!(ids(&persisted), ["1", "2"]);
    let persisted: Vec<Cocktail> = serde_json::from_str(&writes[2].1).unwrap();
    assert_eq!(ids(&persisted), ["2"]);
}

#[tokio::test]
async fn test_failed_favorite_write_is_reported() {
    let (controller, _) = controller_with(FakeRecipes::default(), Arc::new(FailingStore));

    controller.toggle_favorite(&mojito()).await;

    assert!(controller.model.get_content_state().await.is_favorite("1"));
    let error = controller.model.error_message().await.unwrap();
    assert!(error.contains("disk full"));
}

#[tokio::test]
async fn test_theme_toggle_writes_each_value() {
    let (controller, _, store) = controller(FakeRecipes::default());

    controller.toggle_theme().await;
    assert_eq!(controller.model.get_ui_state().await.theme, Theme::Dark);
    controller.toggle_theme().await;
    assert_eq!(controller.model.get_ui_state().await.theme, Theme::Light);

    assert_eq!(
        store.writes(),
        vec![
            ("theme".to_string(), "dark".to_string()),
            ("theme".to_string(), "light".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_go_home_resets_modes_and_reloads() {
    let (controller, recipes, _) = controller(FakeRecipes::with_draws(vec![
        Draw::Drink(mojito()),
        Draw::Drink(margarita()),
        Draw::Drink(daiquiri()),
    ]));
    controller.toggle_search_mode().await;
    controller.model.update_search_query("test".to_string()).await;

    controller.go_home().await;

    let ui = controller.model.get_ui_state().await;
    assert_eq!(ui.mode, ViewMode::Browse);
    assert_eq!(ui.search_query, "");
    assert_eq!(recipes.random_calls.load(Ordering::SeqCst), 3);
    assert_eq!(controller.model.get_content_state().await.cocktails.len(), 3);
}

#[tokio::test]
async fn test_splash_completion_is_idempotent() {
    let recipes = Arc::new(FakeRecipes::default());
    let model = Arc::new(AppModel::new(Theme::Light, Favorites::default(), true));
    let controller =
        AppController::new(model, recipes, Arc::new(MemoryStore::new()), &config());

    controller.tick().await;
    assert!(controller.model.is_splash_visible().await);

    controller.on_splash_complete().await;
    controller.on_splash_complete().await;
    controller.tick().await;
    assert!(!controller.model.is_splash_visible().await);
}

#[tokio::test]
async fn test_keys_while_splash_plays_are_ignored() {
    let recipes = Arc::new(FakeRecipes::default());
    let model = Arc::new(AppModel::new(Theme::Light, Favorites::default(), true));
    let controller =
        AppController::new(model, recipes, Arc::new(MemoryStore::new()), &config());

    controller.handle_key_event(press(KeyCode::Char('t'))).await.unwrap();
    assert_eq!(controller.model.get_ui_state().await.theme, Theme::Light);

    controller.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
    assert!(controller.model.should_quit().await);
}

#[tokio::test]
async fn test_keys_drive_modes_and_search_input() {
    let (controller, _, _) = controller(FakeRecipes::default());

    controller.handle_key_event(press(KeyCode::Char('/'))).await.unwrap();
    for c in "gin".chars() {
        controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
    }
    controller.handle_key_event(press(KeyCode::Backspace)).await.unwrap();
    let ui = controller.model.get_ui_state().await;
    assert!(ui.is_search_mode());
    assert_eq!(ui.search_query, "gi");

    controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
    let ui = controller.model.get_ui_state().await;
    assert_eq!(ui.mode, ViewMode::Browse);
    assert_eq!(ui.search_query, "");

    controller.handle_key_event(press(KeyCode::Char('v'))).await.unwrap();
    assert!(controller.model.get_ui_state().await.is_favorites_view());
}

#[tokio::test]
async fn test_keys_open_modal_and_favorite_selection() {
    let (controller, _, store) = controller(FakeRecipes::with_draws(vec![
        Draw::Drink(mojito()),
        Draw::Drink(margarita()),
        Draw::Drink(daiquiri()),
    ]));
    controller.fetch_cocktails().await;
    controller.model.set_grid_columns(3).await;

    controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
    controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
    assert_eq!(controller.model.selected_cocktail().await, Some(margarita()));

    controller.handle_key_event(press(KeyCode::Char('f'))).await.unwrap();
    assert!(controller.model.get_content_state().await.is_favorite("2"));
    assert_eq!(store.writes().len(), 1);

    controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
    assert!(controller.model.selected_cocktail().await.is_none());
}

#[test]
fn test_format_error_falls_back_to_message() {
    let message = AppController::format_error(&anyhow!("boom"));
    assert_eq!(message, "Error: boom");
}
