use std::fs::File;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use color_eyre::eyre::{eyre, Result};
use crossterm::event::{self, Event};
use log::info;

use synonym_quiz::app::App;
use synonym_quiz::config::Config;
use synonym_quiz::data::{to_entries, BUNDLED_CLASS_FIRST, BUNDLED_CLASS_SECOND, BUNDLED_DATA};
use synonym_quiz::models::VocabEntry;
use synonym_quiz::storage::load_optional;
use synonym_quiz::{tui, ui, RoundGenerator, VocabStore};

const LOG_FILE: &str = "synonym-quiz.log";

fn main() -> Result<()> {
    tui::install_panic_hook()?;
    dotenvy::dotenv().ok();
    init_logging()?;

    let (config, store) = load().map_err(|e| eyre!("{:#}", e))?;
    let generator = match config.seed {
        Some(seed) => RoundGenerator::seeded(seed),
        None => RoundGenerator::new(),
    };
    let mut app = App::new(store, generator, Some(config.user_data.clone()));

    let mut terminal = tui::init()?;
    let res = run_app(&mut terminal, &mut app);
    tui::restore()?;

    res
}

// The terminal belongs to the UI, so log records go to a file.
fn init_logging() -> Result<()> {
    let file = File::create(LOG_FILE)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load() -> anyhow::Result<(Config, VocabStore)> {
    let config = Config::from_env()?;
    let store = load_store(&config)?;
    Ok((config, store))
}

fn load_list(path: &Path) -> anyhow::Result<Option<Vec<VocabEntry>>> {
    load_optional(path).with_context(|| format!("loading vocabulary from {}", path.display()))
}

fn load_store(config: &Config) -> anyhow::Result<VocabStore> {
    let mut reference = Vec::new();
    for path in &config.lists {
        if let Some(entries) = load_list(path)? {
            info!("Loaded {} entries from {}", entries.len(), path.display());
            reference.push(entries);
        }
    }
    if reference.is_empty() {
        info!("No reference list found, using the bundled vocabulary");
        reference.push(to_entries("core", BUNDLED_DATA));
    }

    let class_first = load_list(&config.class_first)?
        .unwrap_or_else(|| to_entries("first", BUNDLED_CLASS_FIRST));
    let class_second = load_list(&config.class_second)?
        .unwrap_or_else(|| to_entries("second", BUNDLED_CLASS_SECOND));
    let user = load_list(&config.user_data)?.unwrap_or_default();

    Ok(VocabStore::new(reference, class_first, class_second, user))
}

fn run_app(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while !app.exit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key);
            }
        }
    }
    Ok(())
}
