//! Endless News controller binary.
//! Boots the reader core: restores category names, fetches the feed
//! once, then dispatches stdin commands through the state transitions.
//!
//! Commands: `add <name>`, `mark <index>`, `delete`, `list`, `quit`.

use std::io::{self, BufRead};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use endless_news::config;
use endless_news::feed::FeedLoader;
use endless_news::prefs::{self, JsonFileStore};
use endless_news::state::{apply, group_by_category, AppState, Command};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((v, r)) => (v, r.trim()),
        None => (line, ""),
    };
    match verb {
        "add" => Some(Command::AddCategory(rest.to_string())),
        "mark" => rest.parse().ok().map(Command::ToggleMark),
        "delete" => Some(Command::DeleteMarked),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn format_date(unix: u64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp(unix as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn render(state: &AppState) {
    if state.categories.is_empty() {
        println!("(no categories)");
        return;
    }
    for (i, c) in state.categories.iter().enumerate() {
        let mark = if c.marked_for_deletion { "x" } else { " " };
        println!("[{mark}] {i}: {} ({} news)", c.name, c.news.len());
        for n in &c.news {
            println!("        {}  {}", format_date(n.published_at), n.title);
        }
    }
}

fn print_help() {
    println!("commands: add <name> | mark <index> | delete | list | quit");
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = config::load_default()?;
    let mut store = JsonFileStore::open(&cfg.prefs_path)?;

    let mut state = AppState::new(prefs::restore_categories(&store), Vec::new());
    tracing::info!(categories = state.categories.len(), "category names restored");

    // Single cold-start fetch; on failure the reader runs with an empty
    // news set and the user may retry by restarting.
    let loader = FeedLoader::from_url(&cfg.feed_url, cfg.request_timeout(), &cfg.default_category)?;
    match loader.load().await {
        Ok(news) => {
            println!("News count: {}", news.len());
            state.news = news;
        }
        Err(e) => tracing::warn!(error = %e, "feed unavailable, continuing without news"),
    }
    state.categories = group_by_category(&state.news, &state.categories);

    render(&state);
    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "list" {
            render(&state);
            continue;
        }
        let Some(cmd) = parse_command(&line) else {
            print_help();
            continue;
        };
        let quitting = cmd == Command::Quit;

        match apply(&state, cmd) {
            Ok(next) => state = next,
            Err(e) => {
                println!("Name can't be empty!");
                tracing::warn!(error = %e, "command rejected");
                continue;
            }
        }

        if quitting {
            break;
        }
        render(&state);
    }

    prefs::save_category_names(&mut store, &state.categories);
    store.flush()?;
    tracing::info!("category names saved, bye");
    Ok(())
}
