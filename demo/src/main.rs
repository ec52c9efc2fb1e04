// ./demo/src/main.rs
use chrono::{Duration, Utc};
use std::env;
use std::str::FromStr;
use tracing::{error, info, level_filters::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use application::{ApplicationError, DocumentManager};
use domain::{Author, Document, SearchRequest};
use infrastructure::{InMemoryDocumentStore, StoreConfig};

const CAPACITY_VAR: &str = "DOCSTORE_INITIAL_CAPACITY";

fn main() {
    // --- Logger Initialization ---
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
    info!("Logger initialized successfully.");

    let config = load_config();
    let manager = DocumentManager::new(InMemoryDocumentStore::with_config(&config));
    info!(initial_capacity = config.initial_capacity, "Document store initialized.");

    if let Err(e) = run(&manager) {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn load_config() -> StoreConfig {
    match env::var(CAPACITY_VAR) {
        Ok(raw) => match usize::from_str(&raw) {
            Ok(capacity) => {
                info!("Using initial capacity {} from {}.", capacity, CAPACITY_VAR);
                StoreConfig::with_initial_capacity(capacity)
            }
            Err(_) => {
                warn!(
                    "Invalid {} value '{}'. Using default configuration.",
                    CAPACITY_VAR, raw
                );
                StoreConfig::default()
            }
        },
        Err(_) => StoreConfig::default(),
    }
}

fn run(manager: &DocumentManager) -> Result<(), ApplicationError> {
    let now = Utc::now();
    let ada = Author::new("author-1", "Ada");
    let brian = Author::new("author-2", "Brian");

    let hello_world = manager.save(
        Document::new("Hello World", "abc xyz", ada.clone()).with_created(now - Duration::days(2)),
    )?;
    manager.save(Document::new("Hello Moon", "abc", brian).with_created(now - Duration::days(1)))?;
    manager.save(Document::new("Release notes", "xyz changelog", ada))?;
    info!(stored = manager.len()?, "Seeded demo documents.");

    // Upsert: same id, new title; id and created stay put
    let mut renamed = hello_world.clone();
    renamed.title = "Hello Again World".to_string();
    let renamed = manager.save(renamed)?;
    info!(id = ?renamed.id_str(), created = ?renamed.created, "Updated document in place.");

    let lookup = manager.find_by_id(renamed.id_str().unwrap_or_default())?;
    info!(found = lookup.is_some(), "Looked up updated document.");

    let queries = [
        ("everything", SearchRequest::default()),
        (
            "hello with abc and xyz",
            SearchRequest::new()
                .with_title_prefixes(["Hello"])
                .with_contains_contents(["abc", "xyz"]),
        ),
        ("by author-1", SearchRequest::new().with_author_ids(["author-1"])),
        (
            "created in the last 36 hours",
            SearchRequest::new().with_created_from(now - Duration::hours(36)),
        ),
    ];

    for (label, request) in &queries {
        let hits = manager.search(request)?;
        info!(query = *label, hits = hits.len(), "Search finished.");
        match serde_json::to_string_pretty(&hits) {
            Ok(json) => println!("# {label}\n{json}"),
            Err(e) => warn!("Could not render results for '{}': {}", label, e),
        }
    }

    Ok(())
}
