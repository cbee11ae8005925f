// src/main.rs
//
// Demo composition root: wires the stores against the SQLite gateway and the
// live catalog endpoint, hydrates from a previous run, then walks through a
// refresh and a favorite toggle.

use std::sync::Arc;

use streambox::app::{bootstrap, AppState};
use streambox::db::{create_connection_pool, get_connection, initialize_storage};
use streambox::integrations::catalog::{CatalogApi, HttpCatalogClient};
use streambox::integrations::identity::IdentityClient;
use streambox::storage::{SqliteStorage, StorageGateway};

const DEFAULT_IDENTITY_URL: &str = "https://auth.streambox.example";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool()?);
    {
        let conn = get_connection(&pool)?;
        initialize_storage(&conn)?;
    }
    let gateway: Arc<dyn StorageGateway> = Arc::new(SqliteStorage::new(pool, "streambox"));
    let catalog_api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogClient::new());
    let identity_url =
        std::env::var("STREAMBOX_AUTH_URL").unwrap_or_else(|_| DEFAULT_IDENTITY_URL.to_string());
    let identity_client = Arc::new(IdentityClient::new(identity_url));

    // 2. STORES (constructed and wired inside the composition root)
    let state = AppState::new(gateway, catalog_api, identity_client);

    // 3. HYDRATION
    bootstrap(&state).await;
    match state.session.current() {
        Some(identity) => println!("Hi, {}", identity.username),
        None => println!("Not signed in"),
    }
    println!(
        "{} favourite(s), {} theme",
        state.favorites.len(),
        if state.theme.is_dark() { "dark" } else { "light" }
    );

    // 4. CATALOG REFRESH
    let fetch = state.catalog.refresh();
    println!("catalog status: {:?}", state.catalog.status());
    let _ = fetch.await;
    println!("catalog status: {:?}", state.catalog.status());

    for entry in state.catalog.entries().iter().take(5) {
        println!(
            "  [{}] {} ({:?}, {:?})",
            entry.id, entry.title, entry.category, entry.status
        );
    }

    // 5. OPTIMISTIC MUTATION DEMO
    if let Some(first) = state.catalog.entries().first() {
        let now_favorite = state.favorites.toggle(&first.id);
        println!(
            "toggled '{}' -> favorite: {} ({} total)",
            first.title,
            now_favorite,
            state.favorites.len()
        );
    }

    if let Some(note) = state.notifier.current() {
        println!("notification: {}", note.message);
    }

    // Give fire-and-forget writes a moment to land before exiting.
    tokio::task::yield_now().await;

    Ok(())
}
