// src/app/bootstrap.rs
//
// Process-start hydration: read the persisted session, favorites and theme
// and load them into the stores without triggering write-backs. Unreadable
// or malformed values fall back to defaults; nothing here is fatal.

use crate::app::AppState;
use crate::domain::Identity;
use crate::storage::{FAVORITES_KEY, SESSION_KEY, THEME_KEY};

pub async fn bootstrap(state: &AppState) {
    let (session_raw, favorites_raw, theme_raw) = tokio::join!(
        state.gateway.get(SESSION_KEY),
        state.gateway.get(FAVORITES_KEY),
        state.gateway.get(THEME_KEY),
    );

    if let Some(raw) = favorites_raw {
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => state.favorites.hydrate(ids),
            Err(e) => log::warn!("discarding malformed persisted favorites: {}", e),
        }
    }

    if let Some(raw) = session_raw {
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => state.session.hydrate(Some(identity)),
            // Older installs persisted the bare username string.
            Err(_) => state.session.hydrate(Some(Identity::new(raw, None))),
        }
    }

    state.theme.hydrate(theme_raw.as_deref());
}
