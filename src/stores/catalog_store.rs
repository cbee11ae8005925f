// src/stores/catalog_store.rs
//
// Fetched catalog cache with a status lifecycle.
//
// `refresh` flips the status to Loading before the request leaves, then the
// spawned fetch either replaces the entry list wholesale (Idle) or marks the
// cache Failed while keeping the stale entries on screen. Overlapping
// refreshes are not sequenced: the last one to complete wins.

use std::sync::{Arc, RwLock};

use chrono::{Datelike, Utc};
use tokio::task::JoinHandle;

use crate::domain::catalog::{
    derive_category, derive_status, placeholder_image, CatalogEntry, CatalogState, CatalogStatus,
};
use crate::integrations::catalog::{CatalogApi, RawRecord};

pub struct CatalogStore {
    state: RwLock<CatalogState>,
    api: Arc<dyn CatalogApi>,
}

impl CatalogStore {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            state: RwLock::new(CatalogState::default()),
            api,
        }
    }

    /// Kick off a fetch. The Loading transition happens before this returns;
    /// completion is applied by the spawned task. The handle can be awaited
    /// when the caller wants the result settled (tests, demo), or dropped.
    pub fn refresh(self: &Arc<Self>) -> JoinHandle<()> {
        self.state.write().unwrap().status = CatalogStatus::Loading;

        let store = Arc::clone(self);
        tokio::spawn(async move {
            match store.api.fetch_catalog().await {
                Ok(records) => {
                    let now_year = Utc::now().year();
                    let entries = records
                        .iter()
                        .map(|r| map_record(r, now_year))
                        .collect::<Vec<_>>();
                    log::debug!("catalog fetch complete: {} entries", entries.len());

                    let mut state = store.state.write().unwrap();
                    state.entries = entries;
                    state.status = CatalogStatus::Idle;
                }
                Err(e) => {
                    log::warn!("catalog fetch failed: {}", e);
                    // Stale entries stay put; only the status flips.
                    store.state.write().unwrap().status = CatalogStatus::Failed;
                }
            }
        })
    }

    pub fn status(&self) -> CatalogStatus {
        self.state.read().unwrap().status
    }

    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.state.read().unwrap().entries.clone()
    }

    pub fn entry(&self, id: &str) -> Option<CatalogEntry> {
        self.state
            .read()
            .unwrap()
            .entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().unwrap().entries.is_empty()
    }
}

/// Attach the derived fields to one raw record. Pure given the record and
/// the reference year.
pub fn map_record(record: &RawRecord, now_year: i32) -> CatalogEntry {
    let category_seed = if record.title.is_empty() {
        record.id.as_str()
    } else {
        record.title.as_str()
    };
    let status_seed = if record.id.is_empty() {
        record.title.as_str()
    } else {
        record.id.as_str()
    };

    // Dates come back as "1986" or "1986-01-15"; take the leading digit run.
    let release_year = record.release_date.as_deref().and_then(|s| {
        let trimmed = s.trim();
        let digits = &trimmed[..trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len())];
        digits.parse::<i32>().ok()
    });

    let image_url = record
        .image
        .clone()
        .or_else(|| record.movie_banner.clone())
        .unwrap_or_else(|| placeholder_image(&record.id));

    CatalogEntry {
        id: record.id.clone(),
        title: record.title.clone(),
        description: record.description.clone(),
        release_year,
        image_url,
        category: derive_category(category_seed),
        status: derive_status(release_year, status_seed, now_year),
    }
}
