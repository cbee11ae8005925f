// src/lib.rs
// StreamBox - client-side state & persistence core
//
// Architecture:
// - Store-centric: each concern (session, favorites, catalog, theme) owns
//   its in-memory state; durable mirrors are best-effort
// - Event-driven: stores signal decoupled observers through a named bus
// - Explicit: stores are constructed with their dependencies, no globals
// - Single writer: mutations are synchronous, persistence rides tokio tasks

pub mod app;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod storage;
pub mod stores;

// ============================================================================
// PUBLIC API - Domain Types
// ============================================================================

pub use domain::{
    derive_category,
    derive_status,
    placeholder_image,
    validate_login,
    validate_signup,
    CatalogEntry,
    CatalogState,
    CatalogStatus,
    Category,
    EntryStatus,
    FieldError,
    Identity,
    LoginForm,
    SignupForm,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{names, EventBus, Subscription};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, create_connection_pool_at, initialize_storage, ConnectionPool};
pub use storage::{
    MemoryStorage, SqliteStorage, StorageGateway, FAVORITES_KEY, SESSION_KEY, THEME_KEY,
};

// ============================================================================
// PUBLIC API - Stores
// ============================================================================

pub use stores::{
    CatalogStore, FavoritesStore, Notification, NotificationBroadcaster, SessionStore, ThemeStore,
    UndoAction, DEFAULT_NOTIFICATION_DURATION,
};

// ============================================================================
// PUBLIC API - External Endpoints
// ============================================================================

pub use integrations::{
    CatalogApi, HttpCatalogClient, IdentityClient, LoginRequest, RawRecord, RegisterRequest,
    DEFAULT_CATALOG_URL,
};

// ============================================================================
// PUBLIC API - Composition Root
// ============================================================================

pub use app::{bootstrap, AppState};
