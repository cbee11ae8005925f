// src/app/state.rs
//
// Composition root state. One instance owns the bus, the stores and the
// broadcaster for the lifetime of the process; consumers receive explicit
// Arc references instead of reaching for globals.

use std::sync::Arc;

use crate::domain::{
    validate_login, validate_signup, Identity, LoginForm, SignupForm,
};
use crate::error::{AppError, AppResult};
use crate::events::{names, EventBus};
use crate::integrations::catalog::CatalogApi;
use crate::integrations::identity::{IdentityClient, LoginRequest, RegisterRequest};
use crate::storage::StorageGateway;
use crate::stores::{
    CatalogStore, FavoritesStore, NotificationBroadcaster, SessionStore, ThemeStore,
};

pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub gateway: Arc<dyn StorageGateway>,
    pub session: Arc<SessionStore>,
    pub favorites: Arc<FavoritesStore>,
    pub catalog: Arc<CatalogStore>,
    pub theme: Arc<ThemeStore>,
    pub notifier: Arc<NotificationBroadcaster>,
    pub identity_client: Arc<IdentityClient>,
}

impl AppState {
    pub fn new(
        gateway: Arc<dyn StorageGateway>,
        catalog_api: Arc<dyn CatalogApi>,
        identity_client: Arc<IdentityClient>,
    ) -> Arc<Self> {
        let event_bus = Arc::new(EventBus::new());

        let session = Arc::new(SessionStore::new(
            Arc::clone(&gateway),
            Arc::clone(&event_bus),
        ));
        let favorites = Arc::new(FavoritesStore::new(
            Arc::clone(&gateway),
            Arc::clone(&event_bus),
        ));
        let catalog = Arc::new(CatalogStore::new(catalog_api));
        let theme = Arc::new(ThemeStore::new(
            Arc::clone(&gateway),
            Arc::clone(&event_bus),
        ));
        let notifier = Arc::new(NotificationBroadcaster::new());

        // Cross-store wiring. Favorites are per-account, so they reset when
        // the session ends; any screen can request a refresh by name.
        let favorites_on_logout = Arc::clone(&favorites);
        event_bus.subscribe(names::SESSION_ENDED, move |_| {
            favorites_on_logout.clear();
        });

        let catalog_on_signal = Arc::clone(&catalog);
        event_bus.subscribe(names::RETURN_TO_TOP_AND_REFRESH, move |_| {
            let _ = catalog_on_signal.refresh();
        });

        Arc::new(Self {
            event_bus,
            gateway,
            session,
            favorites,
            catalog,
            theme,
            notifier,
            identity_client,
        })
    }

    /// Validate the form, exchange credentials for an identity, then sign it
    /// in. Validation failures never reach the network or storage.
    pub async fn sign_in(&self, form: &LoginForm) -> AppResult<Identity> {
        validate_login(form).map_err(AppError::Validation)?;

        let identity = self
            .identity_client
            .login(&LoginRequest {
                username_or_email: form.username_or_email.clone(),
                password: form.password.clone(),
            })
            .await?;

        self.session.login(identity.clone());
        self.notifier
            .show(format!("Welcome back, {}", identity.username));
        Ok(identity)
    }

    pub async fn sign_up(&self, form: &SignupForm) -> AppResult<Identity> {
        validate_signup(form).map_err(AppError::Validation)?;

        let identity = self
            .identity_client
            .register(&RegisterRequest {
                username: form.username.clone(),
                email: form.email.clone(),
                password: form.password.clone(),
            })
            .await?;

        self.session.login(identity.clone());
        self.notifier
            .show(format!("Welcome, {}", identity.username));
        Ok(identity)
    }

    pub fn sign_out(&self) {
        self.session.logout();
        self.notifier.show("Signed out");
    }

    /// Optimistic removal: the id disappears immediately, paired with a
    /// notification whose undo re-adds it while the window is open.
    pub fn remove_favorite_with_undo(&self, id: &str) {
        self.favorites.remove(id);

        let favorites = Arc::clone(&self.favorites);
        let id = id.to_string();
        self.notifier.show_with_undo(
            "Removed from favourites",
            "UNDO",
            Box::new(move || {
                favorites.add(&id);
            }),
        );
    }

    /// Wipe the persisted scope and reset every store to its defaults.
    pub async fn reset_all_data(&self) {
        self.gateway.clear().await;
        self.session.hydrate(None);
        self.favorites.hydrate(Vec::new());
        self.theme.hydrate(None);
        self.notifier.show("All local data cleared");
    }
}
