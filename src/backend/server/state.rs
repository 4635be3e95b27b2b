/**
 * Application State Management
 *
 * `AppState` is the container handed to every handler. It owns:
 * - the credential store (behind the `CredentialStore` trait)
 * - the token keys derived from the signing secret
 * - the server configuration
 * - the database handle, so shutdown can close it
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, following Axum's recommended pattern.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use gatehouse::backend::auth::sessions::TokenKeys;
 *
 * async fn handler(State(tokens): State<TokenKeys>) {
 *     let _ = tokens.ttl_secs();
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database::Database;
use crate::backend::store::{CredentialStore, MemoryCredentialStore, PgCredentialStore};

/// Shared handle to whichever store is configured
pub type SharedStore = Arc<dyn CredentialStore>;

#[derive(Clone)]
pub struct AppState {
    /// Persisted user records
    pub store: SharedStore,

    /// Signing/verification keys
    pub tokens: TokenKeys,

    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Lazily connected database; unconfigured when running in memory
    pub database: Arc<Database>,
}

impl AppState {
    /// Build state for `config`, picking Postgres when `DATABASE_URL` is set
    pub fn from_config(config: ServerConfig) -> Self {
        let database = Arc::new(Database::new(config.database_url.clone()));
        let store: SharedStore = if database.is_configured() {
            tracing::info!("Using Postgres credential store");
            Arc::new(PgCredentialStore::new(database.clone()))
        } else {
            tracing::warn!("DATABASE_URL not set. Users are kept in memory and lost on restart.");
            Arc::new(MemoryCredentialStore::new())
        };
        Self::with_store(config, store, database)
    }

    /// Build state around an explicit store
    pub fn with_store(config: ServerConfig, store: SharedStore, database: Arc<Database>) -> Self {
        Self {
            store,
            tokens: TokenKeys::new(&config.jwt_secret),
            config: Arc::new(config),
            database,
        }
    }

    /// In-memory state, used by tests and local experiments
    pub fn in_memory(config: ServerConfig, store: MemoryCredentialStore) -> Self {
        Self::with_store(config, Arc::new(store), Arc::new(Database::new(None)))
    }

    /// Release external resources
    pub async fn shutdown(&self) {
        self.database.close().await;
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
