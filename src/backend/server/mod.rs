//! Server Module
//!
//! Configuration, state and startup for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── database.rs     - Lazy Postgres pool handle
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - App creation and shutdown signal
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **State Creation**: store selection, token keys, database handle
//! 3. **Router Creation**: routes, auth guard, CORS and trace layers
//! 4. **Shutdown**: `AppState::shutdown` closes the pool if it was opened

/// Server configuration loading
pub mod config;

/// Database connection handle
pub mod database;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
