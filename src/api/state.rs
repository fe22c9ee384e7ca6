//! Application state - Dependency injection container.
//!
//! Provides centralized access to the user service and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserRecordManager, UserService};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// Wires the store into the service at construction time.
    pub fn from_config(database: Arc<Database>) -> Self {
        let store = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserRecordManager::new(store));

        Self {
            user_service,
            database,
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
