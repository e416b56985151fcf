//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the configuration, the compiled page templates, and the session store.

use std::sync::Arc;

use campus_common::{AdminConfig, AppConfig};
use campus_service::ServiceContext;

use crate::session::SessionBackend;
use crate::views::Views;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    views: Arc<Views>,
    sessions: SessionBackend,
}

impl AppState {
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        views: Views,
        sessions: SessionBackend,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            views: Arc::new(views),
            sessions,
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn sessions(&self) -> &SessionBackend {
        &self.sessions
    }

    /// Shortcut for the admin credential pair
    pub fn admin(&self) -> &AdminConfig {
        self.service_context.admin()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("views", &"Views")
            .field("sessions", &self.sessions)
            .finish()
    }
}
