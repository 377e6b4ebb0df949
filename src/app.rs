//! Wiring: container assembly and the HTTP router.

use crate::config::ServerConfig;
use crate::di::{Container, ContainerBuilder, HasContainer};
use crate::error::Result;
use crate::interceptor::log_requests;
use crate::users::{self, UsersModule};
use axum::{Router, middleware};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Container) -> Self {
        Self {
            container: Arc::new(container),
        }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Container holding the configuration, the seeded store and the user service.
pub fn bootstrap(config: ServerConfig) -> Result<Container> {
    let container = ContainerBuilder::new()
        .register(config)
        .import::<UsersModule>()?
        .build();
    tracing::debug!(services = container.len(), "container ready");
    Ok(container)
}

pub fn build_router(container: Container) -> Router {
    users::router()
        .layer(
            ServiceBuilder::new()
                // Span per request only; `log_requests` writes the log line.
                .layer(
                    TraceLayer::new_for_http()
                        .on_request(())
                        .on_response(())
                        .on_failure(()),
                )
                .layer(middleware::from_fn(log_requests)),
        )
        .with_state(AppState::new(container))
}
