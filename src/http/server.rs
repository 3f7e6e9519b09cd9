//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, access log, timeout, body limit)
//! - Serve static files for paths the API does not own
//! - Bind server to listener and stop on shutdown

use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, RwLock};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{
    create_subject, delete_subject, get_subject, list_subjects, route_not_found, update_subject,
};
use crate::http::payload::CompletionMode;
use crate::http::request::{log_request, UuidRequestId, X_REQUEST_ID};
use crate::registry::Registry;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<Registry>>,
    pub completion: CompletionMode,
}

impl AppState {
    pub fn new(registry: Registry, completion: CompletionMode) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            completion,
        }
    }
}

/// HTTP server for the subject registry.
pub struct HttpServer {
    router: Router,
    state: AppState,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server over the seeded registry.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_registry(config, Registry::seeded())
    }

    /// Create a server over a caller-supplied registry.
    pub fn with_registry(config: ServiceConfig, registry: Registry) -> Self {
        let completion = CompletionMode::from_strict(config.security.strict_validation);
        let state = AppState::new(registry, completion);
        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            state,
            config,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/api/materias", get(list_subjects).post(create_subject))
            .route(
                "/api/materias/{id}",
                get(get_subject).put(update_subject).delete(delete_subject),
            )
            .method_not_allowed_fallback(route_not_found);

        let api = if config.static_files.enabled {
            let assets = ServeDir::new(&config.static_files.directory)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(route_not_found.into_service());
            api.fallback_service(assets)
        } else {
            api.fallback(route_not_found)
        };

        api.with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(log_request))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_files = self.config.static_files.enabled,
            "API escuchando en http://localhost:{}",
            addr.port()
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared state, for inspecting the registry.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
