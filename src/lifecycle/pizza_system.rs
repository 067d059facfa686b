use crate::backend;
use crate::boundary::http::HttpBackend;
use crate::boundary::{BoundaryError, CatalogSource, OrderBoundary};
use crate::catalog::RetryPolicy;
use crate::config::{AppConfig, ConfigError};
use crate::session::{CustomerStore, JsonFileCustomerStore, MemoryCustomerStore, Session};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not set up the order backend: {0}")]
    Backend(#[from] BoundaryError),

    #[error("Backend task failed: {0}")]
    TaskFailed(String),
}

/// The runtime orchestrator for the ordering system.
///
/// `PizzaSystem` is responsible for:
/// - **Backend Selection**: the REST backend when a base URL is configured,
///   otherwise the in-process order store
/// - **Lifecycle Management**: starting and stopping the store actor
/// - **Dependency Wiring**: handing every [`Session`] the same boundaries,
///   customer store and retry policy
///
/// # Example
///
/// ```ignore
/// let system = PizzaSystem::in_memory();
/// let session = system.open_session().await;
///
/// session.add_ingredient("Cheese").await?;
/// session.add_ingredient("Corn").await?;
/// session.add_to_cart().await?;
/// let record = session.submit_order(&details).await?;
///
/// // Sessions hold backend handles; drop them before shutting down.
/// drop(session);
/// system.shutdown().await?;
/// ```
pub struct PizzaSystem {
    orders: Arc<dyn OrderBoundary>,
    catalog: Arc<dyn CatalogSource>,
    prefs: Arc<dyn CustomerStore>,
    retry: RetryPolicy,

    /// Task handles for running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PizzaSystem {
    /// In-process backend with in-memory customer details.
    ///
    /// Must be called within a Tokio runtime.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryCustomerStore::new()), RetryPolicy::default())
    }

    /// Builds the system described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, SystemError> {
        let prefs = Arc::new(JsonFileCustomerStore::new(&config.customer_file));
        match &config.api_base_url {
            Some(base_url) => {
                let http = Arc::new(HttpBackend::new(base_url.clone(), config.http_timeout)?);
                info!(%base_url, "Using REST backend");
                Ok(Self {
                    orders: http.clone(),
                    catalog: http,
                    prefs,
                    retry: config.catalog_retry,
                    handles: Vec::new(),
                })
            }
            None => Ok(Self::with_store(prefs, config.catalog_retry)),
        }
    }

    fn with_store(prefs: Arc<dyn CustomerStore>, retry: RetryPolicy) -> Self {
        let (store_actor, backend) = backend::new();
        let handle = tokio::spawn(store_actor.run());
        let backend = Arc::new(backend);
        info!("Using in-process backend");
        Self {
            orders: backend.clone(),
            catalog: backend,
            prefs,
            retry,
            handles: vec![handle],
        }
    }

    /// Opens a new customer session against this system's backend.
    pub async fn open_session(&self) -> Session {
        Session::open(
            self.orders.clone(),
            self.catalog.clone(),
            self.prefs.clone(),
            self.retry,
        )
        .await
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the system's backend handles closes the store's channel once
    /// no session holds one anymore; the store task then finishes its loop.
    /// Returns an error if any task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.orders);
        drop(self.catalog);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Backend task failed: {:?}", e);
                return Err(SystemError::TaskFailed(format!("{:?}", e)));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
