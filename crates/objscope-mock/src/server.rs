use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::MockConfig;
use crate::error::{MockError, MockResult};
use crate::router::build_router;
use crate::store::InMemoryDocumentStore;

/// Mock object store server.
pub struct MockServer {
    config: MockConfig,
    store: Arc<InMemoryDocumentStore>,
}

impl MockServer {
    pub fn new(config: MockConfig) -> Self {
        let store = Arc::new(InMemoryDocumentStore::new(config.deletion_sentinel));
        Self { config, store }
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// The backing store, for seeding or inspecting documents directly.
    pub fn store(&self) -> Arc<InMemoryDocumentStore> {
        Arc::clone(&self.store)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.store.clone())
    }

    /// Start serving requests on the configured address.
    pub async fn serve(self) -> MockResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("objscope mock listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| MockError::Internal(e.to_string()))
    }

    /// Serve on an ephemeral localhost port in a background task.
    ///
    /// The configured bind address is ignored. The task stops when the
    /// returned handle is dropped.
    pub async fn spawn_local(self) -> MockResult<RunningMock> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let app = self.router();
        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::warn!("objscope mock on {addr} stopped: {e}");
            }
        });
        tracing::debug!("objscope mock listening on {addr}");
        Ok(RunningMock {
            addr,
            store: self.store,
            task,
        })
    }
}

/// A mock server running in the background.
pub struct RunningMock {
    addr: SocketAddr,
    store: Arc<InMemoryDocumentStore>,
    task: JoinHandle<()>,
}

impl RunningMock {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL to connect a client to, e.g. `http://127.0.0.1:41234`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn store(&self) -> Arc<InMemoryDocumentStore> {
        Arc::clone(&self.store)
    }
}

impl Drop for RunningMock {
    fn drop(&mut self) {
        self.task.abort();
    }
}
