//! # HTTP Runtime
//!
//! Serves the quote evaluation engine over a small REST API. The runtime
//! state is immutable: every request builds its evaluation from scratch, so
//! concurrent requests share nothing but the evaluator and the clock.

use chrono::{DateTime, Utc};
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tenderscore_core::QuoteEvaluator;
use tokio::net::TcpListener;

use crate::runtime::shutdown::shutdown_signal;

/// Source of the evaluation time for each request.
pub type Clock = fn() -> DateTime<Utc>;

/// HTTP server state shared by all handlers
#[derive(Debug, Clone)]
pub struct HttpEvaluationRuntime {
    pub evaluator: Arc<QuoteEvaluator>,
    clock: Clock,
}

/// HTTP runtime configuration
#[derive(Debug, Clone)]
pub struct HttpRuntimeConfig {
    /// Address to bind
    pub host: IpAddr,
    pub port: u16,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
    /// Enable CORS for cross-origin requests
    pub enable_cors: bool,
    /// Enable OpenAPI documentation endpoint
    pub enable_openapi: bool,
}

impl Default for HttpRuntimeConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5001,
            max_body_size: 2 * 1024 * 1024, // 2MB
            enable_cors: true,
            enable_openapi: true,
        }
    }
}

impl HttpRuntimeConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Failure while starting or running the server
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

impl Default for HttpEvaluationRuntime {
    fn default() -> Self {
        Self::new(QuoteEvaluator::new())
    }
}

impl HttpEvaluationRuntime {
    pub fn new(evaluator: QuoteEvaluator) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
            clock: Utc::now,
        }
    }

    /// Replace the wall clock, mainly so tests can pin deadline arithmetic
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Current evaluation time
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Bind and serve until SIGINT or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns `ServeError::Bind` if the address is unavailable and
    /// `ServeError::Serve` if the accept loop fails.
    pub async fn serve(self, config: HttpRuntimeConfig) -> Result<(), ServeError> {
        let addr = config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind { addr, source })?;

        tracing::info!(
            %addr,
            cors = config.enable_cors,
            openapi = config.enable_openapi,
            max_body_size = config.max_body_size,
            "Tenderscore HTTP runtime listening"
        );

        let app = self.router_with_config(&config);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Tenderscore HTTP runtime stopped");
        Ok(())
    }
}
