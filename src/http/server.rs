//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;

use super::shutdown;

/// Listener options resolved by the entry point.
///
/// The test/normal-mode decision is made once, where the environment is
/// read, and travels as plain data. With `listen` false the server never
/// touches the network.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub listen: bool,
    pub host: String,
    pub port: u16,
}

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("Failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error("Server error: {0}")]
    Server(std::io::Error),
}

/// Start the HTTP server, unless listening is disabled.
///
/// In normal mode this blocks until the server shuts down. A bind failure
/// is fatal and propagates to the caller; there is no retry.
pub async fn start_server(app: Router, options: &ServeOptions) -> Result<(), ServerError> {
    if !options.listen {
        tracing::info!("Listener disabled (test mode), no socket bound");
        return Ok(());
    }

    let addr: SocketAddr = format!("{}:{}", options.host, options.port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;

    /// Grab a port that is currently free on the loopback interface.
    fn free_port() -> u16 {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn disabled_listener_binds_nothing() {
        let port = free_port();
        let options = ServeOptions {
            listen: false,
            host: "127.0.0.1".to_string(),
            port,
        };

        start_server(create_router(), &options).await.unwrap();

        // The port must still be bindable afterwards.
        std::net::TcpListener::bind(("127.0.0.1", port)).unwrap();
    }

    #[tokio::test]
    async fn bind_conflict_is_fatal() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = occupied.local_addr().unwrap().port();
        let options = ServeOptions {
            listen: true,
            host: "127.0.0.1".to_string(),
            port,
        };

        let err = start_server(create_router(), &options).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind(_)));
    }

    #[tokio::test]
    async fn malformed_host_is_an_address_error() {
        let options = ServeOptions {
            listen: true,
            host: "not a host".to_string(),
            port: 3000,
        };

        let err = start_server(create_router(), &options).await.unwrap_err();
        assert!(matches!(err, ServerError::Addr(_)));
    }
}
