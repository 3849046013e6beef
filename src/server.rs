//! Router assembly, middleware and the listener lifecycle.

use std::future::Future;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tokio::net::TcpListener;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{Config, CorsConfig};
use crate::error::{ConfigError, ServeError};
use crate::routes;

/// Build the application router with its middleware stack.
///
/// Layers, outermost first: request tracing, CORS (only when origins are
/// configured), then a concurrency limit shared by every route.
pub fn build_router(config: &Config) -> Result<Router, ConfigError> {
    let mut app = routes::router().layer(GlobalConcurrencyLimitLayer::new(
        config.server.max_concurrent_requests,
    ));

    if let Some(cors) = cors_layer(&config.cors)? {
        app = app.layer(cors);
    }

    Ok(app.layer(TraceLayer::new_for_http()))
}

/// CORS layer for the configured origins, `None` when CORS is off.
fn cors_layer(cors: &CorsConfig) -> Result<Option<CorsLayer>, ConfigError> {
    if !cors.enabled() {
        return Ok(None);
    }

    let allow_origin = if cors.allows_any() {
        AllowOrigin::any()
    } else {
        let origins = cors
            .allowed_origins
            .iter()
            .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([header::CONTENT_TYPE]),
    ))
}

/// Bind the configured address and serve until SIGINT/SIGTERM.
pub async fn run(config: Config) -> Result<(), ServeError> {
    let listener = TcpListener::bind(&config.server.listen)
        .await
        .map_err(|source| ServeError::Bind {
            addr: config.server.listen.clone(),
            source,
        })?;

    serve(listener, &config, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, config: &Config, shutdown: F) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(config)?;
    let addr = listener.local_addr()?;

    if config.cors.enabled() {
        info!("CORS enabled for {:?}", config.cors.allowed_origins);
    }
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Shutting down...");
    Ok(())
}

/// Resolves on SIGINT, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    () = ctrl_c => info!("Received SIGINT"),
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                }
            }
            Err(e) => {
                warn!("Failed to register SIGTERM handler: {e}");
                ctrl_c.await;
                info!("Received SIGINT");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await;
        info!("Received SIGINT");
    }
}
