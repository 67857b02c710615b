//! HTTP mount for the two schemas.
//!
//! Each schema gets one route. `POST` executes a GraphQL request; `GET` serves
//! GraphiQL pointed at the same path, or executes the query string when the
//! console is disabled.

use async_graphql::{Executor, http::GraphiQLSource};
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::Html,
    routing::{MethodRouter, get, get_service},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{ServerSettings, ShelfConfig};
use crate::error::{Result, ShelfError};
use crate::graphql::{build_hello_schema, build_library_schema};
use crate::storage::SharedLibrary;

/// Builds the router serving both schemas, with `library` backing the
/// authors/books schema.
pub fn build_app(config: &ShelfConfig, library: SharedLibrary) -> Router {
    let server = &config.server;
    let hello = build_hello_schema(config.demo.message_delay());
    let library = build_library_schema(library);

    Router::new()
        .route(
            &server.hello_path,
            mount(hello, &server.hello_path, server.graphiql),
        )
        .route(
            &server.library_path,
            mount(library, &server.library_path, server.graphiql),
        )
        .layer(TraceLayer::new_for_http())
}

fn mount<E: Executor>(executor: E, path: &str, graphiql: bool) -> MethodRouter {
    let service = GraphQL::new(executor);
    if graphiql {
        let html = GraphiQLSource::build().endpoint(path).finish();
        get(move || async move { Html(html) }).post_service(service)
    } else {
        get_service(service.clone()).post_service(service)
    }
}

/// Binds the configured address without serving yet.
pub async fn bind(settings: &ServerSettings) -> Result<TcpListener> {
    let addr = settings.bind_address();
    TcpListener::bind(&addr)
        .await
        .map_err(|e| ShelfError::Server(format!("Failed to bind {}: {}", addr, e)))
}

/// Serves both schemas on an already bound listener until Ctrl-C.
pub async fn serve(
    listener: TcpListener,
    config: &ShelfConfig,
    library: SharedLibrary,
) -> Result<()> {
    let app = build_app(config, library);
    let addr = listener.local_addr()?;

    tracing::info!(
        %addr,
        hello = %config.server.hello_path,
        library = %config.server.library_path,
        graphiql = config.server.graphiql,
        "GraphQL server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ShelfError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
