//! The HTTP transport: GraphQL over `POST /` and the GraphiQL explorer on `GET /`.

use crate::{
    config::Config,
    errors::ServeError,
    schema::{BookSchema, build_schema},
    store::BookStore,
};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Router, extract::State, response::Html, routing::get};
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

/// The path both the endpoint and the explorer are served on.
const ENDPOINT: &str = "/";

/// Runs a GraphQL request against the schema.
async fn graphql_handler(
    State(schema): State<BookSchema>,
    graphql_request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(graphql_request.into_inner()).await.into()
}

/// Serves the interactive explorer.
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

/// The URL printed on startup. An unspecified bind address is shown as `localhost`.
fn listening_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}/", addr.port())
    } else {
        format!("http://{addr}/")
    }
}

/// Builds the router for a schema.
#[inline]
pub fn router(schema: BookSchema) -> Router {
    Router::new()
        .route(ENDPOINT, get(graphiql).post(graphql_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Binds to the configured address and serves `store` until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails while running.
#[inline]
pub async fn serve(config: &Config, store: BookStore) -> Result<(), ServeError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    let addr = listener
        .local_addr()
        .map_err(|source| ServeError::Bind { addr, source })?;

    info!(%addr, id_assignment = ?config.id_assignment, books = store.len(), "starting server");
    println!("🚀 Server listening at: {}", listening_url(addr));

    axum::serve(listener, router(build_schema(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServeError::Serve { addr, source })?;

    info!("server stopped");
    Ok(())
}

/// Completes on the first Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => drop(stream.recv().await),
            Err(err) => {
                error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IdAssignment;
    use clap::Parser as _;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn unspecified_address_is_shown_as_localhost() {
        let v4 = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 4000);
        let v6 = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 4000);

        assert_eq!(listening_url(v4), "http://localhost:4000/");
        assert_eq!(listening_url(v6), "http://localhost:4000/");
    }

    #[test]
    fn specific_address_is_shown_as_is() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 8081));

        assert_eq!(listening_url(addr), "http://127.0.0.1:8081/");
    }

    #[tokio::test]
    async fn serve_reports_taken_port() {
        let taken = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let addr = taken
            .local_addr()
            .expect("Failed to get local address from listener");
        let port = addr.port().to_string();
        let config = Config::try_parse_from(["bookshelf", "-H", "127.0.0.1", "--port", &port])
            .expect("Arguments should parse");

        let result = serve(&config, BookStore::new(IdAssignment::Length)).await;

        assert!(
            matches!(result, Err(ServeError::Bind { addr: failed, .. }) if failed == addr),
            "{result:?}"
        );
    }
}
