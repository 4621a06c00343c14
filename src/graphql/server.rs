use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::Result;

use super::schema::BlogSchema;

#[derive(Clone)]
struct ServerState {
    schema: BlogSchema,
    endpoint: Arc<str>,
}

async fn graphql_handler(State(state): State<ServerState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphiql(State(state): State<ServerState>) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(&state.endpoint).finish())
}

/// Build the HTTP router: `POST <path>` executes requests, `GET <path>`
/// serves GraphiQL when the playground is enabled.
pub fn router(schema: BlogSchema, settings: &ServerSettings) -> Router {
    let state = ServerState {
        schema,
        endpoint: Arc::from(settings.path.as_str()),
    };

    let route = if settings.playground {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new().route(&settings.path, route).with_state(state)
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, schema: BlogSchema, settings: &ServerSettings) -> Result<()> {
    let app = router(schema, settings);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn run_server(schema: BlogSchema, settings: &ServerSettings) -> Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, path = %settings.path, playground = settings.playground, "GraphQL server listening");
    serve(listener, schema, settings).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
