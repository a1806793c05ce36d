use axum::{Router, Server, middleware::from_fn, middleware::from_fn_with_state};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use snapwise_backend::{AppState, db::DbPool};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = snapwise_backend::config::Config::from_env()
        .expect("Failed to load configuration");

    snapwise_backend::init_tracing(&config);

    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .build(manager)
        .expect("Failed to create database connection pool");

    let addr: std::net::SocketAddr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    let state = Arc::new(AppState::new(db, config));

    let cors = if state.config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<axum::http::HeaderValue> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let public_routes = snapwise_backend::routes::public_router(state.clone());

    let protected_routes = snapwise_backend::routes::protected_router(state.clone()).layer(
        from_fn_with_state(
            state.auth_service.clone(),
            snapwise_backend::middleware::auth::auth_middleware,
        ),
    );

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(from_fn(snapwise_backend::middleware::logger::logger));

    tracing::info!(address = %addr, "Server starting");
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}
