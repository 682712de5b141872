use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        http::{HeaderName, header},
        routing::{any, get},
    },
    pedido_sync::services::change_feed::ChangeFeed,
    sqlx::postgres::PgPoolOptions,
    std::{env, time::Duration},
    tokio::signal,
    tower::ServiceBuilder,
    tower_http::{
        cors::{Any, CorsLayer},
        timeout::TimeoutLayer,
    },
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pedido_sync=info,tower_http=info".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&database_url)
        .await
        .expect("failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let state = pedido_sync::AppState {
        pool,
        changes: ChangeFeed::new(),
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_headers([
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        HeaderName::from_static("x-client-info"),
        HeaderName::from_static("apikey"),
    ]);

    let app = Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/webhook", any(pedido_sync::adapters::webhook::webhook_entry))
        .route(
            "/cost-settings/{user_id}",
            get(pedido_sync::adapters::dashboard::get_cost_settings)
                .put(pedido_sync::adapters::dashboard::put_cost_settings),
        )
        .route(
            "/metrics/{user_id}",
            get(pedido_sync::adapters::dashboard::get_metrics),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(cors)
                // 256 KB: gateway payloads carry full item lists but stay small.
                .layer(DefaultBodyLimit::max(256 * 1024)),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    tracing::info!("listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
