use postboard_api::app::{self, AppConfig};

#[tokio::main]
async fn main() {
    postboard_observability::init();

    let config = AppConfig {
        database_url: std::env::var("DATABASE_URL").ok(),
    };
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = app::build_app(config)
        .await
        .expect("failed to build application");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
