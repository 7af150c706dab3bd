use axum::{Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};

mod handlers;
mod responses;
mod services;
#[cfg(test)]
mod tests;

use services::facts::mem::FactsStore;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Failed to load dotenv file: {}", e);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store = FactsStore::embedded().expect("Failed to parse embedded facts dataset");

    let index = ServeFile::new("index.html");
    let assets = ServeDir::new("assets");
    let app = Router::new()
        .route("/api/facts", get(handlers::facts::list::<FactsStore>))
        .with_state(store.clone())
        .route(
            "/api/autocomplete",
            get(handlers::facts::autocomplete::<FactsStore>),
        )
        .with_state(store)
        .nest_service("/assets", assets)
        .fallback_service(index);

    let addr = dotenvy::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await.unwrap();
}
