use crate::{app::build_router, state::AppState, utils::shutdown::shutdown_signal};
use catalog::{CatalogClient, CatalogSource, DEFAULT_BASE_URL};
use log::info;
use std::sync::Arc;
use store::{DocumentStore, SqlDocumentStore, db};

mod app;
mod doc;
mod dtos;
mod error;
mod routes;
mod services;
mod state;
mod utils;

#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let connection = db::create_connection()
        .await
        .expect("Failed to connect to the document store");
    db::init_schema(&connection)
        .await
        .expect("Failed to initialize the document store schema");

    let store: Arc<dyn DocumentStore> = Arc::new(SqlDocumentStore::new(connection));

    let catalog_base =
        std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
    let catalog: Arc<dyn CatalogSource> =
        Arc::new(CatalogClient::with_base_url(reqwest::Client::new(), catalog_base));

    let app = build_router(AppState::new(store, catalog));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(8080);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap_or_else(|err| panic!("Failed to bind port {port}: {err}"));
    info!("Listening on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
