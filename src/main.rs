use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use tokio::net::TcpListener;
use todo_htmx::{
    api,
    config::{ApiConfig, Cli, Command, ServeConfig},
    db::Db,
    routes,
    store::HttpStore,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Command::Serve(config) => serve(config).await,
        Command::Api(config) => serve_api(config).await,
    }
}

async fn serve(config: ServeConfig) -> Result<()> {
    let store = HttpStore::new(config.api_base);
    info!("todos are read from {}", store.base());
    run(config.listen, routes::router(Arc::new(store))).await
}

async fn serve_api(config: ApiConfig) -> Result<()> {
    let db = Db::new_with_path(&config.db_path)
        .with_context(|| format!("could not open database at {}", config.db_path))?;
    run(config.listen, api::router(db)).await
}

async fn run(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {}", addr))?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
