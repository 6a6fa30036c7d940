use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "todo-htmx", version, about = "Axum + Maud + Htmx todo list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the todo page, backed by a remote collection endpoint
    Serve(ServeConfig),
    /// Serve the JSON collection endpoint from a local database
    Api(ApiConfig),
}

#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    /// Address the page is served on
    #[arg(long, env = "TODO_LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen: SocketAddr,
    /// Base url of the todo collection
    #[arg(
        long,
        env = "TODO_API_BASE_URL",
        default_value = "http://localhost:8080/api/todos"
    )]
    pub api_base: String,
}

#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// Address the API is served on
    #[arg(long, env = "TODO_API_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,
    /// Directory of the sled database
    #[arg(long = "db", env = "TODO_DB_PATH", default_value = "db")]
    pub db_path: String,
}
