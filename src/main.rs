//! The `bookshelf` server binary.

// Dependencies of the library crate.
use async_graphql as _;
use async_graphql_axum as _;
use axum as _;
use parking_lot as _;
use serde as _;
use thiserror as _;
use tower_http as _;
use tracing as _;
use tracing_subscriber as _;
#[cfg(test)]
use reqwest as _;
#[cfg(test)]
use serde_json as _;

use bookshelf::{BookStore, Config, ServeError, build_schema, logging, server::serve};
use clap::Parser as _;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        },
    }
}

/// Prints the schema or serves until shutdown, depending on the configuration.
async fn run() -> Result<(), ServeError> {
    let config = Config::parse();

    if config.print_schema {
        print!("{}", build_schema(BookStore::new(config.id_assignment)).sdl());
        return Ok(());
    }

    logging::init(&config.log_level);
    serve(&config, config.store()).await
}
