//! A GraphQL server exposing CRUD operations over an in-memory collection of books.
//!
//! The [`BookStore`] owns the books and implements the five operations. [`build_schema`] wires
//! it into the `Query` and `Mutation` roots, and [`server::serve`] exposes the schema over HTTP.

// Only used by the integration tests.
#[cfg(test)]
use reqwest as _;
#[cfg(test)]
use serde_json as _;

pub mod config;
pub use config::Config;

pub mod errors;
pub use errors::ServeError;

pub mod logging;

pub mod model;
pub use model::{Book, BookUpdate, NewBook};

pub mod schema;
pub use schema::{BookSchema, build_schema};

pub mod server;

pub mod store;
pub use store::{BookStore, IdAssignment};
