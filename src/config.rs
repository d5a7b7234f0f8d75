//! Command-line and environment configuration.

use crate::store::{BookStore, IdAssignment};
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// The port the server listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 4000;

/// A GraphQL server exposing CRUD operations over an in-memory collection of books.
#[derive(Clone, Debug, Parser)]
#[command(name = "bookshelf", version, about, long_about = None)]
pub struct Config {
    /// Address to bind to.
    #[arg(short = 'H', long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED), env = "BOOKSHELF_HOST")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "BOOKSHELF_PORT")]
    pub port: u16,

    /// How ids of added books are chosen.
    #[arg(long, value_enum, default_value_t = IdAssignment::Length, env = "BOOKSHELF_ID_ASSIGNMENT")]
    pub id_assignment: IdAssignment,

    /// Log filter used when `RUST_LOG` is unset (error, warn, info, debug, trace).
    #[arg(long, default_value = "info", env = "BOOKSHELF_LOG")]
    pub log_level: String,

    /// Start without the seed books.
    #[arg(long)]
    pub empty: bool,

    /// Print the GraphQL schema and exit.
    #[arg(long)]
    pub print_schema: bool,
}

impl Config {
    /// The address to listen on.
    #[inline]
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Builds the store the server starts with.
    #[inline]
    #[must_use]
    pub fn store(&self) -> BookStore {
        if self.empty {
            BookStore::new(self.id_assignment)
        } else {
            BookStore::seeded(self.id_assignment)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("bookshelf").chain(args.iter().copied()))
            .expect("Arguments should parse")
    }

    #[test]
    fn defaults_match_the_reference_server() {
        let config = parse(&[]);

        assert_eq!(
            config.socket_addr(),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 4000)
        );
        assert_eq!(config.id_assignment, IdAssignment::Length);
        assert_eq!(config.log_level, "info");
        assert!(!config.print_schema);
        assert_eq!(config.store().len(), 2);
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "-H",
            "127.0.0.1",
            "--port",
            "8081",
            "--id-assignment",
            "counter",
            "--empty",
        ]);

        assert_eq!(config.socket_addr(), SocketAddr::from(([127, 0, 0, 1], 8081)));
        assert_eq!(config.id_assignment, IdAssignment::Counter);
        assert!(config.store().is_empty());
    }

    #[test]
    fn rejects_unknown_id_assignment() {
        let result = Config::try_parse_from(["bookshelf", "--id-assignment", "random"]);

        assert!(result.is_err());
    }
}
