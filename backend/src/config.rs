//! Process configuration, from command-line flags or environment variables.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "phonebook-server", about = "Phonebook REST service")]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// SQLite URL of the persistent store. Without one the phonebook
    /// lives in memory, seeded with the starter entries.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Directory of static frontend assets served for non-API paths
    #[arg(long, env = "STATIC_DIR", default_value = "build")]
    pub static_dir: PathBuf,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "phonebook-server",
            "--port",
            "8080",
            "--bind",
            "127.0.0.1",
            "--database-url",
            "sqlite:test.db",
            "--static-dir",
            "dist",
        ])
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("sqlite:test.db"));
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
    }

    // The only test touching DATABASE_URL, so parallel tests don't race on it
    #[test]
    fn test_database_url_from_environment() {
        std::env::remove_var("DATABASE_URL");
        let config = Config::try_parse_from(["phonebook-server"]).unwrap();
        assert!(config.database_url.is_none());

        std::env::set_var("DATABASE_URL", "sqlite:from-env.db");
        let config = Config::try_parse_from(["phonebook-server"]);
        std::env::remove_var("DATABASE_URL");

        assert_eq!(config.unwrap().database_url.as_deref(), Some("sqlite:from-env.db"));
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Config::try_parse_from(["phonebook-server", "--port", "not-a-port"]).is_err());
    }
}
