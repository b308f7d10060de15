use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use waybill_issuer::policy::DEFAULT_MAX_ATTEMPTS;

pub const LISTEN_ADDR_ENV: &str = "WAYBILL_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "WAYBILL_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "WAYBILL_MYSQL_DSN";
pub const MYSQL_INIT_SCHEMA_ENV: &str = "WAYBILL_MYSQL_INIT_SCHEMA";
pub const MAX_ATTEMPTS_ENV: &str = "WAYBILL_ISSUER_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "WAYBILL_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "waybill-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    /// Create the tracking code table on startup if it is missing.
    #[arg(long, env = MYSQL_INIT_SCHEMA_ENV)]
    pub init_schema: bool,

    /// Generate-and-register attempts per request before giving up.
    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}
