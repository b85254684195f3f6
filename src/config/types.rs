//! Configuration types and CLI options.
//!
//! Every option can be given as a flag or through its environment variable;
//! flags take precedence.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, ValueEnum};

use crate::config::constants::{
    ASN_DB_FILE, CITY_DB_FILE, DEFAULT_LISTEN_ADDR, DEFAULT_LISTEN_HOST,
};
use crate::config::discovery::{database_search_dirs, find_database};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for log shippers
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration, parsed from the command line and environment.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use ipwhere::Config;
///
/// let config = Config::parse_from(["ipwhere", "--city-db", "city.mmdb", "--asn-db", "asn.mmdb"]);
/// assert!(!config.headless);
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ipwhere",
    version,
    about = "IP geolocation lookup server using DB-IP databases",
    long_about = "IP geolocation lookup server using DB-IP databases.\n\n\
                  Pass an IP address as the only argument to print its lookup as JSON and exit."
)]
pub struct Config {
    /// Address to listen on (`:PORT` listens on all interfaces)
    #[arg(short = 'l', long = "listen", env = "LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// Run in headless mode (API only, no frontend)
    #[arg(
        short = 'H',
        long,
        env = "HEADLESS",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub headless: bool,

    /// Enable online features (reverse DNS lookup)
    #[arg(
        long = "enable-online-features",
        visible_alias = "online",
        env = "ENABLE_ONLINE_FEATURES",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub enable_online_features: bool,

    /// Path to the city MMDB database
    #[arg(long = "city-db", env = "CITY_DB_PATH")]
    pub city_db: Option<PathBuf>,

    /// Path to the ASN MMDB database
    #[arg(long = "asn-db", env = "ASN_DB_PATH")]
    pub asn_db: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// IP address to look up once and print as JSON (CLI mode)
    #[arg(value_name = "IP")]
    pub ip: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN_ADDR.to_string(),
            headless: false,
            enable_online_features: false,
            city_db: None,
            asn_db: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            ip: None,
        }
    }
}

impl Config {
    /// Returns the address to bind, expanding a bare `:PORT` to all interfaces.
    pub fn bind_address(&self) -> String {
        let listen = self.listen.trim();
        if listen.starts_with(':') {
            format!("{}{}", DEFAULT_LISTEN_HOST, listen)
        } else {
            listen.to_string()
        }
    }

    /// Whether a one-shot lookup was requested instead of running the server.
    pub fn is_cli_mode(&self) -> bool {
        self.ip.is_some()
    }

    /// Resolves the city and ASN database paths.
    ///
    /// Explicit paths win. Missing ones are searched for next to the executable,
    /// in the container data directory, then in `./data`. Returns `None` when
    /// either database cannot be located.
    pub fn resolve_database_paths(&self) -> Option<(PathBuf, PathBuf)> {
        let search_dirs = database_search_dirs();
        let city = find_database(self.city_db.as_deref(), CITY_DB_FILE, &search_dirs)?;
        let asn = find_database(self.asn_db.as_deref(), ASN_DB_FILE, &search_dirs)?;
        Some((city, asn))
    }
}
