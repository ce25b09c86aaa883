use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tether_service::settings::{DEFAULT_CAS_MAX_ATTEMPTS, DEFAULT_MAX_GENERATE_ATTEMPTS};
use tether_service::{ClickConsistency, ServiceSettings};

use crate::app::App;

pub const LISTEN_ADDR_ENV: &str = "TETHER_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "TETHER_PUBLIC_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "TETHER_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "TETHER_REDIS_URL";
pub const REDIS_KEY_PREFIX_ENV: &str = "TETHER_REDIS_KEY_PREFIX";
pub const CODE_LENGTH_ENV: &str = "TETHER_CODE_LENGTH";
pub const MAX_GENERATE_ATTEMPTS_ENV: &str = "TETHER_MAX_GENERATE_ATTEMPTS";
pub const CLICK_CONSISTENCY_ENV: &str = "TETHER_CLICK_CONSISTENCY";
pub const CAS_MAX_ATTEMPTS_ENV: &str = "TETHER_CAS_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "TETHER_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_CODE_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClickConsistencyArg {
    #[value(name = "last-writer-wins")]
    LastWriterWins,
    #[value(name = "compare-and-swap")]
    CompareAndSwap,
}

impl Display for ClickConsistencyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClickConsistencyArg::LastWriterWins => write!(f, "last-writer-wins"),
            ClickConsistencyArg::CompareAndSwap => write!(f, "compare-and-swap"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "tether", about = "Short-link redirector for URLs and text")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Origin prepended to short codes in returned short URLs.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(
        long,
        env = REDIS_KEY_PREFIX_ENV,
        default_value = tether_storage::redis::DEFAULT_KEY_PREFIX
    )]
    pub redis_key_prefix: String,

    #[arg(long, env = CODE_LENGTH_ENV, default_value_t = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,

    #[arg(long, env = MAX_GENERATE_ATTEMPTS_ENV, default_value_t = DEFAULT_MAX_GENERATE_ATTEMPTS)]
    pub max_generate_attempts: u32,

    #[arg(
        long,
        env = CLICK_CONSISTENCY_ENV,
        value_enum,
        default_value_t = ClickConsistencyArg::LastWriterWins
    )]
    pub click_consistency: ClickConsistencyArg,

    #[arg(long, env = CAS_MAX_ATTEMPTS_ENV, default_value_t = DEFAULT_CAS_MAX_ATTEMPTS)]
    pub cas_max_attempts: u32,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn service_settings(&self) -> ServiceSettings {
        let click_consistency = match self.click_consistency {
            ClickConsistencyArg::LastWriterWins => ClickConsistency::LastWriterWins,
            ClickConsistencyArg::CompareAndSwap => ClickConsistency::CompareAndSwap {
                max_attempts: self.cas_max_attempts,
            },
        };

        ServiceSettings::builder()
            .max_generate_attempts(self.max_generate_attempts)
            .click_consistency(click_consistency)
            .reserved_codes(App::RESERVED_PATHS.map(String::from).to_vec())
            .build()
    }
}
