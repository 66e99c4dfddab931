//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory (or
//! the file named by `CFTI_CONFIG`), then applies `CFTI_BIND` and
//! `CFTI_LOG_LEVEL` env overrides.  The result is resolved once at startup and
//! never written again; the site record is shared by reference with every page
//! and handler.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;
use crate::logger;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Company details interpolated into every page and logged with submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// USDOT carrier number, displayed only.
    pub usdot: String,
    /// Motor carrier (MC) number, displayed only.
    pub mc: String,
}

/// Output shape of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP listener.
    pub bind: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Delivery backend name; only `"log"` exists.
    pub backend: String,
}

/// Fully-resolved service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub notify: NotifyConfig,
}

/// Env-var overrides applied on top of the TOML file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides<'a> {
    pub bind: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

// ── Raw TOML shape ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    server: RawServer,
    site: RawSite,
    #[serde(default)]
    notify: RawNotify,
}

#[derive(Deserialize)]
struct RawServer {
    #[serde(default = "default_bind")]
    bind: String,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    log_format: LogFormat,
}

impl Default for RawServer {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

#[derive(Deserialize)]
struct RawSite {
    name: String,
    phone: String,
    email: String,
    address: String,
    usdot: String,
    mc: String,
}

#[derive(Deserialize)]
struct RawNotify {
    #[serde(default = "default_notify_backend")]
    backend: String,
}

impl Default for RawNotify {
    fn default() -> Self {
        Self { backend: default_notify_backend() }
    }
}

fn default_bind() -> String { "0.0.0.0:3000".to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_notify_backend() -> String { "log".to_string() }

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load config from `CFTI_CONFIG` or `config/default.toml`, then apply env
/// overrides.
pub fn load() -> Result<Config, AppError> {
    let path = env::var("CFTI_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let bind = env::var("CFTI_BIND").ok();
    let log_level = env::var("CFTI_LOG_LEVEL").ok();

    load_from(
        &path,
        Overrides {
            bind: bind.as_deref(),
            log_level: log_level.as_deref(),
        },
    )
}

/// Load from an explicit path with explicit overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(path: &Path, overrides: Overrides<'_>) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    parse(&raw, overrides)
        .map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
}

fn parse(raw: &str, overrides: Overrides<'_>) -> Result<Config, AppError> {
    let parsed: RawConfig =
        toml::from_str(raw).map_err(|e| AppError::Config(format!("parse error: {e}")))?;

    let site = resolve_site(parsed.site)?;

    let log_level = overrides.log_level.unwrap_or(&parsed.server.log_level).to_string();
    logger::parse_level(&log_level).map_err(|e| AppError::Config(e.to_string()))?;

    Ok(Config {
        server: ServerConfig {
            bind: overrides.bind.unwrap_or(&parsed.server.bind).to_string(),
            log_level,
            log_format: parsed.server.log_format,
        },
        site,
        notify: NotifyConfig {
            backend: parsed.notify.backend,
        },
    })
}

fn resolve_site(raw: RawSite) -> Result<SiteConfig, AppError> {
    let fields = [
        ("name", &raw.name),
        ("phone", &raw.phone),
        ("email", &raw.email),
        ("address", &raw.address),
        ("usdot", &raw.usdot),
        ("mc", &raw.mc),
    ];
    if let Some((key, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(AppError::Config(format!("[site] {key} must not be empty")));
    }

    Ok(SiteConfig {
        name: raw.name.trim().to_string(),
        phone: raw.phone.trim().to_string(),
        email: raw.email.trim().to_string(),
        address: raw.address.trim().to_string(),
        usdot: raw.usdot.trim().to_string(),
        mc: raw.mc.trim().to_string(),
    })
}

// ── test helpers ──────────────────────────────────────────────────────────────

impl SiteConfig {
    /// Fixed company record for tests and local fixtures.
    pub fn sample() -> Self {
        Self {
            name: "CFTI Freight".into(),
            phone: "(555) 010-2030".into(),
            email: "dispatch@cfti.example".into(),
            address: "100 Depot Road, Fresno, CA 93721".into(),
            usdot: "1234567".into(),
            mc: "MC-765432".into(),
        }
    }
}

#[cfg(test)]
impl Config {
    pub fn test_default() -> Self {
        Self {
            server: ServerConfig {
                bind: "127.0.0.1:0".into(),
                log_level: "info".into(),
                log_format: LogFormat::Compact,
            },
            site: SiteConfig::sample(),
            notify: NotifyConfig { backend: "log".into() },
        }
    }
}
