//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.frontdesk/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::carousel::{
    CarouselConfig, DEFAULT_INTERVAL_MS, DEFAULT_SWIPE_THRESHOLD, KeyboardScope,
};
use crate::core::form::DEFAULT_MESSAGE_LIMIT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FrontdeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselSection,
    #[serde(default)]
    pub form: FormSection,
    #[serde(default)]
    pub viewport: ViewportSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub content_file: Option<String>,
    pub default_page: Option<String>,
    pub start_page: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CarouselSection {
    pub interval_ms: Option<u64>,
    pub swipe_threshold: Option<i32>,
    pub keyboard_scope: Option<KeyboardScope>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormSection {
    pub message_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ViewportSection {
    pub back_to_top_threshold: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PAGE: &str = "home";
pub const DEFAULT_LOG_LEVEL: &str = "debug";
/// Rows scrolled before the back-to-top control appears.
pub const DEFAULT_BACK_TO_TOP_THRESHOLD: u16 = 15;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means the bundled site.
    pub content_file: Option<PathBuf>,
    pub log_level: String,
    pub site: SiteSettings,
}

/// Everything the composition root needs to wire the site.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub default_page: String,
    /// Initial fragment, as if the site was opened with `#start_page`.
    pub start_page: Option<String>,
    pub carousel: CarouselConfig,
    pub message_limit: usize,
    pub back_to_top_threshold: u16,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE.to_string(),
            start_page: None,
            carousel: CarouselConfig::default(),
            message_limit: DEFAULT_MESSAGE_LIMIT,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
        }
    }
}

/// Overrides from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub content_file: Option<PathBuf>,
    pub start_page: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.frontdesk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".frontdesk").join("config.toml"))
}

/// Load config from `~/.frontdesk/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FrontdeskConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FrontdeskConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FrontdeskConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FrontdeskConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FrontdeskConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: FrontdeskConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Frontdesk Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# content_file = "/path/to/site.toml"   # Or set FRONTDESK_CONTENT; bundled site if unset
# default_page = "home"                 # Fallback for unknown fragments
# start_page = "initiatives"            # Or set FRONTDESK_START_PAGE / --page
# log_level = "debug"                   # "error", "warn", "info", "debug", "trace"

# [carousel]
# interval_ms = 8000
# swipe_threshold = 50
# keyboard_scope = "global"             # "global" or "visible" (carousel page only)

# [form]
# message_limit = 1000

# [viewport]
# back_to_top_threshold = 15            # Rows
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FrontdeskConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Content file: CLI → env → config → bundled
    let content_file = cli
        .content_file
        .clone()
        .or_else(|| std::env::var("FRONTDESK_CONTENT").ok().map(PathBuf::from))
        .or_else(|| config.general.content_file.as_ref().map(PathBuf::from));

    // Start page: CLI → env → config → none
    let start_page = cli
        .start_page
        .clone()
        .or_else(|| std::env::var("FRONTDESK_START_PAGE").ok())
        .or_else(|| config.general.start_page.clone());

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("FRONTDESK_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let carousel = CarouselConfig {
        interval_ms: config.carousel.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS),
        swipe_threshold: config
            .carousel
            .swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD),
        keyboard_scope: config.carousel.keyboard_scope.unwrap_or_default(),
    };

    ResolvedConfig {
        content_file,
        log_level,
        site: SiteSettings {
            default_page: config
                .general
                .default_page
                .clone()
                .unwrap_or_else(|| DEFAULT_PAGE.to_string()),
            start_page,
            carousel,
            message_limit: config.form.message_limit.unwrap_or(DEFAULT_MESSAGE_LIMIT),
            back_to_top_threshold: config
                .viewport
                .back_to_top_threshold
                .unwrap_or(DEFAULT_BACK_TO_TOP_THRESHOLD),
        },
    }
}
