//! Configuration management for folio using the prefer crate.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::DEFAULT_INTERVAL;
use crate::validation::{validate_base_url, validate_email, validate_github_username};

/// Default content file, relative to the config directory or CWD.
pub const DEFAULT_CONTENT_PATH: &str = "data/content.toml";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Resolved application settings.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Site name, used as the default page title.
    pub site_name: String,
    /// Absolute http(s) origin for canonical URLs.
    pub base_url: String,
    pub author: String,
    /// Default page description.
    pub description: String,
    /// Default keywords meta value.
    pub keywords: String,
    /// Default Open Graph / Twitter card image.
    pub og_image: String,
    pub github_username: Option<String>,
    pub email: Option<String>,
    /// Content data file.
    pub content_path: PathBuf,
    /// Disable carousel auto-rotation.
    pub reduced_motion: bool,
    /// Delay between carousel advances.
    pub carousel_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "Portfolio".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            author: String::new(),
            description: "Projects, experience and writing".to_string(),
            keywords: String::new(),
            og_image: "/og-image.png".to_string(),
            github_username: None,
            email: None,
            content_path: PathBuf::from(DEFAULT_CONTENT_PATH),
            reduced_motion: false,
            carousel_interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    /// GitHub profile URL, if a username is configured.
    pub fn github_url(&self) -> Option<String> {
        self.github_username
            .as_ref()
            .map(|u| format!("https://github.com/{}", u))
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Content data file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carousel_interval_ms: Option<u64>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers folio config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("folio").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Get the base directory for resolving relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved against `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    ///
    /// Values that fail validation are dropped with a warning and the
    /// existing setting is kept.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref name) = self.site_name {
            settings.site_name = name.clone();
        }
        if let Some(ref url) = self.base_url {
            let validated = validate_base_url(Some(url.as_str()), None);
            if validated.is_empty() {
                tracing::warn!("Ignoring invalid base_url in config: {}", url);
            } else {
                settings.base_url = validated;
            }
        }
        if let Some(ref author) = self.author {
            settings.author = author.clone();
        }
        if let Some(ref description) = self.description {
            settings.description = description.clone();
        }
        if let Some(ref keywords) = self.keywords {
            settings.keywords = keywords.clone();
        }
        if let Some(ref image) = self.og_image {
            settings.og_image = image.clone();
        }
        if let Some(ref username) = self.github_username {
            match validate_github_username(Some(username.as_str())) {
                Some(valid) => settings.github_username = Some(valid),
                None => tracing::warn!("Ignoring invalid github_username in config: {}", username),
            }
        }
        if let Some(ref email) = self.email {
            match validate_email(Some(email.as_str())) {
                Some(valid) => settings.email = Some(valid),
                None => tracing::warn!("Ignoring invalid email in config"),
            }
        }
        if let Some(ref content) = self.content {
            settings.content_path = self.resolve_path(content, base_dir);
        }
        if let Some(reduced_motion) = self.reduced_motion {
            settings.reduced_motion = reduced_motion;
        }
        if let Some(interval) = self.carousel_interval_ms {
            if interval == 0 {
                tracing::warn!("Ignoring zero carousel_interval_ms in config");
            } else {
                settings.carousel_interval_ms = interval;
            }
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Content file override (--content flag).
    pub content: Option<PathBuf>,
}

/// Load settings, returning the config they were built from as well.
///
/// Precedence, lowest to highest: defaults, config file, environment
/// (`FOLIO_BASE_URL`, `FOLIO_CONTENT`), command-line options.
pub async fn load_settings_with_options(options: LoadOptions) -> (Settings, Config) {
    let config = match options.config_path {
        Some(ref path) => match Config::load_from_path(path).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                Config::default()
            }
        },
        None => Config::load().await,
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base_dir = config.base_dir().unwrap_or_else(|| cwd.clone());

    let mut settings = Settings {
        content_path: cwd.join(DEFAULT_CONTENT_PATH),
        ..Settings::default()
    };
    config.apply_to_settings(&mut settings, &base_dir);

    if let Some(url) = std::env::var("FOLIO_BASE_URL").ok().filter(|s| !s.is_empty()) {
        let validated = validate_base_url(Some(url.as_str()), None);
        if validated.is_empty() {
            tracing::warn!("Ignoring invalid FOLIO_BASE_URL: {}", url);
        } else {
            tracing::debug!("Using FOLIO_BASE_URL from environment: {}", validated);
            settings.base_url = validated;
        }
    }

    if let Some(content) = std::env::var("FOLIO_CONTENT").ok().filter(|s| !s.is_empty()) {
        tracing::debug!("Using FOLIO_CONTENT from environment: {}", content);
        settings.content_path = config.resolve_path(&content, &cwd);
    }

    if let Some(content) = options.content {
        settings.content_path = if content.is_absolute() {
            content
        } else {
            cwd.join(content)
        };
    }

    (settings, config)
}
