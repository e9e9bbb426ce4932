//! Portal configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PORTAL_BASE_URL` - Public URL of the site (canonical links, sitemap)
//! - `PORTAL_ADMIN_PASSWORD` - Password for the built-in admin login (high entropy)
//!
//! ## Optional
//! - `PORTAL_HOST` - Bind address (default: 127.0.0.1)
//! - `PORTAL_PORT` - Listen port (default: 3000)
//! - `PORTAL_ADMIN_EMAIL` - Email for the built-in admin login (default: admin@sankalp.com)
//! - `BACKEND_URL` - Course backend origin (default: <http://localhost:5000>)
//! - `BACKEND_TIMEOUT_SECS` - Per-request timeout for backend calls (default: 15)
//! - `PORTAL_SEO_ENABLED` - Emit the full SEO head (default: true)
//! - `PORTAL_LANDING_PAGES` - Serve the extra SEO landing paths (default: true)
//! - `PORTAL_PARTICLES` - Render particle backgrounds (default: true)
//! - `PORTAL_SHOW_FEATURES` - Show the Features section (default: false)
//! - `PORTAL_SHOW_WHY_CHOOSE` - Show the Why Choose section (default: false)
//! - `PORTAL_PAYMENT_QR` - Image URL of the payment QR code
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use sankalp_core::Email;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

const DEFAULT_ADMIN_EMAIL: &str = "admin@sankalp.com";
const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 15;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "admin",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Portal application configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL, without a trailing slash
    pub base_url: String,
    /// Course backend connection settings
    pub backend: BackendConfig,
    /// Built-in admin login
    pub admin: AdminCredential,
    /// Feature switches for optional page behaviour
    pub features: FeatureFlags,
    /// Payment QR code image shown on the course registration form
    pub payment_qr_url: Option<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Course backend settings.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Origin of the backend, e.g. `http://localhost:5000`
    pub url: Url,
    /// Timeout applied to every backend request
    pub timeout: Duration,
}

/// The admin credential pair that short-circuits login.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredential {
    pub email: Email,
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Switches for the page variants the site can be deployed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FeatureFlags {
    /// Full SEO head (keywords, canonical, Open Graph, Twitter, JSON-LD)
    pub seo: bool,
    /// The eight keyword landing paths in addition to `/` and `/getstarted`
    pub landing_pages: bool,
    /// Animated particle backgrounds
    pub particles: bool,
    /// Features section on the home page
    pub show_features: bool,
    /// Why Choose section on the home page
    pub show_why_choose: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seo: true,
            landing_pages: true,
            particles: true,
            show_features: false,
            show_why_choose: false,
        }
    }
}

impl PortalConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the admin password fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PORTAL_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORTAL_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_PORT".to_string(), e.to_string()))?;
        let base_url = parse_base_url("PORTAL_BASE_URL", &get_required_env("PORTAL_BASE_URL")?)?;

        Ok(Self {
            host,
            port,
            base_url,
            backend: BackendConfig::from_env()?,
            admin: AdminCredential::from_env()?,
            features: FeatureFlags::from_env()?,
            payment_qr_url: get_optional_env("PORTAL_PAYMENT_QR"),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl BackendConfig {
    /// Load the backend settings on their own, for tools that only talk to
    /// the backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `BACKEND_URL` or `BACKEND_TIMEOUT_SECS` is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = get_env_or_default("BACKEND_URL", DEFAULT_BACKEND_URL);
        let url = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidEnvVar("BACKEND_URL".to_string(), e.to_string()))?;
        let timeout_secs = get_env_or_default(
            "BACKEND_TIMEOUT_SECS",
            &DEFAULT_BACKEND_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("BACKEND_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl AdminCredential {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_email = get_env_or_default("PORTAL_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL);
        let email = Email::parse(&raw_email).map_err(|e| {
            ConfigError::InvalidEnvVar("PORTAL_ADMIN_EMAIL".to_string(), e.to_string())
        })?;

        Ok(Self {
            email,
            password: get_validated_secret("PORTAL_ADMIN_PASSWORD")?,
        })
    }
}

impl FeatureFlags {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            seo: get_bool_env("PORTAL_SEO_ENABLED", defaults.seo)?,
            landing_pages: get_bool_env("PORTAL_LANDING_PAGES", defaults.landing_pages)?,
            particles: get_bool_env("PORTAL_PARTICLES", defaults.particles)?,
            show_features: get_bool_env("PORTAL_SHOW_FEATURES", defaults.show_features)?,
            show_why_choose: get_bool_env("PORTAL_SHOW_WHY_CHOOSE", defaults.show_why_choose)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a boolean switch.
fn get_bool_env(key: &str, default: bool) -> Result<bool, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |raw| parse_bool(key, &raw))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected true/false, got '{other}'"),
        )),
    }
}

/// Validate an absolute http(s) URL and strip its trailing slash.
fn parse_base_url(key: &str, raw: &str) -> Result<String, ConfigError> {
    let url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be an http or https URL".to_string(),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}
