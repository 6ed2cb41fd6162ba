//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USERS_API_*` environment variables, or a
//! configuration file. When `database_url` is absent the connection string
//! is composed from the individual `db_*` parts.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_NAME: &str = "users";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const REDACTED_PASSWORD: &str = "***";
const TLS_SSL_MODES: [&str; 3] = ["require", "verify-ca", "verify-full"];

/// Errors raised while turning settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    /// The database connection string could not be composed.
    #[error("invalid database connection settings: {message}")]
    DatabaseUrl { message: String },
    /// The settings ask for a TLS connection, which the pool cannot open.
    #[error("TLS connections to the database are not supported: {message}")]
    TlsUnsupported { message: String },
    /// `pool_connection_timeout_secs` is zero.
    #[error("pool_connection_timeout_secs must be greater than zero")]
    ZeroConnectionTimeout,
}

impl SettingsError {
    fn database_url(message: impl Into<String>) -> Self {
        Self::DatabaseUrl {
            message: message.into(),
        }
    }

    fn tls_unsupported(message: impl Into<String>) -> Self {
        Self::TlsUnsupported {
            message: message.into(),
        }
    }
}

/// Runtime configuration for the users service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct AppSettings {
    /// Full connection string; overrides the `db_*` parts when set.
    pub database_url: Option<String>,
    /// Database server host.
    pub db_host: Option<String>,
    /// Database server port.
    #[ortho_config(default = 5432)]
    pub db_port: u16,
    /// Database name.
    pub db_name: Option<String>,
    /// Database login.
    pub db_user: Option<String>,
    /// Database password.
    pub db_password: Option<String>,
    /// Connect without verifying the server (`sslmode=prefer`). `false`
    /// would demand TLS, which the plaintext connector cannot provide, so
    /// it is rejected when the connection string is built.
    #[ortho_config(default = true)]
    pub trust_server_certificate: bool,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Seconds a single connection attempt may take before checkout fails.
    #[ortho_config(default = 30)]
    pub pool_connection_timeout_secs: u64,
}

impl AppSettings {
    /// Return the configured host, falling back to the default.
    pub fn db_host(&self) -> &str {
        self.db_host.as_deref().unwrap_or(DEFAULT_DB_HOST)
    }

    /// Return the configured database name, falling back to the default.
    pub fn db_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(DEFAULT_DB_NAME)
    }

    /// Return the configured login, falling back to the default.
    pub fn db_user(&self) -> &str {
        self.db_user.as_deref().unwrap_or(DEFAULT_DB_USER)
    }

    /// Parse the configured bind address.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Return the connection string used for the user store.
    ///
    /// Composed strings are percent-encoded.
    ///
    /// # Examples
    /// ```
    /// use std::ffi::OsString;
    /// use ortho_config::OrthoConfig;
    /// use users_api::settings::AppSettings;
    ///
    /// let settings = AppSettings::load_from_iter([
    ///     OsString::from("users-api"),
    ///     OsString::from("--database-url"),
    ///     OsString::from("postgres://svc@db/users"),
    /// ])
    /// .expect("settings load");
    /// assert_eq!(
    ///     settings.connection_string().expect("url"),
    ///     "postgres://svc@db/users"
    /// );
    /// ```
    ///
    /// # Errors
    /// Returns [`SettingsError::DatabaseUrl`] when a part cannot be encoded
    /// into a URL, and [`SettingsError::TlsUnsupported`] when
    /// `trust_server_certificate` is false or `database_url` carries an
    /// `sslmode` that demands TLS.
    pub fn connection_string(&self) -> Result<String, SettingsError> {
        if !self.trust_server_certificate {
            return Err(SettingsError::tls_unsupported(
                "trust_server_certificate=false requires a TLS connection",
            ));
        }
        if let Some(url) = &self.database_url {
            reject_tls_ssl_mode(url)?;
            return Ok(url.clone());
        }
        Ok(self.composed_url()?.into())
    }

    fn composed_url(&self) -> Result<Url, SettingsError> {
        let mut url = Url::parse("postgres://localhost")
            .map_err(|err| SettingsError::database_url(err.to_string()))?;
        url.set_host(Some(self.db_host()))
            .map_err(|err| SettingsError::database_url(format!("db_host: {err}")))?;
        url.set_port(Some(self.db_port))
            .map_err(|()| SettingsError::database_url("db_port cannot be set"))?;
        url.set_username(self.db_user())
            .map_err(|()| SettingsError::database_url("db_user cannot be set"))?;
        url.set_password(self.db_password.as_deref())
            .map_err(|()| SettingsError::database_url("db_password cannot be set"))?;
        url.path_segments_mut()
            .map_err(|()| SettingsError::database_url("db_name cannot be set"))?
            .clear()
            .push(self.db_name());
        url.query_pairs_mut().append_pair("sslmode", "prefer");
        Ok(url)
    }

    /// Connection string with any password masked, for logging.
    pub fn redacted_connection_string(&self) -> String {
        let parsed = match &self.database_url {
            Some(raw) => Url::parse(raw).ok(),
            None => self.composed_url().ok(),
        };
        let Some(mut url) = parsed else {
            return "<unparseable database url>".to_owned();
        };
        if url.password().is_some() && url.set_password(Some(REDACTED_PASSWORD)).is_err() {
            return "<unparseable database url>".to_owned();
        }
        url.into()
    }

    /// Build the connection pool configuration from these settings.
    ///
    /// # Errors
    /// Propagates errors from [`AppSettings::connection_string`] and returns
    /// [`SettingsError::ZeroConnectionTimeout`] for a zero timeout.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        if self.pool_connection_timeout_secs == 0 {
            return Err(SettingsError::ZeroConnectionTimeout);
        }
        Ok(PoolConfig::new(self.connection_string()?)
            .with_max_size(self.pool_max_size)
            .with_connection_timeout(Duration::from_secs(self.pool_connection_timeout_secs)))
    }
}

fn reject_tls_ssl_mode(raw: &str) -> Result<(), SettingsError> {
    let Ok(url) = Url::parse(raw) else {
        return Ok(());
    };
    match url.query_pairs().find(|(key, _)| key == "sslmode") {
        Some((_, mode)) if TLS_SSL_MODES.contains(&mode.as_ref()) => Err(
            SettingsError::tls_unsupported(format!("database_url sets sslmode={mode}")),
        ),
        _ => Ok(()),
    }
}
