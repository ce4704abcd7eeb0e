use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

use crate::error::LocatorError;

/// Fixed listen address of the HTTP server.
pub const LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Process-wide configuration, read from the environment on first access.
pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().unwrap_or_else(|e| panic!("{e}")));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub user: String,
    pub database: String,
    pub password: String,
    pub db_port: u16,
    /// Full connection URL; overrides the MySQL parts above when set.
    pub database_url: Option<String>,
    pub loglevel: String,
    pub init_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            database: "project1".to_string(),
            password: String::new(),
            db_port: 3306,
            database_url: None,
            loglevel: "info".to_string(),
            init_schema: true,
        }
    }
}

impl Config {
    /// Layer defaults under the recognised environment variables.
    pub fn load() -> Result<Self, LocatorError> {
        Self::figment().extract().map_err(Box::new).map_err(Into::into)
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&[
                "host",
                "user",
                "database",
                "password",
                "db_port",
                "database_url",
                "loglevel",
                "init_schema",
            ]))
    }

    /// Connection URL handed to the sqlx `Any` driver.
    pub fn connection_url(&self) -> Result<String, LocatorError> {
        if let Some(url) = self.database_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Ok(url.to_string());
        }

        let invalid = || LocatorError::DatabaseUrl(format!("cannot use host `{}`", self.host));
        let mut url = Url::parse("mysql://localhost")
            .map_err(|e| LocatorError::DatabaseUrl(e.to_string()))?;
        url.set_host(Some(self.host.as_str()))
            .map_err(|e| LocatorError::DatabaseUrl(e.to_string()))?;
        url.set_port(Some(self.db_port)).map_err(|_| invalid())?;
        url.set_username(&self.user).map_err(|_| invalid())?;
        if !self.password.is_empty() {
            url.set_password(Some(self.password.as_str()))
                .map_err(|_| invalid())?;
        }
        url.set_path(&self.database);
        Ok(url.into())
    }

    /// Connection target suitable for logs; never includes the password.
    pub fn redacted_target(&self) -> String {
        match self.database_url.as_deref() {
            Some(url) if !url.trim().is_empty() => match Url::parse(url) {
                Ok(mut parsed) if parsed.password().is_some() => {
                    let _ = parsed.set_password(Some("***"));
                    parsed.into()
                }
                Ok(parsed) => parsed.into(),
                Err(_) => "<unparseable database_url>".to_string(),
            },
            _ => format!(
                "mysql://{}@{}:{}/{}",
                self.user, self.host, self.db_port, self.database
            ),
        }
    }
}
