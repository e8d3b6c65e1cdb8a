//! # Configuration
//!
//! [`Config`] wraps the parsed key-value map of a configuration file and
//! resolves the database connection parameters. `hostname`, `database`,
//! and `username` are required for a connection; `password` is optional in
//! the file and may instead be collected by the caller at login.

use std::path::Path;

use tracing::{error, info};

use crate::error::{Error, Result};
use crate::files::read_config_file;
use crate::map::StrMap;
use crate::text::TextBuf;

/// Parsed configuration, queried by key.
#[derive(Debug)]
pub struct Config {
    map: StrMap,
}

/// Connection parameters resolved from a [`Config`].
#[derive(Debug)]
pub struct ConnectParams {
    pub hostname: TextBuf,
    pub database: TextBuf,
    pub username: TextBuf,
    pub password: Option<TextBuf>,
}

impl Config {
    /// Loads and parses the configuration file at `path`, logging the
    /// outcome either way.
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        match read_config_file(path) {
            Ok(map) => {
                info!(
                    path = %path.display(),
                    entries = map.len(),
                    "configuration loaded"
                );
                Ok(Config { map })
            }
            Err(err) => {
                error!(path = %path.display(), "could not load configuration: {err}");
                Err(err)
            }
        }
    }

    /// Configuration built from an already-parsed map.
    pub fn from_map(map: StrMap) -> Config {
        Config { map }
    }

    pub fn get(&self, key: &str) -> Option<&TextBuf> {
        self.map.get(key)
    }

    /// Adds a pair after loading; an existing key keeps priority on lookup.
    pub fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key, value);
    }

    /// Value for `key`, or [`Error::MissingKey`] naming it.
    pub fn require(&self, key: &str) -> Result<TextBuf> {
        self.map.get(key).cloned().ok_or_else(|| Error::MissingKey {
            key: key.to_string(),
        })
    }

    /// Resolves the connection parameters, requiring `hostname`, `database`,
    /// and `username`.
    pub fn connect_params(&self) -> Result<ConnectParams> {
        Ok(ConnectParams {
            hostname: self.require("hostname")?,
            database: self.require("database")?,
            username: self.require("username")?,
            password: self.get("password").cloned(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TextBuf, &TextBuf)> {
        self.map.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::read_config;

    fn config_from(text: &str) -> Config {
        Config::from_map(read_config(&mut text.as_bytes()).unwrap())
    }

    #[test]
    fn connect_params_resolve_from_the_file() {
        let config = config_from(
            "hostname = localhost\n\
             database = mydb\n\
             username = gl_user\n\
             password = secret\n",
        );
        let params = config.connect_params().unwrap();
        assert_eq!(params.hostname, "localhost");
        assert_eq!(params.database, "mydb");
        assert_eq!(params.username, "gl_user");
        assert_eq!(params.password.unwrap(), "secret");
    }

    #[test]
    fn password_is_optional() {
        let config = config_from("hostname = h\ndatabase = d\nusername = u\n");
        let params = config.connect_params().unwrap();
        assert!(params.password.is_none());
    }

    #[test]
    fn missing_required_key_names_the_key() {
        let config = config_from("hostname = h\nusername = u\n");
        let err = config.connect_params().unwrap_err();
        assert!(matches!(err, Error::MissingKey { ref key } if key == "database"));
    }

    #[test]
    fn set_adds_pairs_without_overriding_existing_ones() {
        let mut config = config_from("hostname = original\n");
        config.set("port", "3306");
        config.set("hostname", "shadowed");

        assert_eq!(config.get("port").unwrap(), "3306");
        assert_eq!(config.get("hostname").unwrap(), "original");
    }

    #[test]
    fn load_keeps_file_outcomes_distinct() {
        let err = Config::load("/no/such/file.conf").unwrap_err();
        assert!(err.is_file_open());
    }
}
