use std::env;

use anyhow::{bail, Context};

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mongo_uri: String,
    /// Overrides the database named in `mongo_uri`.
    pub database: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let Some(mongo_uri) = lookup("MONGO_URI").filter(|uri| !uri.is_empty()) else {
            bail!("MONGO_URI is not defined");
        };

        let port = match lookup("PORT").filter(|port| !port.is_empty()) {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_uri,
            database: lookup("MONGO_DATABASE").filter(|name| !name.is_empty()),
            port,
        })
    }
}
