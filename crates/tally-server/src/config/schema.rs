use std::collections::HashSet;
use std::net::SocketAddr;

use serde::Deserialize;
use tally_core::error::{Result, TallyError};
use tally_core::Counter;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub links: LinksSection,

    /// Counters preloaded at startup.
    #[serde(default)]
    pub seed: Vec<SeedCounter>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.links.validate()?;

        let mut seen = HashSet::new();
        for s in &self.seed {
            if s.name.is_empty() {
                return Err(TallyError::BadRequest("seed[].name must not be empty".into()));
            }
            if !seen.insert(s.name.as_str()) {
                return Err(TallyError::BadRequest(format!("duplicate seed counter: {}", s.name)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            TallyError::BadRequest(format!("server.listen must be a valid SocketAddr: {}", self.listen))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinksSection {
    /// Prefix for generated hrefs, e.g. `http://localhost:8080`.
    /// Empty means relative links.
    #[serde(default)]
    pub base_url: String,
}

impl LinksSection {
    pub fn validate(&self) -> Result<()> {
        if self.base_url.ends_with('/') {
            return Err(TallyError::BadRequest(
                "links.base_url must not end with '/'".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCounter {
    pub name: String,
    pub count: i64,
}

impl From<&SeedCounter> for Counter {
    fn from(s: &SeedCounter) -> Self {
        Counter::new(s.name.clone(), s.count)
    }
}
