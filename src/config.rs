use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the config file searched for from the working directory upward.
pub const CONFIG_FILE_NAME: &str = "shelfql.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub demo: DemoSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_hello_path")]
    pub hello_path: String,

    #[serde(default = "default_library_path")]
    pub library_path: String,

    /// Serve the GraphiQL console on `GET` of each schema path.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_hello_path() -> String {
    "/graphql-demo1".to_string()
}

fn default_library_path() -> String {
    "/graphql-demo2".to_string()
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            hello_path: default_hello_path(),
            library_path: default_library_path(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Replaces host and port with command-line values when given.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(h) = host {
            self.host = h;
        }
        if let Some(p) = port {
            self.port = p;
        }
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSettings {
    #[serde(default = "default_message_delay_ms")]
    pub message_delay_ms: u64,
}

fn default_message_delay_ms() -> u64 {
    3000
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            message_delay_ms: default_message_delay_ms(),
        }
    }
}

impl DemoSettings {
    pub fn message_delay(&self) -> Duration {
        Duration::from_millis(self.message_delay_ms)
    }
}

impl ShelfConfig {
    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, `shelfql.toml` is searched
    /// for from `start_path` upward and the defaults apply if none is found.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => Self::find_config_file(start_path),
        };

        let config = match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config");
                Self::from_file(&p)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShelfError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        for path in [&self.server.hello_path, &self.server.library_path] {
            if !path.starts_with('/') {
                return Err(ShelfError::Config(format!(
                    "Route path must start with '/': {}",
                    path
                )));
            }
        }
        if self.server.hello_path == self.server.library_path {
            return Err(ShelfError::Config(format!(
                "Hello and library schemas cannot share the path {}",
                self.server.hello_path
            )));
        }
        Ok(())
    }
}
