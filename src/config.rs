use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};
use tempfile::NamedTempFile;

pub const CONFIG_FILE_NAME: &str = ".blogql.toml";

/// Shortest random suffix accepted; 36^4 ids per prefix.
pub const MIN_RANDOM_ID_LENGTH: usize = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub logging: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Route serving both the GraphQL endpoint and the IDE
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_playground")]
    pub playground: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_playground() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            playground: default_playground(),
        }
    }
}

/// How fresh record ids are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    #[default]
    Random,
    Sequential,
}

impl fmt::Display for IdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdMode::Random => write!(f, "random"),
            IdMode::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for IdMode {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "random" => Ok(IdMode::Random),
            "sequential" => Ok(IdMode::Sequential),
            _ => Err(BlogError::Config(format!("Invalid id mode: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Load the demo users, posts and comments at startup
    #[serde(default = "default_seed")]
    pub seed: bool,

    #[serde(default)]
    pub id_mode: IdMode,

    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_seed() -> bool {
    true
}

fn default_id_length() -> usize {
    8
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            id_mode: IdMode::default(),
            id_length: default_id_length(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub verbose: bool,
}

impl BlogConfig {
    /// Load the config found by walking up from `start_path`, falling back to
    /// defaults when no file exists. Returns the file used, if any.
    pub fn discover(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        Self::load_optional(Self::find_config_file(start_path))
    }

    /// Load `path` when given, otherwise use defaults.
    pub fn load_optional(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        match path {
            Some(path) => {
                let config = Self::load_from(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BlogConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
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
        if !self.server.path.starts_with('/') {
            return Err(BlogError::Config(format!(
                "server.path must start with '/': {}",
                self.server.path
            )));
        }
        if self.store.id_length == 0 {
            return Err(BlogError::Config(
                "store.id_length must be at least 1".to_string(),
            ));
        }
        if self.store.id_mode == IdMode::Random && self.store.id_length < MIN_RANDOM_ID_LENGTH {
            return Err(BlogError::Config(format!(
                "store.id_length must be at least {} in random id mode: {}",
                MIN_RANDOM_ID_LENGTH, self.store.id_length
            )));
        }
        Ok(())
    }

    /// Write the config atomically: temp file in the same directory, then rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(dir)?;
        use std::io::Write;
        temp_file.write_all(content.as_bytes())?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| BlogError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BlogConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.path, "/graphql");
        assert!(config.server.playground);
        assert!(config.store.seed);
        assert_eq!(config.store.id_mode, IdMode::Random);
        assert_eq!(config.store.id_length, 8);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: BlogConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [store]
            id_mode = "sequential"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.store.id_mode, IdMode::Sequential);
        assert!(config.store.seed);
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[server]\nport = 5000\n",
        )
        .unwrap();

        let (config, path) = BlogConfig::discover(&nested).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(path.unwrap(), temp_dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_optional_without_file_uses_defaults() {
        let (config, path) = BlogConfig::load_optional(None).unwrap();
        assert!(path.is_none());
        assert_eq!(config.server.port, 4000);
        assert!(config.store.seed);
    }

    #[test]
    fn test_find_config_file_prefers_nearest() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        std::fs::write(nested.join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            BlogConfig::find_config_file(&nested).unwrap(),
            nested.join(CONFIG_FILE_NAME)
        );
        assert_eq!(
            BlogConfig::find_config_file(temp_dir.path()).unwrap(),
            temp_dir.path().join(CONFIG_FILE_NAME)
        );
    }

    #[test]
    fn test_short_random_ids_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "[store]\nid_length = 2\n").unwrap();
        assert!(matches!(
            BlogConfig::load_from(&path),
            Err(BlogError::Config(msg)) if msg.contains("random id mode")
        ));

        // the counter cannot run out, so short sequential ids are fine
        std::fs::write(&path, "[store]\nid_mode = \"sequential\"\nid_length = 2\n").unwrap();
        assert_eq!(BlogConfig::load_from(&path).unwrap().store.id_length, 2);
    }

    #[test]
    fn test_invalid_path_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server]\npath = \"graphql\"\n").unwrap();
        assert!(matches!(
            BlogConfig::load_from(&path),
            Err(BlogError::Config(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let mut config = BlogConfig::default();
        config.store.id_mode = IdMode::Sequential;
        config.server.playground = false;
        config.save(&path).unwrap();

        let loaded = BlogConfig::load_from(&path).unwrap();
        assert_eq!(loaded.store.id_mode, IdMode::Sequential);
        assert!(!loaded.server.playground);
    }

    #[test]
    fn test_id_mode_from_str() {
        assert_eq!("Random".parse::<IdMode>().unwrap(), IdMode::Random);
        assert_eq!("sequential".parse::<IdMode>().unwrap(), IdMode::Sequential);
        assert!("uuid".parse::<IdMode>().is_err());
    }
}
