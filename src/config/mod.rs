use anyhow::{Context, Result};
use maps_gateways::google_maps::DEFAULT_API_BASE_URL;
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "outreach-maps.toml";

const ENV_NAME_MAPS_KEY: &str = "OUTREACH_MAPS_KEY";

pub struct Config {
    pub google_maps: GoogleMaps,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let mut cfg = Self::try_load_from_file(file_path)?;
        let api_key = env::var(ENV_NAME_MAPS_KEY).ok();
        cfg.google_maps.override_api_key(api_key);
        Ok(cfg)
    }

    /// An explicitly specified file must exist.
    fn try_load_from_file<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let file_path = file_path.as_ref();
                let cfg_string = fs::read_to_string(file_path)
                    .with_context(|| format!("Could not read {}", file_path.display()))?;
                toml::from_str(&cfg_string)?
            }
            None => Self::try_load_default_file()?,
        };
        Ok(Self::from(raw_config))
    }

    fn try_load_default_file() -> Result<raw::Config> {
        log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
        let raw_config = match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        Ok(raw_config)
    }
}

pub struct GoogleMaps {
    pub api_base_url: String,
    /// Sent as is, even if empty.
    pub api_key: Option<String>,
}

impl GoogleMaps {
    pub fn override_api_key(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key {
            self.api_key = Some(key);
        }
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config { google_maps } = from;
        let raw::GoogleMaps {
            api_base_url,
            api_key,
        } = google_maps.unwrap_or_default();
        let google_maps = GoogleMaps {
            api_base_url: api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            api_key,
        };
        Self { google_maps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FILE_WITH_KEY: &str = r#"
[google-maps]
api-base-url = "http://localhost:8080/maps/api"
api-key = "from-file"
"#;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file(file).unwrap();
        assert_eq!(cfg.google_maps.api_base_url, DEFAULT_API_BASE_URL);
        assert!(cfg.google_maps.api_key.is_none());
    }

    #[test]
    fn missing_config_file() {
        let res = Config::try_load_from_file(Some("does-not-exist.toml"));
        assert!(res.is_err());
    }

    #[test]
    fn load_config_file() {
        let file = config_file(FILE_WITH_KEY);
        let cfg = Config::try_load_from_file(Some(file.path())).unwrap();
        assert_eq!(
            cfg.google_maps.api_base_url,
            "http://localhost:8080/maps/api"
        );
        assert_eq!(cfg.google_maps.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn missing_section_falls_back_to_defaults() {
        let file = config_file("# empty");
        let cfg = Config::try_load_from_file(Some(file.path())).unwrap();
        assert_eq!(cfg.google_maps.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn invalid_config_file() {
        let file = config_file("[google-maps");
        assert!(Config::try_load_from_file(Some(file.path())).is_err());
    }

    #[test]
    fn api_key_precedence() {
        let file = config_file(FILE_WITH_KEY);
        env::set_var(ENV_NAME_MAPS_KEY, "from-env");
        let res = Config::try_load_from_file_or_default(Some(file.path()));
        env::remove_var(ENV_NAME_MAPS_KEY);
        let mut cfg = res.unwrap();
        assert_eq!(cfg.google_maps.api_key.as_deref(), Some("from-env"));

        cfg.google_maps.override_api_key(None);
        assert_eq!(cfg.google_maps.api_key.as_deref(), Some("from-env"));

        cfg.google_maps.override_api_key(Some("from-cli".into()));
        assert_eq!(cfg.google_maps.api_key.as_deref(), Some("from-cli"));
    }
}
