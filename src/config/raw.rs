use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("outreach-maps.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub google_maps: Option<GoogleMaps>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleMaps {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Default for GoogleMaps {
    fn default() -> Self {
        Config::default()
            .google_maps
            .expect("Google Maps configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        let google_maps = cfg.google_maps.unwrap();
        assert!(google_maps.api_base_url.is_some());
        assert!(google_maps.api_key.is_none());
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/outreach-maps.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        assert!(cfg.google_maps.unwrap().api_key.is_some());
    }

    #[test]
    fn ignore_unknown_keys() {
        let cfg: Config = toml::from_str("[google-maps]\ntimeout = 3").unwrap();
        assert!(cfg.google_maps.unwrap().api_base_url.is_none());
    }
}
