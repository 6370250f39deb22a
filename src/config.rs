use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use regex::Regex;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translation_config: TranslationConfig,
    #[serde(default)]
    pub tts_config: TTSConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory generated audio is written to and served from under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_index_page")]
    pub index_page: String,
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_translation_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTSConfig {
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,
    /// Use the reduced speaking rate
    #[serde(default)]
    pub slow: bool,
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_index_page() -> String {
    "templates/index.html".to_string()
}

fn default_max_text_chars() -> usize {
    500
}

fn default_translation_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_tts_base_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_max_chunk_chars() -> usize {
    100
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = fs::read_to_string(path)?;
        let content = substitute_env_vars(content.trim_start_matches('\u{feff}'));

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") || path_lower.ends_with(".jsonld") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }

    /// Candidate config locations in lookup order
    pub fn search_paths() -> Vec<String> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.yaml".to_string()),
            Some("conf.json".to_string()),
            exe_dir.join("conf.yaml").to_str().map(|s| s.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.system_config.host, self.system_config.port)
    }
}

/// Replace `${VAR_NAME}` with the variable's value, leaving unknown names untouched
fn substitute_env_vars(content: &str) -> String {
    let pattern = match Regex::new(r"\$\{(\w+)\}") {
        Ok(pattern) => pattern,
        Err(_) => return content.to_string(),
    };
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            index_page: default_index_page(),
            max_text_chars: default_max_text_chars(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: default_translation_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl Default for TTSConfig {
    fn default() -> Self {
        Self {
            base_url: default_tts_base_url(),
            slow: false,
            max_chunk_chars: default_max_chunk_chars(),
            request_timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kannada-translator-config-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let path = write_temp("conf.yaml", "system_config:\n  port: 8080\n");
        let config = Config::load(path.to_str().unwrap()).unwrap();

        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.system_config.host, "localhost");
        assert_eq!(config.system_config.max_text_chars, 500);
        assert_eq!(config.tts_config.max_chunk_chars, 100);
        assert!(!config.tts_config.slow);
        assert_eq!(config.translation_config.base_url, "https://translate.googleapis.com");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn json_config_is_parsed_by_extension() {
        let path = write_temp(
            "conf.json",
            r#"{"tts_config": {"slow": true, "request_timeout_secs": 15}}"#,
        );
        let config = Config::load(path.to_str().unwrap()).unwrap();

        assert!(config.tts_config.slow);
        assert_eq!(config.tts_config.request_timeout_secs, Some(15));
        assert_eq!(config.system_config.port, 5001);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("KANNADA_TRANSLATOR_TEST_STATIC", "/tmp/kt-audio");
        let path = write_temp(
            "conf.yaml",
            "system_config:\n  static_dir: ${KANNADA_TRANSLATOR_TEST_STATIC}\n  index_page: ${KANNADA_TRANSLATOR_UNSET_VAR}\n",
        );
        let config = Config::load(path.to_str().unwrap()).unwrap();

        assert_eq!(config.system_config.static_dir, "/tmp/kt-audio");
        assert_eq!(config.system_config.index_page, "${KANNADA_TRANSLATOR_UNSET_VAR}");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load("/nonexistent/kannada-translator/conf.yaml").unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        assert_eq!(Config::default().bind_address(), "localhost:5001");
    }
}
