// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .context("Failed to read config file")?;

    let extension = path.extension().and_then(|s| s.to_str());
    let config: Config = if extension == Some("yaml") || extension == Some("yml") {
        serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
    } else {
        serde_json::from_str(&contents).context("Failed to parse JSON config")?
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_yaml_config() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "base_url: \"http://127.0.0.1:9000\"").unwrap();
        writeln!(file, "timeout_secs: 3").unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.timeout_secs, 3);
        // Unspecified fields keep their defaults.
        assert_eq!(config.health_path, "/health");
    }

    #[tokio::test]
    async fn loads_json_config() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        writeln!(file, "{{\"origin\": \"http://localhost:5173\"}}").unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.origin, "http://localhost:5173");
    }

    #[tokio::test]
    async fn rejects_invalid_config_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "timeout_secs: 0").unwrap();

        assert!(load_config(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        assert!(load_config("/nonexistent/preflight.yaml").await.is_err());
    }
}
