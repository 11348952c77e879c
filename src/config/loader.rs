//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（qbank.toml / qbank.local.toml，或 `--config` 指定的文件）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["qbank", "qbank.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "QBANK";

/// 加载应用配置
///
/// # 环境变量示例
/// - `QBANK_API__ORIGIN=https://qbank.example.com`
/// - `QBANK_API__TIMEOUT_MS=10000`
/// - `QBANK_STORAGE__PATH=/var/lib/qbank/session.sled`
/// - `QBANK_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    build_config(config_path, environment())
}

fn environment() -> Environment {
    // 层级分隔符: __ (双下划线)，变量名会被转换为小写
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build_config(config_path: Option<&Path>, env: Environment) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("api.origin", "http://localhost:9000")?
        .set_default("api.base_path", "/api")?
        .set_default("api.timeout_ms", 5000)?
        .set_default("storage.path", "data/session.sled")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    let config = builder.add_source(env).build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let origin = config.api.origin.trim();
    if origin.is_empty() {
        return Err(ConfigError::ValidationError(
            "API origin cannot be empty".to_string(),
        ));
    }
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "API origin must use http or https: {}",
            origin
        )));
    }

    if !config.api.base_path.starts_with('/') {
        return Err(ConfigError::ValidationError(
            "API base path must start with '/'".to_string(),
        ));
    }

    if config.api.timeout_ms == 0 {
        return Err(ConfigError::ValidationError(
            "API timeout cannot be 0".to_string(),
        ));
    }

    if config.storage.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Client Configuration ===");
    tracing::info!("API Origin: {}", config.api.origin);
    tracing::info!("API Base Path: {}", config.api.base_path);
    tracing::info!("API Timeout: {}ms", config.api.timeout_ms);
    tracing::info!("Session Storage: {}", config.storage.path);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("============================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    fn write_toml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = build_config(None, env_from(&[])).unwrap();
        assert_eq!(config.api.origin, "http://localhost:9000");
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.api.timeout_ms, 5000);
        assert_eq!(config.storage.path, "data/session.sled");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_toml(
            r#"
[api]
origin = "http://file-host:9000"
timeout_ms = 2000

[log]
json = true
"#,
        );

        let config = build_config(
            Some(file.path()),
            env_from(&[("QBANK_API__ORIGIN", "https://env-host")]),
        )
        .unwrap();

        assert_eq!(config.api.origin, "https://env-host");
        assert_eq!(config.api.timeout_ms, 2000);
        assert!(config.log.json);
    }

    #[test]
    fn test_env_numeric_parsing() {
        let config = build_config(None, env_from(&[("QBANK_API__TIMEOUT_MS", "750")])).unwrap();
        assert_eq!(config.api.timeout_ms, 750);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = build_config(Some(Path::new("/nonexistent/qbank.toml")), env_from(&[]));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_origin() {
        let mut config = AppConfig::default();
        config.api.origin = "ftp://host".to_string();
        assert!(validate_config(&config).is_err());

        config.api.origin = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_relative_base_path() {
        let mut config = AppConfig::default();
        config.api.base_path = "api".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.api.timeout_ms = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_storage_path() {
        let mut config = AppConfig::default();
        config.storage.path = String::new();
        assert!(validate_config(&config).is_err());
    }
}
