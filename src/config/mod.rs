use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub dataset: DatasetConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = env::var("LAUNCH_DATASET")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let dataset = DatasetConfig { path };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            dataset,
            telemetry: TelemetryConfig { log_level },
        })
    }

    /// Applies a dataset path given on the command line, which wins over
    /// `LAUNCH_DATASET`, then checks that the resulting path is readable.
    pub fn with_dataset_override(mut self, path: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            self.dataset.path = Some(path);
        }
        self.dataset.validate()?;
        Ok(self)
    }
}

/// Where launch records are read from. `None` selects the bundled dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
}

impl DatasetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.path {
            Some(path) if !path.is_file() => {
                Err(ConfigError::DatasetNotFound { path: path.clone() })
            }
            _ => Ok(()),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    DatasetNotFound { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DatasetNotFound { path } => write!(
                f,
                "dataset path {} is not a readable file",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("LAUNCH_DATASET");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.dataset.path, None);
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn blank_dataset_path_selects_bundled_data() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LAUNCH_DATASET", "   ");
        env::set_var("APP_ENV", "ci");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.dataset.path, None);
        assert_eq!(config.environment, AppEnvironment::Test);
        reset_env();
    }

    #[test]
    fn rejects_missing_dataset_file() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LAUNCH_DATASET", "./no-such-launches.json");
        let config = AppConfig::load().expect("config loads");
        let error = config
            .with_dataset_override(None)
            .expect_err("missing file rejected");
        assert!(matches!(error, ConfigError::DatasetNotFound { .. }));
        assert!(error.to_string().contains("no-such-launches.json"));
        reset_env();
    }

    #[test]
    fn command_line_dataset_replaces_stale_env_path() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LAUNCH_DATASET", "./gone.json");
        let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/launches.json");

        let config = AppConfig::load()
            .expect("config loads")
            .with_dataset_override(Some(bundled.clone()))
            .expect("override wins over the env path");
        assert_eq!(config.dataset.path, Some(bundled));
        reset_env();
    }

    #[test]
    fn no_dataset_path_selects_bundled_data_without_validation_errors() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load()
            .expect("config loads")
            .with_dataset_override(None)
            .expect("bundled dataset needs no file");
        assert_eq!(config.dataset.path, None);
    }
}
