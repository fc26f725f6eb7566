use crate::core::settings::{
    DEFAULT_DATE_WINDOW_YEARS, DEFAULT_EXCLUDED_SOURCE, DEFAULT_SUPREME_COURT_ID,
};
use crate::core::ConfigProvider;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub database: Option<DatabaseConfig>,
    pub lookup: Option<LookupConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    pub supreme_court_id: Option<String>,
    pub excluded_source: Option<String>,
    pub date_window_years: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LookupError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LookupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RECORDS_DB})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LookupError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(database) = &self.database {
            validation::validate_path("database.path", &database.path)?;
        }

        if let Some(lookup) = &self.lookup {
            if let Some(court_id) = &lookup.supreme_court_id {
                validation::validate_court_id("lookup.supreme_court_id", court_id)?;
            }
            if let Some(source) = &lookup.excluded_source {
                validation::validate_non_empty_string("lookup.excluded_source", source)?;
            }
            if let Some(years) = lookup.date_window_years {
                validation::validate_range("lookup.date_window_years", years, 0, 50)?;
            }
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(LookupError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn database_path(&self) -> Option<&str> {
        self.database.as_ref().map(|d| d.path.as_str())
    }

    fn supreme_court_id(&self) -> &str {
        self.lookup
            .as_ref()
            .and_then(|l| l.supreme_court_id.as_deref())
            .unwrap_or(DEFAULT_SUPREME_COURT_ID)
    }

    fn excluded_source(&self) -> &str {
        self.lookup
            .as_ref()
            .and_then(|l| l.excluded_source.as_deref())
            .unwrap_or(DEFAULT_EXCLUDED_SOURCE)
    }

    fn date_window_years(&self) -> u32 {
        self.lookup
            .as_ref()
            .and_then(|l| l.date_window_years)
            .unwrap_or(DEFAULT_DATE_WINDOW_YEARS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
