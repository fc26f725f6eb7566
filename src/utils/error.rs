use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Database query failed: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unable to find judge with lname {name_last} in court {court_id}")]
    NoMatchingJudge { name_last: String, court_id: String },

    #[error("Multiple judges: Last name '{name_last}', court '{court_id}', options: {options:?}.")]
    AmbiguousJudge {
        name_last: String,
        court_id: String,
        options: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Output,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::ConfigError { .. }
            | LookupError::ConfigValidationError { .. }
            | LookupError::InvalidConfigValueError { .. }
            | LookupError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LookupError::Database(_) | LookupError::IoError(_) => ErrorCategory::Storage,
            LookupError::CsvError(_) | LookupError::SerializationError(_) => ErrorCategory::Output,
            LookupError::NoMatchingJudge { .. } | LookupError::AmbiguousJudge { .. } => {
                ErrorCategory::Lookup
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查無或多筆法官屬於資料問題，可以換條件重試
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LookupError::Database(_) => {
                "Check that the database path points to a readable records database".to_string()
            }
            LookupError::IoError(_) => "Check file permissions and paths".to_string(),
            LookupError::CsvError(_) | LookupError::SerializationError(_) => {
                "Try a different --format or report the record that failed to render".to_string()
            }
            LookupError::ConfigError { .. } | LookupError::ConfigValidationError { .. } => {
                "Review the TOML configuration file syntax".to_string()
            }
            LookupError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in your configuration", field)
            }
            LookupError::MissingConfigError { field } => {
                format!("Provide '{}' via the config file or command line", field)
            }
            LookupError::NoMatchingJudge { .. } => {
                "Check the spelling of the last name and the court id, or drop the date hint"
                    .to_string()
            }
            LookupError::AmbiguousJudge { .. } => {
                "Add a first name or a case date to narrow the match".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::Database(_) => "Could not query the records database".to_string(),
            LookupError::NoMatchingJudge {
                name_last,
                court_id,
            } => format!("No judge named '{}' found in court '{}'", name_last, court_id),
            LookupError::AmbiguousJudge {
                name_last,
                court_id,
                options,
            } => format!(
                "'{}' in court '{}' matches {} judges ({})",
                name_last,
                court_id,
                options.len(),
                options.join(", ")
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_lists_first_names() {
        let err = LookupError::AmbiguousJudge {
            name_last: "Roberts".to_string(),
            court_id: "scotus".to_string(),
            options: vec!["John".to_string(), "Owen".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Multiple judges: Last name 'Roberts', court 'scotus', options: [\"John\", \"Owen\"]."
        );
        assert!(err.user_friendly_message().contains("John, Owen"));
        assert_eq!(err.category(), ErrorCategory::Lookup);
    }

    #[test]
    fn test_storage_errors_are_critical() {
        let err = LookupError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.severity(), ErrorSeverity::Critical);

        let err = LookupError::MissingConfigError {
            field: "database.path".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_lookup_failures_rank_lowest() {
        let err = LookupError::NoMatchingJudge {
            name_last: "Taney".to_string(),
            court_id: "scotus".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.severity() < ErrorSeverity::High);
    }
}
