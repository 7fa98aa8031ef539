use thiserror::Error;

/// Underlying cause of a failed load or save.
#[derive(Error, Debug)]
pub enum StorageFailure {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Format(#[from] serde_json::Error),

    // JSON has no representation for NaN or infinity
    #[error("price of \"{title}\" is not a finite number ({price})")]
    NonFinitePrice { title: String, price: f64 },
}

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Failed to load exhibitions from {path}: {source}")]
    LoadError {
        path: String,
        #[source]
        source: StorageFailure,
    },

    #[error("Failed to save exhibitions to {path}: {source}")]
    SaveError {
        path: String,
        #[source]
        source: StorageFailure,
    },

    #[error("Invalid exhibition number {index}: expected a value between 1 and {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    UserInput,
    Configuration,
    Console,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GalleryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GalleryError::LoadError { .. } | GalleryError::SaveError { .. } => {
                ErrorCategory::Storage
            }
            GalleryError::InvalidIndex { .. } | GalleryError::ValidationError { .. } => {
                ErrorCategory::UserInput
            }
            GalleryError::ConfigError { .. } => ErrorCategory::Configuration,
            GalleryError::IoError(_) => ErrorCategory::Console,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GalleryError::InvalidIndex { .. } | GalleryError::ValidationError { .. } => {
                ErrorSeverity::Low
            }
            // 記憶體中的資料仍然有效，下一次修改會重試儲存
            GalleryError::LoadError { .. } | GalleryError::SaveError { .. } => {
                ErrorSeverity::Medium
            }
            GalleryError::ConfigError { .. } => ErrorSeverity::High,
            GalleryError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Whether the menu loop can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::High
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GalleryError::LoadError { path, .. } => {
                format!("Could not read saved exhibitions from {}, starting empty", path)
            }
            GalleryError::SaveError { path, .. } => {
                format!("Could not save exhibitions to {}", path)
            }
            GalleryError::InvalidIndex { .. } => "Invalid exhibition number.".to_string(),
            GalleryError::ValidationError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            GalleryError::ConfigError { message } => format!("Configuration problem: {}", message),
            GalleryError::IoError(e) => format!("Console error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GalleryError::LoadError { .. } => {
                "Check the data file; it will be overwritten on the next change"
            }
            GalleryError::SaveError { .. } => {
                "Check that the data file location is writable; the next change retries the save"
            }
            GalleryError::InvalidIndex { .. } => "Pick a number shown in the exhibition list",
            GalleryError::ValidationError { .. } => "Re-enter the value and try again",
            GalleryError::ConfigError { .. } => "Fix the configuration file or command line flags",
            GalleryError::IoError(_) => "Make sure the program is attached to a readable terminal",
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
