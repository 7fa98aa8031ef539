use crate::domain::Pricing;
use crate::utils::error::{GalleryError, Result};
use crate::utils::validation::{validate_non_negative_amount, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "exhibitions.json";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub storage: StorageConfig,
    pub pricing: Pricing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl GalleryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GalleryError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GalleryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GALLERY_DATA})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GalleryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn data_file(&self) -> &str {
        &self.storage.data_file
    }
}

impl Validate for GalleryConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.data_file", &self.storage.data_file)?;
        validate_non_negative_amount("pricing.base_price", self.pricing.base_price)?;
        validate_non_negative_amount("pricing.painting_rate", self.pricing.painting_rate)?;
        validate_non_negative_amount("pricing.sculpture_rate", self.pricing.sculpture_rate)?;
        Ok(())
    }
}
