//! Wire format settings: which strings delimit chunks and matrix rows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} {value:?} must not contain digits or commas")]
    Ambiguous { field: &'static str, value: String },

    #[error("sentinel and row delimiter must differ (both {0:?})")]
    Identical(String),

    #[error("invalid wire format json: {0}")]
    Json(#[from] serde_json::Error),
}

/// WireFormat はメッセージ文法の区切り文字
///
/// 行内のフィールド区切りは常に `,` です。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireFormat {
    /// トップレベルの chunk 区切り
    pub sentinel: String,

    /// 行列 chunk の各行の終端
    pub row_delimiter: String,
}

impl WireFormat {
    /// v1 メッセージのデフォルト（chunk 間は `#`、行末は `|`）
    pub fn default_v1() -> Self {
        Self {
            sentinel: "#".to_string(),
            row_delimiter: "|".to_string(),
        }
    }

    /// JSON を読み込んで検証する（省略したフィールドは v1 のデフォルト）
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let format: WireFormat = serde_json::from_str(s)?;
        format.validate()?;
        Ok(format)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("sentinel", &self.sentinel),
            ("row_delimiter", &self.row_delimiter),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Empty { field });
            }
            if value.chars().any(|c| c.is_ascii_digit() || c == ',') {
                return Err(ConfigError::Ambiguous {
                    field,
                    value: value.clone(),
                });
            }
        }
        if self.sentinel == self.row_delimiter {
            return Err(ConfigError::Identical(self.sentinel.clone()));
        }
        Ok(())
    }
}

impl Default for WireFormat {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_valid() {
        let f = WireFormat::default();
        assert_eq!(f.sentinel, "#");
        assert_eq!(f.row_delimiter, "|");
        assert!(f.validate().is_ok());
    }

    #[test]
    fn json_fills_missing_fields() {
        let f = WireFormat::from_json_str(r#"{"sentinel": "::"}"#).unwrap();
        assert_eq!(f.sentinel, "::");
        assert_eq!(f.row_delimiter, "|");
    }

    #[test]
    fn rejects_bad_delimiters() {
        assert!(matches!(
            WireFormat::from_json_str(r#"{"sentinel": ""}"#),
            Err(ConfigError::Empty { field: "sentinel" })
        ));
        assert!(matches!(
            WireFormat::from_json_str(r#"{"row_delimiter": ","}"#),
            Err(ConfigError::Ambiguous { .. })
        ));
        assert!(matches!(
            WireFormat::from_json_str(r#"{"sentinel": "|"}"#),
            Err(ConfigError::Identical(_))
        ));
        assert!(matches!(
            WireFormat::from_json_str("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
