//! 合法手判定の設定

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// `MoveValidator` の設定
///
/// ```toml
/// enforce_pawn_drop_mate = true
/// validate_input = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// 打ち歩詰めを禁じる
    pub enforce_pawn_drop_mate: bool,
    /// 判定の前に局面を検証し、違反を warn ログとトレースに出す（判定は続行する）
    pub validate_input: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            enforce_pawn_drop_mate: true,
            validate_input: false,
        }
    }
}

impl ValidatorConfig {
    /// TOML 文字列から読み込む（省略した項目は既定値）
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert!(config.enforce_pawn_drop_mate);
        assert!(!config.validate_input);
    }

    #[test]
    fn test_from_toml_str() {
        let config = ValidatorConfig::from_toml_str("validate_input = true\n").unwrap();
        assert!(config.enforce_pawn_drop_mate);
        assert!(config.validate_input);

        let config = ValidatorConfig::from_toml_str("enforce_pawn_drop_mate = false").unwrap();
        assert!(!config.enforce_pawn_drop_mate);

        assert_eq!(ValidatorConfig::from_toml_str("").unwrap(), ValidatorConfig::default());
    }

    #[test]
    fn test_from_toml_str_rejects_wrong_type() {
        let err = ValidatorConfig::from_toml_str("validate_input = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
