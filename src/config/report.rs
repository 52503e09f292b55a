//! Report configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Largest supported number of decimals in text reports
pub const MAX_PRECISION: usize = 12;

/// How the final ranking is presented
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Output format
    #[serde(default)]
    pub format: ReportFormat,

    /// Decimals printed for each score (text format only)
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.precision, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_precision_too_large() {
        let config = ReportConfig {
            precision: 13,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPrecision(13))
        ));
    }

    #[test]
    fn test_report_format_deserialization() {
        let config: ReportConfig = serde_json::from_str(r#"{ "format": "json" }"#).unwrap();
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.precision, 4);

        assert!(serde_json::from_str::<ReportConfig>(r#"{ "format": "xml" }"#).is_err());
    }
}
