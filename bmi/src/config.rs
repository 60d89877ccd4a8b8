use std::{env, str::FromStr};

use bmi_sdk::Locale;
use log::warn;

pub const LOCALE_ENV: &str = "BMI_LOCALE";
pub const OUTPUT_ENV: &str = "BMI_OUTPUT";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub locale: Locale,

    pub output: OutputFormat,
}

impl CliConfig {
    /// Reads `BMI_LOCALE` and `BMI_OUTPUT`. Bad values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(LOCALE_ENV).ok(), env::var(OUTPUT_ENV).ok())
    }

    pub fn from_vars(locale: Option<String>, output: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(locale) = locale {
            match locale.parse() {
                Ok(locale) => config.locale = locale,
                Err(e) => warn!("{LOCALE_ENV}: {e}, using {:?}", config.locale),
            }
        }

        if let Some(output) = output {
            match output.parse() {
                Ok(output) => config.output = output,
                Err(e) => warn!("{OUTPUT_ENV}: {e}, using {:?}", config.output),
            }
        }

        config
    }

    /// Command line flags win over the environment
    pub fn with_overrides(mut self, locale: Option<Locale>, json: bool) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if json {
            self.output = OutputFormat::Json;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CliConfig::from_vars(None, None);

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn reads_values() {
        let config = CliConfig::from_vars(Some("pt-BR".to_string()), Some("JSON".to_string()));

        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = CliConfig::from_vars(Some("klingon".to_string()), Some("xml".to_string()));

        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn flags_override_environment() {
        let config = CliConfig::from_vars(Some("pt".to_string()), None)
            .with_overrides(Some(Locale::En), true);

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn absent_flags_keep_environment() {
        let config = CliConfig::from_vars(Some("pt".to_string()), Some("json".to_string()))
            .with_overrides(None, false);

        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.output, OutputFormat::Json);
    }
}
