//! Process-wide converter and text settings.
//!
//! The embedded `default_settings.toml` is used unless [`init_custom`] installs
//! another TOML document before [`settings`] is first called. The CLI does
//! this for `--settings`.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Parse, validate and install `toml_content`. Fails once settings are in
/// place, whether installed here or defaulted by an earlier [`settings`] call.
pub fn init_custom(toml_content: &str) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(toml_content)?;
    SETTINGS
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        // Checked by build.rs and the embedded_defaults test.
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings are valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid settings TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings are already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub converter: ConverterSettings,
    pub text: TextSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConverterSettings {
    pub prefix: String,
    #[serde(default)]
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextSettings {
    pub delimiter: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let settings: Settings = toml::from_str(toml_str)?;
    validate(&settings)?;
    Ok(settings)
}

/// Check that a placeholder prefix is usable: non-empty ASCII alphanumeric.
pub fn validate_prefix(prefix: &str) -> Result<(), SettingsError> {
    if prefix.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "converter.prefix".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(SettingsError::InvalidValue {
            field: "converter.prefix".to_string(),
            reason: "must contain only ASCII letters and digits".to_string(),
        });
    }
    Ok(())
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    validate_prefix(&s.converter.prefix)?;

    if let Some(i) = s.converter.avoid.iter().position(|t| t.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: format!("converter.avoid[{i}]"),
            reason: "must not be empty".to_string(),
        });
    }

    if s.text.delimiter.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "text.delimiter".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.converter.prefix, "JaWord");
        assert!(s.converter.avoid.is_empty());
        assert_eq!(s.text.delimiter, " ");
    }

    #[test]
    fn global_settings_default_prefix() {
        assert_eq!(settings().converter.prefix, "JaWord");
    }

    #[test]
    fn init_after_first_use_is_rejected() {
        settings();
        let err = init_custom(DEFAULT_SETTINGS_TOML).unwrap_err();
        assert!(matches!(err, SettingsError::AlreadyInitialized));
    }

    #[test]
    fn init_with_invalid_toml_reports_parse_error() {
        let err = init_custom("[converter]\nprefix = 1\n").unwrap_err();
        assert!(matches!(err, SettingsError::Toml(_)));
    }

    #[test]
    fn custom_values() {
        let toml = r#"
[converter]
prefix = "Mbc"
avoid = ["東京", "ー"]

[text]
delimiter = ","
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.converter.prefix, "Mbc");
        assert_eq!(s.converter.avoid, vec!["東京", "ー"]);
        assert_eq!(s.text.delimiter, ",");
    }

    #[test]
    fn avoid_defaults_to_empty() {
        let toml = "[converter]\nprefix = \"P\"\n[text]\ndelimiter = \"\\t\"\n";
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.converter.avoid.is_empty());
        assert_eq!(s.text.delimiter, "\t");
    }

    #[test]
    fn error_empty_prefix() {
        let toml = "[converter]\nprefix = \"\"\n[text]\ndelimiter = \" \"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "converter.prefix")
        );
    }

    #[test]
    fn error_non_ascii_prefix() {
        let toml = "[converter]\nprefix = \"日本\"\n[text]\ndelimiter = \" \"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_empty_avoid_entry() {
        let toml = "[converter]\nprefix = \"P\"\navoid = [\"a\", \"\"]\n[text]\ndelimiter = \" \"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "converter.avoid[1]")
        );
    }

    #[test]
    fn error_empty_delimiter() {
        let toml = "[converter]\nprefix = \"P\"\n[text]\ndelimiter = \"\"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "text.delimiter")
        );
    }

    #[test]
    fn missing_text_table_is_rejected() {
        let err = parse_settings_toml("[converter]\nprefix = \"P\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Toml(_)));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_settings_toml("not valid {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Toml(_)));
    }
}
