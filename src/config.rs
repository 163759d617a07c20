//! Tunable settings of the panel. Everything has a default matching the stock behavior, and every
//! field may be omitted when deserializing, so a settings file only needs to name what it changes.

use crate::export::{DelimitedText, NukeScript};
use crate::random::RandomRanges;

/// Settings for the exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Character separating colors in CSV and clipboard text. Must be ASCII.
    pub delimiter: char,
    /// Width of the project format node exports are sized to.
    pub format_width: u32,
    /// Height of the project format node exports are sized to.
    pub format_height: u32,
    /// Version line written at the top of node scripts.
    pub script_version: String,
}

impl Default for ExportSettings {
    fn default() -> ExportSettings {
        ExportSettings {
            delimiter: '|',
            format_width: 1920,
            format_height: 1080,
            script_version: "13.0 v1".to_string(),
        }
    }
}

impl ExportSettings {
    /// The CSV and clipboard exporter. A non-ASCII delimiter falls back to `|`.
    pub fn delimited_text(&self) -> DelimitedText {
        if self.delimiter.is_ascii() {
            DelimitedText::new(self.delimiter as u8)
        } else {
            warn!("delimiter {:?} is not ASCII, using '|'", self.delimiter);
            DelimitedText::default()
        }
    }

    /// The node script exporter.
    pub fn nuke_script(&self) -> NukeScript {
        NukeScript {
            version: self.script_version.clone(),
            width: self.format_width,
            height: self.format_height,
        }
    }
}

/// All tunable settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Ranges random base colors are drawn from.
    pub randomize: RandomRanges,
    /// Exporter settings.
    pub export: ExportSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.randomize.value, (0.4, 1.0));
        assert_eq!(config.export.delimited_text(), DelimitedText::default());
        assert_eq!(config.export.nuke_script(), NukeScript::default());
    }

    #[test]
    fn test_fallback_delimiter() {
        let _ = env_logger::builder().is_test(true).try_init();
        let settings = ExportSettings {
            delimiter: '¦',
            ..ExportSettings::default()
        };
        assert_eq!(settings.delimited_text().delimiter, b'|');
        let settings = ExportSettings {
            delimiter: ',',
            ..ExportSettings::default()
        };
        assert_eq!(settings.delimited_text().delimiter, b',');
    }

    #[test]
    fn test_partial_settings_file() {
        let config: PanelConfig = toml::from_str(
            r#"
            [randomize]
            hue = [0.0, 0.5]

            [export]
            delimiter = ","
            "#,
        )
        .unwrap();
        assert_eq!(config.randomize.hue, (0.0, 0.5));
        assert_eq!(config.randomize.saturation, (0.2, 1.0));
        assert_eq!(config.randomize.value, (0.4, 1.0));
        assert_eq!(config.export.delimiter, ',');
        assert_eq!((config.export.format_width, config.export.format_height), (1920, 1080));
        assert_eq!(config.export.script_version, "13.0 v1");

        let empty: PanelConfig = toml::from_str("").unwrap();
        assert_eq!(empty, PanelConfig::default());
    }
}
