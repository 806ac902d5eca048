use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub mention: MentionConfig,
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MentionConfig {
    pub bold: bool,
    pub color: HexColor,
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            bold: true,
            color: HexColor {
                red: 0,
                green: 0,
                blue: 0xff,
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListConfig {
    /// Left indent per nesting level, in points
    pub indent: f64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self { indent: 36.0 }
    }
}

/// A `#rrggbb` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl HexColor {
    /// Channels scaled to `0.0..=1.0`, as the document service expects.
    pub fn to_unit_rgb(self) -> (f32, f32, f32) {
        let unit = |channel: u8| f32::from(channel) / 255.0;
        (unit(self.red), unit(self.green), unit(self.blue))
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| Error::InvalidColor(value.clone()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(value.clone()))
        };
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

impl Config {
    /// The config bundled with the crate.
    pub fn compiled_default() -> Self {
        // Validated by build.rs, so this only falls back if the file and the
        // struct disagree.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::warn!("bundled default config rejected: {e}");
            Self::default()
        })
    }

    /// Load config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn compiled_default_matches_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn parses_hex_color() {
        let color = HexColor::try_from("#1a4F8b".to_string()).unwrap();
        assert_eq!(color, HexColor {
            red: 0x1a,
            green: 0x4f,
            blue: 0x8b,
        });
        assert_eq!(
            HexColor::try_from("#0000ff".to_string()).unwrap().to_unit_rgb(),
            (0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn rejects_bad_colors() {
        for bad in [
            "0000ff",
            "#00f",
            "#00zz00",
            "#0000ffff",
            "#ééé",
            "#+f+f+f",
            "#-1-1-1",
        ] {
            assert!(
                matches!(HexColor::try_from(bad.to_string()), Err(Error::InvalidColor(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[list]\nindent = 18.0").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.list.indent, 18.0);
        assert_eq!(config.mention, MentionConfig::default());
    }

    #[test]
    fn load_reports_invalid_color() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mention]\ncolor = \"blue\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
