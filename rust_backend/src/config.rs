//! Configuration file support.
//!
//! Settings are read from TOML. Every section and key is optional; missing values take the defaults below.
//!
//! ```toml
//! [format]
//! seconds_decimals = 2      # 0..=9
//! rounding = "carry"        # "carry" | "legacy"
//!
//! [transform]
//! output_epoch = "j2000"    # "j2000" | "of_date"
//!
//! [comparison]
//! ra_tolerance_deg = 0.01
//! dec_tolerance_deg = 0.01
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{AltazError, AltazResult};
use crate::formatting::{AngleFormatter, SecondsRounding};
use crate::transformations::{HorizontalToEquatorial, OutputEpoch};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AltazConfig {
    #[serde(default)]
    pub format: FormatSettings,
    #[serde(default)]
    pub transform: TransformSettings,
    #[serde(default)]
    pub comparison: ComparisonSettings,
}

/// Sexagesimal output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSettings {
    #[serde(default = "default_seconds_decimals")]
    pub seconds_decimals: u8,
    #[serde(default)]
    pub rounding: SecondsRounding,
}

/// Transform engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformSettings {
    #[serde(default)]
    pub output_epoch: OutputEpoch,
}

/// Tolerances used when comparing computed positions with expected ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSettings {
    #[serde(default = "default_tolerance_deg")]
    pub ra_tolerance_deg: f64,
    #[serde(default = "default_tolerance_deg")]
    pub dec_tolerance_deg: f64,
}

fn default_seconds_decimals() -> u8 {
    2
}

fn default_tolerance_deg() -> f64 {
    0.01
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            seconds_decimals: default_seconds_decimals(),
            rounding: SecondsRounding::default(),
        }
    }
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            ra_tolerance_deg: default_tolerance_deg(),
            dec_tolerance_deg: default_tolerance_deg(),
        }
    }
}

const CONFIG_FILE_NAME: &str = "altaz.toml";

fn find_default_file() -> Option<PathBuf> {
    [
        PathBuf::from(CONFIG_FILE_NAME),
        PathBuf::from("rust_backend").join(CONFIG_FILE_NAME),
        PathBuf::from("..").join(CONFIG_FILE_NAME),
    ]
    .into_iter()
    .find(|path| path.exists())
}

impl AltazConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Err(AltazError::Io)` if the file cannot be read
    /// * `Err(AltazError::Config)` if it cannot be parsed or holds invalid values
    pub fn from_file<P: AsRef<Path>>(path: P) -> AltazResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            AltazError::Io(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: AltazConfig = content.parse()?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `altaz.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> AltazResult<Self> {
        match find_default_file() {
            Some(path) => Self::from_file(path),
            None => Err(AltazError::Config(format!(
                "No {} found in standard locations",
                CONFIG_FILE_NAME
            ))),
        }
    }

    /// Like [`Self::from_default_location`], but falls back to defaults when no file exists.
    /// A file that exists but is invalid is still an error.
    pub fn load_or_default() -> AltazResult<Self> {
        match find_default_file() {
            Some(path) => Self::from_file(path),
            None => {
                log::info!("No {} found; using default configuration", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Checks value ranges that the TOML types alone cannot express.
    pub fn validate(&self) -> AltazResult<()> {
        if self.format.seconds_decimals > AngleFormatter::MAX_DECIMALS {
            return Err(AltazError::Config(format!(
                "'format.seconds_decimals' must be at most {}, got {}",
                AngleFormatter::MAX_DECIMALS,
                self.format.seconds_decimals
            )));
        }
        for (key, value) in [
            ("comparison.ra_tolerance_deg", self.comparison.ra_tolerance_deg),
            ("comparison.dec_tolerance_deg", self.comparison.dec_tolerance_deg),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AltazError::Config(format!(
                    "'{}' must be a positive number, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }

    /// Formatter described by the `[format]` section.
    pub fn formatter(&self) -> AltazResult<AngleFormatter> {
        AngleFormatter::new(self.format.seconds_decimals, self.format.rounding)
            .map_err(|e| AltazError::Config(e.to_string()))
    }

    /// Transform engine described by the `[transform]` section.
    pub fn engine(&self) -> HorizontalToEquatorial {
        HorizontalToEquatorial::new(self.transform.output_epoch)
    }
}

impl FromStr for AltazConfig {
    type Err = AltazError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: AltazConfig = toml::from_str(s)
            .map_err(|e| AltazError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AltazConfig = "".parse().unwrap();
        assert_eq!(config, AltazConfig::default());
        assert_eq!(config.format.seconds_decimals, 2);
        assert_eq!(config.format.rounding, SecondsRounding::Carry);
        assert_eq!(config.transform.output_epoch, OutputEpoch::J2000);
        assert_eq!(config.comparison.ra_tolerance_deg, 0.01);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[format]
seconds_decimals = 3
rounding = "legacy"

[transform]
output_epoch = "of_date"

[comparison]
ra_tolerance_deg = 0.1
dec_tolerance_deg = 0.05
"#;
        let config: AltazConfig = toml.parse().unwrap();
        assert_eq!(config.format.seconds_decimals, 3);
        assert_eq!(config.format.rounding, SecondsRounding::Legacy);
        assert_eq!(config.engine().epoch(), OutputEpoch::OfDate);
        assert_eq!(config.comparison.dec_tolerance_deg, 0.05);
        assert_eq!(config.formatter().unwrap().decimals(), 3);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            "[format]\nseconds_decimals = 12".parse::<AltazConfig>(),
            Err(AltazError::Config(_))
        ));
        assert!("[comparison]\nra_tolerance_deg = -1.0".parse::<AltazConfig>().is_err());
        assert!("[comparison]\ndec_tolerance_deg = 0.0".parse::<AltazConfig>().is_err());
        assert!("[format]\nrounding = \"floor\"".parse::<AltazConfig>().is_err());
        assert!("[transform]\noutput_epoch = \"B1950\"".parse::<AltazConfig>().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format]\nseconds_decimals = 1").unwrap();
        let config = AltazConfig::from_file(file.path()).unwrap();
        assert_eq!(config.format.seconds_decimals, 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AltazConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, AltazError::Io(_)));
    }

    #[test]
    fn test_default_location_finds_shipped_file() {
        // cargo runs unit tests from the package root, next to the shipped altaz.toml
        let config = AltazConfig::from_default_location().unwrap();
        assert_eq!(config, AltazConfig::default());
        assert_eq!(AltazConfig::load_or_default().unwrap(), config);
    }
}
