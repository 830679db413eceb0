//! Game configuration: disk count, colour palette and timing.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use strictly_hanoi::{Disk, PuzzleError};
use tracing::{debug, info, instrument};

/// Colours used when no palette is configured.
pub const DEFAULT_COLORS: [&str; 6] = [
    "#f6c54b", "#4caf50", "#ef5350", "#42a5f5", "#ab47bc", "#ffb74d",
];

/// Session configuration, fixed for the lifetime of a controller.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Number of disks in the puzzle.
    #[serde(default = "default_disk_count")]
    disk_count: u32,

    /// Disk colours, cycled by disk size.
    #[serde(default)]
    palette: Palette,

    /// How many leaderboard entries the game screen shows.
    #[serde(default = "default_leaderboard_preview")]
    leaderboard_preview: usize,

    /// Timer refresh period in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    tick_interval_ms: u64,
}

#[instrument]
fn default_disk_count() -> u32 {
    4
}

#[instrument]
fn default_leaderboard_preview() -> usize {
    5
}

#[instrument]
fn default_tick_interval_ms() -> u64 {
    100
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            disk_count: default_disk_count(),
            palette: Palette::default(),
            leaderboard_preview: default_leaderboard_preview(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(disk_count = config.disk_count, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Checks that the configuration can start a session.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disk_count < 1 {
            return Err(ConfigError::new(format!(
                "Invalid configuration: disk_count must be at least 1, got {}",
                self.disk_count
            )));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::new(
                "Invalid configuration: palette needs at least one colour".to_string(),
            ));
        }
        if !(1..=1000).contains(&self.tick_interval_ms) {
            return Err(ConfigError::new(format!(
                "Invalid configuration: tick_interval_ms must be 1-1000, got {}",
                self.tick_interval_ms
            )));
        }
        Ok(())
    }
}

/// A 24-bit colour, written `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .ok_or_else(|| ColorParseError::new(s))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::new(s))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour that is not of the form `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid colour {:?}: expected #rrggbb", input)]
pub struct ColorParseError {
    /// The rejected text.
    pub input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Ordered disk colours. Cosmetic only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Creates a palette from colours in display order.
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Colour for a disk, cycling through the palette by size.
    ///
    /// Returns `None` only for an empty palette.
    pub fn color_for(&self, disk: Disk) -> Option<Rgb> {
        if self.colors.is_empty() {
            return None;
        }
        let index = (disk.size().saturating_sub(1) as usize) % self.colors.len();
        self.colors.get(index).copied()
    }

    /// All colours in order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns true if the palette has no colours.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            DEFAULT_COLORS
                .iter()
                .filter_map(|hex| hex.parse().ok())
                .collect(),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<PuzzleError> for ConfigError {
    #[track_caller]
    fn from(err: PuzzleError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.disk_count(), 4);
        assert_eq!(*config.leaderboard_preview(), 5);
        assert_eq!(*config.tick_interval_ms(), 100);
        assert_eq!(config.palette().colors().len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rgb_parse_and_display() {
        let color: Rgb = "#f6c54b".parse().unwrap();
        assert_eq!(color, Rgb::new(0xf6, 0xc5, 0x4b));
        assert_eq!(color.to_string(), "#f6c54b");
        assert!("f6c54b".parse::<Rgb>().is_err());
        assert!("#f6c54".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_palette_cycles_by_size() {
        let palette = Palette::default();
        let first = palette.color_for(Disk::new(1));
        assert_eq!(first, Some(Rgb::new(0xf6, 0xc5, 0x4b)));
        assert_eq!(palette.color_for(Disk::new(7)), first);
        assert_eq!(
            palette.color_for(Disk::new(6)),
            Some(Rgb::new(0xff, 0xb7, 0x4d))
        );
    }

    #[test]
    fn test_empty_palette_has_no_colour() {
        assert_eq!(Palette::new(Vec::new()).color_for(Disk::new(1)), None);
    }

    #[test]
    fn test_zero_disks_invalid() {
        let config = GameConfig::default().with_disk_count(0);
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("disk_count"));
    }

    #[test]
    fn test_error_tracks_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
