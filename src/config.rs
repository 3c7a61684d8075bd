//! Configuration structures and loading logic.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use ncode_core::{Composition, TextAlign};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub render: RenderConfig,
    pub canvas: CanvasConfig,
    pub log: LogConfig,
}

/// Font blob locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// ASCII bitmap font blob.
    pub ascii: Option<PathBuf>,
    /// Ncode Hangul component font blob.
    pub ncode: Option<PathBuf>,
}

/// Text layout options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Syllable composition: `advanced` or `simple`.
    pub composition: String,
    /// Alignment: `left`, `center`, `right`.
    pub align: String,
    /// Wrap width in pixels (0 = single line, no wrapping).
    pub max_width: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            composition: "advanced".to_owned(),
            align: "left".to_owned(),
            max_width: 0,
        }
    }
}

impl RenderConfig {
    pub fn composition(&self) -> Composition {
        parse_composition(&self.composition)
    }

    pub fn align(&self) -> TextAlign {
        parse_align(&self.align)
    }

    /// Wrap width, or `None` when wrapping is off.
    pub fn wrap_width(&self) -> Option<i32> {
        (self.max_width > 0).then_some(self.max_width)
    }
}

/// Output canvas size and the characters used to print it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Character for a lit pixel.
    pub on: char,
    /// Character for an unlit pixel.
    pub off: char,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            on: '#',
            off: '.',
        }
    }
}

/// Debug log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    /// Log file; defaults to `ncode_draw.log` next to the executable.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            file: None,
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> LevelFilter {
        parse_level(&self.level)
    }
}

/// Return the platform-specific configuration directory for `ncode_draw`.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("ncode_draw");
        }
        PathBuf::from(".").join("ncode_draw")
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("ncode_draw");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join("ncode_draw");
        }
        PathBuf::from(".").join("ncode_draw")
    }
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Parse a composition policy. Accepts "advanced", "simple".
/// Defaults to Advanced.
pub fn parse_composition(s: &str) -> Composition {
    match s.trim().to_ascii_lowercase().as_str() {
        "simple" | "basic" => Composition::Simple,
        _ => Composition::Advanced,
    }
}

/// Parse a text alignment. Accepts "left", "center"/"centre", "right".
/// Defaults to Left.
pub fn parse_align(s: &str) -> TextAlign {
    match s.trim().to_ascii_lowercase().as_str() {
        "center" | "centre" => TextAlign::Center,
        "right" => TextAlign::Right,
        _ => TextAlign::Left,
    }
}

/// Parse a log level name. Unknown names give `Warn`.
pub fn parse_level(s: &str) -> LevelFilter {
    s.trim().parse().unwrap_or(LevelFilter::Warn)
}

impl Config {
    /// Load config from the default path. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults like [`load`](Self::load).
    pub fn load_from(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("config: failed to read {}: {e}", path.display());
                }
                return Self::default();
            }
        };

        match toml::from_str(&data) {
            Ok(cfg) => {
                log::info!("config: loaded from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("config: parse error in {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Try to load config from `path`, returning an error message on failure.
    /// Unlike `load_from()`, this preserves the distinction between "file
    /// missing" and "parse error" so callers can report it.
    pub fn try_load_from(path: &Path) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        toml::from_str(&data).map_err(|e| format!("parse error in {}: {e}", path.display()))
    }
}
