//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.stickynote/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! With no file, no env vars and no flags, the note saves to
//! `todo_sauvegarde.txt` in the working directory.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::storage::default_save_path;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NoteConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub save_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WindowConfig {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub opacity: Option<f32>,
    pub always_on_top: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub frame_color: Option<String>,
    pub text_background: Option<String>,
    pub text_color: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WIDTH: f32 = 600.0;
pub const DEFAULT_HEIGHT: f32 = 400.0;
pub const DEFAULT_OPACITY: f32 = 0.9;
pub const DEFAULT_FRAME_COLOR: Rgb = Rgb(0x8b, 0x5e, 0x3c);
pub const DEFAULT_TEXT_BACKGROUND: Rgb = Rgb(0x1b, 0x36, 0x18);
pub const DEFAULT_TEXT_COLOR: Rgb = Rgb(0xf8, 0xf1, 0xe5);

/// An opaque `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse(s: &str) -> Option<Rgb> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub save_path: PathBuf,
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
    pub always_on_top: bool,
    pub frame_color: Rgb,
    pub text_background: Rgb,
    pub text_color: Rgb,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.stickynote/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stickynote").join("config.toml"))
}

/// Load config from `~/.stickynote/config.toml`, generating a commented-out
/// default there on first run.
pub fn load_config() -> Result<NoteConfig, ConfigError> {
    match config_path() {
        Some(path) => {
            if !path.exists() {
                info!("No config file found, generating default at {}", path.display());
                generate_default_config(&path);
                return Ok(NoteConfig::default());
            }
            load_config_from(&path)
        }
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(NoteConfig::default())
        }
    }
}

/// Load config from an explicit path. Unlike [`load_config`], a missing file
/// is an error: the user asked for this one.
pub fn load_config_from(path: &Path) -> Result<NoteConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NoteConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Sticky note configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [storage]
# save_file = "todo_sauvegarde.txt"  # Relative paths resolve against the working directory
#                                     # Or set STICKYNOTE_SAVE_FILE / pass --save-file

# [window]
# width = 600
# height = 400
# opacity = 0.9                       # 0.0 (invisible) .. 1.0 (opaque)
# always_on_top = true

# [theme]
# frame_color = "#8b5e3c"
# text_background = "#1b3618"
# text_color = "#f8f1e5"
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_save_file` is the `--save-file` flag (None = not specified).
pub fn resolve(config: &NoteConfig, cli_save_file: Option<&Path>) -> ResolvedConfig {
    // Save file: CLI → env → config → default
    let save_path = cli_save_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("STICKYNOTE_SAVE_FILE").map(PathBuf::from))
        .or_else(|| config.storage.save_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(default_save_path);

    let opacity = match config.window.opacity {
        Some(o) if (0.0..=1.0).contains(&o) => o,
        Some(o) => {
            warn!("Opacity {} out of range 0..1, using {}", o, DEFAULT_OPACITY);
            DEFAULT_OPACITY
        }
        None => DEFAULT_OPACITY,
    };

    ResolvedConfig {
        save_path,
        width: positive_or(config.window.width, DEFAULT_WIDTH),
        height: positive_or(config.window.height, DEFAULT_HEIGHT),
        opacity,
        always_on_top: config.window.always_on_top.unwrap_or(true),
        frame_color: color_or(&config.theme.frame_color, DEFAULT_FRAME_COLOR),
        text_background: color_or(&config.theme.text_background, DEFAULT_TEXT_BACKGROUND),
        text_color: color_or(&config.theme.text_color, DEFAULT_TEXT_COLOR),
    }
}

fn positive_or(value: Option<f32>, default: f32) -> f32 {
    value.filter(|v| *v > 0.0).unwrap_or(default)
}

fn color_or(value: &Option<String>, default: Rgb) -> Rgb {
    let Some(raw) = value else {
        return default;
    };
    Rgb::parse(raw).unwrap_or_else(|| {
        warn!("Invalid color {:?}, expected #rrggbb", raw);
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::DEFAULT_SAVE_FILE;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&NoteConfig::default(), None);
        if std::env::var_os("STICKYNOTE_SAVE_FILE").is_none() {
            assert_eq!(resolved.save_path, PathBuf::from(DEFAULT_SAVE_FILE));
        }
        assert_eq!(resolved.width, DEFAULT_WIDTH);
        assert_eq!(resolved.height, DEFAULT_HEIGHT);
        assert_eq!(resolved.opacity, DEFAULT_OPACITY);
        assert!(resolved.always_on_top);
        assert_eq!(resolved.frame_color, DEFAULT_FRAME_COLOR);
        assert_eq!(resolved.text_background, DEFAULT_TEXT_BACKGROUND);
        assert_eq!(resolved.text_color, DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn test_cli_save_file_wins() {
        let config = NoteConfig {
            storage: StorageConfig {
                save_file: Some("from-config.txt".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Path::new("from-cli.txt")));
        assert_eq!(resolved.save_path, PathBuf::from("from-cli.txt"));
    }

    #[test]
    fn test_config_values_override_defaults() {
        let toml_str = r##"
[window]
width = 320
height = 240
opacity = 0.5
always_on_top = false

[theme]
frame_color = "#102030"
"##;
        let config: NoteConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.width, 320.0);
        assert_eq!(resolved.height, 240.0);
        assert_eq!(resolved.opacity, 0.5);
        assert!(!resolved.always_on_top);
        assert_eq!(resolved.frame_color, Rgb(0x10, 0x20, 0x30));
        assert_eq!(resolved.text_color, DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let config = NoteConfig {
            window: WindowConfig {
                width: Some(-5.0),
                opacity: Some(3.0),
                ..Default::default()
            },
            theme: ThemeConfig {
                text_color: Some("not-a-color".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.width, DEFAULT_WIDTH);
        assert_eq!(resolved.opacity, DEFAULT_OPACITY);
        assert_eq!(resolved.text_color, DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[storage]
save_file = "notes/today.txt"
"#;
        let config: NoteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.save_file.as_deref(), Some("notes/today.txt"));
        assert!(config.window.width.is_none());
        assert!(config.theme.frame_color.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window\nwidth = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_explicit_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_generated_default_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        generate_default_config(&path);
        let config = load_config_from(&path).unwrap();
        assert_eq!(
            resolve(&config, Some(Path::new(DEFAULT_SAVE_FILE))),
            resolve(&NoteConfig::default(), Some(Path::new(DEFAULT_SAVE_FILE)))
        );
    }

    #[test]
    fn test_rgb_parse() {
        assert_eq!(Rgb::parse("#8b5e3c"), Some(Rgb(0x8b, 0x5e, 0x3c)));
        assert_eq!(Rgb::parse("F8F1E5"), Some(Rgb(0xf8, 0xf1, 0xe5)));
        assert_eq!(Rgb::parse("#fff"), None);
        assert_eq!(Rgb::parse("#gggggg"), None);
    }
}
