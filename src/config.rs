use serde::{Serialize, Deserialize};
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::bubble::BubbleStyleKey;
use crate::error::ConfigError;

// Default configuration
pub const DEFAULT_IDENTITY: &str = "555-0100";
pub const DEFAULT_THEME: &str = "dark";

/// 8-bit RGB triple, serialized as `[r, g, b]`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Style attributes for one kind of bubble.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BubbleStyle {
    pub background: Rgb,
    pub text: Rgb,
    pub corner_radius: u8,
    /// Fraction of the thread width.
    pub min_width_pct: f32,
    pub max_width_pct: f32,
    /// Horizontal and vertical inner padding.
    pub padding: [i8; 2],
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            background: Rgb(28, 28, 38),
            text: Rgb(255, 255, 255),
            corner_radius: 15,
            min_width_pct: 0.5,
            max_width_pct: 0.8,
            padding: [12, 6],
        }
    }
}

/// Explicit style map handed to the renderer, one entry per bubble kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BubbleStyles(pub BTreeMap<BubbleStyleKey, BubbleStyle>);

impl BubbleStyles {
    pub fn dark() -> Self {
        Self::with_palette(
            Rgb(71, 82, 196),
            Rgb(255, 255, 255),
            Rgb(37, 37, 50),
            Rgb(255, 255, 255),
            Rgb(185, 187, 190),
        )
    }

    pub fn light() -> Self {
        Self::with_palette(
            Rgb(138, 150, 248),
            Rgb(6, 6, 7),
            Rgb(242, 243, 245),
            Rgb(6, 6, 7),
            Rgb(79, 86, 96),
        )
    }

    fn with_palette(accent: Rgb, on_accent: Rgb, surface: Rgb, text: Rgb, secondary: Rgb) -> Self {
        let mut map = BTreeMap::new();
        map.insert(BubbleStyleKey::Mine, BubbleStyle {
            background: accent,
            text: on_accent,
            corner_radius: 20,
            min_width_pct: 0.5,
            max_width_pct: 0.8,
            padding: [16, 6],
        });
        map.insert(BubbleStyleKey::Theirs, BubbleStyle {
            background: surface,
            text,
            corner_radius: 15,
            min_width_pct: 0.5,
            max_width_pct: 0.8,
            padding: [12, 6],
        });
        map.insert(BubbleStyleKey::System, BubbleStyle {
            background: surface,
            text: secondary,
            corner_radius: 8,
            min_width_pct: 0.0,
            max_width_pct: 0.8,
            padding: [12, 1],
        });
        map.insert(BubbleStyleKey::MyAudio, BubbleStyle {
            background: accent,
            text: on_accent,
            corner_radius: 12,
            min_width_pct: 0.6,
            max_width_pct: 1.0,
            padding: [0, 0],
        });
        map.insert(BubbleStyleKey::TheirAudio, BubbleStyle {
            background: surface,
            text,
            corner_radius: 15,
            min_width_pct: 0.6,
            max_width_pct: 0.8,
            padding: [0, 0],
        });
        Self(map)
    }

    /// Style for `key`, or the default style if the map lacks it.
    pub fn get(&self, key: BubbleStyleKey) -> BubbleStyle {
        self.0.get(&key).cloned().unwrap_or_default()
    }
}

impl Default for BubbleStyles {
    fn default() -> Self {
        Self::dark()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Phone number of this device.
    pub local_identity: String,
    pub theme: String,
    /// Overrides the theme's bubble styles when present.
    pub styles: Option<BubbleStyles>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            local_identity: DEFAULT_IDENTITY.to_string(),
            theme: DEFAULT_THEME.to_string(),
            styles: None,
        }
    }
}

impl Settings {
    pub fn is_dark(&self) -> bool {
        !self.theme.eq_ignore_ascii_case("light")
    }

    pub fn bubble_styles(&self) -> BubbleStyles {
        match &self.styles {
            Some(styles) => styles.clone(),
            None if self.is_dark() => BubbleStyles::dark(),
            None => BubbleStyles::light(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "phonechat", "phone-chat") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!(error = %e, "failed to create config dir");
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

/// Load settings, falling back to defaults when the file is missing or broken.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    match read_settings(&path) {
        Ok(settings) => settings,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            Settings::default()
        }
    }
}

pub fn read_settings(path: &std::path::Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    let path = settings_path().ok_or(ConfigError::NoConfigDir)?;
    write_settings(&path, settings)
}

pub fn write_settings(path: &std::path::Path, settings: &Settings) -> Result<(), ConfigError> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
