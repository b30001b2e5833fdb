// settings module - font and page setup remembered between runs
use super::error::{EditorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 48.0;

const MM_PER_INCH: f32 = 25.4;
const PT_PER_INCH: f32 = 72.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamilyKind {
    Monospace,
    Proportional,
}

impl FontFamilyKind {
    pub fn label(self) -> &'static str {
        match self {
            FontFamilyKind::Monospace => "Monospace",
            FontFamilyKind::Proportional => "Proportional",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FontChoice {
    pub family: FontFamilyKind,
    pub size: f32, // points
}

impl Default for FontChoice {
    fn default() -> Self {
        Self {
            family: FontFamilyKind::Monospace,
            size: 14.0,
        }
    }
}

impl FontChoice {
    pub fn clamped(self) -> Self {
        Self {
            family: self.family,
            size: self.size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paper {
    A4,
    Letter,
}

impl Paper {
    // (width, height) in millimetres
    pub fn size_mm(self) -> (f32, f32) {
        match self {
            Paper::A4 => (210.0, 297.0),
            Paper::Letter => (215.9, 279.4),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Paper::A4 => "A4",
            Paper::Letter => "Letter",
        }
    }
}

/// Printable area inside the margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBounds {
    pub width: f32,
    pub height: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub paper: Paper,
    pub margin_mm: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        // One inch on every side
        Self {
            paper: Paper::A4,
            margin_mm: MM_PER_INCH,
        }
    }
}

impl PageSetup {
    pub fn bounds(&self) -> PageBounds {
        let (width, height) = self.paper.size_mm();
        let margin = self.margin_mm.max(0.0);
        PageBounds {
            width: mm_to_pt((width - 2.0 * margin).max(0.0)),
            height: mm_to_pt((height - 2.0 * margin).max(0.0)),
        }
    }
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_INCH * PT_PER_INCH
}

pub fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_INCH * MM_PER_INCH
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub font: FontChoice,
    pub page_setup: PageSetup,
}

impl Settings {
    pub fn default_path() -> PathBuf {
        Self::path_in(dirs::config_dir())
    }

    fn path_in(config_dir: Option<PathBuf>) -> PathBuf {
        let dir = config_dir.unwrap_or_else(|| {
            log::warn!("no per-user config directory, keeping settings in the working directory");
            PathBuf::from(".")
        });
        dir.join("text-editor").join("settings.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(Self {
            font: settings.font.clamped(),
            ..settings
        })
    }

    // Missing or unreadable settings fall back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(EditorError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                log::warn!("using default settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| EditorError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| EditorError::io(path, e))?;
        log::debug!("settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            font: FontChoice {
                family: FontFamilyKind::Proportional,
                size: 20.0,
            },
            page_setup: PageSetup {
                paper: Paper::Letter,
                margin_mm: 10.0,
            },
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_or_corrupt_settings_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_partial_settings_keep_defaults_and_clamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "font": { "family": "Monospace", "size": 400.0 } }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.font.size, MAX_FONT_SIZE);
        assert_eq!(settings.page_setup, PageSetup::default());
    }

    #[test]
    fn test_settings_path_lives_in_config_dir() {
        let path = Settings::path_in(Some(PathBuf::from("/cfg")));
        assert_eq!(path, Path::new("/cfg/text-editor/settings.json"));
        assert_eq!(Settings::path_in(None), Path::new("./text-editor/settings.json"));
    }

    #[test]
    fn test_page_bounds_subtract_margins() {
        let bounds = PageSetup::default().bounds();
        // A4 minus one inch each side: 159.2mm x 246.2mm
        assert!((bounds.width - mm_to_pt(159.2)).abs() < 0.01);
        assert!((bounds.height - mm_to_pt(246.2)).abs() < 0.01);
        assert!((pt_to_mm(72.0) - 25.4).abs() < 0.001);
    }
}
