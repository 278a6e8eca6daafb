use serde::{Deserialize, Serialize};

/// Color scheme for the prompter view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Contrast {
    Light,
    Dark,
    /// Classic prompter palette; also the fallback for unknown stored values
    #[serde(other)]
    YellowOnBlack,
}

impl Default for Contrast {
    fn default() -> Self {
        Contrast::YellowOnBlack
    }
}

/// User settings persisted between sessions.
///
/// Keys are camelCase on disk for compatibility with the settings shape
/// the web version of this app stored. Every field has its own default so
/// a partial file merges cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Scroll-rate multiplier, 0.0–5.0 in 0.1 steps
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Font size in distance units (presentation passthrough)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Line height multiplier (presentation passthrough)
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    /// Characters per line (presentation passthrough)
    #[serde(default = "default_line_width")]
    pub line_width: u16,
    #[serde(default)]
    pub contrast: Contrast,
    /// Mirror horizontally (prompter glass rigs)
    #[serde(default)]
    pub mirror_h: bool,
    /// Mirror vertically
    #[serde(default)]
    pub mirror_v: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            font_size: default_font_size(),
            line_height: default_line_height(),
            line_width: default_line_width(),
            contrast: Contrast::default(),
            mirror_h: false,
            mirror_v: false,
        }
    }
}

impl Settings {
    /// Distance units per rendered script row (`font_size * line_height`,
    /// the per-line pixel height the web version scrolled by)
    pub fn units_per_row(&self) -> f64 {
        (self.font_size * self.line_height).max(1.0)
    }
}

fn default_speed() -> f64 {
    2.0
}

fn default_font_size() -> f64 {
    40.0
}

fn default_line_height() -> f64 {
    1.6
}

fn default_line_width() -> u16 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.speed, 2.0);
        assert_eq!(s.font_size, 40.0);
        assert_eq!(s.line_height, 1.6);
        assert_eq!(s.line_width, 20);
        assert_eq!(s.contrast, Contrast::YellowOnBlack);
        assert!(!s.mirror_h);
        assert!(!s.mirror_v);
    }

    #[test]
    fn test_partial_json_merges_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "speed": 1.5, "mirrorH": true }"#).unwrap();
        assert_eq!(s.speed, 1.5);
        assert!(s.mirror_h);
        assert_eq!(s.font_size, 40.0);
        assert_eq!(s.contrast, Contrast::YellowOnBlack);
    }

    #[test]
    fn test_unknown_contrast_falls_back() {
        let s: Settings = serde_json::from_str(r#"{ "contrast": "purple" }"#).unwrap();
        assert_eq!(s.contrast, Contrast::YellowOnBlack);

        let s: Settings = serde_json::from_str(r#"{ "contrast": "light" }"#).unwrap();
        assert_eq!(s.contrast, Contrast::Light);
    }

    #[test]
    fn test_camel_case_round_trip() {
        let mut s = Settings::default();
        s.mirror_v = true;
        s.contrast = Contrast::Dark;
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"mirrorV\":true"));
        assert!(json.contains("\"contrast\":\"dark\""));
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.contrast, Contrast::Dark);
        assert!(back.mirror_v);
    }
}
