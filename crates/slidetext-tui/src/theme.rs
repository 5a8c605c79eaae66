use ratatui::style::Color;
use slidetext_core::config::{ThemeColorOverrides, ThemeConfig};
use tracing::warn;

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub border: Color,
    pub dim: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            bg: Color::Rgb(0x28, 0x28, 0x28),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            border: Color::Rgb(0x50, 0x49, 0x45),
            dim: Color::Rgb(0x92, 0x83, 0x74),
            status_fg: Color::Rgb(0xd4, 0xbe, 0x98),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
        }
    }
}

impl Theme {
    /// Terminal default colors only
    pub fn mono() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            accent: Color::White,
            border: Color::DarkGray,
            dim: Color::Gray,
            status_fg: Color::Black,
            status_bg: Color::Gray,
        }
    }

    fn apply_overrides(mut self, overrides: &ThemeColorOverrides) -> Self {
        let slots = [
            (&mut self.fg, &overrides.fg),
            (&mut self.bg, &overrides.bg),
            (&mut self.accent, &overrides.accent),
            (&mut self.border, &overrides.border),
        ];
        for (slot, value) in slots {
            if let Some(hex) = value {
                match parse_hex_color(hex) {
                    Some(color) => *slot = color,
                    None => warn!("Ignoring invalid theme color: {}", hex),
                }
            }
        }
        self
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "default" | "gruvbox-dark" => Theme::default(),
        "mono" => Theme::mono(),
        other => {
            warn!("Unknown theme '{}', using default", other);
            Theme::default()
        }
    };
    base.apply_overrides(&config.colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#12"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
        assert_eq!(parse_hex_color("ééé"), None);
    }

    #[test]
    fn test_load_theme_with_overrides() {
        let config = ThemeConfig {
            name: "mono".to_string(),
            colors: ThemeColorOverrides {
                fg: Some("#010203".to_string()),
                accent: Some("not a color".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.fg, Color::Rgb(1, 2, 3));
        assert_eq!(theme.accent, Theme::mono().accent);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "solarized".to_string(),
            colors: ThemeColorOverrides::default(),
        };
        assert_eq!(load_theme(&config), Theme::default());
    }
}
