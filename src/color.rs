// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// or parsed from the CSS forms the page theme hands us

use crate::error::ColorError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// Hue in degrees, saturation and lightness in percent.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = (saturation / 100.0).max(0.0).min(1.0);
        let l = (lightness / 100.0).max(0.0).min(1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().max(0.0).min(255.0) as u8;

        Color {
            r: channel(r1),
            g: channel(g1),
            b: channel(b1),
            a: 0xff,
        }
    }

    /// Accepts `#rrggbb`, `#rrggbbaa`, `hsl(210 40% 98%)`, `hsl(210, 40%, 98%)`,
    /// `hsla(...)` and the bare `210 40% 98%` triplets found in CSS custom properties.
    pub fn parse(input: &str) -> Result<Color, ColorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(hex) = input.strip_prefix('#') {
            return Color::parse_hex(hex);
        }

        let lower = input.to_ascii_lowercase();
        let body = if let Some(rest) = lower
            .strip_prefix("hsla(")
            .or_else(|| lower.strip_prefix("hsl("))
        {
            rest.strip_suffix(')')
                .ok_or_else(|| ColorError::Malformed(input.to_owned()))?
        } else {
            lower.as_str()
        };

        let parts: Vec<&str> = body
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() < 3 || parts.len() > 4 {
            return Err(ColorError::Malformed(input.to_owned()));
        }

        let hue = parse_number(parts[0].trim_end_matches("deg"))?;
        let saturation = parse_number(parts[1].trim_end_matches('%'))?;
        let lightness = parse_number(parts[2].trim_end_matches('%'))?;
        let mut color = Color::from_hsl(hue, saturation, lightness);
        if let Some(alpha) = parts.get(3) {
            let alpha = match alpha.strip_suffix('%') {
                Some(percent) => parse_number(percent)? / 100.0,
                None => parse_number(alpha)?,
            };
            color.a = (alpha.max(0.0).min(1.0) * 255.0).round() as u8;
        }
        Ok(color)
    }

    fn parse_hex(hex: &str) -> Result<Color, ColorError> {
        // from_str_radix alone would take a leading sign
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidComponent(hex.to_owned()));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ColorError::InvalidComponent(hex.to_owned()))?;
        match hex.len() {
            6 => Ok(Color::from_u32((value << 8) | 0xff)),
            8 => Ok(Color::from_u32(value)),
            _ => Err(ColorError::Malformed(format!("#{}", hex))),
        }
    }

    // Canvas fill/stroke styles take CSS strings
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }
}

fn parse_number(text: &str) -> Result<f64, ColorError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ColorError::InvalidComponent(text.to_owned()))
}

/// The three colours the background takes from the active theme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub particle: Color,
    pub line: Color,
    pub pointer_line: Color,
}

impl ThemeColors {
    pub const DEFAULT_PARTICLE: &'static str = "hsl(210 40% 98%)";
    pub const DEFAULT_LINE: &'static str = "hsl(217.2 32.6% 17.5%)";
    pub const DEFAULT_POINTER_LINE: &'static str = "hsl(212.7 26.8% 83.9%)";

    pub fn new(particle: Color, line: Color, pointer_line: Color) -> Self {
        ThemeColors {
            particle,
            line,
            pointer_line,
        }
    }

    pub fn parse(particle: &str, line: &str, pointer_line: &str) -> Result<Self, ColorError> {
        Ok(ThemeColors {
            particle: Color::parse(particle)?,
            line: Color::parse(line)?,
            pointer_line: Color::parse(pointer_line)?,
        })
    }
}

impl Default for ThemeColors {
    // Dark theme palette, also used before any stylesheet is available
    fn default() -> Self {
        ThemeColors {
            particle: Color::from_hsl(210.0, 40.0, 98.0),
            line: Color::from_hsl(217.2, 32.6, 17.5),
            pointer_line: Color::from_hsl(212.7, 26.8, 83.9),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_splits_channels() {
        let c = Color::from_u32(0x1020_30ff);
        assert_eq!((c.r, c.g, c.b, c.a), (0x10, 0x20, 0x30, 0xff));
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::from_hsl(0.0, 100.0, 50.0), Color::from_u32(0xff00_00ff));
        assert_eq!(Color::from_hsl(120.0, 100.0, 25.0), Color::from_u32(0x0080_00ff));
        assert_eq!(Color::from_hsl(240.0, 100.0, 50.0), Color::from_u32(0x0000_ffff));
        assert_eq!(Color::from_hsl(360.0, 100.0, 50.0), Color::from_u32(0xff00_00ff));
    }

    #[test]
    fn parses_theme_variable_triplet() {
        // --foreground in the dark theme, #f8fafc
        let c = Color::parse("210 40% 98%").unwrap();
        assert_eq!(c, Color::from_u32(0xf8fa_fcff));
        assert_eq!(Color::parse(" hsl(210 40% 98%) ").unwrap(), c);
        assert_eq!(Color::parse("hsl(210, 40%, 98%)").unwrap(), c);
        assert_eq!(Color::parse("HSL(210deg 40% 98%)").unwrap(), c);
    }

    #[test]
    fn parses_alpha() {
        assert_eq!(Color::parse("hsla(0, 100%, 50%, 0.5)").unwrap().a, 128);
        assert_eq!(Color::parse("hsl(0 100% 50% / 50%)").unwrap().a, 128);
        assert_eq!(Color::parse("#11223344").unwrap(), Color::from_u32(0x1122_3344));
        assert_eq!(Color::parse("#112233").unwrap().a, 0xff);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::parse("   "), Err(ColorError::Empty));
        assert!(matches!(Color::parse("hsl(1 2%"), Err(ColorError::Malformed(_))));
        assert!(matches!(Color::parse("10 20%"), Err(ColorError::Malformed(_))));
        assert!(matches!(
            Color::parse("blue 20% 30%"),
            Err(ColorError::InvalidComponent(_))
        ));
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#zzzzzz").is_err());
        assert_eq!(
            Color::parse("#+12345"),
            Err(ColorError::InvalidComponent("+12345".to_owned()))
        );
        assert!(Color::parse("#-1234567").is_err());
    }

    #[test]
    fn css_output() {
        assert_eq!(Color::from_u32(0x0102_03ff).to_css(), "rgba(1, 2, 3, 1)");
        assert_eq!(Color::from_u32(0x0000_0000).to_css(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn default_theme_matches_its_css_constants() {
        let parsed = ThemeColors::parse(
            ThemeColors::DEFAULT_PARTICLE,
            ThemeColors::DEFAULT_LINE,
            ThemeColors::DEFAULT_POINTER_LINE,
        )
        .unwrap();
        assert_eq!(parsed, ThemeColors::default());
    }
}
