use std::fmt;

use log::warn;
use thiserror::Error;

/// Used whenever a color string cannot be parsed.
pub const FALLBACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit {0:?}")]
    BadDigit(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b, self.alpha)
    }
}

/// Parses `#RRGGBB` (the `#` is optional).
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::BadDigit(bad));
    }
    if digits.len() != 6 {
        return Err(ColorError::BadLength(digits.len()));
    }

    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Rgb { r, g, b }),
        // digits were validated above
        _ => Err(ColorError::BadLength(digits.len())),
    }
}

/// Applies `alpha` to a hex color. Malformed colors become opaque black
/// and alpha is clamped to `[0, 1]`.
pub fn to_rgba(hex: &str, alpha: f64) -> Rgba {
    match parse_hex(hex) {
        Ok(rgb) => Rgba { rgb, alpha: clamp_alpha(alpha) },
        Err(e) => {
            warn!("Falling back to black for color {:?}: {}", hex, e);
            Rgba { rgb: FALLBACK, alpha: 1.0 }
        }
    }
}

/// CSS string shorthand for `to_rgba`.
pub fn rgba(hex: &str, alpha: f64) -> String {
    to_rgba(hex, alpha).to_string()
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

pub fn linear_gradient(angle_deg: u16, from: &str, to: &str) -> String {
    format!("linear-gradient({}deg, {}, {})", angle_deg, from, to)
}

/// Cycles through a fixed accent palette by position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette(pub &'static [&'static str]);

impl Palette {
    pub fn pick(&self, index: usize) -> &'static str {
        if self.0.is_empty() {
            return "#000000";
        }
        self.0[index % self.0.len()]
    }
}

pub const TIMELINE_ACCENTS: Palette =
    Palette(&["#0ea5a4", "#0ea5a4", "#7c3aed", "#f97316", "#ec4899", "#06b6d4"]);

pub const STARTUP_ACCENTS: Palette = Palette(&["#2563EB", "#059669", "#7C3AED", "#F97316"]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_opacity_matches_direct_parse() {
        for (hex, expected) in [
            ("#2563EB", Rgb { r: 37, g: 99, b: 235 }),
            ("#FFFFFF", Rgb { r: 255, g: 255, b: 255 }),
            ("#059669", Rgb { r: 5, g: 150, b: 105 }),
            ("ec4899", Rgb { r: 236, g: 72, b: 153 }),
        ] {
            let parsed = parse_hex(hex).expect("valid hex should parse");
            assert_eq!(parsed, expected);
            assert_eq!(to_rgba(hex, 1.0).rgb, parsed);
            assert_eq!(to_rgba(hex, 1.0).alpha, 1.0);
        }
    }

    #[test]
    fn renders_css_rgba() {
        assert_eq!(rgba("#2563EB", 0.12), "rgba(37, 99, 235, 0.12)");
        assert_eq!(rgba("#FFFFFF", 1.0), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn malformed_input_falls_back_to_opaque_black() {
        for bad in ["", "#", "#FFF", "#12345", "#GGGGGG", "#2563EB00", "#ééé"] {
            let color = to_rgba(bad, 0.3);
            assert_eq!(color.rgb, FALLBACK, "input {:?}", bad);
            assert_eq!(color.alpha, 1.0, "input {:?}", bad);
        }
    }

    #[test]
    fn parse_reports_reason() {
        assert_eq!(parse_hex("#FFF"), Err(ColorError::BadLength(3)));
        assert_eq!(parse_hex("#12G456"), Err(ColorError::BadDigit('G')));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(to_rgba("#FFFFFF", 1.7).alpha, 1.0);
        assert_eq!(to_rgba("#FFFFFF", -0.2).alpha, 0.0);
        assert_eq!(to_rgba("#FFFFFF", f64::NAN).alpha, 1.0);
    }

    #[test]
    fn palette_cycles_and_tolerates_empty() {
        assert_eq!(STARTUP_ACCENTS.pick(0), "#2563EB");
        assert_eq!(STARTUP_ACCENTS.pick(5), "#059669");
        assert_eq!(TIMELINE_ACCENTS.pick(6), "#0ea5a4");
        assert_eq!(Palette(&[]).pick(3), "#000000");
    }

    #[test]
    fn gradient_string() {
        assert_eq!(
            linear_gradient(90, "#2563EB", "#1E40AF"),
            "linear-gradient(90deg, #2563EB, #1E40AF)"
        );
    }
}
