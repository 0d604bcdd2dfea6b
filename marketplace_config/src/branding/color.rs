//! Hex colour parsing and HSL derivation.

use std::fmt;

/// An sRGB colour with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or the shorthand `#rgb`. The leading `#` is optional.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketplace_config::branding::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#f00"), Rgb::from_hex("FF0000"));
    /// assert!(Rgb::from_hex("#ff00").is_none());
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |text: &str| u8::from_str_radix(text, 16).ok();
        match digits.len() {
            3 => {
                let mut doubled = digits.chars().map(|c| channel(&c.to_string().repeat(2)));
                Some(Self {
                    red: doubled.next()??,
                    green: doubled.next()??,
                    blue: doubled.next()??,
                })
            }
            6 => Some(Self {
                red: channel(digits.get(0..2)?)?,
                green: channel(digits.get(2..4)?)?,
                blue: channel(digits.get(4..6)?)?,
            }),
            _ => None,
        }
    }
}

/// A colour in whole-number HSL coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees, `0..=360`.
    pub hue: u16,
    /// Saturation in percent, `0..=100`.
    pub saturation: u8,
    /// Lightness in percent, `0..=100`.
    pub lightness: u8,
}

impl Hsl {
    /// The same colour with its lightness moved by `diff` percentage points,
    /// clamped to `0..=100`.
    #[must_use]
    pub fn shifted(self, diff: i16) -> Self {
        let lightness = (i16::from(self.lightness) + diff).clamp(0, 100);
        Self {
            lightness: u8::try_from(lightness).unwrap_or(100),
            ..self
        }
    }
}

impl From<Rgb> for Hsl {
    #[expect(
        clippy::float_arithmetic,
        reason = "HSL conversion is defined over fractional channel values"
    )]
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.red) / 255.0;
        let g = f64::from(rgb.green) / 255.0;
        let b = f64::from(rgb.blue) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if rgb.red == rgb.green && rgb.green == rgb.blue {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            let sector = if rgb.red >= rgb.green && rgb.red >= rgb.blue {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if rgb.green >= rgb.blue {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (sector / 6.0, saturation)
        };

        Self {
            hue: to_whole(hue * 360.0, 360),
            saturation: u8::try_from(to_whole(saturation * 100.0, 100)).unwrap_or(100),
            lightness: u8::try_from(to_whole(lightness * 100.0, 100)).unwrap_or(100),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped into 0..=max first"
)]
fn to_whole(value: f64, max: u16) -> u16 {
    value.round().clamp(0.0, f64::from(max)) as u16
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Render `hex` as a CSS `hsl()` string with its lightness shifted by `diff`.
///
/// Returns `None` when `hex` is not a valid hex colour.
///
/// # Examples
///
/// ```
/// use marketplace_config::branding::hex_to_css_hsl;
///
/// assert_eq!(hex_to_css_hsl("#FF0000", -10).as_deref(), Some("hsl(0, 100%, 40%)"));
/// assert_eq!(hex_to_css_hsl("#FF0000", 10).as_deref(), Some("hsl(0, 100%, 60%)"));
/// ```
#[must_use]
pub fn hex_to_css_hsl(hex: &str, diff: i16) -> Option<String> {
    Rgb::from_hex(hex).map(|rgb| Hsl::from(rgb).shifted(diff).to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#ffffff", Hsl { hue: 0, saturation: 0, lightness: 100 })]
    #[case("#000", Hsl { hue: 0, saturation: 0, lightness: 0 })]
    #[case("#00ff00", Hsl { hue: 120, saturation: 100, lightness: 50 })]
    #[case("#0000ff", Hsl { hue: 240, saturation: 100, lightness: 50 })]
    #[case("#7c3aed", Hsl { hue: 262, saturation: 83, lightness: 58 })]
    fn converts_hex_to_hsl(#[case] hex: &str, #[case] expected: Hsl) {
        let rgb = Rgb::from_hex(hex).expect("valid hex");
        assert_eq!(Hsl::from(rgb), expected);
    }

    #[rstest]
    #[case("")]
    #[case("#12345")]
    #[case("#gg0000")]
    #[case("red")]
    #[case("#ffé")]
    fn rejects_malformed_hex(#[case] hex: &str) {
        assert!(Rgb::from_hex(hex).is_none());
        assert!(hex_to_css_hsl(hex, 10).is_none());
    }

    #[rstest]
    #[case("#ffffff", 10, "hsl(0, 0%, 100%)")]
    #[case("#000000", -10, "hsl(0, 0%, 0%)")]
    fn lightness_is_clamped(#[case] hex: &str, #[case] diff: i16, #[case] expected: &str) {
        assert_eq!(hex_to_css_hsl(hex, diff).as_deref(), Some(expected));
    }
}
