//! Colors for filling and stroking.

use std::fmt;
use std::str::FromStr;
use super::canvas::{Group, Property};


//------------ Color ---------------------------------------------------------

/// An RGBA color.
///
/// All components are in the range 0 to 1. Alpha is not premultiplied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1., 1., 1.);

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Color { red, green, blue, alpha }
    }

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Color::rgba(red, green, blue, 1.)
    }

    /// Creates an opaque color from 8-bit components.
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Color::rgb(
            f64::from(red) / 255.,
            f64::from(green) / 255.,
            f64::from(blue) / 255.,
        )
    }

    /// Creates a color from a hex string.
    ///
    /// Accepts `#rrggbb` and `#rrggbbaa`. The leading hash is optional.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidHexColor> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit())
            || (digits.len() != 6 && digits.len() != 8)
        {
            return Err(InvalidHexColor(hex.into()))
        }
        let component = |idx: usize| -> Result<f64, InvalidHexColor> {
            u8::from_str_radix(&digits[idx..idx + 2], 16)
                .map(|value| f64::from(value) / 255.)
                .map_err(|_| InvalidHexColor(hex.into()))
        };
        Ok(Color {
            red: component(0)?,
            green: component(2)?,
            blue: component(4)?,
            alpha: if digits.len() == 8 { component(6)? } else { 1. },
        })
    }

    /// Returns the same color with the given opacity.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Color { alpha, ..self }
    }
}

impl FromStr for Color {
    type Err = InvalidHexColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidHexColor;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let byte = |value: f64| (value.clamp(0., 1.) * 255.).round() as u8;
        write!(
            f, "#{:02x}{:02x}{:02x}",
            byte(self.red), byte(self.green), byte(self.blue)
        )?;
        if self.alpha < 1. {
            write!(f, "{:02x}", byte(self.alpha))?;
        }
        Ok(())
    }
}

impl Property for Color {
    fn apply_to_group(self, group: &mut Group) {
        group.cairo().set_source_rgba(
            self.red, self.green, self.blue, self.alpha
        )
    }
}


//------------ InvalidHexColor -----------------------------------------------

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid hex color '{0}'")]
pub struct InvalidHexColor(String);


//============ Testing =======================================================
