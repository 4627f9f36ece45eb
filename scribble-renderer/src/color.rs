use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An 8-bit sRGB color with straight (non-premultiplied) alpha.
///
/// Colors are written the way CSS writes them: `#rgb`, `#rrggbb`, or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
   pub r: u8,
   pub g: u8,
   pub b: u8,
   pub a: u8,
}

impl Color {
   pub const BLACK: Self = Self::rgb(0, 0, 0);
   pub const WHITE: Self = Self::rgb(255, 255, 255);
   pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

   pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
      Self { r, g, b, a: 255 }
   }

   pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
      Self { r, g, b, a }
   }

   /// Returns the color with its alpha multiplied by `opacity`.
   pub fn with_opacity(self, opacity: f32) -> Self {
      let opacity = opacity.clamp(0.0, 1.0);
      Self {
         a: (self.a as f32 * opacity).round() as u8,
         ..self
      }
   }
}

impl Default for Color {
   fn default() -> Self {
      Self::BLACK
   }
}

/// The error returned when a string is not a valid hex color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}, expected #rgb, #rrggbb, or #rrggbbaa")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
   type Err = ColorParseError;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      let error = || ColorParseError(s.to_owned());
      let hex = s.trim().strip_prefix('#').ok_or_else(error)?;
      if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
         return Err(error());
      }
      let channel = |start: usize, len: usize| {
         u8::from_str_radix(&hex[start..start + len], 16).map_err(|_| error())
      };
      match hex.len() {
         3 => Ok(Color::rgb(
            channel(0, 1)? * 0x11,
            channel(1, 1)? * 0x11,
            channel(2, 1)? * 0x11,
         )),
         6 => Ok(Color::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
         8 => Ok(Color::rgba(
            channel(0, 2)?,
            channel(2, 2)?,
            channel(4, 2)?,
            channel(6, 2)?,
         )),
         _ => Err(error()),
      }
   }
}

impl fmt::Display for Color {
   fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
      write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
      if self.a != 255 {
         write!(f, "{:02x}", self.a)?;
      }
      Ok(())
   }
}

impl TryFrom<String> for Color {
   type Error = ColorParseError;

   fn try_from(value: String) -> Result<Self, Self::Error> {
      value.parse()
   }
}

impl From<Color> for String {
   fn from(color: Color) -> Self {
      color.to_string()
   }
}
