//! Drawing tools and the per-tool styling of captured points.

use std::fmt;

use nanorand::{Rng, WyRand};
use scribble_renderer::{Color, LineCap, LineJoin};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::paint::LinePoint;

/// A drawing tool.
#[derive(Clone, Debug, PartialEq, Eq, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum Tool {
   /// Smoothed strokes with round caps and joins.
   Brush,
   /// Straight segments with jittered width.
   Pen,
   /// Thin, smoothed, slightly translucent strokes.
   Pencil,
   /// Any other tool. Points are drawn as captured.
   #[strum(default)]
   Other(String),
}

impl Tool {
   pub fn name(&self) -> &str {
      match self {
         Self::Brush => "brush",
         Self::Pen => "pen",
         Self::Pencil => "pencil",
         Self::Other(name) => name,
      }
   }

   /// Returns whether strokes drawn with this tool are smoothed with quadratic curves.
   pub fn smooths(&self) -> bool {
      matches!(self, Self::Brush | Self::Pencil)
   }
}

impl Default for Tool {
   fn default() -> Self {
      Self::Brush
   }
}

impl fmt::Display for Tool {
   fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
      f.write_str(self.name())
   }
}

impl From<String> for Tool {
   fn from(name: String) -> Self {
      name.parse().unwrap_or(Tool::Other(name))
   }
}

impl From<Tool> for String {
   fn from(tool: Tool) -> Self {
      tool.name().to_owned()
   }
}

/// A one-off toolbar action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Action {
   Undo,
   /// Clears the picture, after confirmation.
   Delete,
   /// Floods the picture with the current color.
   Fill,
   Settings,
}

/// The range the pen's stroke width is picked from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PenWidth {
   /// A fixed inclusive range, independent of the selected size.
   Fixed { min: u32, max: u32 },
   /// `[size - below, size]`, never thinner than 1 pixel.
   Relative { below: u32 },
}

impl PenWidth {
   /// Returns the inclusive bounds of the pen width for the given selected size.
   pub fn bounds(&self, size: f32) -> (u32, u32) {
      match *self {
         Self::Fixed { min, max } => (min.min(max), min.max(max)),
         Self::Relative { below } => {
            let max = size.round().max(1.0) as u32;
            (max.saturating_sub(below).max(1), max)
         }
      }
   }
}

impl Default for PenWidth {
   fn default() -> Self {
      Self::Fixed { min: 3, max: 4 }
   }
}

/// The currently selected tool, color, and stroke width.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolState {
   pub tool: Tool,
   pub color: Color,
   pub size: f32,
}

/// Styles a basic captured point according to the tool it was drawn with.
pub fn apply_tool(
   tool: &Tool,
   point: LinePoint,
   pen_width: &PenWidth,
   rng: &mut WyRand,
) -> LinePoint {
   match tool {
      Tool::Brush => point.with_shape(LineCap::Round, LineJoin::Round),
      Tool::Pen => {
         let (min, max) = pen_width.bounds(point.width());
         let width: u32 = rng.generate_range(min..=max);
         point.with_width(width as f32).with_opacity(0.9)
      }
      Tool::Pencil => point.with_width(1.0).with_opacity(0.9),
      Tool::Other(_) => point,
   }
}

#[cfg(test)]
mod tests {
   use scribble_renderer::Point;

   use super::*;

   fn basic_point(size: f32) -> LinePoint {
      let tools = ToolState {
         tool: Tool::Other("marker".to_owned()),
         color: Color::BLACK,
         size,
      };
      LinePoint::new(Point::new(1.0, 1.0), false, &tools)
   }

   #[test]
   fn tools_parse_from_names() {
      assert_eq!(Tool::from("pen".to_owned()), Tool::Pen);
      assert_eq!(Tool::from("laser".to_owned()), Tool::Other("laser".to_owned()));
      assert_eq!(Tool::Pencil.to_string(), "pencil");
      assert_eq!("fill".parse::<Action>(), Ok(Action::Fill));
   }

   #[test]
   fn brush_and_pencil_are_smoothed() {
      assert!(Tool::Brush.smooths());
      assert!(Tool::Pencil.smooths());
      assert!(!Tool::Pen.smooths());
      assert!(!Tool::Other("marker".to_owned()).smooths());
   }

   #[test]
   fn brush_rounds_the_stroke_shape() {
      let mut rng = WyRand::new_seed(1);
      let point = apply_tool(&Tool::Brush, basic_point(5.0), &PenWidth::default(), &mut rng);
      assert_eq!(point.style().cap, LineCap::Round);
      assert_eq!(point.style().join, LineJoin::Round);
      assert_eq!(point.width(), 5.0);
      assert_eq!(point.opacity(), 1.0);
   }

   #[test]
   fn pencil_ignores_the_selected_size() {
      let mut rng = WyRand::new_seed(1);
      for size in [1.0, 5.0, 40.0] {
         let point = apply_tool(&Tool::Pencil, basic_point(size), &PenWidth::default(), &mut rng);
         assert_eq!(point.width(), 1.0);
         assert_eq!(point.opacity(), 0.9);
      }
   }

   #[test]
   fn pen_width_stays_within_fixed_bounds() {
      let mut rng = WyRand::new_seed(7);
      let pen_width = PenWidth::Fixed { min: 3, max: 4 };
      for _ in 0..500 {
         let point = apply_tool(&Tool::Pen, basic_point(20.0), &pen_width, &mut rng);
         assert!((3.0..=4.0).contains(&point.width()), "width was {}", point.width());
         assert_eq!(point.width().fract(), 0.0);
         assert_eq!(point.opacity(), 0.9);
      }
   }

   #[test]
   fn pen_width_stays_within_relative_bounds() {
      let mut rng = WyRand::new_seed(7);
      let pen_width = PenWidth::Relative { below: 2 };
      for _ in 0..500 {
         let point = apply_tool(&Tool::Pen, basic_point(10.0), &pen_width, &mut rng);
         assert!((8.0..=10.0).contains(&point.width()), "width was {}", point.width());
      }
   }

   #[test]
   fn relative_pen_width_is_never_below_one_pixel() {
      assert_eq!(PenWidth::Relative { below: 2 }.bounds(1.0), (1, 1));
      assert_eq!(PenWidth::Relative { below: 2 }.bounds(0.0), (1, 1));
      assert_eq!(PenWidth::Fixed { min: 4, max: 3 }.bounds(9.0), (3, 4));
   }

   #[test]
   fn unknown_tools_pass_points_through() {
      let mut rng = WyRand::new_seed(1);
      let point = basic_point(5.0);
      let tool = Tool::Other("marker".to_owned());
      assert_eq!(apply_tool(&tool, point, &PenWidth::default(), &mut rng), point);
   }
}
