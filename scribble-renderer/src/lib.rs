//! Backend-neutral drawing vocabulary shared by the canvas session and its raster backends.

mod color;
mod path;

pub use crate::color::*;
pub use crate::path::*;

/// A point on the drawing surface, in pixels relative to its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
   pub x: f32,
   pub y: f32,
}

impl Point {
   pub fn new(x: f32, y: f32) -> Self {
      Self { x, y }
   }

   /// Returns the point halfway between `self` and `other`.
   pub fn midpoint(self, other: Point) -> Point {
      Point {
         x: self.x + (other.x - self.x) / 2.0,
         y: self.y + (other.y - self.y) / 2.0,
      }
   }
}

/// The shape drawn at the open ends of a stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
   Butt,
   Round,
}

/// The shape drawn where two segments of a stroke meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
   Miter,
   Round,
}

/// Everything a backend needs to know to paint a stroke.
///
/// Backends must apply the whole bundle for every [`Surface::stroke_path`] call; there is no
/// paint state carried over between calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
   pub width: f32,
   pub color: Color,
   /// Global opacity in the range `0.0..=1.0`, applied on top of the color's own alpha.
   pub opacity: f32,
   pub cap: LineCap,
   pub join: LineJoin,
}

/// A raster drawing surface.
pub trait Surface {
   /// An opaque full-frame capture of the surface's pixels.
   type Snapshot;

   /// Returns the size of the surface in pixels.
   fn size(&self) -> (u32, u32);

   /// Changes the pixel dimensions of the surface. The existing content is discarded.
   fn resize(&mut self, width: u32, height: u32);

   /// Erases the whole surface to transparent.
   fn clear(&mut self);

   /// Fills the whole surface with an opaque color.
   fn fill(&mut self, color: Color);

   /// Strokes the given path with the given style.
   fn stroke_path(&mut self, path: &Path, style: &StrokeStyle);

   /// Captures the current pixels of the surface.
   fn snapshot(&self) -> anyhow::Result<Self::Snapshot>;

   /// Overwrites the surface's pixels with a previously captured snapshot, placed at the origin.
   fn restore(&mut self, snapshot: &Self::Snapshot) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn midpoint_is_halfway() {
      assert_eq!(Point::new(0.0, 10.0).midpoint(Point::new(10.0, 0.0)), Point::new(5.0, 5.0));
   }
}
