use scribble_renderer::{Color, LineCap, LineJoin, Point, StrokeStyle};

use crate::input::Pointer;
use crate::paint::ToolState;

/// A single captured point of a stroke, along with the style the stroke is painted with up to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePoint {
   position: Point,
   is_drag: bool,
   style: StrokeStyle,
}

impl LinePoint {
   /// Creates an unstyled point: the tool state's width and color, full opacity, butt caps, and
   /// miter joins.
   pub fn new(position: Point, is_drag: bool, tools: &ToolState) -> Self {
      Self {
         position,
         is_drag,
         style: StrokeStyle {
            width: tools.size,
            color: tools.color,
            opacity: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
         },
      }
   }

   pub fn position(&self) -> Point {
      self.position
   }

   /// Returns whether the point continues a stroke. The first point of a stroke is never a drag.
   pub fn is_drag(&self) -> bool {
      self.is_drag
   }

   pub fn style(&self) -> &StrokeStyle {
      &self.style
   }

   pub fn width(&self) -> f32 {
      self.style.width
   }

   pub fn color(&self) -> Color {
      self.style.color
   }

   pub fn opacity(&self) -> f32 {
      self.style.opacity
   }

   pub fn with_width(self, width: f32) -> Self {
      Self {
         style: StrokeStyle { width, ..self.style },
         ..self
      }
   }

   pub fn with_opacity(self, opacity: f32) -> Self {
      Self {
         style: StrokeStyle {
            opacity,
            ..self.style
         },
         ..self
      }
   }

   pub fn with_shape(self, cap: LineCap, join: LineJoin) -> Self {
      Self {
         style: StrokeStyle {
            cap,
            join,
            ..self.style
         },
         ..self
      }
   }
}

/// Captures a pointer event as a point relative to the surface's top-left corner.
///
/// `offset` is the position of the surface on the page. Returns `None` when the event carries no
/// usable position.
pub fn capture_point(
   pointer: &Pointer,
   is_drag: bool,
   offset: Point,
   tools: &ToolState,
) -> Option<LinePoint> {
   let (page_x, page_y) = pointer.page_position()?;
   let position = Point::new(page_x - offset.x, page_y - offset.y);
   Some(LinePoint::new(position, is_drag, tools))
}
