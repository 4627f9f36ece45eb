use crate::Point;

/// A single path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
   MoveTo(Point),
   LineTo(Point),
   /// A quadratic Bézier curve through a control point to an end point.
   QuadTo { control: Point, to: Point },
}

/// A sequence of path commands, stroked as a whole by [`crate::Surface::stroke_path`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
   commands: Vec<PathCommand>,
}

impl Path {
   pub fn new() -> Self {
      Self::default()
   }

   /// Starts a new path at the given point.
   pub fn starting_at(point: Point) -> Self {
      let mut path = Self::new();
      path.move_to(point);
      path
   }

   pub fn move_to(&mut self, point: Point) {
      self.commands.push(PathCommand::MoveTo(point));
   }

   pub fn line_to(&mut self, point: Point) {
      self.commands.push(PathCommand::LineTo(point));
   }

   pub fn quad_to(&mut self, control: Point, to: Point) {
      self.commands.push(PathCommand::QuadTo { control, to });
   }

   pub fn commands(&self) -> &[PathCommand] {
      &self.commands
   }

   /// Returns whether the path draws anything, ie. has at least one command other than a move.
   pub fn is_drawable(&self) -> bool {
      self.commands.iter().any(|command| !matches!(command, PathCommand::MoveTo(_)))
   }
}
