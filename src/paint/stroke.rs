//! Turning the in-progress point buffer into paths.

use scribble_renderer::{Path, StrokeStyle, Surface};

use crate::paint::{LinePoint, Tool};

/// Traces a stroke into the paths that have to be painted, each with its own style.
///
/// Smoothing tools produce one path per stroke, made of quadratic curves that use each point as
/// a control point and end halfway to the next one. The path takes its style from the point it
/// starts at. The last point only ever contributes a midpoint, so the curve trails slightly
/// behind the pointer.
///
/// Other tools produce a straight segment between every pair of consecutive points, each styled
/// by its end point, so that per-point width and opacity stay visible.
pub fn trace_stroke(points: &[LinePoint], smooth: bool) -> Vec<(Path, StrokeStyle)> {
   if smooth {
      trace_smooth(points)
   } else {
      trace_segments(points)
   }
}

fn trace_smooth(points: &[LinePoint]) -> Vec<(Path, StrokeStyle)> {
   let mut paths = Vec::new();
   let mut current: Option<(Path, StrokeStyle)> = None;
   for pair in points.windows(2) {
      let (point, next) = (&pair[0], &pair[1]);
      if !point.is_drag() {
         paths.extend(current.take());
      }
      let (path, _) = current
         .get_or_insert_with(|| (Path::starting_at(point.position()), *point.style()));
      path.quad_to(point.position(), point.position().midpoint(next.position()));
   }
   paths.extend(current);
   paths
}

fn trace_segments(points: &[LinePoint]) -> Vec<(Path, StrokeStyle)> {
   points
      .windows(2)
      .map(|pair| {
         let mut path = Path::starting_at(pair[0].position());
         path.line_to(pair[1].position());
         (path, *pair[1].style())
      })
      .collect()
}

/// Paints the stroke on top of whatever the surface currently shows.
pub fn render_stroke<S>(surface: &mut S, points: &[LinePoint], tool: &Tool)
where
   S: Surface,
{
   for (path, style) in trace_stroke(points, tool.smooths()) {
      surface.stroke_path(&path, &style);
   }
}
