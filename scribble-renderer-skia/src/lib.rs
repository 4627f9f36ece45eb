//! A software raster backend built on `tiny-skia`.

use scribble_renderer::{Color, LineCap, LineJoin, Path, PathCommand, StrokeStyle, Surface};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

/// A full-frame copy of a [`SkiaSurface`]'s pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
   width: u32,
   height: u32,
   /// Premultiplied RGBA, row-major.
   data: Vec<u8>,
}

impl Snapshot {
   pub fn size(&self) -> (u32, u32) {
      (self.width, self.height)
   }
}

/// An in-memory, anti-aliased drawing surface.
pub struct SkiaSurface {
   width: u32,
   height: u32,
   // tiny-skia cannot allocate an empty pixmap, so a zero-sized surface has none.
   pixmap: Option<Pixmap>,
}

impl SkiaSurface {
   pub fn new(width: u32, height: u32) -> Self {
      let pixmap = Pixmap::new(width, height);
      if pixmap.is_none() {
         log::debug!("surface created with empty size {}x{}", width, height);
      }
      Self {
         width,
         height,
         pixmap,
      }
   }

   /// Returns the color of the pixel at the given coordinates, with alpha demultiplied.
   pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
      let pixmap = self.pixmap.as_ref()?;
      let color = pixmap.pixel(x, y)?.demultiply();
      Some(Color::rgba(color.red(), color.green(), color.blue(), color.alpha()))
   }

   /// Returns the surface's pixels as straight-alpha RGBA, row-major.
   pub fn to_rgba(&self) -> Vec<u8> {
      match &self.pixmap {
         Some(pixmap) => pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
               let color = pixel.demultiply();
               [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect(),
         None => Vec::new(),
      }
   }

   fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
      let mut builder = PathBuilder::new();
      for command in path.commands() {
         match *command {
            PathCommand::MoveTo(point) => builder.move_to(point.x, point.y),
            PathCommand::LineTo(point) => builder.line_to(point.x, point.y),
            PathCommand::QuadTo { control, to } => {
               builder.quad_to(control.x, control.y, to.x, to.y)
            }
         }
      }
      builder.finish()
   }
}

impl Surface for SkiaSurface {
   type Snapshot = Snapshot;

   fn size(&self) -> (u32, u32) {
      (self.width, self.height)
   }

   fn resize(&mut self, width: u32, height: u32) {
      *self = Self::new(width, height);
   }

   fn clear(&mut self) {
      if let Some(pixmap) = &mut self.pixmap {
         pixmap.fill(tiny_skia::Color::TRANSPARENT);
      }
   }

   fn fill(&mut self, color: Color) {
      if let Some(pixmap) = &mut self.pixmap {
         pixmap.fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
      }
   }

   fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) {
      let pixmap = match &mut self.pixmap {
         Some(pixmap) => pixmap,
         None => return,
      };
      let path = match Self::to_skia_path(path) {
         Some(path) => path,
         None => {
            log::trace!("skipping degenerate path");
            return;
         }
      };

      let color = style.color.with_opacity(style.opacity);
      let mut paint = Paint::default();
      paint.set_color_rgba8(color.r, color.g, color.b, color.a);
      paint.anti_alias = true;

      let stroke = Stroke {
         width: style.width,
         line_cap: match style.cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
         },
         line_join: match style.join {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
         },
         ..Stroke::default()
      };

      pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
   }

   fn snapshot(&self) -> anyhow::Result<Snapshot> {
      Ok(Snapshot {
         width: self.width,
         height: self.height,
         data: self.pixmap.as_ref().map(|pixmap| pixmap.data().to_vec()).unwrap_or_default(),
      })
   }

   fn restore(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
      self.clear();
      let pixmap = match &mut self.pixmap {
         Some(pixmap) => pixmap,
         None => return Ok(()),
      };
      if snapshot.size() != (self.width, self.height) {
         log::debug!(
            "restoring {:?} snapshot onto {:?} surface",
            snapshot.size(),
            (self.width, self.height)
         );
      }

      // Copy the overlapping region row by row; anything outside of it stays cleared.
      let columns = self.width.min(snapshot.width) as usize * 4;
      let rows = self.height.min(snapshot.height) as usize;
      let source_stride = snapshot.width as usize * 4;
      let dest_stride = self.width as usize * 4;
      let dest = pixmap.data_mut();
      for row in 0..rows {
         let source = &snapshot.data[row * source_stride..][..columns];
         dest[row * dest_stride..][..columns].copy_from_slice(source);
      }
      Ok(())
   }
}
