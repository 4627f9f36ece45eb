//! A drawing surface backed by an HTML `<canvas>` element's 2D context.

use scribble_renderer::{Color, Path, PathCommand, StrokeStyle, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

mod common;

use crate::common::*;

/// A capture of the canvas' pixels. Empty canvases cannot be captured by the browser, so their
/// snapshots carry no image data.
pub struct Snapshot(Option<ImageData>);

pub struct CanvasSurface {
   canvas: HtmlCanvasElement,
   context: CanvasRenderingContext2d,
}

impl CanvasSurface {
   pub fn new(canvas: HtmlCanvasElement) -> anyhow::Result<Self> {
      let context = canvas
         .get_context("2d")
         .map_err(|error| js_error("cannot get 2D context", error))?
         .ok_or_else(|| anyhow::anyhow!("the canvas does not support 2D rendering"))?
         .dyn_into::<CanvasRenderingContext2d>()
         .map_err(|_| anyhow::anyhow!("the 2D context has an unexpected type"))?;
      Ok(Self {
         canvas,
         context,
      })
   }

   pub fn canvas(&self) -> &HtmlCanvasElement {
      &self.canvas
   }

   fn trace(&self, path: &Path) {
      let ctx = &self.context;
      ctx.begin_path();
      for command in path.commands() {
         match *command {
            PathCommand::MoveTo(point) => ctx.move_to(point.x as _, point.y as _),
            PathCommand::LineTo(point) => ctx.line_to(point.x as _, point.y as _),
            PathCommand::QuadTo { control, to } => {
               ctx.quadratic_curve_to(control.x as _, control.y as _, to.x as _, to.y as _)
            }
         }
      }
   }
}

impl Surface for CanvasSurface {
   type Snapshot = Snapshot;

   fn size(&self) -> (u32, u32) {
      (self.canvas.width(), self.canvas.height())
   }

   fn resize(&mut self, width: u32, height: u32) {
      self.canvas.set_width(width);
      self.canvas.set_height(height);
   }

   fn clear(&mut self) {
      let (width, height) = self.size();
      self.context.clear_rect(0.0, 0.0, width as _, height as _);
   }

   fn fill(&mut self, color: Color) {
      let (width, height) = self.size();
      self.context.save();
      self.context.set_global_alpha(1.0);
      self.context.set_fill_style(&color_to_jsvalue(color));
      self.context.fill_rect(0.0, 0.0, width as _, height as _);
      self.context.restore();
   }

   fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) {
      if !path.is_drawable() {
         return;
      }
      let ctx = &self.context;
      ctx.set_line_width(style.width as _);
      ctx.set_stroke_style(&color_to_jsvalue(style.color));
      ctx.set_global_alpha(style.opacity.clamp(0.0, 1.0) as _);
      ctx.set_line_cap(line_cap_name(style.cap));
      ctx.set_line_join(line_join_name(style.join));
      self.trace(path);
      ctx.stroke();
   }

   fn snapshot(&self) -> anyhow::Result<Snapshot> {
      let (width, height) = self.size();
      if width == 0 || height == 0 {
         log::debug!("capturing an empty {}x{} canvas", width, height);
         return Ok(Snapshot(None));
      }
      let image_data = self
         .context
         .get_image_data(0.0, 0.0, width as _, height as _)
         .map_err(|error| js_error("cannot capture the canvas", error))?;
      Ok(Snapshot(Some(image_data)))
   }

   fn restore(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
      self.clear();
      if let Some(image_data) = &snapshot.0 {
         self
            .context
            .put_image_data(image_data, 0.0, 0.0)
            .map_err(|error| js_error("cannot restore the canvas", error))?;
      }
      Ok(())
   }
}
