use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use scribble_renderer::Surface;
use scribble_renderer_skia::SkiaSurface;

pub struct ImageCoder;

impl ImageCoder {
   /// Encodes the surface's pixels as PNG data.
   pub fn encode_png_data(surface: &SkiaSurface) -> crate::Result<Vec<u8>> {
      let (width, height) = surface.size();
      let pixels = surface.to_rgba();
      let mut bytes: Vec<u8> = Vec::new();
      match PngEncoder::new(Cursor::new(&mut bytes)).write_image(
         &pixels,
         width,
         height,
         ColorType::Rgba8,
      ) {
         Ok(()) => (),
         Err(error) => {
            log::error!("error while encoding: {}", error);
            return Err(error.into());
         }
      }
      Ok(bytes)
   }
}
