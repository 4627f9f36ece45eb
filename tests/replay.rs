use std::path::Path;

use scribble::config::UserConfig;
use scribble::image_coder::ImageCoder;
use scribble::paint::{CanvasSession, Tool};
use scribble::replay::Script;
use scribble::Color;
use scribble_renderer_skia::SkiaSurface;

#[test]
fn demo_script_replays_into_a_picture() {
   let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("smile.toml");
   let script = Script::load(&path).unwrap();

   let surface = SkiaSurface::new(200, 200);
   let mut session =
      CanvasSession::new(surface, &UserConfig::default(), |_: &str| false).with_seed(1);
   script.replay(&mut session).unwrap();

   assert_eq!(session.history_len(), 3);
   assert_eq!(session.tool(), &Tool::Pen);
   assert_eq!(session.color(), Color::rgb(0x1e, 0x90, 0xff));
   assert_eq!(session.size(), 8.0);

   let mouth = session.surface().pixel(100, 157).unwrap();
   assert!(mouth.a > 0);
   let eye = session.surface().pixel(70, 65).unwrap();
   assert!(eye.a > 0);

   let png = ImageCoder::encode_png_data(session.surface()).unwrap();
   assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
