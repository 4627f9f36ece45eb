#[cfg(not(target_arch = "wasm32"))]
mod cli {
   use std::path::PathBuf;

   use anyhow::Context;
   use log::LevelFilter;
   use scribble::config::UserConfig;
   use scribble::image_coder::ImageCoder;
   use scribble::input::{InputEvent, Layout};
   use scribble::paint::CanvasSession;
   use scribble::replay::Script;
   use scribble_renderer_skia::SkiaSurface;
   use simple_logger::SimpleLogger;
   use structopt::StructOpt;

   /// Replays a scripted drawing session and saves the resulting picture as a PNG.
   #[derive(StructOpt)]
   #[structopt(name = "scribble")]
   struct Options {
      /// The TOML script with the input events to replay.
      #[structopt(parse(from_os_str))]
      script: PathBuf,

      /// Where to write the picture.
      #[structopt(short, long, parse(from_os_str), default_value = "scribble.png")]
      output: PathBuf,

      /// The width of the drawing surface in pixels.
      #[structopt(long, default_value = "800")]
      width: u32,

      /// The height of the drawing surface in pixels.
      #[structopt(long, default_value = "600")]
      height: u32,

      /// Seed for the pen's width jitter, for reproducible pictures.
      #[structopt(long)]
      seed: Option<u64>,

      /// Accept every confirmation prompt instead of declining it.
      #[structopt(short, long)]
      yes: bool,

      /// Use this config file instead of the one in the user's configuration directory.
      #[structopt(long, parse(from_os_str))]
      config: Option<PathBuf>,
   }

   pub fn main() -> anyhow::Result<()> {
      let _ = SimpleLogger::new().with_level(LevelFilter::Info).env().init();

      let options = Options::from_args();
      let config = match &options.config {
         Some(path) => UserConfig::load_or_create_at(path)?,
         None => UserConfig::load_or_create()?,
      };
      let script = Script::load(&options.script)
         .with_context(|| format!("cannot load script {}", options.script.display()))?;

      let accept = options.yes;
      let confirm = move |message: &str| {
         log::info!("{} {}", message, if accept { "(yes)" } else { "(no)" });
         accept
      };
      let surface = SkiaSurface::new(options.width, options.height);
      let mut session = CanvasSession::new(surface, &config, confirm);
      if let Some(seed) = options.seed {
         session = session.with_seed(seed);
      }
      session.handle(InputEvent::Resize {
         layout: Layout {
            width: options.width,
            height: options.height,
            ..Layout::default()
         },
      })?;

      script.replay(&mut session)?;

      let png = ImageCoder::encode_png_data(session.surface())?;
      std::fs::write(&options.output, png)
         .with_context(|| format!("cannot write {}", options.output.display()))?;
      log::info!("picture saved to {}", options.output.display());
      Ok(())
   }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
   cli::main()
}

// The web build is driven through the library's bindings instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
