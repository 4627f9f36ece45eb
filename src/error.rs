use scribble_renderer::ColorParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
   #[error("input/output error: {0}")]
   Io(#[from] std::io::Error),
   #[error("cannot determine the configuration directory")]
   NoConfigDir,
   #[error("TOML parse error: {0}")]
   TomlDeserialize(#[from] toml::de::Error),
   #[error("TOML serialization error: {0}")]
   TomlSerialize(#[from] toml::ser::Error),
   #[error("image encoding error: {0}")]
   Image(#[from] image::ImageError),
   #[error(transparent)]
   InvalidColor(#[from] ColorParseError),
   #[error(transparent)]
   Surface(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
