//! User configuration.
//!
//! ## Note for adding new keys
//!
//! New keys added to the config _must_ use `#[serde(default)]` to maintain compatibility with
//! older configs. These keys will be added to the user's configuration automatically.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::paint::{PenWidth, Tool, UndoHistory};
use crate::Color;

/// Canvas behavior.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CanvasConfig {
   /// How many snapshots are kept for undoing.
   pub history_depth: usize,
   /// Seconds of inactivity after which the picture is cleared, after confirmation.
   /// 0 disables the idle clear.
   pub idle_timeout_secs: u32,
}

impl Default for CanvasConfig {
   fn default() -> Self {
      Self {
         history_depth: UndoHistory::<()>::DEFAULT_DEPTH,
         idle_timeout_secs: 60,
      }
   }
}

/// The tool state a session starts out with.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolConfig {
   pub tool: Tool,
   pub color: Color,
   pub size: f32,
   pub pen_width: PenWidth,
}

impl Default for ToolConfig {
   fn default() -> Self {
      Self {
         tool: Tool::Brush,
         color: Color::BLACK,
         size: 5.0,
         pen_width: PenWidth::default(),
      }
   }
}

/// A user `config.toml` file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct UserConfig {
   #[serde(default)]
   pub canvas: CanvasConfig,
   #[serde(default)]
   pub tools: ToolConfig,
}

impl UserConfig {
   /// Returns the platform-specific configuration directory.
   pub fn config_dir() -> crate::Result<PathBuf> {
      let project_dirs = ProjectDirs::from("", "", "Scribble").ok_or(crate::Error::NoConfigDir)?;
      Ok(project_dirs.config_dir().to_owned())
   }

   /// Returns the path to the `config.toml` file.
   pub fn path() -> crate::Result<PathBuf> {
      Ok(Self::config_dir()?.join("config.toml"))
   }

   /// Loads the `config.toml` file from the configuration directory.
   ///
   /// If the `config.toml` doesn't exist, it's created with values inherited from
   /// `UserConfig::default`.
   #[cfg(not(target_arch = "wasm32"))]
   pub fn load_or_create() -> crate::Result<Self> {
      Self::load_or_create_at(&Self::path()?)
   }

   #[cfg(target_arch = "wasm32")]
   pub fn load_or_create() -> crate::Result<Self> {
      Ok(Self::default())
   }

   /// Loads the config file at the given path, creating it if it doesn't exist.
   ///
   /// A config file that fails to parse is left alone and the defaults are used instead.
   pub fn load_or_create_at(config_file: &Path) -> crate::Result<Self> {
      if let Some(config_dir) = config_file.parent() {
         std::fs::create_dir_all(config_dir)?;
      }
      if !config_file.is_file() {
         log::info!("creating default config at {}", config_file.display());
         let config = Self::default();
         config.save_to(config_file)?;
         return Ok(config);
      }

      let file = std::fs::read_to_string(config_file)?;
      let config: Self = match toml::from_str(&file) {
         Ok(config) => config,
         Err(error) => {
            log::warn!("error while deserializing config file: {}", error);
            log::warn!("falling back to default config");
            return Ok(Self::default());
         }
      };
      // Preemptively save the config to the disk if any new keys have been added.
      config.save_to(config_file)?;
      Ok(config)
   }

   /// Saves the user configuration to the given path.
   pub fn save_to(&self, config_file: &Path) -> crate::Result<()> {
      std::fs::write(config_file, toml::to_string(self)?)?;
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn missing_config_is_created_with_defaults() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("nested").join("config.toml");
      let config = UserConfig::load_or_create_at(&path).unwrap();
      assert_eq!(config, UserConfig::default());
      assert!(path.is_file());
   }

   #[test]
   fn missing_keys_are_filled_in() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("config.toml");
      std::fs::write(
         &path,
         "[tools]\ntool = \"pen\"\ncolor = \"#ff0000\"\npen_width = { relative = { below = 2 } }\n",
      )
      .unwrap();

      let config = UserConfig::load_or_create_at(&path).unwrap();
      assert_eq!(config.tools.tool, Tool::Pen);
      assert_eq!(config.tools.color, Color::rgb(255, 0, 0));
      assert_eq!(config.tools.size, 5.0);
      assert_eq!(config.tools.pen_width, PenWidth::Relative { below: 2 });
      assert_eq!(config.canvas, CanvasConfig::default());

      let saved = std::fs::read_to_string(&path).unwrap();
      assert!(saved.contains("idle_timeout_secs = 60"));
   }

   #[test]
   fn broken_config_falls_back_to_defaults() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("config.toml");
      std::fs::write(&path, "[tools]\ncolor = \"red\"\n").unwrap();
      let config = UserConfig::load_or_create_at(&path).unwrap();
      assert_eq!(config, UserConfig::default());
      assert_eq!(std::fs::read_to_string(&path).unwrap(), "[tools]\ncolor = \"red\"\n");
   }
}
