//! Replaying scripted input into a session.
//!
//! A script is a TOML file with an `events` array, for example:
//!
//! ```toml
//! [[events]]
//! kind = "select-color"
//! color = "#1e90ff"
//!
//! [[events]]
//! kind = "stroke-start"
//! pointer = { device = "mouse", page_x = 10, page_y = 10 }
//!
//! [[events]]
//! kind = "stroke-move"
//! pointer = { device = "mouse", page_x = 50, page_y = 40 }
//!
//! [[events]]
//! kind = "stroke-end"
//! release = { device = "mouse" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use scribble_renderer::Surface;

use crate::input::InputEvent;
use crate::paint::CanvasSession;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Script {
   #[serde(default)]
   pub events: Vec<InputEvent>,
}

impl Script {
   pub fn parse(source: &str) -> crate::Result<Self> {
      Ok(toml::from_str(source)?)
   }

   pub fn load(path: &Path) -> crate::Result<Self> {
      let source = std::fs::read_to_string(path)?;
      Self::parse(&source)
   }

   /// Dispatches every event of the script into the session, in order.
   pub fn replay<S>(&self, session: &mut CanvasSession<S>) -> crate::Result<()>
   where
      S: Surface,
   {
      log::info!("replaying {} events", self.events.len());
      for event in &self.events {
         session.handle(event.clone())?;
      }
      Ok(())
   }
}
