//! Input events dispatched into a [`CanvasSession`][crate::paint::CanvasSession].
//!
//! These mirror what a host UI delivers: pointer presses, moves, and releases, tool and color
//! picks, layout changes, and a once-per-second clock tick. All of them can be (de)serialized,
//! which is what scripted replays are built on.

use serde::{Deserialize, Serialize};

use crate::paint::{Action, Tool};
use crate::Color;

/// A mouse button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
   #[default]
   Primary,
   Middle,
   Secondary,
}

/// A single touch contact.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Touch {
   pub page_x: f32,
   pub page_y: f32,
}

/// Pointer input carrying a position in page coordinates.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "device", rename_all = "lowercase")]
pub enum Pointer {
   Mouse {
      #[serde(default)]
      button: MouseButton,
      page_x: f32,
      page_y: f32,
   },
   /// Touch input. Only the first active contact is tracked.
   Touch { touches: Vec<Touch> },
}

impl Pointer {
   pub fn mouse(page_x: f32, page_y: f32) -> Self {
      Self::Mouse {
         button: MouseButton::Primary,
         page_x,
         page_y,
      }
   }

   pub fn touch(page_x: f32, page_y: f32) -> Self {
      Self::Touch {
         touches: vec![Touch { page_x, page_y }],
      }
   }

   /// Returns whether this input can draw: the primary mouse button, or any touch.
   pub fn is_primary(&self) -> bool {
      match self {
         Self::Mouse { button, .. } => *button == MouseButton::Primary,
         Self::Touch { .. } => true,
      }
   }

   /// Returns the position of the pointer in page coordinates, or `None` if there is no usable
   /// position (no active touch, or non-finite coordinates).
   pub fn page_position(&self) -> Option<(f32, f32)> {
      let (x, y) = match self {
         Self::Mouse { page_x, page_y, .. } => (*page_x, *page_y),
         Self::Touch { touches } => {
            let touch = touches.first()?;
            (touch.page_x, touch.page_y)
         }
      };
      (x.is_finite() && y.is_finite()).then(|| (x, y))
   }
}

/// The end of a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "device", rename_all = "lowercase")]
pub enum Release {
   Mouse {
      #[serde(default)]
      button: MouseButton,
   },
   Touch,
}

impl Release {
   pub fn is_primary(&self) -> bool {
      match self {
         Self::Mouse { button } => *button == MouseButton::Primary,
         Self::Touch => true,
      }
   }
}

/// A click on the toolbar: a tool, an action, or both.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ToolSelection {
   #[serde(default)]
   pub tool: Option<Tool>,
   #[serde(default)]
   pub action: Option<Action>,
}

/// The size and on-page position of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Layout {
   pub width: u32,
   pub height: u32,
   #[serde(default)]
   pub offset_x: f32,
   #[serde(default)]
   pub offset_y: f32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InputEvent {
   StrokeStart { pointer: Pointer },
   StrokeMove { pointer: Pointer },
   StrokeEnd { release: Release },
   SelectTool { selection: ToolSelection },
   SelectColor { color: Color },
   SelectSize { size: f32 },
   Resize { layout: Layout },
   /// One second of wall-clock time has passed.
   Tick,
}
