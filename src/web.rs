//! Bindings for driving a session from a web page.
//!
//! The page forwards its DOM events to a [`WebSession`] and calls [`WebSession::tick`] once per
//! second.

use scribble_renderer_canvas::CanvasSurface;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::UserConfig;
use crate::input::{InputEvent, Layout, MouseButton, Pointer, Release, Touch, ToolSelection};
use crate::paint::CanvasSession;
use crate::Color;

#[wasm_bindgen(start)]
pub fn start() {
   console_error_panic_hook::set_once();
   let _ = console_log::init_with_level(log::Level::Info);
}

fn to_js(error: crate::Error) -> JsValue {
   JsValue::from_str(&error.to_string())
}

fn mouse_button(button: i16) -> MouseButton {
   match button {
      0 => MouseButton::Primary,
      1 => MouseButton::Middle,
      _ => MouseButton::Secondary,
   }
}

/// Pairs up a flat `[x0, y0, x1, y1, ...]` list of touch positions.
fn touches(positions: &[f32]) -> Vec<Touch> {
   positions
      .chunks_exact(2)
      .map(|pair| Touch {
         page_x: pair[0],
         page_y: pair[1],
      })
      .collect()
}

fn window_confirm(message: &str) -> bool {
   web_sys::window().and_then(|window| window.confirm_with_message(message).ok()).unwrap_or(false)
}

#[wasm_bindgen]
pub struct WebSession {
   session: CanvasSession<CanvasSurface>,
}

#[wasm_bindgen]
impl WebSession {
   #[wasm_bindgen(constructor)]
   pub fn new(canvas: HtmlCanvasElement) -> Result<WebSession, JsValue> {
      let config = UserConfig::load_or_create().map_err(to_js)?;
      let surface =
         CanvasSurface::new(canvas).map_err(|error| JsValue::from_str(&error.to_string()))?;
      Ok(Self {
         session: CanvasSession::new(surface, &config, window_confirm),
      })
   }

   fn handle(&mut self, event: InputEvent) -> Result<(), JsValue> {
      self.session.handle(event).map_err(to_js)
   }

   pub fn mouse_down(&mut self, button: i16, page_x: f32, page_y: f32) -> Result<(), JsValue> {
      let pointer = Pointer::Mouse {
         button: mouse_button(button),
         page_x,
         page_y,
      };
      self.handle(InputEvent::StrokeStart { pointer })
   }

   pub fn mouse_move(&mut self, button: i16, page_x: f32, page_y: f32) -> Result<(), JsValue> {
      let pointer = Pointer::Mouse {
         button: mouse_button(button),
         page_x,
         page_y,
      };
      self.handle(InputEvent::StrokeMove { pointer })
   }

   pub fn mouse_up(&mut self, button: i16) -> Result<(), JsValue> {
      let release = Release::Mouse {
         button: mouse_button(button),
      };
      self.handle(InputEvent::StrokeEnd { release })
   }

   pub fn touch_start(&mut self, positions: Vec<f32>) -> Result<(), JsValue> {
      let pointer = Pointer::Touch {
         touches: touches(&positions),
      };
      self.handle(InputEvent::StrokeStart { pointer })
   }

   pub fn touch_move(&mut self, positions: Vec<f32>) -> Result<(), JsValue> {
      let pointer = Pointer::Touch {
         touches: touches(&positions),
      };
      self.handle(InputEvent::StrokeMove { pointer })
   }

   pub fn touch_end(&mut self) -> Result<(), JsValue> {
      self.handle(InputEvent::StrokeEnd {
         release: Release::Touch,
      })
   }

   /// Handles a toolbar click. Unknown actions are ignored.
   pub fn select_tool(
      &mut self,
      tool: Option<String>,
      action: Option<String>,
   ) -> Result<(), JsValue> {
      let selection = ToolSelection {
         tool: tool.map(Into::into),
         action: action.and_then(|action| action.parse().ok()),
      };
      self.handle(InputEvent::SelectTool { selection })
   }

   pub fn select_color(&mut self, color: &str) -> Result<(), JsValue> {
      let color: Color = color.parse().map_err(|error: scribble_renderer::ColorParseError| {
         JsValue::from_str(&error.to_string())
      })?;
      self.handle(InputEvent::SelectColor { color })
   }

   pub fn select_size(&mut self, size: f32) -> Result<(), JsValue> {
      self.handle(InputEvent::SelectSize { size })
   }

   pub fn resize(
      &mut self,
      width: u32,
      height: u32,
      offset_x: f32,
      offset_y: f32,
   ) -> Result<(), JsValue> {
      let layout = Layout {
         width,
         height,
         offset_x,
         offset_y,
      };
      self.handle(InputEvent::Resize { layout })
   }

   pub fn tick(&mut self) -> Result<(), JsValue> {
      self.handle(InputEvent::Tick)
   }

   /// Returns whether the undo button should be enabled.
   pub fn can_undo(&self) -> bool {
      self.session.can_undo()
   }

   pub fn tool(&self) -> String {
      self.session.tool().to_string()
   }

   pub fn color(&self) -> String {
      self.session.color().to_string()
   }

   pub fn settings_open(&self) -> bool {
      self.session.settings_open()
   }
}
