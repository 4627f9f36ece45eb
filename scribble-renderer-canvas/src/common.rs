use scribble_renderer::{Color, LineCap, LineJoin};
use wasm_bindgen::JsValue;

pub fn color_to_jsvalue(color: Color) -> JsValue {
   JsValue::from_str(&format!(
      "rgba({}, {}, {}, {})",
      color.r,
      color.g,
      color.b,
      color.a as f32 / 255.0
   ))
}

pub fn line_cap_name(cap: LineCap) -> &'static str {
   match cap {
      LineCap::Butt => "butt",
      LineCap::Round => "round",
   }
}

pub fn line_join_name(join: LineJoin) -> &'static str {
   match join {
      LineJoin::Miter => "miter",
      LineJoin::Round => "round",
   }
}

/// Converts a JavaScript exception into an error, logging it along the way.
pub fn js_error(context: &str, error: JsValue) -> anyhow::Error {
   log::error!("{}: {:?}", context, error);
   anyhow::anyhow!("{}: {:?}", context, error)
}
