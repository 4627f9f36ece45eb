//! The stroke capture and redraw pipeline.

mod history;
mod idle;
mod point;
mod session;
mod stroke;
mod tools;

pub use history::*;
pub use idle::*;
pub use point::*;
pub use session::*;
pub use stroke::*;
pub use tools::*;
