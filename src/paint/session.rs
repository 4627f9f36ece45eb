//! The canvas session: tool state, the in-progress stroke, undo history, and the idle clear.

use nanorand::WyRand;
use scribble_renderer::{Color, Point, Surface};

use crate::config::UserConfig;
use crate::input::{InputEvent, Layout, Pointer, Release, ToolSelection};
use crate::paint::{
   apply_tool, capture_point, render_stroke, Action, IdleTimer, LinePoint, PenWidth, Tool,
   ToolState, UndoHistory,
};

/// Asks the user whether a destructive action should go ahead.
pub trait Confirm {
   fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
   F: FnMut(&str) -> bool,
{
   fn confirm(&mut self, message: &str) -> bool {
      self(message)
   }
}

/// Whether a stroke is currently being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeState {
   Idle,
   Stroking,
}

pub struct CanvasSession<S>
where
   S: Surface,
{
   surface: S,
   offset: Point,
   tools: ToolState,
   pen_width: PenWidth,
   points: Vec<LinePoint>,
   history: UndoHistory<S::Snapshot>,
   state: StrokeState,
   idle: IdleTimer,
   settings_open: bool,
   rng: WyRand,
   confirm: Box<dyn Confirm>,
}

impl<S> CanvasSession<S>
where
   S: Surface,
{
   /// The question asked before the picture is cleared.
   pub const CLEAR_PROMPT: &'static str = "Are you sure you want to delete the picture?";

   pub fn new(surface: S, config: &UserConfig, confirm: impl Confirm + 'static) -> Self {
      Self {
         surface,
         offset: Point::default(),
         tools: ToolState {
            tool: config.tools.tool.clone(),
            color: config.tools.color,
            size: config.tools.size,
         },
         pen_width: config.tools.pen_width,
         points: Vec::new(),
         history: UndoHistory::new(config.canvas.history_depth),
         state: StrokeState::Idle,
         idle: IdleTimer::new(config.canvas.idle_timeout_secs),
         settings_open: false,
         rng: WyRand::new(),
         confirm: Box::new(confirm),
      }
   }

   /// Seeds the random number generator used for width jitter.
   pub fn with_seed(mut self, seed: u64) -> Self {
      self.rng = WyRand::new_seed(seed);
      self
   }

   /// Dispatches a single input event.
   pub fn handle(&mut self, event: InputEvent) -> crate::Result<()> {
      log::trace!("{:?}", event);
      match event {
         InputEvent::StrokeStart { pointer } => self.start_stroke(&pointer)?,
         InputEvent::StrokeMove { pointer } => self.continue_stroke(&pointer)?,
         InputEvent::StrokeEnd { release } => self.end_stroke(&release),
         InputEvent::SelectTool { selection } => self.select_tool(selection)?,
         InputEvent::SelectColor { color } => self.select_color(color),
         InputEvent::SelectSize { size } => self.select_size(size),
         InputEvent::Resize { layout } => self.resize(layout)?,
         InputEvent::Tick => self.tick(),
      }
      Ok(())
   }

   /// Begins a new stroke. The surface is snapshotted before anything is drawn.
   pub fn start_stroke(&mut self, pointer: &Pointer) -> crate::Result<()> {
      if !pointer.is_primary() {
         return Ok(());
      }
      self.idle.reset();
      let point = match self.capture(pointer, false) {
         Some(point) => point,
         None => {
            log::debug!("ignoring stroke start without a position");
            return Ok(());
         }
      };
      self.push_snapshot()?;
      self.state = StrokeState::Stroking;
      self.points.push(point);
      self.redraw()
   }

   /// Adds a point to the stroke in progress and redraws it. Moves outside of a stroke are
   /// ignored.
   pub fn continue_stroke(&mut self, pointer: &Pointer) -> crate::Result<()> {
      if self.state != StrokeState::Stroking || !pointer.is_primary() {
         return Ok(());
      }
      self.idle.reset();
      match self.capture(pointer, true) {
         Some(point) => {
            self.points.push(point);
            self.redraw()
         }
         None => {
            log::debug!("ignoring stroke move without a position");
            Ok(())
         }
      }
   }

   /// Stops listening for moves. What has been drawn so far stays as it is.
   pub fn end_stroke(&mut self, release: &Release) {
      if !release.is_primary() {
         return;
      }
      self.idle.reset();
      self.state = StrokeState::Idle;
   }

   fn capture(&mut self, pointer: &Pointer, is_drag: bool) -> Option<LinePoint> {
      let point = capture_point(pointer, is_drag, self.offset, &self.tools)?;
      Some(apply_tool(&self.tools.tool, point, &self.pen_width, &mut self.rng))
   }

   /// Captures the surface into the undo history and starts a fresh point buffer.
   pub fn push_snapshot(&mut self) -> crate::Result<()> {
      let snapshot = self.surface.snapshot()?;
      self.history.push(snapshot);
      self.points.clear();
      log::debug!("pushed snapshot, history length is now {}", self.history.len());
      Ok(())
   }

   /// Repaints the newest snapshot and the stroke in progress over it.
   pub fn redraw(&mut self) -> crate::Result<()> {
      self.surface.clear();
      if let Some(snapshot) = self.history.newest() {
         self.surface.restore(snapshot)?;
      }
      render_stroke(&mut self.surface, &self.points, &self.tools.tool);
      Ok(())
   }

   /// Puts the newest snapshot back onto the surface. Does nothing if there is nothing to undo.
   pub fn undo(&mut self) -> crate::Result<()> {
      let snapshot = match self.history.pop() {
         Some(snapshot) => snapshot,
         None => {
            log::debug!("nothing to undo");
            return Ok(());
         }
      };
      self.surface.restore(&snapshot)?;
      self.end_buffered_stroke();
      log::debug!("undone, history length is now {}", self.history.len());
      Ok(())
   }

   /// Erases the picture and forgets the undo history, if the user confirms it.
   /// Returns whether the picture was cleared.
   pub fn clear(&mut self) -> bool {
      if !self.confirm.confirm(Self::CLEAR_PROMPT) {
         log::debug!("clear declined");
         return false;
      }
      self.surface.clear();
      self.history.clear();
      self.end_buffered_stroke();
      log::info!("picture cleared");
      true
   }

   /// Floods the picture with the current color. The fill can be undone.
   pub fn fill(&mut self) -> crate::Result<()> {
      self.push_snapshot()?;
      self.surface.clear();
      self.surface.fill(self.tools.color);
      self.end_buffered_stroke();
      log::info!("picture filled with {}", self.tools.color);
      Ok(())
   }

   /// Drops the point buffer and stops tracking the stroke in progress, if any. Further moves of
   /// that stroke would otherwise repaint the newest snapshot over the result of an action.
   fn end_buffered_stroke(&mut self) {
      self.points.clear();
      self.state = StrokeState::Idle;
   }

   /// Handles a toolbar click: switches the tool if one is given, then performs the action.
   pub fn select_tool(&mut self, selection: ToolSelection) -> crate::Result<()> {
      self.idle.reset();
      if let Some(tool) = selection.tool {
         log::debug!("tool selected: {}", tool);
         self.tools.tool = tool;
      }
      match selection.action {
         Some(Action::Undo) => self.undo()?,
         Some(Action::Delete) => {
            self.clear();
         }
         Some(Action::Fill) => self.fill()?,
         Some(Action::Settings) => self.settings_open = !self.settings_open,
         None => (),
      }
      Ok(())
   }

   pub fn select_color(&mut self, color: Color) {
      self.idle.reset();
      log::debug!("color selected: {}", color);
      self.tools.color = color;
   }

   pub fn select_size(&mut self, size: f32) {
      self.idle.reset();
      if !size.is_finite() || size <= 0.0 {
         log::debug!("ignoring invalid size {}", size);
         return;
      }
      self.tools.size = size;
   }

   /// Applies a new layout. The picture is kept, anchored at the top-left corner.
   pub fn resize(&mut self, layout: Layout) -> crate::Result<()> {
      self.offset = Point::new(layout.offset_x, layout.offset_y);
      if self.surface.size() == (layout.width, layout.height) {
         return Ok(());
      }
      log::info!("resizing surface to {}x{}", layout.width, layout.height);
      let picture = self.surface.snapshot()?;
      self.surface.resize(layout.width, layout.height);
      self.surface.restore(&picture)?;
      Ok(())
   }

   /// Advances the idle timer by one second, clearing the picture once the user has been idle
   /// for too long.
   pub fn tick(&mut self) {
      if self.idle.tick() && (!self.history.is_empty() || !self.points.is_empty()) {
         log::info!("idle for {} seconds, asking to clear", self.idle.timeout());
         self.clear();
      }
   }

   pub fn surface(&self) -> &S {
      &self.surface
   }

   pub fn surface_mut(&mut self) -> &mut S {
      &mut self.surface
   }

   /// Returns whether the undo control should be enabled.
   pub fn can_undo(&self) -> bool {
      !self.history.is_empty()
   }

   pub fn history_len(&self) -> usize {
      self.history.len()
   }

   pub fn points(&self) -> &[LinePoint] {
      &self.points
   }

   pub fn state(&self) -> StrokeState {
      self.state
   }

   pub fn tool(&self) -> &Tool {
      &self.tools.tool
   }

   pub fn color(&self) -> Color {
      self.tools.color
   }

   pub fn size(&self) -> f32 {
      self.tools.size
   }

   pub fn settings_open(&self) -> bool {
      self.settings_open
   }

   pub fn idle_seconds(&self) -> u32 {
      self.idle.elapsed()
   }
}
