use std::collections::VecDeque;

/// A bounded stack of surface snapshots, newest first.
pub struct UndoHistory<T> {
   snapshots: VecDeque<T>,
   depth: usize,
}

impl<T> UndoHistory<T> {
   /// The default number of snapshots kept around.
   pub const DEFAULT_DEPTH: usize = 25;

   /// Creates an empty history holding at most `depth` snapshots. The depth is at least 1.
   pub fn new(depth: usize) -> Self {
      let depth = depth.max(1);
      Self {
         snapshots: VecDeque::new(),
         depth,
      }
   }

   /// Pushes a snapshot to the front of the history, evicting the oldest ones past the depth.
   pub fn push(&mut self, snapshot: T) {
      self.snapshots.push_front(snapshot);
      if self.snapshots.len() > self.depth {
         log::trace!("evicting {} oldest snapshot(s)", self.snapshots.len() - self.depth);
         self.snapshots.truncate(self.depth);
      }
   }

   /// Removes and returns the newest snapshot.
   pub fn pop(&mut self) -> Option<T> {
      self.snapshots.pop_front()
   }

   pub fn newest(&self) -> Option<&T> {
      self.snapshots.front()
   }

   pub fn clear(&mut self) {
      self.snapshots.clear();
   }

   pub fn len(&self) -> usize {
      self.snapshots.len()
   }

   pub fn is_empty(&self) -> bool {
      self.snapshots.is_empty()
   }

   pub fn depth(&self) -> usize {
      self.depth
   }
}

impl<T> Default for UndoHistory<T> {
   fn default() -> Self {
      Self::new(Self::DEFAULT_DEPTH)
   }
}
