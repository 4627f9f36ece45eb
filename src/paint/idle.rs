/// Counts the seconds since the last user interaction.
#[derive(Clone, Debug)]
pub struct IdleTimer {
   elapsed: u32,
   timeout: u32,
}

impl IdleTimer {
   /// Creates a timer that expires after `timeout` seconds. A timeout of 0 never expires.
   pub fn new(timeout: u32) -> Self {
      Self {
         elapsed: 0,
         timeout,
      }
   }

   /// Advances the timer by one second. Returns `true` once the timeout is reached, in which case
   /// the timer starts over.
   pub fn tick(&mut self) -> bool {
      if self.timeout == 0 {
         return false;
      }
      self.elapsed += 1;
      if self.elapsed >= self.timeout {
         self.reset();
         true
      } else {
         false
      }
   }

   pub fn reset(&mut self) {
      self.elapsed = 0;
   }

   pub fn elapsed(&self) -> u32 {
      self.elapsed
   }

   pub fn timeout(&self) -> u32 {
      self.timeout
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn expires_after_the_timeout() {
      let mut timer = IdleTimer::new(3);
      assert!(!timer.tick());
      assert!(!timer.tick());
      assert!(timer.tick());
      assert_eq!(timer.elapsed(), 0);
   }

   #[test]
   fn reset_starts_over() {
      let mut timer = IdleTimer::new(2);
      timer.tick();
      timer.reset();
      assert!(!timer.tick());
      assert!(timer.tick());
   }

   #[test]
   fn zero_timeout_never_expires() {
      let mut timer = IdleTimer::new(0);
      assert!((0..1000).all(|_| !timer.tick()));
   }
}
