//! Output abstraction for the simulation loop.
//!
//! The loop only ever talks to a [`DisplayService`]; the windowed backend
//! in [`window`] is one implementation, test doubles are another.

mod window;

pub use window::WindowDisplay;

use crate::error::Result;

/// A frame-oriented output device.
///
/// The expected call sequence is `init` once, then any number of
/// poll / set_pixel / present rounds, then `teardown`. Methods are only
/// meaningful between a successful `init` and `teardown`; outside that
/// window, pixel writes are dropped and `poll` reports exit.
#[allow(async_fn_in_trait)]
pub trait DisplayService {
    /// Acquire output resources for a `width` x `height` cell canvas.
    fn init(&mut self, width: usize, height: usize) -> Result<()>;

    /// Process pending input events. Returns `false` once the user has
    /// asked to quit.
    fn poll(&mut self) -> bool;

    /// Stage one cell's state into the pending frame. Coordinates
    /// outside the canvas are ignored.
    fn set_pixel(&mut self, x: usize, y: usize, alive: bool);

    /// Publish the pending frame, holding the caller to the configured
    /// frame rate.
    async fn present(&mut self) -> Result<()>;

    /// Release output resources. Safe to call repeatedly and after a
    /// failed `init`.
    fn teardown(&mut self);
}
