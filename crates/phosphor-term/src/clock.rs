//! Timing seam for delayed and animated handlers.
//!
//! The `sleep` pseudo-command and the boot animation suspend through a
//! [`Clock`] instead of sleeping inline, so tests can run the full boot
//! choreography instantly while recording the requested delays.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, LocalBoxFuture};

/// Provides suspension points for handlers that pause.
pub trait Clock {
    /// Complete after roughly `ms` milliseconds.
    fn sleep(&self, ms: u64) -> LocalBoxFuture<'static, ()>;
}

/// Clock backed by `std::thread::sleep`.
///
/// Blocks the cooperative thread for the duration, which matches the
/// single-threaded session model: nothing else can run while a handler is
/// pending anyway. Embedders with a real event loop supply their own clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingClock;

impl Clock for BlockingClock {
    fn sleep(&self, ms: u64) -> LocalBoxFuture<'static, ()> {
        Box::pin(async move {
            std::thread::sleep(Duration::from_millis(ms));
        })
    }
}

/// Test clock that completes immediately and records requested delays.
///
/// Clones share the recording, so a test can keep a handle after boxing one
/// into a session.
#[derive(Debug, Clone, Default)]
pub struct InstantClock {
    requested: Rc<RefCell<Vec<u64>>>,
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every delay requested so far, in request order.
    pub fn requested(&self) -> Vec<u64> {
        self.requested.borrow().clone()
    }
}

impl Clock for InstantClock {
    fn sleep(&self, ms: u64) -> LocalBoxFuture<'static, ()> {
        self.requested.borrow_mut().push(ms);
        Box::pin(future::ready(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_clock_records_delays() {
        let clock = InstantClock::new();
        futures::executor::block_on(async {
            clock.sleep(100).await;
            clock.sleep(250).await;
        });
        assert_eq!(clock.requested(), vec![100, 250]);
    }

    #[test]
    fn instant_clock_clones_share_log() {
        let clock = InstantClock::new();
        let handle = clock.clone();
        futures::executor::block_on(clock.sleep(42));
        assert_eq!(handle.requested(), vec![42]);
    }

    #[test]
    fn blocking_clock_zero_completes() {
        futures::executor::block_on(BlockingClock.sleep(0));
    }
}
