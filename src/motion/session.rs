/// What a frame callback wants after running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Nothing moves until the loop is woken again.
    Idle,
    Finished,
}

/// An owned per-frame animation loop.
///
/// The component that starts a loop owns its session and calls [`stop`]
/// when it unmounts; from then on frames are dropped without reaching the
/// callback, even if the frame scheduler still delivers one.
///
/// [`stop`]: FrameSession::stop
pub struct FrameSession<F> {
    on_frame: F,
    last_timestamp: Option<f64>,
    stopped: bool,
}

impl<F> FrameSession<F>
where
    F: FnMut(f64) -> Flow,
{
    /// `on_frame` receives the seconds elapsed since the previous frame.
    pub fn new(on_frame: F) -> Self {
        Self {
            on_frame,
            last_timestamp: None,
            stopped: false,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Deliver a frame stamped `timestamp_ms` (a `requestAnimationFrame` time).
    pub fn frame(&mut self, timestamp_ms: f64) -> Flow {
        if self.stopped {
            return Flow::Finished;
        }
        let dt = self
            .last_timestamp
            .map(|last| ((timestamp_ms - last) / 1000.0).max(0.0))
            .unwrap_or(0.0);
        self.last_timestamp = Some(timestamp_ms);
        let flow = (self.on_frame)(dt);
        match flow {
            Flow::Continue => {}
            Flow::Idle => self.last_timestamp = None,
            Flow::Finished => self.stopped = true,
        }
        flow
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn frames_stop_after_teardown() {
        let calls = Rc::new(Cell::new(0));
        let mut session = {
            let calls = calls.clone();
            FrameSession::new(move |_| {
                calls.set(calls.get() + 1);
                Flow::Continue
            })
        };
        session.frame(0.0);
        session.frame(16.0);
        assert_eq!(calls.get(), 2);

        session.stop();
        assert!(!session.is_running());
        assert_eq!(session.frame(32.0), Flow::Finished);
        assert_eq!(session.frame(48.0), Flow::Finished);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn passes_elapsed_seconds() {
        let seen = Rc::new(Cell::new(-1.0));
        let mut session = {
            let seen = seen.clone();
            FrameSession::new(move |dt| {
                seen.set(dt);
                Flow::Continue
            })
        };
        session.frame(1000.0);
        assert_eq!(seen.get(), 0.0);
        session.frame(1250.0);
        assert_eq!(seen.get(), 0.25);
        // clock never runs backward
        session.frame(1200.0);
        assert_eq!(seen.get(), 0.0);
    }

    #[test]
    fn idle_keeps_session_but_forgets_clock() {
        let seen = Rc::new(Cell::new(-1.0));
        let mut session = {
            let seen = seen.clone();
            FrameSession::new(move |dt| {
                seen.set(dt);
                Flow::Idle
            })
        };
        session.frame(100.0);
        assert_eq!(session.frame(116.0), Flow::Idle);
        assert!(session.is_running());
        session.frame(5000.0);
        assert_eq!(seen.get(), 0.0);
    }

    #[test]
    fn finishing_ends_the_session() {
        let mut remaining = 3;
        let mut session = FrameSession::new(move |_| {
            remaining -= 1;
            if remaining == 0 {
                Flow::Finished
            } else {
                Flow::Continue
            }
        });
        assert_eq!(session.frame(0.0), Flow::Continue);
        assert_eq!(session.frame(1.0), Flow::Continue);
        assert_eq!(session.frame(2.0), Flow::Finished);
        assert!(!session.is_running());
    }
}
