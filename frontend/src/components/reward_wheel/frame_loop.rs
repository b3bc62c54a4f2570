use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// Shared stop flag checked by every scheduled continuation of a spin:
/// frame callbacks, the settle delay and the tick revert.
#[derive(Clone, Default, Debug)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// A chain of `requestAnimationFrame` callbacks that reschedules itself until
/// the frame handler breaks or the token is cancelled. Dropping the loop
/// cancels it.
pub struct FrameLoop {
    token: CancelToken,
    pending: FrameSlot,
}

impl FrameLoop {
    pub fn start<F>(token: CancelToken, on_frame: F) -> Self
    where
        F: FnMut(f64) -> ControlFlow<()> + 'static,
    {
        let pending: FrameSlot = Rc::new(RefCell::new(None));
        schedule(pending.clone(), token.clone(), Rc::new(RefCell::new(on_frame)));
        Self { token, pending }
    }

    pub fn cancel(&self) {
        self.token.cancel();
        // dropping the handle calls cancelAnimationFrame
        self.pending.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs one frame of the chain and reports whether another should be
/// requested. A cancelled token skips the handler entirely.
fn run_frame<F>(token: &CancelToken, on_frame: &mut F, timestamp: f64) -> bool
where
    F: FnMut(f64) -> ControlFlow<()>,
{
    if token.is_cancelled() {
        return false;
    }
    on_frame(timestamp).is_continue() && !token.is_cancelled()
}

fn schedule<F>(slot: FrameSlot, token: CancelToken, on_frame: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> ControlFlow<()> + 'static,
{
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |timestamp| {
        let again = run_frame(&token, &mut *on_frame.borrow_mut(), timestamp);
        if again {
            schedule(next_slot, token, on_frame);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let continuation = token.clone();
        assert!(!continuation.is_cancelled());
        token.cancel();
        assert!(continuation.is_cancelled());
    }

    #[test]
    fn test_frame_runs_until_handler_breaks() {
        let token = CancelToken::new();
        let mut frames = 0;
        let mut handler = |_: f64| {
            frames += 1;
            if frames < 3 { ControlFlow::Continue(()) } else { ControlFlow::Break(()) }
        };
        assert!(run_frame(&token, &mut handler, 16.0));
        assert!(run_frame(&token, &mut handler, 32.0));
        assert!(!run_frame(&token, &mut handler, 48.0));
        assert_eq!(frames, 3);
    }

    #[test]
    fn test_cancelled_token_stops_the_chain() {
        let token = CancelToken::new();
        let mut frames = 0;
        let mut handler = |_: f64| {
            frames += 1;
            ControlFlow::Continue(())
        };
        assert!(run_frame(&token, &mut handler, 16.0));
        token.cancel();
        assert!(!run_frame(&token, &mut handler, 32.0));
        assert_eq!(frames, 1);
    }

    #[test]
    fn test_cancel_during_frame_skips_reschedule() {
        let token = CancelToken::new();
        let inner = token.clone();
        let mut handler = |_: f64| {
            inner.cancel();
            ControlFlow::Continue(())
        };
        assert!(!run_frame(&token, &mut handler, 16.0));
    }
}
