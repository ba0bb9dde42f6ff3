//! Cancellable self-rescheduling frame task.
//!
//! A host scheduler (e.g. `requestAnimationFrame`) hands out a token for each
//! pending callback. [`FrameLoop`] keeps at most one token outstanding and
//! guarantees that after [`FrameLoop::cancel`] nothing is pending and nothing
//! is rescheduled, however many times cancel is called.

pub trait FrameScheduler {
    type Token: Copy;

    /// Request one callback on the next frame. `None` when the host refuses.
    fn schedule(&mut self) -> Option<Self::Token>;

    fn cancel(&mut self, token: Self::Token);
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Token>,
    cancelled: bool,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            cancelled: false,
            frames: 0,
        }
    }

    /// Schedule the first frame. No-op when already running or cancelled.
    pub fn start(&mut self) {
        if self.cancelled || self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.schedule();
    }

    /// Called from inside the scheduled callback before doing the frame's
    /// work. Returns false if the loop was cancelled and the work should be
    /// skipped; otherwise schedules the next frame and returns true.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        if self.cancelled {
            return false;
        }
        self.frames += 1;
        self.pending = self.scheduler.schedule();
        true
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
