use super::field::ParticleField;
use super::surface::Surface;

/// Host primitive that runs a callback on the next display refresh.
///
/// The callback itself is owned by the host; the scheduler only hands out
/// and revokes handles for it.
pub trait FrameScheduler {
    type Handle;

    /// Ask for one more callback. `None` means the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Drives a [`ParticleField`] once per frame until stopped.
pub struct Animation<S: Surface, F: FrameScheduler> {
    field: ParticleField,
    surface: S,
    scheduler: F,
    pending: Option<F::Handle>,
    state: LoopState,
    frames: u64,
}

impl<S: Surface, F: FrameScheduler> Animation<S, F> {
    pub fn new(field: ParticleField, surface: S, scheduler: F) -> Self {
        Self {
            field,
            surface,
            scheduler,
            pending: None,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.state != LoopState::Idle {
            return;
        }
        if self.field.is_inert() {
            log::debug!("[loop] inert field, not scheduling");
            self.state = LoopState::Stopped;
            return;
        }
        self.state = LoopState::Running;
        self.schedule_next();
    }

    /// Frame callback. Draws one frame and requests the next while running.
    pub fn on_frame(&mut self) {
        // The handle that brought us here has fired.
        self.pending = None;
        if self.state != LoopState::Running {
            return;
        }
        self.field.frame(&mut self.surface);
        self.frames += 1;
        self.schedule_next();
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.state = LoopState::Stopped;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        log::debug!("[loop] stopped after {} frames", self.frames);
    }

    fn schedule_next(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] frame request refused; stopping");
            self.state = LoopState::Stopped;
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
