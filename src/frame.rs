use crate::canvas::CanvasSurface;
use crate::core::{Animation, FrameScheduler, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub type WebAnimation = Animation<CanvasSurface, RafScheduler>;

/// `requestAnimationFrame` / `cancelAnimationFrame` for a single shared callback.
pub struct RafScheduler {
    window: web::Window,
    callback: CallbackSlot,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("[loop] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("[loop] cancelAnimationFrame({}) failed: {:?}", handle, e);
        }
    }
}

/// Owner side of a running frame loop. Clones share the same loop.
#[derive(Clone)]
pub struct LoopHandle {
    animation: Rc<RefCell<WebAnimation>>,
    callback: CallbackSlot,
}

impl LoopHandle {
    /// Cancel the pending frame and release the frame closure.
    pub fn stop(&self) {
        if let Ok(mut a) = self.animation.try_borrow_mut() {
            a.stop();
        }
        self.callback.borrow_mut().take();
    }

    pub fn resize(&self, width: u32, height: u32) {
        if let Ok(mut a) = self.animation.try_borrow_mut() {
            if let Err(e) = a.field_mut().resize(width, height) {
                log::warn!("[bg] resize ignored: {e}");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.animation.borrow().is_running()
    }

    pub fn frames(&self) -> u64 {
        self.animation.borrow().frames()
    }

    pub fn particle_count(&self) -> usize {
        self.animation.borrow().field().len()
    }
}

pub fn start_loop(window: web::Window, field: ParticleField, surface: CanvasSurface) -> LoopHandle {
    let callback: CallbackSlot = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        window,
        callback: callback.clone(),
    };
    let animation = Rc::new(RefCell::new(Animation::new(field, surface, scheduler)));

    // Weak so the closure never keeps the animation alive on its own.
    let anim_tick = Rc::downgrade(&animation);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(anim) = anim_tick.upgrade() {
            if let Ok(mut a) = anim.try_borrow_mut() {
                a.on_frame();
            }
        }
    }) as Box<dyn FnMut()>));

    animation.borrow_mut().start();
    LoopHandle {
        animation,
        callback,
    }
}
