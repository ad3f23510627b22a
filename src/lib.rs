#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::config::FieldConfig;
use crate::core::{ParticleField, Rgba};
use crate::frame::LoopHandle;
use anyhow::anyhow;
use wasm_bindgen::prelude::*;

mod canvas;
mod config;
mod core;
mod dom;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field starting");
    Ok(())
}

/// A mounted particle background. Call `unmount()` (or `free()`) when the host view goes away.
#[wasm_bindgen]
pub struct ParticleBackground {
    handle: Option<LoopHandle>,
    resize: Option<dom::ResizeListener>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Cancel the scheduled frame and detach listeners. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.resize.take();
        if let Some(handle) = self.handle.take() {
            let frames = handle.frames();
            handle.stop();
            log::info!("[bg] unmounted after {} frames", frames);
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_running())
    }

    /// Frames drawn so far. Returned as f64 since JS has no u64 number.
    pub fn frames(&self) -> f64 {
        self.handle.as_ref().map_or(0.0, |h| h.frames() as f64)
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.handle.as_ref().map_or(0, |h| h.particle_count())
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Start the background on the canvas with id `canvas_id`.
///
/// Returns `undefined` when the canvas or its 2D context is unavailable; the
/// page keeps working without the effect.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Option<ParticleBackground> {
    match try_mount(canvas_id) {
        Ok(bg) => Some(bg),
        Err(e) => {
            log::warn!("[bg] not started: {:?}", e);
            None
        }
    }
}

fn try_mount(canvas_id: &str) -> anyhow::Result<ParticleBackground> {
    let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let config = FieldConfig::from_attributes(canvas_id, |name| canvas.get_attribute(name));

    let (width, height) = dom::fit_canvas_to_viewport(&window, &canvas);
    let ctx = dom::context_2d(&canvas)?;

    let mut rng = config.rng();
    let field = ParticleField::new(width, height, config.particle_count, &mut rng)
        .with_trail(Rgba::new(0.0, 0.0, 0.0, config.trail_alpha));
    log::info!(
        "[bg] #{} {}x{} particles={}",
        config.canvas_id,
        width,
        height,
        field.len()
    );

    let handle = frame::start_loop(window.clone(), field, CanvasSurface::new(ctx));
    let resize = config
        .follow_resize
        .then(|| dom::ResizeListener::attach(&window, canvas, handle.clone()));
    Ok(ParticleBackground {
        handle: Some(handle),
        resize,
    })
}
