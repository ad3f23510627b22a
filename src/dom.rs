use crate::frame::LoopHandle;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{id} is not a canvas"))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext('2d') threw: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// Size the canvas backing store to the window's inner size and return it.
pub fn fit_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    let w = dim(window.inner_width());
    let h = dim(window.inner_height());
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

/// Window `resize` listener that keeps the canvas and field bounds in sync.
/// Detaches itself when dropped.
pub struct ResizeListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn attach(window: &web::Window, canvas: web::HtmlCanvasElement, handle: LoopHandle) -> Self {
        let window_cb = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let (w, h) = fit_canvas_to_viewport(&window_cb, &canvas);
            handle.resize(w, h);
        }) as Box<dyn FnMut()>);
        if let Err(e) =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            log::warn!("[bg] could not watch resize: {:?}", e);
        }
        Self {
            window: window.clone(),
            closure,
        }
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}
