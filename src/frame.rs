use crate::dom;
use crate::overlay::NeonOverlay;
use crate::render;
use heart_core::{AnimationClock, HeartConfig, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub clock: AnimationClock,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        // the clock is advanced before anything reads it this frame
        self.clock.tick(Instant::now());

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let (w, h) = g.size();
        let params = self.clock.frame_params(Viewport::new(w, h));
        match g.render(&params) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    heart: HeartConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, heart).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn wire_resize(canvas: &web::HtmlCanvasElement, overlay: Option<NeonOverlay>) {
    let sync = {
        let canvas = canvas.clone();
        move || {
            dom::sync_canvas_backing_size(&canvas);
            if let (Some(o), Some((w, h))) = (&overlay, dom::window_css_size()) {
                o.resize(w, h);
            }
        }
    };
    sync();
    let resize_closure = Closure::wrap(Box::new(sync) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
