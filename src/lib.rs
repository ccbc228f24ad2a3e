#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use heart_core::{AnimationClock, HeartConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod frame;
mod layout;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    let heart = HeartConfig::default();
    heart.validate().context("invalid heart config")?;
    log::info!(
        "[heart] instances={} phases={:?}",
        heart.instance_count(),
        heart.phase_offsets.as_slice()
    );

    // The overlay is decoration; the heart still runs without it
    let overlay = match overlay::NeonOverlay::create(&document) {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("[overlay] disabled: {:?}", e);
            None
        }
    };
    frame::wire_resize(&canvas, overlay);

    let clock = AnimationClock::for_config(&heart);
    let gpu = frame::init_gpu(&canvas, heart).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { canvas, gpu, clock }));
    frame::start_loop(frame_ctx);
    Ok(())
}
