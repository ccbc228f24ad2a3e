use crate::constants::*;
use crate::layout;
use anyhow::anyhow;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Transparent 2D canvas over the heart showing the neon label.
pub struct NeonOverlay {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    text: String,
}

impl NeonOverlay {
    pub fn create(document: &web::Document) -> anyhow::Result<Self> {
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow!(format!("create canvas: {:?}", e)))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;
        canvas.set_id(OVERLAY_CANVAS_ID);
        _ = canvas.set_attribute("style", OVERLAY_STYLE);
        body.append_child(&canvas)
            .map_err(|e| anyhow!(format!("append overlay: {:?}", e)))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!(format!("get_context: {:?}", e)))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;

        let text = layout::overlay_text(body.get_attribute(OVERLAY_TEXT_ATTR));
        log::info!("[overlay] label={:?}", text);
        Ok(Self { canvas, ctx, text })
    }

    /// Resize the backing store (which clears it) and redraw.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.draw();
    }

    pub fn draw(&self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_font(OVERLAY_FONT);
        ctx.set_text_align("left");
        ctx.set_text_baseline("bottom");
        #[allow(deprecated)]
        ctx.set_fill_style(&JsValue::from_str(OVERLAY_FILL));
        ctx.set_shadow_blur(OVERLAY_SHADOW_BLUR);

        let baseline = layout::text_baseline(height);
        let mut x = OVERLAY_MARGIN_PX;
        let mut buf = [0u8; 4];
        for (i, ch) in self.text.chars().enumerate() {
            let glyph = ch.encode_utf8(&mut buf);
            ctx.set_shadow_color(layout::neon_color(i));
            if let Err(e) = ctx.fill_text(glyph, x, baseline) {
                log::warn!("[overlay] fill_text failed: {:?}", e);
                return;
            }
            x += ctx.measure_text(glyph).map(|m| m.width()).unwrap_or(0.0);
        }
    }
}
