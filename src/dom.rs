use site_core::ParticleField;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Hand the canvas layout box to the field and adopt the backing size it
/// asks for.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, field: &mut ParticleField) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = field.resize(rect.width() as f32, rect.height() as f32, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

/// Acquire the 2d context; `None` in environments that cannot provide one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Append `<script async src=..>` to the body unless one with that `src` is
/// already in the document. Returns whether a tag was inserted.
pub fn ensure_script(document: &web::Document, src: &str) -> anyhow::Result<bool> {
    let selector = format!("script[src=\"{}\"]", src);
    if document.query_selector(&selector).map_err(js_err)?.is_some() {
        return Ok(false);
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let script = document.create_element("script").map_err(js_err)?;
    script.set_attribute("src", src).map_err(js_err)?;
    script.set_attribute("async", "").map_err(js_err)?;
    body.append_child(&script).map_err(js_err)?;
    Ok(true)
}
