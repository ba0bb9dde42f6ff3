use crate::constants::{BOOKING_SCRIPT_SRC, BOOKING_WIDGET_URL};
use crate::dom::{self, js_err};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Make sure the scheduling widget script is on the page. Returns true when
/// this call inserted it.
#[wasm_bindgen]
pub fn ensure_booking_script() -> Result<bool, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let inserted = dom::ensure_script(&document, BOOKING_SCRIPT_SRC)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if inserted {
        log::info!("[booking] widget script added");
    }
    Ok(inserted)
}

/// Turn `container` into the inline scheduling widget host and load the
/// script that fills it.
#[wasm_bindgen]
pub fn mount_booking_widget(container: web::Element) -> Result<(), JsValue> {
    mark_widget_host(&container).map_err(|e| JsValue::from_str(&e.to_string()))?;
    ensure_booking_script()?;
    Ok(())
}

fn mark_widget_host(container: &web::Element) -> anyhow::Result<()> {
    container
        .class_list()
        .add_1("calendly-inline-widget")
        .map_err(js_err)?;
    container
        .set_attribute("data-url", BOOKING_WIDGET_URL)
        .map_err(js_err)?;
    Ok(())
}
