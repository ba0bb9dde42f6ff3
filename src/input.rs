use web_sys as web;

/// Offset of a client-space point from an element's top-left corner, in CSS
/// pixels.
#[inline]
pub fn client_to_local(client_x: f64, client_y: f64, left: f64, top: f64) -> (f32, f32) {
    ((client_x - left) as f32, (client_y - top) as f32)
}

#[inline]
pub fn event_local_css(ev: &web::MouseEvent, el: &web::Element) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    client_to_local(ev.client_x() as f64, ev.client_y() as f64, rect.left(), rect.top())
}
