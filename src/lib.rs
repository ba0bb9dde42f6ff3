#![cfg(target_arch = "wasm32")]
//! Interactive pieces of the Foon Clinic site, exported to the static pages
//! through wasm-bindgen:
//!
//! - [`background::ParticleBackground`] on each page header canvas,
//! - [`carousel::ServicesCarousel`] on the home page,
//! - [`reveal::ScrollReveal`] for scroll-in section animations,
//! - [`booking::ensure_booking_script`] / [`booking::mount_booking_widget`]
//!   on the booking page.
use wasm_bindgen::prelude::*;

mod background;
mod booking;
mod canvas;
mod carousel;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod reveal;

pub use background::ParticleBackground;
pub use booking::{ensure_booking_script, mount_booking_widget};
pub use carousel::ServicesCarousel;
pub use reveal::ScrollReveal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");
    Ok(())
}
